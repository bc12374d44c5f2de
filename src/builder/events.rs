//! Input controller
//!
//! Maps typed input events onto state machine operations. The reducer knows
//! nothing about terminals or key codes; `keybinds::keymap` turns platform
//! key events into these variants.

use super::state::BuilderState;
use crate::suggest::SuggestionEngine;
use crate::terms::{Field, Term};

/// A user action on the builder input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Type a character
    Insert(char),
    /// Replace the whole input text (paste, pointer edits)
    TextChanged(String),
    /// Backspace: edit text, or regress when the input is empty
    DeleteBack,
    /// Confirm: select the highlighted suggestion or complete the value
    Advance,
    /// Reversed confirm: reopen the previous field or term for editing
    ReopenLast,
    /// Pick the highlighted column or operator; otherwise type the key's
    /// character, if it has one
    Select(Option<char>),
    /// Highlight the previous suggestion
    NavigateUp,
    /// Highlight the next suggestion, or reveal all candidates
    NavigateDown,
    /// Pointer moved over suggestion `n`
    Hover(usize),
    /// Pointer clicked suggestion `n`
    Pick(usize),
    /// Close the suggestion surface
    Dismiss,
    /// Hand the committed terms to the consumer
    Submit,
}

/// Outcome of handling one event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventResult {
    /// Nothing changed
    Ignored,
    /// Input text changed and suggestions were recomputed
    InputChanged,
    /// Highlight moved or the surface opened or closed
    Navigated,
    /// The field cursor or the term list changed
    Transitioned,
    /// Terms to hand to the consumer
    Submitted(Vec<Term>),
}

impl EventResult {
    /// Whether the renderer must put the caret back on the input
    ///
    /// Refocusing happens only after the transition has completed.
    #[must_use]
    pub const fn needs_refocus(&self) -> bool {
        matches!(self, Self::Transitioned)
    }

    const fn from_transition(changed: bool) -> Self {
        if changed { Self::Transitioned } else { Self::Ignored }
    }

    const fn from_navigation(changed: bool) -> Self {
        if changed { Self::Navigated } else { Self::Ignored }
    }
}

/// Apply one event to the state
///
/// The state is taken by value and handed back with the outcome, so a
/// caller always observes a fully settled state.
#[must_use]
pub fn reduce(
    mut state: BuilderState,
    event: Event,
    engine: &SuggestionEngine<'_>,
) -> (BuilderState, EventResult) {
    let result = apply(&mut state, event, engine);
    (state, result)
}

/// Apply one event to the state in place
pub fn apply(state: &mut BuilderState, event: Event, engine: &SuggestionEngine<'_>) -> EventResult {
    tracing::trace!(?event, field = %state.field(), "event");

    match event {
        Event::Insert(c) => {
            if state.push_char(c, engine) {
                EventResult::InputChanged
            } else {
                EventResult::Ignored
            }
        }
        Event::TextChanged(text) => {
            state.set_input(&text, engine);
            EventResult::InputChanged
        }
        Event::DeleteBack => {
            if state.input().is_empty() {
                EventResult::from_transition(state.regress(engine))
            } else {
                state.pop_char(engine);
                EventResult::InputChanged
            }
        }
        Event::Advance => advance(state, engine),
        Event::Select(fallback) => select(state, fallback, engine),
        Event::ReopenLast => {
            if state.input().is_empty() {
                EventResult::from_transition(state.reopen_last(engine))
            } else {
                EventResult::Ignored
            }
        }
        Event::NavigateUp => EventResult::from_navigation(state.highlight_prev()),
        Event::NavigateDown => {
            if state.input().is_empty() && !state.surface_open() {
                EventResult::from_navigation(state.reveal_all(engine))
            } else {
                EventResult::from_navigation(state.highlight_next())
            }
        }
        Event::Hover(index) => EventResult::from_navigation(state.highlight(index)),
        Event::Pick(index) => {
            let candidate = state.suggestions().get(index).cloned();
            match candidate {
                Some(candidate) if state.surface_open() => {
                    EventResult::from_transition(state.select_candidate(&candidate, engine))
                }
                _ => EventResult::Ignored,
            }
        }
        Event::Dismiss => EventResult::from_navigation(state.dismiss()),
        Event::Submit => EventResult::Submitted(state.submit()),
    }
}

/// Select key: like confirm outside the value field, text everywhere else
fn select(state: &mut BuilderState, fallback: Option<char>, engine: &SuggestionEngine<'_>) -> EventResult {
    if state.field() != Field::Value
        && let Some(candidate) = state.highlighted_candidate().cloned()
    {
        return EventResult::from_transition(state.select_candidate(&candidate, engine));
    }

    match fallback {
        Some(c) if state.push_char(c, engine) => EventResult::InputChanged,
        _ => EventResult::Ignored,
    }
}

/// Confirm key: select from the surface, or commit a typed value
fn advance(state: &mut BuilderState, engine: &SuggestionEngine<'_>) -> EventResult {
    if let Some(candidate) = state.highlighted_candidate().cloned() {
        return EventResult::from_transition(state.select_candidate(&candidate, engine));
    }

    if state.field() == Field::Value && !state.input().trim().is_empty() {
        let text = state.input().to_string();
        return EventResult::from_transition(state.complete_value(&text, engine));
    }

    EventResult::Ignored
}
