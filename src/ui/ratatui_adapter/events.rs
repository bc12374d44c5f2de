//! Event handling for the ratatui TUI
//!
//! Handles keyboard, mouse and paste events, feeding them to the builder.

use super::theme::Theme;
use super::widgets::SuggestionList;
use crate::builder::{Event as BuilderEvent, EventResult, FilterBuilder};
use crate::keybinds::{KeyOutcome, Keymap};
use crate::terms::Term;
use crossterm::event::{self, Event, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};
use std::time::Duration;

/// What the run loop should do next
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoopSignal {
    /// Keep running
    Continue,
    /// Leave and hand back these terms
    Submit(Vec<Term>),
    /// Leave without submitting
    Quit,
}

fn dispatch(builder: &mut FilterBuilder, event: BuilderEvent) -> LoopSignal {
    match builder.dispatch(event) {
        EventResult::Submitted(terms) => LoopSignal::Submit(terms),
        result => {
            if result.needs_refocus() {
                tracing::debug!(field = %builder.state().field(), "field transition");
            }
            LoopSignal::Continue
        }
    }
}

/// Handle a key press
///
/// The dismiss key closes an open surface; with nothing to close it leaves
/// the builder.
pub fn handle_key(builder: &mut FilterBuilder, keymap: &Keymap, key: KeyEvent) -> LoopSignal {
    match keymap.map_key(&key) {
        KeyOutcome::Quit => LoopSignal::Quit,
        KeyOutcome::Ignore => LoopSignal::Continue,
        KeyOutcome::Builder(BuilderEvent::Dismiss) if !builder.state().surface_open() => {
            LoopSignal::Quit
        }
        KeyOutcome::Builder(event) => dispatch(builder, event),
    }
}

/// Handle mouse input over the suggestion list
pub fn handle_mouse(
    builder: &mut FilterBuilder,
    mouse: MouseEvent,
    list_area: Option<Rect>,
    theme: &Theme,
) -> LoopSignal {
    let position = Position::new(mouse.column, mouse.row);
    let index = list_area.and_then(|area| {
        SuggestionList::new(builder.state(), theme).index_at(area, position)
    });

    let event = match (mouse.kind, index) {
        (MouseEventKind::Moved, Some(index)) => BuilderEvent::Hover(index),
        (MouseEventKind::Down(MouseButton::Left), Some(index)) => BuilderEvent::Pick(index),
        (MouseEventKind::ScrollUp, _) if list_area.is_some() => BuilderEvent::NavigateUp,
        (MouseEventKind::ScrollDown, _) if list_area.is_some() => BuilderEvent::NavigateDown,
        _ => return LoopSignal::Continue,
    };

    dispatch(builder, event)
}

/// Append pasted text to the input
pub fn handle_paste(builder: &mut FilterBuilder, text: &str) -> LoopSignal {
    let joined = format!("{}{text}", builder.state().input());
    dispatch(builder, BuilderEvent::TextChanged(joined))
}

/// Poll for events and handle them
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn poll_and_handle(
    builder: &mut FilterBuilder,
    keymap: &Keymap,
    list_area: Option<Rect>,
    theme: &Theme,
    timeout: Duration,
) -> std::io::Result<LoopSignal> {
    if !event::poll(timeout)? {
        return Ok(LoopSignal::Continue);
    }

    let signal = match event::read()? {
        Event::Key(key) => handle_key(builder, keymap, key),
        Event::Mouse(mouse) => handle_mouse(builder, mouse, list_area, theme),
        Event::Paste(text) => handle_paste(builder, &text),
        _ => LoopSignal::Continue,
    };

    Ok(signal)
}
