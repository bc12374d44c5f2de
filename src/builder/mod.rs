//! Filter builder session
//!
//! The builder turns a stream of input events into an ordered list of
//! complete column/operator/value terms.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────┐   Event    ┌──────────────────┐
//! │ key adapter /  │ ─────────▶ │ events::reduce   │
//! │ script / tests │            │ (input control)  │
//! └────────────────┘            └────────┬─────────┘
//!                                        │
//!                     ┌──────────────────┼──────────────────┐
//!                     ▼                                     ▼
//!            ┌──────────────────┐                 ┌──────────────────┐
//!            │ SuggestionEngine │                 │ BuilderState     │
//!            │ (pure lookup)    │                 │ (term machine)   │
//!            └──────────────────┘                 └──────────────────┘
//! ```
//!
//! # Examples
//!
//! ```
//! use pillfilter::builder::{Event, FilterBuilder};
//! use pillfilter::catalog::{self, BuiltinSource};
//! use pillfilter::terms::Term;
//!
//! let loaded = catalog::load(&BuiltinSource).unwrap();
//! let mut builder = FilterBuilder::new(loaded.catalog, Vec::new());
//!
//! builder.type_text("Company");
//! builder.dispatch(Event::Advance);
//! builder.type_text("Streak");
//! builder.dispatch(Event::Advance);
//!
//! let mut submitted = Vec::new();
//! builder.submit_to(&mut |terms: &[Term]| submitted = terms.to_vec());
//! assert_eq!(submitted, vec![Term::new("Company", "Equals", "Streak")]);
//! ```

pub mod events;
pub mod state;

pub use events::{Event, EventResult, apply, reduce};
pub use state::BuilderState;

use crate::catalog::Catalog;
use crate::suggest::{NoValues, SuggestionEngine, ValueSuggester};
use crate::terms::Term;

/// Receiver of submitted terms
pub trait TermConsumer {
    /// Called with the complete terms, in commit order
    fn on_submit(&mut self, terms: &[Term]);
}

impl<F> TermConsumer for F
where
    F: FnMut(&[Term]),
{
    fn on_submit(&mut self, terms: &[Term]) {
        self(terms);
    }
}

/// A builder session: catalog, value strategy and state
#[derive(Debug)]
pub struct FilterBuilder {
    catalog: Catalog,
    values: Box<dyn ValueSuggester>,
    state: BuilderState,
}

impl FilterBuilder {
    /// Start a session with free-text values
    #[must_use]
    pub fn new(catalog: Catalog, initial_terms: Vec<Term>) -> Self {
        Self {
            catalog,
            values: Box::new(NoValues),
            state: BuilderState::new(initial_terms),
        }
    }

    /// Use a different value suggestion strategy
    #[must_use]
    pub fn with_value_suggester(mut self, values: impl ValueSuggester + 'static) -> Self {
        self.values = Box::new(values);
        self
    }

    #[must_use]
    pub const fn state(&self) -> &BuilderState {
        &self.state
    }

    /// Handle one input event
    pub fn dispatch(&mut self, event: Event) -> EventResult {
        let engine = SuggestionEngine::new(&self.catalog, self.values.as_ref());
        let state = std::mem::take(&mut self.state);
        let (state, result) = reduce(state, event, &engine);
        self.state = state;
        result
    }

    /// Type a string one character at a time
    pub fn type_text(&mut self, text: &str) {
        for c in text.chars() {
            self.dispatch(Event::Insert(c));
        }
    }

    /// Hand the complete terms to a consumer
    pub fn submit_to(&self, consumer: &mut dyn TermConsumer) {
        let terms = self.state.submit();
        tracing::info!(terms = terms.len(), "terms submitted");
        consumer.on_submit(&terms);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::suggest::TypedValues;
    use crate::terms::Field;
    use crate::testing::sample_catalog;

    #[test]
    fn test_dispatch_keeps_state() {
        let mut builder = FilterBuilder::new(sample_catalog(), Vec::new());

        builder.type_text("Comp");
        assert_eq!(builder.state().input(), "Comp");
        assert!(builder.state().surface_open());

        assert_eq!(builder.dispatch(Event::Advance), EventResult::Transitioned);
        assert_eq!(builder.state().field(), Field::Value);
    }

    #[test]
    fn test_submit_to_closure() {
        let mut builder = FilterBuilder::new(
            sample_catalog(),
            vec![Term::new("Company", "Equals", "Streak")],
        );
        builder.type_text("City");
        builder.dispatch(Event::Advance);

        let mut calls = 0;
        let mut seen = Vec::new();
        builder.submit_to(&mut |terms: &[Term]| {
            calls += 1;
            seen = terms.to_vec();
        });

        assert_eq!(calls, 1);
        assert_eq!(seen, vec![Term::new("Company", "Equals", "Streak")]);
        // Submitting leaves the in-progress term alone
        assert_eq!(builder.state().partial().column(), Some("City"));
    }

    #[test]
    fn test_value_suggester_is_pluggable() {
        let mut builder =
            FilterBuilder::new(sample_catalog(), Vec::new()).with_value_suggester(TypedValues);

        builder.type_text("State");
        builder.dispatch(Event::Advance);
        assert_eq!(builder.dispatch(Event::NavigateDown), EventResult::Navigated);
        let labels: Vec<&str> = builder.state().suggestions().iter().map(|c| c.label()).collect();
        assert_eq!(labels, vec!["CA", "NV", "OR"]);
    }
}
