//! Term state machine
//!
//! `BuilderState` is the single owned record behind a builder session: the
//! partial term, the committed terms, the input buffer and the suggestion
//! surface. The field cursor is always derived from the partial term.
//!
//! Transitions (fields populated → cursor):
//!
//! ```text
//! {}                        → column
//! {column}                  → operator
//! {column, operator}        → value
//! {column, operator, value} → committed immediately, back to column
//! ```
//!
//! Invalid requests (selecting with no surface, blank values, regressing or
//! reopening with nothing to act on) are no-ops and report `false`.

use crate::catalog::{Catalog, Column};
use crate::suggest::{Candidate, SuggestionEngine};
use crate::terms::{Field, PartialTerm, Term, TermList};

/// Owned state of one builder session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuilderState {
    partial: PartialTerm,
    terms: TermList,
    /// Transient text buffer; never part of a term until committed
    input: String,
    suggestions: Vec<Candidate>,
    highlighted: usize,
    surface_open: bool,
}

impl BuilderState {
    /// Create a state starting from previously committed terms
    #[must_use]
    pub fn new(initial_terms: Vec<Term>) -> Self {
        Self {
            terms: TermList::from(initial_terms),
            ..Self::default()
        }
    }

    /// Field currently accepting input
    #[must_use]
    pub fn field(&self) -> Field {
        self.partial.field()
    }

    #[must_use]
    pub const fn partial(&self) -> &PartialTerm {
        &self.partial
    }

    #[must_use]
    pub const fn terms(&self) -> &TermList {
        &self.terms
    }

    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    #[must_use]
    pub fn suggestions(&self) -> &[Candidate] {
        &self.suggestions
    }

    /// Index of the highlighted suggestion
    #[must_use]
    pub const fn highlighted(&self) -> usize {
        self.highlighted
    }

    /// Whether the suggestion dropdown is showing
    #[must_use]
    pub const fn surface_open(&self) -> bool {
        self.surface_open
    }

    /// The highlighted candidate, if the surface is showing
    #[must_use]
    pub fn highlighted_candidate(&self) -> Option<&Candidate> {
        if self.surface_open {
            self.suggestions.get(self.highlighted)
        } else {
            None
        }
    }

    /// Catalog column of the term being built
    fn current_column<'c>(&self, catalog: &'c Catalog) -> Option<&'c Column> {
        self.partial
            .column()
            .and_then(|label| catalog.column_by_label(label))
    }

    // ========================================================================
    // Suggestion surface
    // ========================================================================

    /// Recompute suggestions for the current field and input
    pub fn refresh_suggestions(&mut self, engine: &SuggestionEngine<'_>) {
        let column = self.current_column(engine.catalog());
        self.suggestions = engine.suggest(self.field(), &self.input, column);
        self.highlighted = 0;
        self.surface_open = !self.suggestions.is_empty();
    }

    /// Open the surface with every candidate for the current field
    ///
    /// Returns `false` when the field has nothing to offer.
    pub fn reveal_all(&mut self, engine: &SuggestionEngine<'_>) -> bool {
        let column = self.current_column(engine.catalog());
        self.suggestions = engine.reveal_all(self.field(), column);
        self.highlighted = 0;
        self.surface_open = !self.suggestions.is_empty();
        self.surface_open
    }

    /// Close the surface without touching the term
    pub fn dismiss(&mut self) -> bool {
        let was_open = self.surface_open;
        self.surface_open = false;
        was_open
    }

    /// Move the highlight down, stopping at the last candidate
    pub fn highlight_next(&mut self) -> bool {
        if self.surface_open && self.highlighted + 1 < self.suggestions.len() {
            self.highlighted += 1;
            true
        } else {
            false
        }
    }

    /// Move the highlight up, stopping at the first candidate
    pub fn highlight_prev(&mut self) -> bool {
        if self.surface_open && self.highlighted > 0 {
            self.highlighted -= 1;
            true
        } else {
            false
        }
    }

    /// Highlight a specific candidate (pointer hover)
    pub fn highlight(&mut self, index: usize) -> bool {
        if self.surface_open && index < self.suggestions.len() && index != self.highlighted {
            self.highlighted = index;
            true
        } else {
            false
        }
    }

    // ========================================================================
    // Input buffer
    // ========================================================================

    /// Replace the input text; line breaks are dropped
    pub fn set_input(&mut self, text: &str, engine: &SuggestionEngine<'_>) {
        self.input = text.chars().filter(|c| !matches!(c, '\n' | '\r')).collect();
        self.refresh_suggestions(engine);
    }

    /// Append a character to the input; line breaks are dropped
    pub fn push_char(&mut self, c: char, engine: &SuggestionEngine<'_>) -> bool {
        if matches!(c, '\n' | '\r') {
            return false;
        }
        self.input.push(c);
        self.refresh_suggestions(engine);
        true
    }

    /// Remove the last character of the input
    pub fn pop_char(&mut self, engine: &SuggestionEngine<'_>) -> bool {
        if self.input.pop().is_none() {
            return false;
        }
        self.refresh_suggestions(engine);
        true
    }

    // ========================================================================
    // Transitions
    // ========================================================================

    /// Finish a transition: enforce the commit invariant and refresh the surface
    fn settle(&mut self, engine: &SuggestionEngine<'_>) {
        debug_assert_ne!(
            self.field(),
            Field::Invalid,
            "complete term left in the partial slot"
        );
        self.refresh_suggestions(engine);
    }

    /// Fill the current field from a suggestion
    ///
    /// Selecting a column pre-fills its default operator when the catalog
    /// resolves it, jumping straight to the value field. Selecting a value
    /// candidate completes the term.
    pub fn select_candidate(&mut self, candidate: &Candidate, engine: &SuggestionEngine<'_>) -> bool {
        if !self.surface_open {
            return false;
        }

        match (self.field(), candidate) {
            (Field::Column, Candidate::Column(column)) => {
                let default_operator = engine.catalog().default_operator(column);
                self.partial.column = Some(column.label.clone());
                self.partial.operator = default_operator.map(|op| op.label.clone());
                tracing::debug!(
                    column = %column.label,
                    default_operator = ?self.partial.operator,
                    "column selected"
                );
            }
            (Field::Operator, Candidate::Operator(operator)) => {
                self.partial.operator = Some(operator.label.clone());
                tracing::debug!(operator = %operator.label, "operator selected");
            }
            (Field::Value, Candidate::Value(value)) => {
                let label = value.label.clone();
                return self.commit_value(&label, engine);
            }
            (field, candidate) => {
                tracing::debug!(%field, candidate = candidate.label(), "candidate does not fit field");
                return false;
            }
        }

        self.input.clear();
        self.settle(engine);
        true
    }

    /// Set the value and commit the term
    ///
    /// Only valid while the value field is active and `text` is not blank.
    pub fn complete_value(&mut self, text: &str, engine: &SuggestionEngine<'_>) -> bool {
        if self.field() != Field::Value {
            return false;
        }
        self.commit_value(text, engine)
    }

    fn commit_value(&mut self, text: &str, engine: &SuggestionEngine<'_>) -> bool {
        let value = text.trim();
        if value.is_empty() {
            return false;
        }

        self.partial.value = Some(value.to_string());
        if let Some(term) = self.partial.take_complete() {
            tracing::debug!(term = %term, "term committed");
            self.terms.push(term);
        }

        self.input.clear();
        self.settle(engine);
        true
    }

    /// Step back one field, or drop the last committed term
    ///
    /// From the operator field the whole partial term is cleared, including
    /// a pre-filled default operator's column. From the value field only the
    /// operator is dropped.
    pub fn regress(&mut self, engine: &SuggestionEngine<'_>) -> bool {
        match self.field() {
            Field::Operator => {
                self.partial = PartialTerm::default();
            }
            Field::Value => {
                self.partial.operator = None;
            }
            Field::Column => match self.terms.pop() {
                Some(term) => tracing::debug!(term = %term, "term removed"),
                None => return false,
            },
            Field::Invalid => return false,
        }

        tracing::debug!(field = %self.field(), "regressed");
        self.settle(engine);
        true
    }

    /// Step back one field, keeping the removed text editable
    ///
    /// From the column field the last committed term is reopened with its
    /// value in the input. From the operator or value field, the label of
    /// the previous field moves into the input.
    pub fn reopen_last(&mut self, engine: &SuggestionEngine<'_>) -> bool {
        match self.field() {
            Field::Column => {
                let Some(term) = self.terms.pop() else {
                    return false;
                };
                tracing::debug!(term = %term, "term reopened");
                self.partial = PartialTerm {
                    column: Some(term.column),
                    operator: Some(term.operator),
                    value: None,
                };
                self.input = term.value;
            }
            Field::Operator => {
                let column = std::mem::take(&mut self.partial).column;
                self.input = column.unwrap_or_default();
            }
            Field::Value => {
                self.input = self.partial.operator.take().unwrap_or_default();
            }
            Field::Invalid => return false,
        }

        self.settle(engine);
        true
    }

    /// Complete terms for the consumer; the partial term is never included
    #[must_use]
    pub fn submit(&self) -> Vec<Term> {
        self.terms.to_vec()
    }
}
