//! Suggestion engine
//!
//! Given the active field and the current input text, produce the candidates
//! for that field:
//!
//! - **column**: columns whose label contains the input (case-insensitive)
//! - **operator**: operators whose label contains the input, or one of whose
//!   aliases equals the input exactly (both case-insensitive)
//! - **value**: options from the active `ValueSuggester` whose label contains
//!   the input; nothing for free-text columns
//!
//! Catalog order is preserved. Blank input yields nothing unless the caller
//! explicitly asks for the unfiltered set with `reveal_all`.

pub mod values;

pub use values::{NoValues, TypedValues, ValueSuggester};

use crate::catalog::{Catalog, Column, Operator, Value};
use crate::terms::Field;

/// A suggestion for one of the three term fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Candidate {
    Column(Column),
    Operator(Operator),
    Value(Value),
}

impl Candidate {
    /// Text shown in the dropdown and stored in the term
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Column(column) => &column.label,
            Self::Operator(operator) => &operator.label,
            Self::Value(value) => &value.label,
        }
    }

    /// Field this candidate fills
    #[must_use]
    pub const fn field(&self) -> Field {
        match self {
            Self::Column(_) => Field::Column,
            Self::Operator(_) => Field::Operator,
            Self::Value(_) => Field::Value,
        }
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Pure candidate lookup over a catalog
#[derive(Debug, Clone, Copy)]
pub struct SuggestionEngine<'a> {
    catalog: &'a Catalog,
    values: &'a dyn ValueSuggester,
}

impl<'a> SuggestionEngine<'a> {
    /// Create an engine over a catalog and value strategy
    #[must_use]
    pub const fn new(catalog: &'a Catalog, values: &'a dyn ValueSuggester) -> Self {
        Self { catalog, values }
    }

    /// Catalog the engine draws from
    #[must_use]
    pub const fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    /// Candidates for `field` matching `input`
    ///
    /// `column` is the column of the term being built; it is only consulted
    /// for the value field.
    #[must_use]
    pub fn suggest(&self, field: Field, input: &str, column: Option<&Column>) -> Vec<Candidate> {
        if input.trim().is_empty() {
            return Vec::new();
        }

        match field {
            Field::Column => self
                .catalog
                .columns
                .iter()
                .filter(|col| contains_ignore_case(&col.label, input))
                .cloned()
                .map(Candidate::Column)
                .collect(),
            Field::Operator => self
                .catalog
                .operators
                .iter()
                .filter(|op| contains_ignore_case(&op.label, input) || op.has_alias(input))
                .cloned()
                .map(Candidate::Operator)
                .collect(),
            Field::Value => column
                .map(|col| self.values.values(col))
                .unwrap_or_default()
                .into_iter()
                .filter(|value| contains_ignore_case(&value.label, input))
                .map(Candidate::Value)
                .collect(),
            Field::Invalid => Vec::new(),
        }
    }

    /// Every candidate for `field`, unfiltered
    #[must_use]
    pub fn reveal_all(&self, field: Field, column: Option<&Column>) -> Vec<Candidate> {
        match field {
            Field::Column => self
                .catalog
                .columns
                .iter()
                .cloned()
                .map(Candidate::Column)
                .collect(),
            Field::Operator => self
                .catalog
                .operators
                .iter()
                .cloned()
                .map(Candidate::Operator)
                .collect(),
            Field::Value => column
                .map(|col| self.values.values(col))
                .unwrap_or_default()
                .into_iter()
                .map(Candidate::Value)
                .collect(),
            Field::Invalid => Vec::new(),
        }
    }
}
