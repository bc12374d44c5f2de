//! Ordered list of committed terms

use super::types::Term;
use serde::{Deserialize, Serialize};

/// Committed terms in submission order
///
/// Grows only at the tail on commit and shrinks only by popping the tail,
/// so the mutators are crate-private to the state machine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TermList {
    terms: Vec<Term>,
}

impl TermList {
    /// Create an empty list
    #[must_use]
    pub const fn new() -> Self {
        Self { terms: Vec::new() }
    }

    /// Append a committed term
    pub(crate) fn push(&mut self, term: Term) {
        self.terms.push(term);
    }

    /// Remove and return the most recent term
    pub(crate) fn pop(&mut self) -> Option<Term> {
        self.terms.pop()
    }

    /// Most recently committed term
    #[must_use]
    pub fn last(&self) -> Option<&Term> {
        self.terms.last()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Term> {
        self.terms.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Term] {
        &self.terms
    }

    /// Copy the terms out for a consumer
    #[must_use]
    pub fn to_vec(&self) -> Vec<Term> {
        self.terms.clone()
    }
}

impl From<Vec<Term>> for TermList {
    fn from(terms: Vec<Term>) -> Self {
        Self { terms }
    }
}

impl<'a> IntoIterator for &'a TermList {
    type Item = &'a Term;
    type IntoIter = std::slice::Iter<'a, Term>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.iter()
    }
}
