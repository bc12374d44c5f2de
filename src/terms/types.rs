//! Filter terms and the field cursor
//!
//! A `Term` is a complete column/operator/value clause (a pill). The one
//! term being built or edited lives in a `PartialTerm`; which of its fields
//! accepts input next is derived from what is populated, never stored.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A complete filter clause
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Term {
    pub column: String,
    pub operator: String,
    pub value: String,
}

impl Term {
    /// Create a new term
    #[must_use]
    pub fn new(
        column: impl Into<String>,
        operator: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            column: column.into(),
            operator: operator.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.column, self.operator, self.value)
    }
}

/// Which field of the partial term is accepting input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Column,
    Operator,
    Value,
    /// All three fields populated without a commit. Reaching this after a
    /// transition has settled is a bug in the state machine.
    Invalid,
}

impl Field {
    /// Placeholder text shown while the input is empty
    #[must_use]
    pub const fn placeholder(self) -> &'static str {
        match self {
            Self::Column => "Enter a column name...",
            Self::Operator => "Enter an operator...",
            Self::Value => "Enter a value...",
            Self::Invalid => "",
        }
    }

    /// Lowercase name of this field
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Column => "column",
            Self::Operator => "operator",
            Self::Value => "value",
            Self::Invalid => "invalid",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Field {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "column" | "col" | "c" => Ok(Self::Column),
            "operator" | "op" | "o" => Ok(Self::Operator),
            "value" | "val" | "v" => Ok(Self::Value),
            _ => Err(format!("unknown field '{s}' (expected column, operator or value)")),
        }
    }
}

/// The term currently being built or edited
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartialTerm {
    pub(crate) column: Option<String>,
    pub(crate) operator: Option<String>,
    pub(crate) value: Option<String>,
}

impl PartialTerm {
    /// Derive the field cursor from the populated fields
    #[must_use]
    pub fn field(&self) -> Field {
        match (&self.column, &self.operator, &self.value) {
            (None, _, _) => Field::Column,
            (Some(_), None, _) => Field::Operator,
            (Some(_), Some(_), None) => Field::Value,
            (Some(_), Some(_), Some(_)) => Field::Invalid,
        }
    }

    /// Column label, if chosen
    #[must_use]
    pub fn column(&self) -> Option<&str> {
        self.column.as_deref()
    }

    /// Operator label, if chosen
    #[must_use]
    pub fn operator(&self) -> Option<&str> {
        self.operator.as_deref()
    }

    /// Value, if entered
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// True when nothing has been entered
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.column.is_none() && self.operator.is_none() && self.value.is_none()
    }

    /// Take the term out if all three fields are set, leaving `self` empty
    pub(crate) fn take_complete(&mut self) -> Option<Term> {
        if self.field() != Field::Invalid {
            return None;
        }
        let taken = std::mem::take(self);
        match (taken.column, taken.operator, taken.value) {
            (Some(column), Some(operator), Some(value)) => Some(Term {
                column,
                operator,
                value,
            }),
            _ => None,
        }
    }
}
