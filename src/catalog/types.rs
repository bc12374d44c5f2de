//! Catalog data structures
//!
//! Columns, operators and enumerated values a builder session is configured
//! with. All of them are immutable once loaded.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Data type of a column
///
/// The set is open: unknown type names are kept verbatim in `Other` so a
/// catalog written for a newer front end still loads.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ColumnType {
    /// Free text
    String,
    /// Numeric
    Number,
    /// true / false
    Boolean,
    /// One of an enumerated set of options
    Picklist,
    /// Any other type name
    Other(String),
}

impl From<String> for ColumnType {
    fn from(name: String) -> Self {
        match name.to_lowercase().as_str() {
            "string" | "text" => Self::String,
            "number" => Self::Number,
            "boolean" | "bool" => Self::Boolean,
            "picklist" => Self::Picklist,
            _ => Self::Other(name),
        }
    }
}

impl From<ColumnType> for String {
    fn from(ty: ColumnType) -> Self {
        ty.as_str().to_string()
    }
}

impl ColumnType {
    /// Canonical name of this type
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Picklist => "picklist",
            Self::Other(name) => name,
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An enumerable value option (picklist entries, boolean true/false)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Value {
    pub id: String,
    pub label: String,
}

impl Value {
    /// Create a new value option
    #[must_use]
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

/// A filterable column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub id: String,
    pub label: String,
    #[serde(rename = "type")]
    pub column_type: ColumnType,
    /// Operator pre-filled when this column is selected
    pub default_operator_id: String,
    /// Options for picklist columns
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picklist_options: Option<Vec<Value>>,
}

impl Column {
    /// Create a new column
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        column_type: ColumnType,
        default_operator_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            column_type,
            default_operator_id: default_operator_id.into(),
            picklist_options: None,
        }
    }

    /// Attach picklist options
    #[must_use]
    pub fn with_picklist(mut self, options: Vec<Value>) -> Self {
        self.picklist_options = Some(options);
        self
    }
}

/// A comparison operator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operator {
    pub id: String,
    pub label: String,
    /// Alternate literal spellings (symbols or phrases)
    #[serde(default)]
    pub aliases: Vec<String>,
}

impl Operator {
    /// Create a new operator
    #[must_use]
    pub fn new(id: impl Into<String>, label: impl Into<String>, aliases: &[&str]) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            aliases: aliases.iter().map(|a| (*a).to_string()).collect(),
        }
    }

    /// Check whether `input` equals one of the aliases, ignoring case
    #[must_use]
    pub fn has_alias(&self, input: &str) -> bool {
        let input = input.to_lowercase();
        self.aliases.iter().any(|alias| alias.to_lowercase() == input)
    }
}

/// The read-only set of columns and operators for a session
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub columns: Vec<Column>,
    #[serde(default)]
    pub operators: Vec<Operator>,
}

impl Catalog {
    /// Assemble a catalog
    ///
    /// Columns whose default operator does not resolve are kept; selecting
    /// them simply leaves the operator for the user to pick.
    #[must_use]
    pub fn new(columns: Vec<Column>, operators: Vec<Operator>) -> Self {
        let catalog = Self { columns, operators };
        for column in &catalog.columns {
            if catalog.default_operator(column).is_none() {
                tracing::warn!(
                    column = %column.label,
                    operator_id = %column.default_operator_id,
                    "default operator does not resolve"
                );
            }
        }
        catalog
    }

    /// Look up an operator by id
    #[must_use]
    pub fn operator(&self, id: &str) -> Option<&Operator> {
        self.operators.iter().find(|op| op.id == id)
    }

    /// Resolve a column's default operator
    #[must_use]
    pub fn default_operator(&self, column: &Column) -> Option<&Operator> {
        self.operator(&column.default_operator_id)
    }

    /// Find a column by its label
    #[must_use]
    pub fn column_by_label(&self, label: &str) -> Option<&Column> {
        self.columns.iter().find(|col| col.label == label)
    }

    /// True when there is nothing to suggest
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty() && self.operators.is_empty()
    }
}
