//! Value suggesters
//!
//! Whether the value field offers suggestions depends on the column type.
//! The strategy is pluggable: the builder asks its `ValueSuggester` for the
//! full option set of the column being built and filters it like any other
//! candidate list.

use crate::catalog::{Column, ColumnType, Value};

/// Supplies enumerated value options for a column
pub trait ValueSuggester: std::fmt::Debug {
    /// All options for `column`; empty means the value is typed freely
    fn values(&self, column: &Column) -> Vec<Value>;
}

/// Never suggests values; every value is free text
#[derive(Debug, Clone, Copy, Default)]
pub struct NoValues;

impl ValueSuggester for NoValues {
    fn values(&self, _column: &Column) -> Vec<Value> {
        Vec::new()
    }
}

/// Suggests picklist options and boolean literals
///
/// String, number and unknown column types get no suggestions.
#[derive(Debug, Clone, Copy, Default)]
pub struct TypedValues;

impl ValueSuggester for TypedValues {
    fn values(&self, column: &Column) -> Vec<Value> {
        match column.column_type {
            ColumnType::Picklist => column.picklist_options.clone().unwrap_or_default(),
            ColumnType::Boolean => vec![Value::new("true", "true"), Value::new("false", "false")],
            ColumnType::String | ColumnType::Number | ColumnType::Other(_) => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typed_values_by_column_type() {
        let state = Column::new("state", "State", ColumnType::Picklist, "equals")
            .with_picklist(vec![Value::new("CA", "CA"), Value::new("NV", "NV")]);
        let active = Column::new("active", "Is Active", ColumnType::Boolean, "equals");
        let city = Column::new("city", "City", ColumnType::String, "contains");

        assert_eq!(TypedValues.values(&state).len(), 2);
        let labels: Vec<String> = TypedValues.values(&active).into_iter().map(|v| v.label).collect();
        assert_eq!(labels, vec!["true", "false"]);
        assert!(TypedValues.values(&city).is_empty());
    }

    #[test]
    fn test_picklist_without_options() {
        let empty = Column::new("tier", "Tier", ColumnType::Picklist, "equals");
        assert!(TypedValues.values(&empty).is_empty());
        assert!(NoValues.values(&empty).is_empty());
    }
}
