//! Catalog sources
//!
//! The builder does not care where its catalog came from. A `CatalogSource`
//! hands over columns, operators and initial terms; loading failures are
//! reported to the caller and never reach the state machine.

use super::error::CatalogError;
use super::types::{Catalog, Column, ColumnType, Operator, Value};
use crate::terms::Term;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Provider of catalog data
pub trait CatalogSource {
    /// Load the available columns
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the columns cannot be obtained.
    fn load_columns(&self) -> Result<Vec<Column>, CatalogError>;

    /// Load the available operators
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the operators cannot be obtained.
    fn load_operators(&self) -> Result<Vec<Operator>, CatalogError>;

    /// Load previously saved terms to start the session with
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the terms cannot be obtained.
    fn load_initial_terms(&self) -> Result<Vec<Term>, CatalogError>;
}

/// Everything a session starts from
#[derive(Debug, Clone, Default)]
pub struct Loaded {
    pub catalog: Catalog,
    pub initial_terms: Vec<Term>,
}

/// Load a catalog and initial terms from a source
///
/// # Errors
///
/// Returns the first `CatalogError` raised by the source.
pub fn load(source: &dyn CatalogSource) -> Result<Loaded, CatalogError> {
    let columns = source.load_columns()?;
    let operators = source.load_operators()?;
    let initial_terms = source.load_initial_terms()?;

    tracing::info!(
        columns = columns.len(),
        operators = operators.len(),
        initial_terms = initial_terms.len(),
        "catalog loaded"
    );

    Ok(Loaded {
        catalog: Catalog::new(columns, operators),
        initial_terms,
    })
}

/// On-disk catalog layout shared by the TOML and JSON formats
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogFile {
    #[serde(default)]
    pub columns: Vec<Column>,
    #[serde(default)]
    pub operators: Vec<Operator>,
    #[serde(default)]
    pub initial_terms: Vec<Term>,
}

impl CatalogFile {
    /// Parse catalog text, choosing the format from the file extension
    ///
    /// `.json` is parsed as JSON, everything else as TOML.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the text does not parse.
    pub fn parse(text: &str, path: &Path) -> Result<Self, CatalogError> {
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        if is_json {
            Ok(serde_json::from_str(text)?)
        } else {
            Ok(toml::from_str(text)?)
        }
    }
}

/// Catalog read from a TOML or JSON file
#[derive(Debug, Clone)]
pub struct FileSource {
    contents: CatalogFile,
}

impl FileSource {
    /// Read and parse a catalog file
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Unreadable` if the file cannot be read, or a
    /// parse error if its contents are malformed.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref().to_path_buf();
        let text = fs::read_to_string(&path).map_err(|source| CatalogError::Unreadable {
            path: path.clone(),
            source,
        })?;
        let contents = CatalogFile::parse(&text, &path)?;
        tracing::debug!(path = %path.display(), "catalog file parsed");

        Ok(Self { contents })
    }
}

impl CatalogSource for FileSource {
    fn load_columns(&self) -> Result<Vec<Column>, CatalogError> {
        Ok(self.contents.columns.clone())
    }

    fn load_operators(&self) -> Result<Vec<Operator>, CatalogError> {
        Ok(self.contents.operators.clone())
    }

    fn load_initial_terms(&self) -> Result<Vec<Term>, CatalogError> {
        Ok(self.contents.initial_terms.clone())
    }
}

/// Demo catalog compiled into the binary
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinSource;

impl CatalogSource for BuiltinSource {
    fn load_columns(&self) -> Result<Vec<Column>, CatalogError> {
        let states = vec![
            Value::new("CA", "CA"),
            Value::new("NV", "NV"),
            Value::new("OR", "OR"),
        ];

        Ok(vec![
            Column::new("name", "Name", ColumnType::String, "contains"),
            Column::new("company", "Company", ColumnType::String, "equals"),
            Column::new("city", "City", ColumnType::String, "contains"),
            Column::new("state", "State", ColumnType::Picklist, "equals").with_picklist(states),
            Column::new("info", "Info", ColumnType::String, "contains"),
            Column::new("age", "Age", ColumnType::Number, "equals"),
            Column::new("is_active", "Is Active", ColumnType::Boolean, "equals"),
        ])
    }

    fn load_operators(&self) -> Result<Vec<Operator>, CatalogError> {
        Ok(vec![
            Operator::new("equals", "Equals", &["=", "==", "equals", "===", "is"]),
            Operator::new(
                "not_equals",
                "Not Equals",
                &["!=", "!==", "not equals", "not equal", "is not"],
            ),
            Operator::new("contains", "Contains", &["contains", "includes"]),
            Operator::new(
                "does_not_contain",
                "Does Not Contain",
                &[
                    "does not include",
                    "doesnt include",
                    "does not contain",
                    "doesnt contain",
                ],
            ),
        ])
    }

    fn load_initial_terms(&self) -> Result<Vec<Term>, CatalogError> {
        Ok(vec![Term::new("Company", "Equals", "Streak")])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::temp_file;

    const TOML_CATALOG: &str = r#"
        [[columns]]
        id = "company"
        label = "Company"
        type = "string"
        default_operator_id = "equals"

        [[columns]]
        id = "state"
        label = "State"
        type = "picklist"
        default_operator_id = "equals"
        picklist_options = [{ id = "CA", label = "CA" }]

        [[operators]]
        id = "equals"
        label = "Equals"
        aliases = ["=", "is"]

        [[operators]]
        id = "contains"
        label = "Contains"

        [[initial_terms]]
        column = "Company"
        operator = "Equals"
        value = "Streak"
    "#;

    #[test]
    fn test_load_toml_file() {
        let file = temp_file(".toml", TOML_CATALOG);
        let source = FileSource::open(file.path()).unwrap();
        let loaded = load(&source).unwrap();

        assert_eq!(loaded.catalog.columns.len(), 2);
        assert_eq!(loaded.catalog.columns[1].column_type, ColumnType::Picklist);
        assert_eq!(
            loaded.catalog.columns[1].picklist_options.as_deref(),
            Some(&[Value::new("CA", "CA")][..])
        );
        // Missing aliases default to empty
        assert!(loaded.catalog.operators[1].aliases.is_empty());
        assert_eq!(loaded.initial_terms, vec![Term::new("Company", "Equals", "Streak")]);
    }

    #[test]
    fn test_load_json_file() {
        let json = r#"{
            "columns": [
                {"id": "age", "label": "Age", "type": "number", "default_operator_id": "gt"}
            ],
            "operators": [{"id": "gt", "label": "Greater Than", "aliases": [">"]}]
        }"#;
        let file = temp_file(".json", json);
        let loaded = load(&FileSource::open(file.path()).unwrap()).unwrap();

        assert_eq!(loaded.catalog.columns[0].label, "Age");
        assert!(loaded.catalog.operators[0].has_alias(">"));
        assert!(loaded.initial_terms.is_empty());
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let file = temp_file(".toml", "columns = 7");
        assert!(matches!(
            FileSource::open(file.path()),
            Err(CatalogError::Toml(_))
        ));
    }

    #[test]
    fn test_missing_file_is_unreadable() {
        let result = FileSource::open("/nonexistent/pillfilter/catalog.toml");
        assert!(matches!(result, Err(CatalogError::Unreadable { .. })));
    }

    #[test]
    fn test_builtin_defaults_all_resolve() {
        let loaded = load(&BuiltinSource).unwrap();
        for column in &loaded.catalog.columns {
            assert!(loaded.catalog.default_operator(column).is_some(), "{}", column.label);
        }
        assert_eq!(loaded.initial_terms.len(), 1);
    }
}
