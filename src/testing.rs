//! Testing utilities for pillfilter
//!
//! Fixtures shared by the unit tests: the demo catalog and temporary
//! catalog files.
//!
//! Only available when compiled with `cfg(test)`.

use crate::catalog::{self, BuiltinSource, Catalog};
use crate::terms::Term;
use std::io::Write;
use tempfile::NamedTempFile;

/// The demo catalog
///
/// Column order is Name, Company, City, State, Info, Age, Is Active.
///
/// # Panics
/// Panics if the builtin source fails to load.
#[must_use]
pub fn sample_catalog() -> Catalog {
    catalog::load(&BuiltinSource)
        .expect("builtin catalog should load")
        .catalog
}

/// Two committed terms to start a session with
#[must_use]
pub fn sample_terms() -> Vec<Term> {
    vec![
        Term::new("Company", "Equals", "Streak"),
        Term::new("City", "Contains", "Portland"),
    ]
}

/// Write `contents` to a temporary file ending in `suffix`
///
/// The file is removed when the returned handle is dropped.
///
/// # Panics
/// Panics if the file cannot be created or written.
pub fn temp_file(suffix: &str, contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .prefix("pillfilter_test_")
        .suffix(suffix)
        .tempfile()
        .expect("Failed to create temp file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write temp file");
    file
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_catalog_order() {
        let catalog = sample_catalog();
        let labels: Vec<&str> = catalog.columns.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["Name", "Company", "City", "State", "Info", "Age", "Is Active"]
        );
    }

    #[test]
    fn test_temp_file_cleanup() {
        let path = {
            let file = temp_file(".toml", "columns = []");
            assert!(file.path().exists());
            assert!(file.path().to_string_lossy().ends_with(".toml"));
            file.path().to_path_buf()
        };
        assert!(!path.exists());
    }
}
