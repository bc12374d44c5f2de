//! Command implementations
//!
//! Each command is a module with an execute function that takes parsed CLI
//! args and runs against a loaded catalog.

pub mod build;
pub mod catalog;
pub mod script;
pub mod suggest;

// Re-export execute functions for convenience
pub use build::execute as build;
pub use catalog::execute as catalog;
pub use script::execute as script;
pub use suggest::execute as suggest;

use crate::PillError;
use crate::builder::FilterBuilder;
use crate::catalog::{BuiltinSource, FileSource, Loaded};
use crate::config::OutputFormat;
use crate::output;
use crate::suggest::TypedValues;
use crate::terms::Term;
use std::path::Path;

type Result<T> = std::result::Result<T, PillError>;

/// Load the catalog from a file, or the builtin demo catalog
///
/// # Errors
///
/// Returns `PillError::Catalog` if the file cannot be read or parsed.
pub fn load_catalog(path: Option<&Path>) -> Result<Loaded> {
    let loaded = match path {
        Some(path) => crate::catalog::load(&FileSource::open(path)?)?,
        None => crate::catalog::load(&BuiltinSource)?,
    };

    if loaded.catalog.is_empty() {
        tracing::warn!("catalog is empty; nothing will be suggested");
    }

    Ok(loaded)
}

/// Start a builder session over a loaded catalog
#[must_use]
pub fn new_builder(loaded: Loaded, typed_values: bool, no_initial: bool) -> FilterBuilder {
    let initial_terms = if no_initial {
        Vec::new()
    } else {
        loaded.initial_terms
    };

    let builder = FilterBuilder::new(loaded.catalog, initial_terms);
    if typed_values {
        builder.with_value_suggester(TypedValues)
    } else {
        builder
    }
}

/// Print submitted terms, or a cancellation notice
fn print_outcome(terms: Option<&[Term]>, format: OutputFormat, quiet: bool) -> Result<()> {
    let Some(terms) = terms else {
        if !quiet {
            eprintln!("Cancelled.");
        }
        return Ok(());
    };

    if terms.is_empty() && format == OutputFormat::Text {
        if !quiet {
            eprintln!("No terms submitted.");
        }
        return Ok(());
    }

    println!("{}", output::format_terms(terms, format)?);
    Ok(())
}
