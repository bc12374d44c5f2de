//! Output formatting for CLI display
//!
//! Formatting of submitted terms for stdout, and of catalog entries for the
//! `catalog` command.

use crate::catalog::{Catalog, Column, Operator};
use crate::config::OutputFormat;
use crate::terms::Term;
use colored::Colorize;

/// Format submitted terms
///
/// # Errors
///
/// Returns a `serde_json::Error` if JSON serialization fails.
pub fn format_terms(terms: &[Term], format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Text => Ok(terms
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" AND ")),
        OutputFormat::Json => serde_json::to_string_pretty(terms),
    }
}

/// Format a column with its type and default operator
#[must_use]
pub fn column_line(column: &Column, catalog: &Catalog, quiet: bool) -> String {
    if quiet {
        return column.label.clone();
    }

    let default = catalog.default_operator(column).map_or_else(
        || format!("{} (unresolved)", column.default_operator_id).red().to_string(),
        |op| op.label.clone(),
    );

    let mut line = format!(
        "  {} ({}, default: {})",
        column.label.magenta().bold(),
        column.column_type.as_str().dimmed(),
        default
    );

    if let Some(options) = &column.picklist_options {
        let labels: Vec<&str> = options.iter().map(|v| v.label.as_str()).collect();
        line.push_str(&format!(" [{}]", labels.join(", ")));
    }

    line
}

/// Format an operator with its aliases
#[must_use]
pub fn operator_line(operator: &Operator, quiet: bool) -> String {
    if quiet {
        operator.label.clone()
    } else if operator.aliases.is_empty() {
        format!("  {}", operator.label.yellow().bold())
    } else {
        format!(
            "  {} {}",
            operator.label.yellow().bold(),
            format!("({})", operator.aliases.join(", ")).dimmed()
        )
    }
}
