//! Catalog command - list columns and operators

use crate::{PillError, catalog::Catalog, output};

type Result<T> = std::result::Result<T, PillError>;

/// Execute the catalog command
pub fn execute(catalog: &Catalog, quiet: bool) -> Result<()> {
    if catalog.is_empty() {
        if !quiet {
            println!("Catalog is empty.");
        }
        return Ok(());
    }

    if !quiet {
        println!("Columns:");
    }
    for column in &catalog.columns {
        println!("{}", output::column_line(column, catalog, quiet));
    }

    if !quiet {
        println!();
        println!("Operators:");
    }
    for operator in &catalog.operators {
        println!("{}", output::operator_line(operator, quiet));
    }

    Ok(())
}
