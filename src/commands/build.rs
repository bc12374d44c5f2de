//! Build command - the interactive filter builder

use super::print_outcome;
use crate::{PillError, builder::FilterBuilder, config::OutputFormat, keybinds::Keymap, ui};

type Result<T> = std::result::Result<T, PillError>;

/// Execute the build command
///
/// Runs the builder until the user submits or quits, then prints the
/// submitted terms.
///
/// # Errors
///
/// Returns `PillError::Ui` if stdin/stdout is not a terminal or drawing fails.
pub fn execute(
    mut builder: FilterBuilder,
    keymap: Keymap,
    format: OutputFormat,
    quiet: bool,
) -> Result<()> {
    ui::ensure_terminal()?;

    let app = ui::PillApp::new(keymap);
    let submitted = app.run(&mut builder)?;

    match &submitted {
        Some(terms) => tracing::info!(terms = terms.len(), "builder submitted"),
        None => tracing::info!("builder cancelled"),
    }

    print_outcome(submitted.as_deref(), format, quiet)
}
