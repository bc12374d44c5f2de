//! Terminal user interface
//!
//! The interactive builder runs on ratatui in the alternate screen. It is
//! only used by the `build` command; everything else in the crate works
//! without a terminal.

pub mod error;
pub mod ratatui_adapter;

pub use error::{Result, UiError};
pub use ratatui_adapter::{PillApp, Theme};

use std::io::IsTerminal;

/// Fail early when stdin or stdout is not a terminal
///
/// # Errors
///
/// Returns `UiError::Terminal` naming the stream that is redirected.
pub fn ensure_terminal() -> Result<()> {
    if !std::io::stdin().is_terminal() {
        return Err(UiError::Terminal(
            "stdin is not a terminal; use `pillfilter script` for non-interactive input".into(),
        ));
    }
    if !std::io::stdout().is_terminal() {
        return Err(UiError::Terminal("stdout is not a terminal".into()));
    }
    Ok(())
}
