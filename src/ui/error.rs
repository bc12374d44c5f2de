//! UI error types

use thiserror::Error;

/// Errors that can occur in UI operations
#[derive(Debug, Error)]
pub enum UiError {
    /// IO error during UI operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The terminal cannot host the builder
    #[error("Terminal error: {0}")]
    Terminal(String),
}

/// Result type for UI operations
pub type Result<T> = std::result::Result<T, UiError>;
