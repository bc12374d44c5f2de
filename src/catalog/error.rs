//! Error types for catalog loading

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Catalog file could not be read
    #[error("Cannot read catalog '{path}': {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// TOML catalog did not parse
    #[error("Invalid TOML catalog: {0}")]
    Toml(#[from] toml::de::Error),

    /// JSON catalog did not parse
    #[error("Invalid JSON catalog: {0}")]
    Json(#[from] serde_json::Error),
}
