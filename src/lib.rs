//! Pillfilter - a keyboard-driven filter builder
//!
//! This library turns a stream of typed fragments into an ordered list of
//! column/operator/value filter terms ("pills"), with context-aware
//! suggestions drawn from a catalog of columns and operators.
//!
//! The core ([`builder`], [`suggest`], [`terms`], [`catalog`]) is free of any
//! terminal code and can be driven from tests, scripts or any front end. The
//! [`ui`] module hosts a ratatui front end for it.

use thiserror::Error;

pub mod builder;
pub mod catalog;
pub mod cli;
pub mod commands;
pub mod config;
pub mod keybinds;
pub mod logging;
pub mod output;
pub mod suggest;
pub mod terms;
pub mod ui;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum PillError {
    /// Catalog could not be loaded
    #[error("Catalog error: {0}")]
    Catalog(#[from] catalog::CatalogError),
    /// Terminal UI failure
    #[error("UI error: {0}")]
    Ui(#[from] ui::UiError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Output serialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
