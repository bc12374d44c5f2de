//! Logging setup
//!
//! `tracing` events go to stderr for the non-interactive commands. The
//! interactive builder owns the terminal, so it only logs to the configured
//! log file. `RUST_LOG` overrides the configured level.

use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Logging settings resolved from config and command line
#[derive(Debug, Clone, Copy)]
pub struct LogConfig<'a> {
    /// Filter directive from the config file
    pub level: &'a str,
    /// Number of `-v` flags
    pub verbosity: u8,
    /// Append logs to this file
    pub file: Option<&'a Path>,
    /// The terminal belongs to the UI; keep stderr quiet
    pub tui_mode: bool,
}

/// Filter directive for a configured level and `-v` count
#[must_use]
pub fn filter_directive(level: &str, verbosity: u8) -> String {
    match verbosity {
        0 => level.to_string(),
        1 => "pillfilter=info".to_string(),
        2 => "pillfilter=debug".to_string(),
        _ => "pillfilter=trace".to_string(),
    }
}

/// Install the global subscriber
///
/// Calling this twice keeps the first subscriber.
///
/// # Errors
///
/// Returns an I/O error if the log file cannot be opened.
pub fn init_logging(config: &LogConfig<'_>) -> io::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::try_new(filter_directive(config.level, config.verbosity))
            .unwrap_or_else(|_| EnvFilter::new("warn"))
    });

    let file_layer = match config.file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            Some(
                tracing_subscriber::fmt::layer()
                    .with_writer(Mutex::new(file))
                    .with_ansi(false),
            )
        }
        None => None,
    };

    let stderr_layer = (!config.tui_mode).then(|| {
        tracing_subscriber::fmt::layer()
            .with_writer(io::stderr)
            .with_target(false)
    });

    if tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(stderr_layer)
        .try_init()
        .is_err()
    {
        tracing::debug!("subscriber already installed");
    }

    Ok(())
}
