//! Command-line interface definitions and parsing
//!
//! This module defines the CLI structure for pillfilter using the `clap` crate.
//!
//! # Commands
//!
//! - **build**: Interactive filter builder (default)
//! - **script**: Replay keys and text through the builder without a terminal
//! - **suggest**: Print the candidates for one field
//! - **catalog**: List the available columns and operators
//!
//! # Examples
//!
//! ```
//! use clap::Parser;
//! use pillfilter::cli::{Cli, Commands};
//!
//! let cli = Cli::parse_from(["pillfilter", "script", "Company", "<enter>", "Streak", "<enter>"]);
//! assert!(matches!(cli.get_command(), Commands::Script { .. }));
//! ```

use crate::config::OutputFormat;
use crate::terms::Field;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug)]
#[command(name = "pillfilter")]
#[command(about = "Build column/operator/value filters from typed fragments", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Config file to use instead of the default location
    #[arg(long = "config", value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Catalog file (TOML or JSON); overrides the config
    #[arg(long = "catalog", value_name = "FILE", global = true)]
    pub catalog: Option<PathBuf>,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

/// Shared arguments for commands that produce terms
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputArgs {
    /// Output format (overrides config)
    #[arg(short = 'f', long = "format", value_enum)]
    pub format: Option<OutputFormat>,

    /// Start from an empty term list, ignoring the catalog's initial terms
    #[arg(long = "no-initial")]
    pub no_initial: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Open the interactive filter builder (default)
    #[command(visible_alias = "b")]
    Build {
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Replay input through the builder and print the submitted terms
    ///
    /// Tokens in angle brackets are keys (`<enter>`, `<down>`, `<ctrl-s>`);
    /// any other token is typed, with a space between consecutive text tokens.
    #[command(visible_alias = "s")]
    Script {
        /// Keys and text to replay
        #[arg(value_name = "TOKEN", required = true, allow_hyphen_values = true)]
        tokens: Vec<String>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Print the candidates for a field
    Suggest {
        /// Field to suggest for (column, operator, value)
        field: Field,

        /// Text typed so far
        #[arg(value_name = "INPUT", default_value = "")]
        input: String,

        /// Column label, required for value suggestions
        #[arg(short = 'c', long = "column", value_name = "LABEL")]
        column: Option<String>,

        /// List every candidate, ignoring the input
        #[arg(short = 'a', long = "all")]
        all: bool,
    },

    /// List the catalog's columns and operators
    Catalog,
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the command, defaulting to Build if none specified
    #[must_use]
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Build {
            output: OutputArgs::default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_build() {
        let cli = Cli::parse_from(["pillfilter"]);
        assert!(cli.command.is_none());
        assert_eq!(
            cli.get_command(),
            Commands::Build {
                output: OutputArgs::default()
            }
        );
    }

    #[test]
    fn test_build_alias_and_format() {
        let cli = Cli::parse_from(["pillfilter", "b", "--format", "json", "--no-initial"]);
        assert_eq!(
            cli.get_command(),
            Commands::Build {
                output: OutputArgs {
                    format: Some(OutputFormat::Json),
                    no_initial: true,
                }
            }
        );
    }

    #[test]
    fn test_script_tokens() {
        let cli = Cli::parse_from(["pillfilter", "s", "Company", "<tab>", "Streak", "<enter>"]);
        let Some(Commands::Script { tokens, output }) = cli.command else {
            panic!("Expected Script command");
        };
        assert_eq!(tokens, vec!["Company", "<tab>", "Streak", "<enter>"]);
        assert_eq!(output.format, None);
    }

    #[test]
    fn test_script_requires_tokens() {
        assert!(Cli::try_parse_from(["pillfilter", "script"]).is_err());
    }

    #[test]
    fn test_suggest_field() {
        let cli = Cli::parse_from(["pillfilter", "suggest", "op", "is"]);
        assert_eq!(
            cli.get_command(),
            Commands::Suggest {
                field: Field::Operator,
                input: "is".to_string(),
                column: None,
                all: false,
            }
        );

        assert!(Cli::try_parse_from(["pillfilter", "suggest", "nonsense"]).is_err());
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::parse_from([
            "pillfilter",
            "catalog",
            "--catalog",
            "cat.toml",
            "-q",
            "-vv",
        ]);
        assert_eq!(cli.catalog, Some(PathBuf::from("cat.toml")));
        assert!(cli.quiet);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.get_command(), Commands::Catalog);
    }
}
