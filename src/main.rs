//! Pillfilter CLI application entry point
//!
//! # Usage
//!
//! ```bash
//! # Build a filter interactively (default command)
//! pillfilter
//! pillfilter build --format json
//!
//! # Use your own catalog
//! pillfilter --catalog columns.toml
//!
//! # Replay input without a terminal
//! pillfilter script Company '<enter>' Streak '<enter>' '<ctrl-s>'
//!
//! # Ask for suggestions
//! pillfilter suggest operator is
//! pillfilter suggest value --column State --all
//!
//! # List the catalog
//! pillfilter catalog
//! ```
//!
//! # Configuration
//!
//! A default config is created on first run in the user's config directory
//! (`~/.config/pillfilter/config.toml` on Linux).

use pillfilter::{
    PillError,
    cli::{Cli, Commands},
    commands,
    config::PillConfig,
    keybinds::Keymap,
    logging::{self, LogConfig},
    suggest::{NoValues, SuggestionEngine, TypedValues, ValueSuggester},
};

type Result<T> = std::result::Result<T, PillError>;

fn run() -> Result<()> {
    let cli = Cli::parse_args();
    let loaded_config = PillConfig::load(cli.config.as_deref())?;
    let config = loaded_config.config;
    let command = cli.get_command();

    logging::init_logging(&LogConfig {
        level: &config.log_level,
        verbosity: cli.verbose,
        file: config.log_file.as_deref(),
        tui_mode: matches!(command, Commands::Build { .. }),
    })?;

    if loaded_config.created {
        tracing::info!(path = %loaded_config.path.display(), "created default config");
    }
    tracing::debug!(path = %loaded_config.path.display(), "config loaded");

    let quiet = cli.quiet || config.quiet;
    let catalog_path = cli.catalog.as_deref().or(config.catalog.as_deref());
    let loaded = commands::load_catalog(catalog_path)?;

    match command {
        Commands::Build { output } => commands::build(
            commands::new_builder(loaded, config.typed_values, output.no_initial),
            Keymap::from_config(&config.keybinds),
            output.format.unwrap_or(config.output),
            quiet,
        ),
        Commands::Script { tokens, output } => commands::script(
            commands::new_builder(loaded, config.typed_values, output.no_initial),
            &Keymap::from_config(&config.keybinds),
            &tokens,
            output.format.unwrap_or(config.output),
            quiet,
        ),
        Commands::Suggest {
            field,
            input,
            column,
            all,
        } => {
            let values: &dyn ValueSuggester = if config.typed_values {
                &TypedValues
            } else {
                &NoValues
            };
            let engine = SuggestionEngine::new(&loaded.catalog, values);
            commands::suggest(&engine, field, &input, column.as_deref(), all, quiet)
        }
        Commands::Catalog => commands::catalog(&loaded.catalog, quiet),
    }
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
