//! Configuration module for pillfilter
//!
//! Manages application configuration: catalog location, output defaults,
//! logging and keybinds. Configuration is stored in the user's config
//! directory and can be overridden with `PILLFILTER_*` environment variables.

use crate::keybinds::KeybindConfig;
use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Output format for submitted terms
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `Company Equals Streak AND City Contains Portland`
    #[default]
    Text,
    /// Pretty-printed JSON array of terms
    Json,
}

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct PillConfig {
    /// Catalog file to load instead of the builtin demo catalog
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog: Option<PathBuf>,

    /// Suggest picklist options and true/false as values
    #[serde(default = "default_true")]
    pub typed_values: bool,

    /// Default format for submitted terms
    #[serde(default)]
    pub output: OutputFormat,

    /// Suppress informational output by default
    #[serde(default)]
    pub quiet: bool,

    /// Log filter directive, e.g. `warn` or `pillfilter=debug`
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// File to write logs to; required to see logs from the interactive builder
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,

    /// Action name to key(s)
    #[serde(default)]
    pub keybinds: KeybindConfig,
}

impl Default for PillConfig {
    fn default() -> Self {
        Self {
            catalog: None,
            typed_values: true,
            output: OutputFormat::default(),
            quiet: false,
            log_level: default_log_level(),
            log_file: None,
            keybinds: KeybindConfig::default(),
        }
    }
}

const fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "warn".to_string()
}

/// A loaded configuration and where it came from
///
/// Config is read before logging is installed, so the caller reports the
/// source once the subscriber is up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedConfig {
    pub config: PillConfig,
    pub path: PathBuf,
    /// A default config file was written at `path`
    pub created: bool,
}

impl PillConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine config directory".to_string()))?;

        Ok(config_dir.join("pillfilter").join("config.toml"))
    }

    /// Load configuration
    ///
    /// With an explicit path the file must exist. Without one the default
    /// location is used, and a default config is written there first if it
    /// doesn't exist yet.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be read, parsed, or created.
    pub fn load(path: Option<&Path>) -> Result<LoadedConfig, ConfigError> {
        match path {
            Some(path) => Ok(LoadedConfig {
                config: Self::load_from(path)?,
                path: path.to_path_buf(),
                created: false,
            }),
            None => Self::load_or_create(&Self::config_path()?),
        }
    }

    /// Load a config file, writing the defaults there first if it is missing
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be created, read, or parsed.
    pub fn load_or_create(config_path: &Path) -> Result<LoadedConfig, ConfigError> {
        let created = !config_path.exists();
        if created {
            Self::default().save_to(config_path)?;
        }

        Ok(LoadedConfig {
            config: Self::load_from(config_path)?,
            path: config_path.to_path_buf(),
            created,
        })
    }

    /// Load configuration from a specific file, layered with the environment
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file is missing or does not parse.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml))
            .add_source(Environment::with_prefix("PILLFILTER").try_parsing(true))
            .build()?;

        settings.try_deserialize()
    }

    /// Save configuration to a file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config directory cannot be created, the configuration
    /// cannot be serialized to TOML, or the file cannot be written.
    pub fn save_to(&self, config_path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ConfigError::Message(format!("Failed to create config directory: {e}")))?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(config_path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::temp_file;

    #[test]
    fn test_default_config() {
        let config = PillConfig::default();
        assert!(config.catalog.is_none());
        assert!(config.typed_values);
        assert_eq!(config.output, OutputFormat::Text);
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.keybinds.get("submit"), vec!["ctrl-s"]);
    }

    #[test]
    fn test_load_from_file() {
        let file = temp_file(
            ".toml",
            r#"
                catalog = "/srv/catalog.json"
                typed_values = false
                output = "json"

                [keybinds]
                submit = "ctrl-d"
                advance = ["enter"]
            "#,
        );

        let config = PillConfig::load_from(file.path()).unwrap();
        assert_eq!(config.catalog, Some(PathBuf::from("/srv/catalog.json")));
        assert!(!config.typed_values);
        assert_eq!(config.output, OutputFormat::Json);
        assert!(!config.quiet);
        assert_eq!(config.keybinds.get("submit"), vec!["ctrl-d"]);
        assert_eq!(config.keybinds.get("advance"), vec!["enter"]);
        assert_eq!(config.keybinds.get("quit"), vec!["ctrl-c"]);
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = PillConfig {
            quiet: true,
            log_file: Some(PathBuf::from("/tmp/pillfilter.log")),
            ..PillConfig::default()
        };
        config.save_to(&path).unwrap();

        let loaded = PillConfig::load(Some(&path)).unwrap();
        assert_eq!(loaded.config, config);
        assert!(!loaded.created);
    }

    #[test]
    fn test_load_or_create_writes_defaults_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pillfilter").join("config.toml");

        let first = PillConfig::load_or_create(&path).unwrap();
        assert!(first.created);
        assert_eq!(first.path, path);
        assert_eq!(first.config, PillConfig::default());
        assert!(path.exists());

        let second = PillConfig::load_or_create(&path).unwrap();
        assert!(!second.created);
        assert_eq!(second.config, PillConfig::default());
    }

    #[test]
    fn test_explicit_missing_file_is_an_error() {
        let result = PillConfig::load(Some(Path::new("/nonexistent/pillfilter/config.toml")));
        assert!(result.is_err());
    }

    #[test]
    fn test_bad_value_is_an_error() {
        let file = temp_file(".toml", "output = \"yaml\"\n");
        assert!(PillConfig::load_from(file.path()).is_err());
    }
}
