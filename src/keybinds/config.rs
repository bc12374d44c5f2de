//! Configuration for keybinds.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Action name to key mapping, as written in the config file.
///
/// Actions missing from the file keep their default keys, so a config that
/// only rebinds `submit` still has every other binding.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct KeybindConfig {
    pub keybinds: HashMap<String, KeybindDef>,
}

/// Keybind definition - can be single key, multiple keys, or disabled.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum KeybindDef {
    /// Single keybind
    Single(String),
    /// Multiple alternative keybinds for the same action
    Multiple(Vec<String>),
}

impl KeybindDef {
    fn keys(&self) -> Vec<String> {
        match self {
            Self::Single(key) => vec![key.clone()],
            Self::Multiple(keys) => keys.clone(),
        }
    }
}

impl Default for KeybindConfig {
    fn default() -> Self {
        Self {
            keybinds: default_keybinds(),
        }
    }
}

fn multiple(keys: &[&str]) -> KeybindDef {
    KeybindDef::Multiple(keys.iter().map(ToString::to_string).collect())
}

fn default_keybinds() -> HashMap<String, KeybindDef> {
    let mut keybinds = HashMap::new();

    // Field transitions
    keybinds.insert("advance".to_string(), multiple(&["enter", "tab"]));
    keybinds.insert("select".to_string(), KeybindDef::Single("none".to_string()));
    keybinds.insert("reopen_last".to_string(), multiple(&["btab", "shift-enter"]));
    keybinds.insert("regress".to_string(), KeybindDef::Single("bspace".to_string()));

    // Suggestion surface
    keybinds.insert("up".to_string(), multiple(&["up", "ctrl-p"]));
    keybinds.insert("down".to_string(), multiple(&["down", "ctrl-n"]));
    keybinds.insert("dismiss".to_string(), KeybindDef::Single("esc".to_string()));

    // Session
    keybinds.insert("submit".to_string(), KeybindDef::Single("ctrl-s".to_string()));
    keybinds.insert("quit".to_string(), KeybindDef::Single("ctrl-c".to_string()));

    keybinds
}

impl KeybindConfig {
    /// Get the keybind(s) for a given action name.
    ///
    /// Falls back to the default keys when the action is not configured, and
    /// returns an empty list for unknown actions.
    #[must_use]
    pub fn get(&self, action: &str) -> Vec<String> {
        self.keybinds.get(action).map_or_else(
            || default_keybinds().get(action).map_or_else(Vec::new, KeybindDef::keys),
            KeybindDef::keys,
        )
    }

    /// Check if a keybind is disabled for an action.
    #[must_use]
    pub fn is_disabled(&self, action: &str) -> bool {
        self.keybinds.get(action).is_some_and(|def| match def {
            KeybindDef::Single(key) => key == "none",
            KeybindDef::Multiple(keys) => keys.iter().all(|k| k == "none"),
        })
    }

    /// Configured action names, sorted
    #[must_use]
    pub fn actions(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.keybinds.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_keybinds() {
        let config = KeybindConfig::default();
        assert_eq!(config.get("advance"), vec!["enter", "tab"]);
        assert_eq!(config.get("regress"), vec!["bspace"]);
        assert_eq!(config.get("submit"), vec!["ctrl-s"]);
        assert!(config.is_disabled("select"));
        assert!(config.get("explode").is_empty());
    }

    #[test]
    fn test_keybind_def_parsing() {
        let toml = r#"
            submit = "ctrl-d"
            down = ["ctrl-j", "F2"]
        "#;

        let config: KeybindConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.get("submit"), vec!["ctrl-d"]);
        assert_eq!(config.get("down"), vec!["ctrl-j", "F2"]);
        // Unlisted actions keep their defaults
        assert_eq!(config.get("quit"), vec!["ctrl-c"]);
    }

    #[test]
    fn test_is_disabled() {
        let mut keybinds = HashMap::new();
        keybinds.insert("dismiss".to_string(), KeybindDef::Single("none".to_string()));
        keybinds.insert(
            "up".to_string(),
            KeybindDef::Multiple(vec!["none".to_string(), "none".to_string()]),
        );
        keybinds.insert("submit".to_string(), KeybindDef::Single("ctrl-s".to_string()));

        let config = KeybindConfig { keybinds };

        assert!(config.is_disabled("dismiss"));
        assert!(config.is_disabled("up"));
        assert!(!config.is_disabled("submit"));
        assert!(!config.is_disabled("advance"));
        assert_eq!(config.actions(), vec!["dismiss", "submit", "up"]);
    }
}
