//! Keybind system for the interactive builder.
//!
//! Every builder action can be bound to one or more keys in the `[keybinds]`
//! table of the config file. The same mapping drives the terminal UI and the
//! `script` command, so a replayed `<enter>` behaves exactly like a pressed one.

pub mod config;
pub mod keymap;

pub use config::{KeybindConfig, KeybindDef};
pub use keymap::{Action, KeyOutcome, Keymap, key_to_string, parse_key_string};
