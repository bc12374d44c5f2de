//! Key adapter
//!
//! Turns crossterm key events into builder events using the configured
//! keybinds. Keys are compared on `(code, modifiers)` after normalisation, so
//! a terminal that reports `shift` alongside an uppercase character or a
//! back-tab still matches the configured binding.

use super::config::KeybindConfig;
use crate::builder::Event;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::collections::HashMap;
use std::fmt;

/// A bindable action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Advance,
    Select,
    ReopenLast,
    Regress,
    Up,
    Down,
    Dismiss,
    Submit,
    Quit,
}

impl Action {
    pub const ALL: [Self; 9] = [
        Self::Advance,
        Self::Select,
        Self::ReopenLast,
        Self::Regress,
        Self::Up,
        Self::Down,
        Self::Dismiss,
        Self::Submit,
        Self::Quit,
    ];

    /// Name used in the `[keybinds]` table
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Advance => "advance",
            Self::Select => "select",
            Self::ReopenLast => "reopen_last",
            Self::Regress => "regress",
            Self::Up => "up",
            Self::Down => "down",
            Self::Dismiss => "dismiss",
            Self::Submit => "submit",
            Self::Quit => "quit",
        }
    }

    /// Builder event this action produces, `None` for quit
    ///
    /// `Select` carries no fallback character here; `Keymap::map_key` fills
    /// it in from the pressed key.
    #[must_use]
    pub const fn event(self) -> Option<Event> {
        match self {
            Self::Advance => Some(Event::Advance),
            Self::Select => Some(Event::Select(None)),
            Self::ReopenLast => Some(Event::ReopenLast),
            Self::Regress => Some(Event::DeleteBack),
            Self::Up => Some(Event::NavigateUp),
            Self::Down => Some(Event::NavigateDown),
            Self::Dismiss => Some(Event::Dismiss),
            Self::Submit => Some(Event::Submit),
            Self::Quit => None,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What a key press means to the session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Feed this event to the builder
    Builder(Event),
    /// Leave without submitting
    Quit,
    /// Nothing to do (releases, unbound keys, swallowed newlines)
    Ignore,
}

/// Parse a key string like `ctrl-s` or `shift-enter` into a key event
///
/// The minus key is written `-`, so `ctrl--` is control plus minus.
#[must_use]
pub fn parse_key_string(s: &str) -> Option<KeyEvent> {
    let (modifier_part, key_part) = match s.rsplit_once('-') {
        None => ("", s),
        Some(("", "")) => ("", "-"),
        Some((mods, "")) => (mods.strip_suffix('-')?, "-"),
        Some((mods, key)) => (mods, key),
    };

    let mut modifiers = KeyModifiers::NONE;
    for part in modifier_part.split('-').filter(|_| !modifier_part.is_empty()) {
        match part.to_lowercase().as_str() {
            "ctrl" | "control" => modifiers |= KeyModifiers::CONTROL,
            "alt" => modifiers |= KeyModifiers::ALT,
            "shift" => modifiers |= KeyModifiers::SHIFT,
            _ => return None,
        }
    }

    let code = match key_part.to_lowercase().as_str() {
        "enter" => KeyCode::Enter,
        "esc" => KeyCode::Esc,
        "tab" => KeyCode::Tab,
        "btab" | "backtab" => KeyCode::BackTab,
        "bspace" | "backspace" => KeyCode::Backspace,
        "del" | "delete" => KeyCode::Delete,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pgup" | "pageup" => KeyCode::PageUp,
        "pgdn" | "pagedown" => KeyCode::PageDown,
        "space" => KeyCode::Char(' '),
        s if s.starts_with('f') && s.len() > 1 => s[1..].parse().ok().map(KeyCode::F)?,
        s if s.chars().count() == 1 => KeyCode::Char(s.chars().next()?),
        _ => return None,
    };

    Some(KeyEvent::new(code, modifiers))
}

/// Convert a key event to its key string
#[must_use]
pub fn key_to_string(key: &KeyEvent) -> Option<String> {
    let base = match key.code {
        KeyCode::Char(' ') => "space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "enter".to_string(),
        KeyCode::Esc => "esc".to_string(),
        KeyCode::Backspace => "bspace".to_string(),
        KeyCode::Delete => "del".to_string(),
        KeyCode::Up => "up".to_string(),
        KeyCode::Down => "down".to_string(),
        KeyCode::Left => "left".to_string(),
        KeyCode::Right => "right".to_string(),
        KeyCode::Home => "home".to_string(),
        KeyCode::End => "end".to_string(),
        KeyCode::PageUp => "pgup".to_string(),
        KeyCode::PageDown => "pgdn".to_string(),
        KeyCode::Tab => "tab".to_string(),
        KeyCode::BackTab => "btab".to_string(),
        KeyCode::F(n) => format!("f{n}"),
        _ => return None,
    };

    let mut result = String::new();
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        result.push_str("ctrl-");
    }
    if key.modifiers.contains(KeyModifiers::ALT) {
        result.push_str("alt-");
    }
    if key.modifiers.contains(KeyModifiers::SHIFT)
        && !matches!(key.code, KeyCode::Char(_) | KeyCode::BackTab)
    {
        result.push_str("shift-");
    }
    result.push_str(&base);

    Some(result)
}

/// Lookup key for a press
fn normalize(code: KeyCode, modifiers: KeyModifiers) -> (KeyCode, KeyModifiers) {
    match code {
        KeyCode::BackTab => (code, modifiers.difference(KeyModifiers::SHIFT)),
        KeyCode::Char(c) if modifiers.contains(KeyModifiers::CONTROL) => (
            KeyCode::Char(c.to_ascii_lowercase()),
            modifiers.difference(KeyModifiers::SHIFT),
        ),
        KeyCode::Char(_) => (code, modifiers.difference(KeyModifiers::SHIFT)),
        _ => (code, modifiers),
    }
}

/// Character a key types, ignoring control and alt chords
fn typed_char(key: &KeyEvent) -> Option<char> {
    match key.code {
        KeyCode::Char(c) if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
            Some(c)
        }
        _ => None,
    }
}

/// Keys that would put a line break in the input
fn is_newline(code: KeyCode, modifiers: KeyModifiers) -> bool {
    match code {
        KeyCode::Enter | KeyCode::Char('\n' | '\r') => true,
        KeyCode::Char('j' | 'm') => modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

/// Resolved keybinds for a session
#[derive(Debug, Clone, Default)]
pub struct Keymap {
    bindings: HashMap<(KeyCode, KeyModifiers), Action>,
    hints: HashMap<Action, String>,
}

impl Keymap {
    /// Resolve every action's keys from the config
    ///
    /// Keys that do not parse and action names that do not exist are logged
    /// and skipped.
    #[must_use]
    pub fn from_config(config: &KeybindConfig) -> Self {
        let mut keymap = Self::default();

        for name in config.actions() {
            if !Action::ALL.iter().any(|action| action.name() == name) {
                tracing::warn!(action = name, "unknown keybind action");
            }
        }

        for action in Action::ALL {
            if config.is_disabled(action.name()) {
                tracing::debug!(%action, "keybind disabled");
                continue;
            }

            for key in config.get(action.name()) {
                if key == "none" {
                    continue;
                }
                let Some(event) = parse_key_string(&key) else {
                    tracing::warn!(%action, key = %key, "unparseable keybind");
                    continue;
                };
                let slot = normalize(event.code, event.modifiers);
                if let Some(previous) = keymap.bindings.insert(slot, action) {
                    tracing::warn!(key = %key, %previous, %action, "key bound twice, last wins");
                }
                keymap.hints.entry(action).or_insert(key);
            }
        }

        keymap
    }

    /// Action bound to a key, if any
    #[must_use]
    pub fn action(&self, key: &KeyEvent) -> Option<Action> {
        self.bindings
            .get(&normalize(key.code, key.modifiers))
            .copied()
    }

    /// First configured key for an action, for hints
    #[must_use]
    pub fn hint(&self, action: Action) -> Option<&str> {
        self.hints.get(&action).map(String::as_str)
    }

    /// Map one key event
    #[must_use]
    pub fn map_key(&self, key: &KeyEvent) -> KeyOutcome {
        if key.kind != KeyEventKind::Press {
            return KeyOutcome::Ignore;
        }

        if let Some(action) = self.action(key) {
            tracing::trace!(key = key_to_string(key).as_deref().unwrap_or("?"), %action, "bound key");
            return match action {
                Action::Select => KeyOutcome::Builder(Event::Select(typed_char(key))),
                _ => action.event().map_or(KeyOutcome::Quit, KeyOutcome::Builder),
            };
        }

        if is_newline(key.code, key.modifiers) {
            return KeyOutcome::Ignore;
        }

        typed_char(key).map_or(KeyOutcome::Ignore, |c| KeyOutcome::Builder(Event::Insert(c)))
    }
}
