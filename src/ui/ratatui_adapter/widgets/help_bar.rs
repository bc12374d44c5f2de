//! Help bar widget for displaying keybind hints

use crate::keybinds::{Action, Keymap};
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// A keybind hint to display in the help bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyHint {
    /// Key combination (e.g., "enter", "ctrl-s")
    pub key: String,
    /// Action description (e.g., "select", "submit")
    pub action: String,
}

impl KeyHint {
    /// Create a new key hint
    #[must_use]
    pub fn new(key: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            action: action.into(),
        }
    }

    /// Hints for the bound builder actions, in a fixed order
    #[must_use]
    pub fn from_keymap(keymap: &Keymap) -> Vec<Self> {
        [
            (Action::Advance, "select"),
            (Action::Select, "pick"),
            (Action::Regress, "back"),
            (Action::ReopenLast, "edit last"),
            (Action::Down, "show all"),
            (Action::Submit, "submit"),
            (Action::Quit, "quit"),
        ]
        .into_iter()
        .filter_map(|(action, label)| keymap.hint(action).map(|key| Self::new(key, label)))
        .collect()
    }
}

/// Help bar widget that displays keybind hints at the bottom
pub struct HelpBar<'a> {
    /// Hints to display
    hints: &'a [KeyHint],
    /// Theme for styling
    theme: &'a Theme,
}

impl<'a> HelpBar<'a> {
    /// Create a new help bar widget
    #[must_use]
    pub const fn new(hints: &'a [KeyHint], theme: &'a Theme) -> Self {
        Self { hints, theme }
    }
}

impl Widget for HelpBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = Vec::new();

        for (i, hint) in self.hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("  ", self.theme.dimmed_style()));
            }
            spans.push(Span::styled(hint.key.as_str(), self.theme.cursor_style()));
            spans.push(Span::styled(":", self.theme.dimmed_style()));
            spans.push(Span::raw(hint.action.as_str()));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keybinds::{KeybindConfig, KeybindDef};

    #[test]
    fn test_hints_follow_keymap() {
        let keymap = Keymap::from_config(&KeybindConfig::default());
        let hints = KeyHint::from_keymap(&keymap);

        assert_eq!(hints[0], KeyHint::new("enter", "select"));
        assert!(hints.contains(&KeyHint::new("ctrl-s", "submit")));
    }

    #[test]
    fn test_disabled_actions_have_no_hint() {
        let mut config = KeybindConfig::default();
        config
            .keybinds
            .insert("quit".to_string(), KeybindDef::Single("none".to_string()));
        let hints = KeyHint::from_keymap(&Keymap::from_config(&config));

        assert!(hints.iter().all(|hint| hint.action != "quit"));
    }
}
