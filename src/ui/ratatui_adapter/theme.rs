//! Color theme definitions for the ratatui TUI
//!
//! Defines colors and styles used by the builder screen.

use crate::terms::Field;
use ratatui::style::{Color, Modifier, Style};

/// Theme configuration for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    /// Background color for the highlighted suggestion
    pub selection_bg: Color,
    /// Foreground color for the highlighted suggestion
    pub selection_fg: Color,
    /// Color for the cursor indicator and focused border
    pub cursor: Color,
    /// Color for column pills
    pub column: Color,
    /// Color for operator pills
    pub operator: Color,
    /// Color for value pills
    pub value: Color,
    /// Color for borders
    pub border: Color,
    /// Color for dimmed text and placeholders
    pub dimmed: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Create a dark theme (default)
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            selection_bg: Color::Blue,
            selection_fg: Color::White,
            cursor: Color::Cyan,
            column: Color::Magenta,
            operator: Color::Yellow,
            value: Color::Green,
            border: Color::DarkGray,
            dimmed: Color::DarkGray,
        }
    }

    /// Style for the highlighted suggestion
    #[must_use]
    pub fn selected_style(&self) -> Style {
        Style::default()
            .bg(self.selection_bg)
            .fg(self.selection_fg)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for the cursor indicator (>)
    #[must_use]
    pub fn cursor_style(&self) -> Style {
        Style::default().fg(self.cursor).add_modifier(Modifier::BOLD)
    }

    /// Style for one part of a pill
    #[must_use]
    pub fn field_style(&self, field: Field) -> Style {
        let color = match field {
            Field::Column => self.column,
            Field::Operator => self.operator,
            Field::Value | Field::Invalid => self.value,
        };
        Style::default().fg(color)
    }

    /// Style for the brackets around a committed pill
    #[must_use]
    pub fn pill_border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// Style for borders
    #[must_use]
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// Style for the focused input border
    #[must_use]
    pub fn focused_border_style(&self) -> Style {
        Style::default().fg(self.cursor)
    }

    /// Style for dimmed text
    #[must_use]
    pub fn dimmed_style(&self) -> Style {
        Style::default().fg(self.dimmed)
    }

    /// Style for the input placeholder
    #[must_use]
    pub fn placeholder_style(&self) -> Style {
        Style::default()
            .fg(self.dimmed)
            .add_modifier(Modifier::ITALIC)
    }
}
