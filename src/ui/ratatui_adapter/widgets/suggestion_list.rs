//! Suggestion list widget for the dropdown surface

use crate::builder::BuilderState;
use crate::suggest::Candidate;
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Widget},
};

/// Dropdown of candidates for the active field
pub struct SuggestionList<'a> {
    state: &'a BuilderState,
    theme: &'a Theme,
}

impl<'a> SuggestionList<'a> {
    /// Create a new suggestion list widget
    #[must_use]
    pub const fn new(state: &'a BuilderState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }

    /// First visible row so the highlight stays on screen
    fn scroll_offset(&self, visible: usize) -> usize {
        if visible == 0 {
            return 0;
        }
        self.state.highlighted().saturating_sub(visible - 1)
    }

    fn render_item(&self, candidate: &'a Candidate, is_cursor: bool) -> ListItem<'a> {
        let cursor_char = if is_cursor { ">" } else { " " };
        let mut spans = vec![
            Span::styled(cursor_char, self.theme.cursor_style()),
            Span::raw(" "),
            Span::styled(candidate.label(), self.theme.field_style(candidate.field())),
        ];

        if let Candidate::Operator(operator) = candidate
            && !operator.aliases.is_empty()
        {
            spans.push(Span::styled(
                format!("  {}", operator.aliases.join(" ")),
                self.theme.dimmed_style(),
            ));
        }

        let item = ListItem::new(Line::from(spans));
        if is_cursor {
            item.style(self.theme.selected_style())
        } else {
            item
        }
    }

    /// Index of the candidate under a screen position, if any
    #[must_use]
    pub fn index_at(&self, area: Rect, position: Position) -> Option<usize> {
        let inner = Self::block().inner(area);
        if !inner.contains(position) {
            return None;
        }
        let visible = inner.height as usize;
        let index = self.scroll_offset(visible) + usize::from(position.y - inner.y);
        (index < self.state.suggestions().len()).then_some(index)
    }

    fn block() -> Block<'static> {
        Block::default().borders(Borders::ALL)
    }
}

impl Widget for SuggestionList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = format!(
            " {} ({}) ",
            self.state.field().name(),
            self.state.suggestions().len()
        );
        let block = Self::block()
            .border_style(self.theme.border_style())
            .title(title);

        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 {
            return;
        }

        let visible = inner.height as usize;
        let start = self.scroll_offset(visible);
        let items: Vec<ListItem> = self
            .state
            .suggestions()
            .iter()
            .enumerate()
            .skip(start)
            .take(visible)
            .map(|(index, candidate)| {
                self.render_item(candidate, index == self.state.highlighted())
            })
            .collect();

        List::new(items).render(inner, buf);
    }
}
