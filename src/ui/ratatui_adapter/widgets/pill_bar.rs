//! Pill bar widget: committed terms followed by the term being built

use crate::builder::BuilderState;
use crate::terms::{Field, Term};
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Input line showing every pill and the text input
///
/// The caret sits right after the typed text. When the line is wider than
/// the area it scrolls so the caret stays visible.
pub struct PillBar<'a> {
    state: &'a BuilderState,
    theme: &'a Theme,
}

impl<'a> PillBar<'a> {
    /// Create a new pill bar widget
    #[must_use]
    pub const fn new(state: &'a BuilderState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }

    fn pill(&self, term: &'a Term) -> Vec<Span<'a>> {
        vec![
            Span::styled("[", self.theme.pill_border_style()),
            Span::styled(term.column.as_str(), self.theme.field_style(Field::Column)),
            Span::raw(" "),
            Span::styled(term.operator.as_str(), self.theme.field_style(Field::Operator)),
            Span::raw(" "),
            Span::styled(term.value.as_str(), self.theme.field_style(Field::Value)),
            Span::styled("]", self.theme.pill_border_style()),
            Span::raw(" "),
        ]
    }

    /// Spans up to the caret, and the placeholder if the input is empty
    fn spans(&self) -> (Vec<Span<'a>>, Option<Span<'a>>) {
        let mut spans: Vec<Span<'a>> = self
            .state
            .terms()
            .iter()
            .flat_map(|term| self.pill(term))
            .collect();

        let partial = self.state.partial();
        if let Some(column) = partial.column() {
            spans.push(Span::styled(column, self.theme.field_style(Field::Column)));
            spans.push(Span::raw(" "));
        }
        if let Some(operator) = partial.operator() {
            spans.push(Span::styled(operator, self.theme.field_style(Field::Operator)));
            spans.push(Span::raw(" "));
        }

        let field = self.state.field();
        if self.state.input().is_empty() {
            return (spans, Some(Span::styled(field.placeholder(), self.theme.placeholder_style())));
        }

        spans.push(Span::styled(self.state.input(), self.theme.field_style(field)));
        (spans, None)
    }

    /// Column offset of the caret within the line
    fn caret_column(&self) -> u16 {
        let (spans, _) = self.spans();
        u16::try_from(Line::from(spans).width()).unwrap_or(u16::MAX)
    }

    fn block(&self) -> Block<'static> {
        Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.focused_border_style())
            .title(" Filter ")
    }

    /// Horizontal scroll needed to keep the caret inside `inner`
    fn scroll(&self, inner: Rect) -> u16 {
        self.caret_column()
            .saturating_sub(inner.width.saturating_sub(1))
    }

    /// Screen position of the caret when rendered in `area`
    #[must_use]
    pub fn caret(&self, area: Rect) -> Position {
        let inner = self.block().inner(area);
        let column = self.caret_column() - self.scroll(inner);
        Position::new(inner.x.saturating_add(column), inner.y)
    }
}

impl Widget for PillBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = self.block();
        let inner = block.inner(area);
        block.render(area, buf);

        let scroll = self.scroll(inner);
        let (mut spans, placeholder) = self.spans();
        spans.extend(placeholder);

        Paragraph::new(Line::from(spans))
            .scroll((0, scroll))
            .render(inner, buf);
    }
}
