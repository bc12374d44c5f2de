//! Ratatui-based builder screen
//!
//! Owns the terminal for the duration of a session: a pill bar with the
//! input, the suggestion surface underneath it, and a help bar.

use super::events::{LoopSignal, poll_and_handle};
use super::theme::Theme;
use super::widgets::{HelpBar, KeyHint, PillBar, SuggestionList};
use crate::builder::FilterBuilder;
use crate::keybinds::Keymap;
use crate::terms::Term;
use crate::ui::error::Result;
use crossterm::{
    event::{DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
};
use std::io::{self, Stdout};
use std::time::Duration;

/// Rows the suggestion surface may take, borders included
const SURFACE_HEIGHT: u16 = 10;

/// Interactive builder running in the alternate screen
pub struct PillApp {
    keymap: Keymap,
    hints: Vec<KeyHint>,
    theme: Theme,
}

impl PillApp {
    /// Create a builder screen using the given keymap
    #[must_use]
    pub fn new(keymap: Keymap) -> Self {
        let hints = KeyHint::from_keymap(&keymap);
        Self {
            keymap,
            hints,
            theme: Theme::default(),
        }
    }

    /// Setup terminal for TUI
    fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture, EnableBracketedPaste)?;
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend).map_err(Into::into)
    }

    /// Cleanup terminal after TUI
    fn cleanup_terminal() -> Result<()> {
        disable_raw_mode()?;
        execute!(
            io::stdout(),
            DisableBracketedPaste,
            DisableMouseCapture,
            LeaveAlternateScreen
        )?;
        Ok(())
    }

    /// Split the screen into pill bar, surface and help bar
    fn layout(area: Rect, surface_open: bool) -> (Rect, Option<Rect>, Rect) {
        let surface = if surface_open { SURFACE_HEIGHT } else { 0 };
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),       // Pill bar
                Constraint::Length(surface), // Suggestions
                Constraint::Min(0),          // Spacer
                Constraint::Length(1),       // Help bar
            ])
            .split(area);

        let list = (surface_open && chunks[1].height > 2).then_some(chunks[1]);
        (chunks[0], list, chunks[3])
    }

    /// Draw one frame and place the caret on the input
    fn render(&self, frame: &mut Frame, builder: &FilterBuilder) {
        let state = builder.state();
        let (bar_area, list_area, help_area) = Self::layout(frame.area(), state.surface_open());

        let pill_bar = PillBar::new(state, &self.theme);
        let caret = pill_bar.caret(bar_area);
        frame.render_widget(pill_bar, bar_area);

        if let Some(list_area) = list_area {
            frame.render_widget(SuggestionList::new(state, &self.theme), list_area);
        }

        frame.render_widget(HelpBar::new(&self.hints, &self.theme), help_area);
        frame.set_cursor_position(caret);
    }

    fn run_loop(
        &self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
        builder: &mut FilterBuilder,
    ) -> Result<Option<Vec<Term>>> {
        loop {
            let mut list_area = None;
            terminal.draw(|frame| {
                list_area = Self::layout(frame.area(), builder.state().surface_open()).1;
                self.render(frame, builder);
            })?;

            let signal = poll_and_handle(
                builder,
                &self.keymap,
                list_area,
                &self.theme,
                Duration::from_millis(50),
            )?;

            match signal {
                LoopSignal::Continue => {}
                LoopSignal::Submit(terms) => return Ok(Some(terms)),
                LoopSignal::Quit => return Ok(None),
            }
        }
    }

    /// Run the builder until the user submits or quits
    ///
    /// Returns the submitted terms, or `None` when the user quit.
    ///
    /// # Errors
    ///
    /// Returns `UiError` if the terminal cannot be set up or drawn to.
    pub fn run(&self, builder: &mut FilterBuilder) -> Result<Option<Vec<Term>>> {
        let mut terminal = Self::setup_terminal()?;
        tracing::debug!("terminal ready");

        // Run the event loop, ensuring cleanup happens
        let result = self.run_loop(&mut terminal, builder);

        // Cleanup terminal (always, even on error)
        if let Err(e) = Self::cleanup_terminal() {
            tracing::warn!(error = %e, "terminal cleanup failed");
        }

        result
    }
}
