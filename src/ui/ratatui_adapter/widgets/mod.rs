//! Ratatui widgets for the builder TUI
//!
//! Custom widgets for rendering the builder screen.

mod help_bar;
mod pill_bar;
mod suggestion_list;

pub use help_bar::{HelpBar, KeyHint};
pub use pill_bar::PillBar;
pub use suggestion_list::SuggestionList;
