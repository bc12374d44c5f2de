//! Ratatui-based builder adapter
//!
//! Renders a `FilterBuilder` session with ratatui widgets and feeds it
//! crossterm events through the configured keymap.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │                 PillApp                     │
//! │   (terminal setup, draw loop, cleanup)      │
//! └────────────────────┬────────────────────────┘
//!                      │
//!        ┌─────────────┼─────────────┐
//!        ▼             ▼             ▼
//! ┌────────────┐ ┌───────────┐ ┌───────────┐
//! │   Keymap   │ │  Ratatui  │ │ Crossterm │
//! │ (keybinds) │ │ (widgets) │ │  (events) │
//! └────────────┘ └───────────┘ └───────────┘
//! ```

mod app;
mod events;
mod theme;
pub mod widgets;

pub use app::PillApp;
pub use events::{LoopSignal, handle_key, handle_mouse, handle_paste};
pub use theme::Theme;
