//! Script command - replay keys and text through the builder
//!
//! A token wrapped in angle brackets names a key using the same syntax as the
//! `[keybinds]` table (`<enter>`, `<shift-enter>`, `<ctrl-s>`). Every other
//! token is typed one character at a time; consecutive text tokens are
//! joined by a space, so `Not Equals` types `Not Equals`.

use super::print_outcome;
use crate::{
    PillError,
    builder::FilterBuilder,
    config::OutputFormat,
    keybinds::{Keymap, parse_key_string},
    terms::Term,
    ui::ratatui_adapter::{LoopSignal, handle_key},
};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

type Result<T> = std::result::Result<T, PillError>;

/// One replayed input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// A key press
    Key(KeyEvent),
    /// Text to type
    Text(String),
}

/// Parse script tokens into steps
///
/// # Errors
///
/// Returns `PillError::InvalidInput` for a bracketed token that is not a key.
pub fn parse_tokens(tokens: &[String]) -> Result<Vec<Step>> {
    let mut steps = Vec::with_capacity(tokens.len());
    let mut after_text = false;

    for token in tokens {
        if let Some(name) = token.strip_prefix('<').and_then(|t| t.strip_suffix('>'))
            && !name.is_empty()
        {
            let key = parse_key_string(name)
                .ok_or_else(|| PillError::InvalidInput(format!("unknown key '{token}'")))?;
            steps.push(Step::Key(key));
            after_text = false;
        } else {
            let text = if after_text {
                format!(" {token}")
            } else {
                token.clone()
            };
            steps.push(Step::Text(text));
            after_text = true;
        }
    }

    Ok(steps)
}

/// Replay steps
///
/// Stops at the first submit or quit. A script that runs out of steps
/// submits whatever has been committed; a quit returns `None`.
pub fn replay(builder: &mut FilterBuilder, keymap: &Keymap, steps: &[Step]) -> Option<Vec<Term>> {
    for step in steps {
        let keys: Vec<KeyEvent> = match step {
            Step::Key(key) => vec![*key],
            Step::Text(text) => text
                .chars()
                .map(|c| KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
                .collect(),
        };

        for key in keys {
            match handle_key(builder, keymap, key) {
                LoopSignal::Continue => {}
                LoopSignal::Submit(terms) => return Some(terms),
                LoopSignal::Quit => {
                    tracing::debug!("script quit");
                    return None;
                }
            }
        }
    }

    tracing::debug!("script ended without submit");
    Some(builder.state().submit())
}

/// Execute the script command
///
/// # Errors
///
/// Returns `PillError::InvalidInput` for bad key tokens, or a JSON error if
/// the output cannot be serialized.
pub fn execute(
    mut builder: FilterBuilder,
    keymap: &Keymap,
    tokens: &[String],
    format: OutputFormat,
    quiet: bool,
) -> Result<()> {
    let steps = parse_tokens(tokens)?;
    let submitted = replay(&mut builder, keymap, &steps);
    print_outcome(submitted.as_deref(), format, quiet)
}
