//! Listener prompts
//!
//! The find loop only ever asks two kinds of question: pick one of a few
//! answers, or confirm a destructive step. [`UserInput`] covers exactly
//! those; [`DialoguerInput`] asks them in the terminal.

use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Select};
use std::io;

/// Result type for prompts
pub type Result<T> = std::result::Result<T, InputError>;

/// Why a prompt produced no answer
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// Terminal could not be read or written
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Scripted input ran out of answers
    #[error("No more scripted answers")]
    Exhausted,

    /// Answer does not fit the question
    #[error("Invalid input: {0}")]
    Invalid(String),
}

impl From<dialoguer::Error> for InputError {
    fn from(err: dialoguer::Error) -> Self {
        match err {
            dialoguer::Error::IO(e) => Self::Io(e),
        }
    }
}

/// Asks the listener questions
///
/// Both prompts return `Ok(None)` when the listener backs out with ESC.
pub trait UserInput: Send + Sync {
    /// Yes/no question, `default` preselected
    ///
    /// # Errors
    /// Returns `InputError` if no answer could be read.
    fn prompt_confirm(&self, prompt: &str, default: bool) -> Result<Option<bool>>;

    /// Pick one of `items`; returns its position
    ///
    /// # Errors
    /// Returns `InputError` if no answer could be read.
    fn prompt_select(
        &self,
        prompt: &str,
        items: &[String],
        default: Option<usize>,
    ) -> Result<Option<usize>>;
}

/// Terminal prompts via dialoguer
///
/// ```no_run
/// use findplace::ui::input::{DialoguerInput, UserInput};
///
/// let input = DialoguerInput::new();
/// let answers = ["Yes".to_string(), "No".to_string()];
/// if input.prompt_select("Heard 07.mp3?", &answers, Some(0)).unwrap() == Some(0) {
///     println!("Moving later");
/// }
/// ```
#[derive(Default)]
pub struct DialoguerInput {
    theme: ColorfulTheme,
}

impl DialoguerInput {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl UserInput for DialoguerInput {
    fn prompt_confirm(&self, prompt: &str, default: bool) -> Result<Option<bool>> {
        Ok(Confirm::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(default)
            .interact_opt()?)
    }

    fn prompt_select(
        &self,
        prompt: &str,
        items: &[String],
        default: Option<usize>,
    ) -> Result<Option<usize>> {
        let mut select = Select::with_theme(&self.theme).with_prompt(prompt).items(items);
        if let Some(index) = default {
            select = select.default(index);
        }
        Ok(select.interact_opt()?)
    }
}
