//! Scripted user input for testing
//!
//! Replays a fixed list of answers, in order, to whatever prompts are shown.

use super::input::{InputError, Result, UserInput};
use std::collections::VecDeque;
use std::sync::Mutex;

/// One scripted answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    /// Pick the item at this position
    Select(usize),
    /// Answer a yes/no question
    Confirm(bool),
    /// Press ESC
    Cancel,
}

/// User input that replays predetermined answers
///
/// Useful for driving interactive commands in tests. Every prompt shown is
/// recorded so tests can check what the user was asked.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    answers: Mutex<VecDeque<Answer>>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedInput {
    /// Create a scripted input from answers in the order they will be given
    #[must_use]
    pub fn new(answers: impl IntoIterator<Item = Answer>) -> Self {
        Self {
            answers: Mutex::new(answers.into_iter().collect()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Prompts shown so far
    #[must_use]
    pub fn prompts(&self) -> Vec<String> {
        self.prompts
            .lock()
            .map(|prompts| prompts.clone())
            .unwrap_or_default()
    }

    /// Number of answers not yet consumed
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.answers.lock().map(|a| a.len()).unwrap_or_default()
    }

    fn next(&self, prompt: &str) -> Result<Answer> {
        if let Ok(mut prompts) = self.prompts.lock() {
            prompts.push(prompt.to_string());
        }
        self.answers
            .lock()
            .map_err(|_| InputError::Invalid("scripted input poisoned".to_string()))?
            .pop_front()
            .ok_or(InputError::Exhausted)
    }
}

impl UserInput for ScriptedInput {
    fn prompt_confirm(&self, prompt: &str, _default: bool) -> Result<Option<bool>> {
        match self.next(prompt)? {
            Answer::Confirm(yes) => Ok(Some(yes)),
            Answer::Cancel => Ok(None),
            other => Err(InputError::Invalid(format!(
                "expected confirmation for '{prompt}', got {other:?}"
            ))),
        }
    }

    fn prompt_select(
        &self,
        prompt: &str,
        items: &[String],
        _default: Option<usize>,
    ) -> Result<Option<usize>> {
        match self.next(prompt)? {
            Answer::Select(index) if index < items.len() => Ok(Some(index)),
            Answer::Select(index) => Err(InputError::Invalid(format!(
                "selection {index} out of {} items for '{prompt}'",
                items.len()
            ))),
            Answer::Cancel => Ok(None),
            other => Err(InputError::Invalid(format!(
                "expected selection for '{prompt}', got {other:?}"
            ))),
        }
    }
}
