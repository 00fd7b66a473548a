//! User confirmation handling for the command-line layer.

use dialoguer::Confirm;

use crate::error::{Error, Result};

/// Asks the operator questions before anything is written.
pub trait Prompter {
    /// Asks a yes/no question.
    ///
    /// # Arguments
    /// * `skip_prompt` - Answer yes without asking
    /// * `prompt` - The question shown to the user
    fn confirm(&self, skip_prompt: bool, prompt: String) -> Result<bool>;
}

/// Interactive terminal prompts backed by dialoguer.
#[derive(Debug, Default)]
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for DialoguerPrompter {
    fn confirm(&self, skip_prompt: bool, prompt: String) -> Result<bool> {
        if skip_prompt {
            return Ok(true);
        }
        Confirm::new()
            .with_prompt(prompt)
            .default(true)
            .interact()
            .map_err(|e| Error::PromptError(e.to_string()))
    }
}
