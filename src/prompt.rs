//! Interactive input capability.
//!
//! Flows ask questions through the [`Prompt`] trait; the production
//! implementation wraps `dialoguer`, and tests script the answers.

use dialoguer::{Input, Select};

use crate::error::Result;

pub trait Prompt {
    /// Free-text question with a default accepted on empty input.
    fn input(&self, question: &str, default: &str) -> Result<String>;

    /// Choice between fixed options; returns the selected index.
    /// Anything outside `choices` is unrepresentable by construction.
    fn select(&self, question: &str, choices: &[&str], default: usize) -> Result<usize>;
}

/// Prompt backed by `dialoguer`.
pub struct DialoguerPrompt;

impl Prompt for DialoguerPrompt {
    fn input(&self, question: &str, default: &str) -> Result<String> {
        Ok(Input::new()
            .with_prompt(question)
            .default(default.to_string())
            .show_default(true)
            .interact_text()?)
    }

    fn select(&self, question: &str, choices: &[&str], default: usize) -> Result<usize> {
        Ok(Select::new()
            .with_prompt(question)
            .items(choices)
            .default(default)
            .interact()?)
    }
}
