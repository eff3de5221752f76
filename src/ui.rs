// UI layer: interactive prompting via `dialoguer` and a spinner helper
// via `indicatif`. Prompting sits behind a trait so handlers can be
// driven by a stub in tests instead of a real terminal.

use std::time::Duration;

use dialoguer::{Confirm, Input};
use indicatif::{ProgressBar, ProgressStyle};

use crate::api::CliError;

/// Source of interactive input. Handlers take `&dyn Prompter` so tests
/// can queue canned answers.
pub trait Prompter {
    fn input(&self, prompt: &str) -> Result<String, CliError>;
    fn confirm(&self, prompt: &str) -> Result<bool, CliError>;
}

/// Terminal-backed prompter used by the binary.
pub struct TermPrompter;

impl Prompter for TermPrompter {
    fn input(&self, prompt: &str) -> Result<String, CliError> {
        Ok(Input::new().with_prompt(prompt).interact_text()?)
    }

    fn confirm(&self, prompt: &str) -> Result<bool, CliError> {
        Ok(Confirm::new().with_prompt(prompt).interact()?)
    }
}

/// Spinner shown while a slow request (register, avatar upload) is in
/// flight. Draws nothing when stderr is not a terminal.
pub fn spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::with_template("{spinner} {msg}").unwrap());
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}
