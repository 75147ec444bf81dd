//! Prompts
//!
//! Manual-entry fallbacks for when extraction finds nothing usable.
//! Uses the `dialoguer` crate for input handling.

use anyhow::Result;
use colored::Colorize;
use dialoguer::Input;

/// Prompt the user for a required value.
/// Repeats until a non-empty value is entered.
fn prompt_required(label: String) -> Result<String> {
    loop {
        let value: String = Input::new()
            .with_prompt(format!("  {} {}", "\u{2192}".cyan(), label.white()))
            .allow_empty(true)
            .interact_text()?;

        let trimmed = value.trim().to_string();
        if !trimmed.is_empty() {
            return Ok(trimmed);
        }
        println!("{}", "  This field is required.".yellow());
    }
}

/// Manually enter the one-line description for the page.
pub fn input_one_liner() -> Result<String> {
    prompt_required("Manually input a one-line description for the page".to_string())
}

/// Manually enter a title for `option`.
pub fn input_option_title(option: &str) -> Result<String> {
    prompt_required(format!("Manually enter an option title for {}", option))
}

/// Manually enter a description for `option`.
pub fn input_option_description(option: &str) -> Result<String> {
    prompt_required(format!("Manually enter an option description for {}", option))
}
