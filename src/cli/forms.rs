//! Thin wrappers around dialoguer prompts sharing one theme.

use dialoguer::{theme::ColorfulTheme, Confirm, Input, MultiSelect, Select};

use super::shell::CliError;

pub fn prompt_text(theme: &ColorfulTheme, prompt: &str) -> Result<String, CliError> {
    Ok(Input::<String>::with_theme(theme)
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()?)
}

/// Prompts for an amount; a value that does not parse comes back as `None`
/// so the caller can fall through to the model's silent rejection.
pub fn prompt_amount(theme: &ColorfulTheme, prompt: &str) -> Result<Option<f64>, CliError> {
    let raw = prompt_text(theme, prompt)?;
    Ok(raw.trim().parse::<f64>().ok())
}

pub fn select(
    theme: &ColorfulTheme,
    prompt: &str,
    items: &[&str],
) -> Result<Option<usize>, CliError> {
    if items.is_empty() {
        return Ok(None);
    }
    Ok(Some(
        Select::with_theme(theme)
            .with_prompt(prompt)
            .items(items)
            .default(0)
            .interact()?,
    ))
}

pub fn multi_select(
    theme: &ColorfulTheme,
    prompt: &str,
    items: &[&str],
) -> Result<Vec<usize>, CliError> {
    if items.is_empty() {
        return Ok(Vec::new());
    }
    Ok(MultiSelect::with_theme(theme)
        .with_prompt(prompt)
        .items(items)
        .interact()?)
}

pub fn confirm(theme: &ColorfulTheme, prompt: &str, default: bool) -> Result<bool, CliError> {
    Ok(Confirm::with_theme(theme)
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
