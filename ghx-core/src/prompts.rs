//! # Prompts Module
//!
//! Provides the dialoguer theme and the interactive questions ghx asks when a
//! one-shot command is missing its username.

use anyhow::{Context, Result};
use console::Style;
use dialoguer::Input;
use dialoguer::theme::ColorfulTheme;

use crate::consts::USERNAME_PLACEHOLDER;

/// Returns a custom dialoguer theme matching ghx's color palette.
///
/// Features:
/// - Cyan bold prompt text
/// - Green `❯` prefix on active item
/// - Green highlight on active item text
pub fn ghx_theme() -> ColorfulTheme {
  ColorfulTheme {
    prompt_style: Style::new().cyan().bold(),
    active_item_prefix: Style::new().green().apply_to("❯ ".to_string()),
    active_item_style: Style::new().green(),
    ..ColorfulTheme::default()
  }
}

/// Ask for a GitHub username.
///
/// Empty answers are accepted so the lookup itself reports the validation
/// message.
pub fn prompt_username() -> Result<String> {
  Input::<String>::with_theme(&ghx_theme())
    .with_prompt(USERNAME_PLACEHOLDER)
    .allow_empty(true)
    .interact_text()
    .context("Failed to read username")
}
