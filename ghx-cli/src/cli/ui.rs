//! # UI Command
//!
//! Starts the interactive terminal shell.

use std::process::ExitCode;

use anyhow::Result;
use clap::Args;
use ghx_core::Settings;

use crate::tui;

/// Command for starting the interactive shell
#[derive(Args)]
pub struct UiArgs {
  /// Username to look up right away
  #[arg(value_name = "USERNAME")]
  pub username: Option<String>,
}

pub(crate) fn handle_ui_command(ui: UiArgs, settings: &Settings) -> Result<ExitCode> {
  tui::run(settings, ui.username)?;
  Ok(ExitCode::SUCCESS)
}
