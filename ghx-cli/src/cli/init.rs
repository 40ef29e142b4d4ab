//! # Init Command
//!
//! Writes the default ghx configuration file.

use std::process::ExitCode;

use anyhow::Result;
use ghx_core::output::format_url;
use ghx_core::{get_config_dirs, print_info, print_success};

pub(crate) fn handle_init_command() -> Result<ExitCode> {
  let config_dirs = get_config_dirs()?;
  let config_path = config_dirs.config_path();

  if config_dirs.init()? {
    print_success(&format!("Wrote default settings to {}", config_path.display()));
  } else {
    print_info(&format!("Settings already exist at {}", config_path.display()));
  }
  print_info(&format!(
    "Set api_base_url to use GitHub Enterprise, e.g. {}",
    format_url("https://github.example.com/api/v3")
  ));

  Ok(ExitCode::SUCCESS)
}
