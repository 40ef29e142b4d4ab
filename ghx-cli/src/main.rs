//! # ghx CLI Entry Point
//!
//! The main entry point for the ghx command-line tool, a terminal explorer
//! for GitHub profiles and their public repositories.

use std::fs::{self, OpenOptions};
use std::io;
use std::process::ExitCode;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use ghx_cli::cli::{self, handle_cli};
use ghx_core::get_config_dirs;
use tracing::debug;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> Result<ExitCode> {
  // Parse CLI arguments using the derive-based implementation
  let cmd = cli::Cli::parse();

  // Set up tracing based on verbosity level
  let level = match cmd.verbose {
    0 => tracing::Level::WARN,  // Default: warnings and errors
    1 => tracing::Level::INFO,  // -v: info, warnings, and errors
    2 => tracing::Level::DEBUG, // -vv: debug, info, warnings, and errors
    _ => tracing::Level::TRACE, // -vvv or more: trace and everything else
  };

  init_tracing(level, cmd.is_interactive())?;
  debug!("Tracing initialized with level: {}", level);

  handle_cli(cmd)
}

/// The interactive shell owns the terminal, so its logs go to a file in the
/// cache directory instead of stderr.
fn init_tracing(level: tracing::Level, interactive: bool) -> Result<()> {
  let filter = EnvFilter::from_default_env().add_directive(level.into());

  if interactive {
    let config_dirs = get_config_dirs()?;
    fs::create_dir_all(config_dirs.cache_dir()).context("Failed to create cache directory")?;

    let log_path = config_dirs.log_path();
    let log_file = OpenOptions::new()
      .create(true)
      .append(true)
      .open(&log_path)
      .with_context(|| format!("Failed to open log file {}", log_path.display()))?;

    tracing_subscriber::registry()
      .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(log_file)))
      .with(filter)
      .init();
  } else {
    tracing_subscriber::registry()
      .with(fmt::layer().with_writer(io::stderr))
      .with(filter)
      .init();
  }

  Ok(())
}
