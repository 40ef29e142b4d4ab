//! # Shell Completion
//!
//! Generates shell completion scripts (bash, zsh, fish) providing tab
//! completion for ghx commands and arguments.

use std::io::{self, Write};

use anyhow::Result;
use clap::CommandFactory;
use clap_complete::{Shell, generate};
use ghx_core::print_error;

use crate::cli::Cli;

/// Generate shell completions for the specified shell on stdout
pub fn generate_completions(shell: Shell) -> Result<()> {
  write_completions(shell, &mut io::stdout())
}

/// Generate shell completions for the specified shell into `out`
pub fn write_completions(shell: Shell, out: &mut impl Write) -> Result<()> {
  let mut cmd = Cli::command();
  let app_name = cmd.get_name().to_string();

  generate(shell, &mut cmd, app_name, out);

  Ok(())
}

/// Parse a shell string into a Shell enum
pub fn parse_shell(shell_str: &str) -> Result<Shell> {
  match shell_str.to_lowercase().as_str() {
    "bash" => Ok(Shell::Bash),
    "zsh" => Ok(Shell::Zsh),
    "fish" => Ok(Shell::Fish),
    _ => {
      print_error(&format!("Unsupported shell: {shell_str}"));
      println!("Supported shells: bash, zsh, fish");
      Err(anyhow::anyhow!("Unsupported shell: {}", shell_str))
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_parse_shell() {
    assert_eq!(parse_shell("bash").unwrap(), Shell::Bash);
    assert_eq!(parse_shell("ZSH").unwrap(), Shell::Zsh);
    assert_eq!(parse_shell("fish").unwrap(), Shell::Fish);
    assert!(parse_shell("powershell").is_err());
  }

  #[test]
  fn test_completions_mention_subcommands() {
    let mut out = Vec::new();
    write_completions(Shell::Bash, &mut out).unwrap();

    let script = String::from_utf8(out).unwrap();
    assert!(script.contains("ghx"));
    assert!(script.contains("repos"));
    assert!(script.contains("user"));
  }
}
