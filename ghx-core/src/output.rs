//! # Output Formatting
//!
//! Provides formatted output functions with colors, emojis, and consistent
//! styling for the one-shot commands.

use owo_colors::{OwoColorize, Stream, Style};

use crate::colors::{DEFAULT_LANGUAGE_COLOR, language_color, to_rgb};

/// Enum representing different color modes for output
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
  /// Enable colored output
  Yes,
  /// Enable colored output (alias for Yes)
  Always,
  /// Automatically detect if colors should be used based on terminal
  /// capabilities
  Auto,
  /// Disable colored output
  No,
  /// Disable colored output (alias for No)
  Never,
}

/// Helper function to safely get an emoji or fallback to a default character
pub fn get_emoji_or_default(name: &str, default: &str) -> String {
  match emojis::get_by_shortcode(name) {
    Some(emoji) => emoji.to_string(),
    None => default.to_string(),
  }
}

/// Print a success message
pub fn print_success(message: &str) {
  let check = get_emoji_or_default("check_mark", "✓");
  println!(
    "{} {}",
    check.if_supports_color(Stream::Stdout, |text| text.style(Style::new().green().bold())),
    message
  );
}

/// Print an error message
pub fn print_error(message: &str) {
  let cross = get_emoji_or_default("cross_mark", "✗");
  eprintln!(
    "{} {}",
    cross.if_supports_color(Stream::Stderr, |text| text.style(Style::new().red().bold())),
    message
  );
}

/// Print a warning message
pub fn print_warning(message: &str) {
  let warning = get_emoji_or_default("warning", "⚠");
  println!(
    "{} {}",
    warning.if_supports_color(Stream::Stdout, |text| text.style(Style::new().yellow().bold())),
    message
  );
}

/// Print an info message
pub fn print_info(message: &str) {
  let info = get_emoji_or_default("information", "ℹ");
  println!(
    "{} {}",
    info.if_supports_color(Stream::Stdout, |text| text.style(Style::new().blue().bold())),
    message
  );
}

/// Print a section header
pub fn print_header(header: &str) {
  println!(
    "\n{}",
    header.if_supports_color(Stream::Stdout, |text| text.style(Style::new().blue().bold()))
  );
}

/// Format a GitHub login
pub fn format_login(login: &str) -> String {
  format!("@{login}")
    .if_supports_color(Stream::Stdout, |text| text.bright_cyan())
    .to_string()
}

/// Format a repository name
pub fn format_repo_name(name: &str) -> String {
  name
    .if_supports_color(Stream::Stdout, |text| text.style(Style::new().bright_cyan().bold()))
    .to_string()
}

/// Format a counter
pub fn format_count(count: u64) -> String {
  count.if_supports_color(Stream::Stdout, |n| n.bold()).to_string()
}

/// Format a language name in its palette color
pub fn format_language(language: &str) -> String {
  let (r, g, b) = to_rgb(language_color(language))
    .or_else(|| to_rgb(DEFAULT_LANGUAGE_COLOR))
    .unwrap_or((0x66, 0x7e, 0xea));
  format!("● {language}")
    .if_supports_color(Stream::Stdout, |text| text.truecolor(r, g, b))
    .to_string()
}

/// Format a timestamp
pub fn format_timestamp(timestamp: &str) -> String {
  timestamp
    .if_supports_color(Stream::Stdout, |text| text.yellow())
    .to_string()
}

/// Format a link
pub fn format_url(url: &str) -> String {
  url
    .if_supports_color(Stream::Stdout, |text| text.style(Style::new().bright_black().underline()))
    .to_string()
}
