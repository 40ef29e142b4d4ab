//! # Command Line Interface
//!
//! Defines the CLI structure and command handlers for ghx: the interactive
//! shell, one-shot profile and repository lookups, configuration setup and
//! shell completions.

mod completion;
mod init;
pub mod repos;
mod ui;
pub mod user;

use std::process::ExitCode;

use anyhow::Result;
use clap::builder::Styles;
use clap::builder::styling::AnsiColor;
use clap::{ArgAction, Parser, Subcommand};
use ghx_core::{ColorMode, DateStyle, Settings, get_config_dirs};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

/// Top-level CLI command for ghx
#[derive(Parser)]
#[command(name = "ghx")]
#[command(display_name = "🔭 ghx")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(about = "Look up GitHub profiles and browse their public repositories")]
#[command(
  long_about = "ghx is a terminal explorer for GitHub.\n\n\
        Look up a user's profile, then browse their most recently updated public\n\
        repositories and open any of them in your browser. Run without a command\n\
        to start the interactive shell."
)]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(propagate_version = true)]
#[command(disable_help_subcommand = true)]
#[command(max_term_width = 120)]
#[command(styles = Styles::styled()
    .header(AnsiColor::BrightGreen.on_default().bold().underline())
    .usage(AnsiColor::Green.on_default().bold())  // Make usage line stand out
    .literal(AnsiColor::BrightGreen.on_default().bold())  // Command names, flags bold
    .placeholder(AnsiColor::BrightWhite.on_default().italic())
    .valid(AnsiColor::Green.on_default())
    .invalid(AnsiColor::BrightRed.on_default().bold())
)]
pub struct Cli {
  /// Sets the level of verbosity (can be used multiple times)
  #[arg(
    short = 'v',
    long = "verbose",
    action = ArgAction::Count,
    global = true,
    long_help = "Sets the level of verbosity for tracing and logging output.\n\n\
             -v: Show info level messages\n\
             -vv: Show debug level messages\n\
             -vvv: Show trace level messages\n\n\
             While the interactive shell is running, logs are written to\n\
             ghx.log in the cache directory."
  )]
  pub verbose: u8,

  /// Controls when colored output is used
  #[arg(
    long,
    value_enum,
    ignore_case = true,
    global = true,
    default_value_t = ColorMode::Auto,
  )]
  pub colors: ColorMode,

  /// How repository dates are written, overriding the configured style
  #[arg(long, value_enum, global = true)]
  pub date_style: Option<DateStyle>,

  /// Username to look up when starting the interactive shell
  #[arg(value_name = "USERNAME")]
  pub username: Option<String>,

  /// Subcommands
  #[command(subcommand)]
  pub command: Option<Commands>,
}

/// Subcommands for ghx
#[derive(Subcommand)]
pub enum Commands {
  /// Generate shell completions
  #[command(long_about = "Generates shell completion scripts for ghx commands.\n\n\
            This command generates completion scripts that provide tab completion for ghx\n\
            commands and options in your shell. Supported shells include bash, zsh, and fish.")]
  Completion(completion::CompletionArgs),

  /// Initialize ghx configuration
  #[command(long_about = "Writes the default configuration file.\n\n\
            The file lets you point ghx at another API root (for example a GitHub\n\
            Enterprise server) and choose how repository dates are written.\n\
            An existing file is left untouched.")]
  Init,

  /// List a user's public repositories
  #[command(long_about = "Lists a user's public repositories, most recently updated first.\n\n\
            At most 50 repositories are shown. Use --open to open one of them in\n\
            your browser.")]
  #[command(alias = "r")]
  Repos(repos::ReposArgs),

  /// Start the interactive shell
  #[command(long_about = "Starts the interactive terminal shell.\n\n\
            With a username, the shell opens on the search screen with that lookup\n\
            already running.")]
  Ui(ui::UiArgs),

  /// Look up a GitHub profile
  #[command(long_about = "Looks up a GitHub profile and prints its card.\n\n\
            When no username is given you will be prompted for one. Use --repos to\n\
            continue to the user's repository list.")]
  #[command(alias = "u")]
  User(user::UserArgs),
}

impl Cli {
  /// Whether this invocation takes over the terminal
  pub const fn is_interactive(&self) -> bool {
    matches!(self.command, None | Some(Commands::Ui(_)))
  }
}

pub fn handle_cli(cli: Cli) -> Result<ExitCode> {
  // Set global color override based on --colors argument
  match cli.colors {
    ColorMode::Always | ColorMode::Yes => owo_colors::set_override(true),
    ColorMode::Never | ColorMode::No => owo_colors::set_override(false),
    ColorMode::Auto => {
      // Let owo_colors use its default auto-detection
    }
  }

  let date_style = cli.date_style;
  match cli.command {
    Some(Commands::Completion(completion)) => completion::handle_completion_command(completion),
    Some(Commands::Init) => init::handle_init_command(),
    Some(Commands::Repos(repos)) => repos::handle_repos_command(repos, &load_settings(date_style)?),
    Some(Commands::Ui(ui)) => ui::handle_ui_command(ui, &load_settings(date_style)?),
    Some(Commands::User(user)) => user::handle_user_command(user, &load_settings(date_style)?),
    None => ui::handle_ui_command(ui::UiArgs { username: cli.username }, &load_settings(date_style)?),
  }
}

/// Load the settings file and apply command-line overrides
fn load_settings(date_style: Option<DateStyle>) -> Result<Settings> {
  let mut settings = Settings::load(&get_config_dirs()?)?;
  if let Some(date_style) = date_style {
    settings.date_style = date_style;
  }

  debug!(api_base_url = %settings.api_base_url, date_style = ?settings.date_style, "Loaded settings");
  Ok(settings)
}

/// Spinner shown while a one-shot request is in flight
pub(crate) fn spinner(message: String) -> ProgressBar {
  let spinner = ProgressBar::new_spinner();
  spinner.set_style(ProgressStyle::default_spinner().tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏ "));
  spinner.set_message(message);
  spinner.enable_steady_tick(std::time::Duration::from_millis(80));
  spinner
}
