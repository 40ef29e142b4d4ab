//! # User Command
//!
//! One-shot profile lookup. Prints the profile card and, with `--repos`,
//! continues to the user's repository list with the profile forwarded.

use std::process::ExitCode;

use anyhow::Result;
use clap::Args;
use ghx_core::output::{format_count, format_login, format_url, print_header};
use ghx_core::prompts::prompt_username;
use ghx_core::{FetchState, ProfileLookup, RepositoryList, Route, Settings, print_error, profile_stats};
use ghx_gh::Profile;
use tokio::runtime::Runtime;

use super::repos::show_repositories;
use super::spinner;

/// Command for looking up a profile
#[derive(Args)]
pub struct UserArgs {
  /// GitHub username to look up; prompted for when omitted
  #[arg(value_name = "USERNAME")]
  pub username: Option<String>,

  /// Continue to the user's repository list
  #[arg(long)]
  pub repos: bool,
}

pub(crate) fn handle_user_command(user: UserArgs, settings: &Settings) -> Result<ExitCode> {
  let input = match user.username {
    Some(username) => username,
    None => prompt_username()?,
  };

  let rt = Runtime::new()?;
  let client = settings.client();
  let mut lookup = ProfileLookup::new();

  let progress = spinner(format!("Looking up {}", input.trim()));
  rt.block_on(lookup.lookup(&client, &input));
  progress.finish_and_clear();

  match lookup.state() {
    FetchState::Success(profile) => {
      print_header(profile.display_name());
      print!("{}", render_profile(profile));
    }
    FetchState::Error(message) => {
      print_error(message);
      return Ok(ExitCode::FAILURE);
    }
    FetchState::Idle | FetchState::Loading => return Ok(ExitCode::FAILURE),
  }

  if !user.repos {
    return Ok(ExitCode::SUCCESS);
  }

  match lookup.view_repositories() {
    Some(Route::Repositories { username, profile }) => {
      show_repositories(&rt, &client, RepositoryList::new(username, profile), settings, None)
    }
    _ => Ok(ExitCode::FAILURE),
  }
}

/// Profile card body: login, bio, counters and profile link
fn render_profile(profile: &Profile) -> String {
  let mut card = String::new();

  card.push_str(&format!("{}\n", format_login(&profile.login)));
  if let Some(bio) = profile.bio.as_deref().filter(|bio| !bio.trim().is_empty()) {
    card.push_str(&format!("{}\n", bio.trim()));
  }

  let stats: Vec<String> = profile_stats(profile)
    .iter()
    .map(|stat| format!("{} {}", format_count(stat.value), stat.label))
    .collect();
  card.push_str(&format!("\n{}\n", stats.join("   ")));

  if let Some(url) = &profile.html_url {
    card.push_str(&format!("{}\n", format_url(url)));
  }

  card
}
