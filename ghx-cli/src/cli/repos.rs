//! # Repositories Command
//!
//! Prints a user's public repositories as a table, most recently updated
//! first, and optionally opens one of them in the browser.

use std::process::ExitCode;

use anyhow::Result;
use clap::Args;
use ghx_core::output::{
  format_count, format_language, format_login, format_repo_name, format_timestamp, format_url, print_header,
};
use ghx_core::{FetchState, RepositoryCard, RepositoryList, Settings, print_error, print_info, print_warning};
use ghx_gh::GitHubClient;
use tabled::settings::Style;
use tabled::{Table, Tabled};
use tokio::runtime::Runtime;

use super::spinner;

/// Command for listing a user's repositories
#[derive(Args)]
pub struct ReposArgs {
  /// GitHub username whose repositories to list
  #[arg(value_name = "USERNAME")]
  pub username: String,

  /// Open the named repository in the browser
  #[arg(long, value_name = "NAME")]
  pub open: Option<String>,
}

/// One row of the repository table
#[derive(Tabled)]
struct RepositoryRow {
  #[tabled(rename = "Name")]
  name: String,
  #[tabled(rename = "Language")]
  language: String,
  #[tabled(rename = "★")]
  stars: u64,
  #[tabled(rename = "Forks")]
  forks: u64,
  #[tabled(rename = "Updated")]
  updated: String,
  #[tabled(rename = "Description")]
  description: String,
}

impl From<RepositoryCard> for RepositoryRow {
  fn from(card: RepositoryCard) -> Self {
    Self {
      name: format_repo_name(&card.name),
      language: card
        .language
        .map(|(language, _)| format_language(&language))
        .unwrap_or_default(),
      stars: card.stars,
      forks: card.forks,
      updated: format_timestamp(&card.updated),
      description: card.description.unwrap_or_default(),
    }
  }
}

pub(crate) fn handle_repos_command(repos: ReposArgs, settings: &Settings) -> Result<ExitCode> {
  let rt = Runtime::new()?;
  let client = settings.client();
  let list = RepositoryList::new(repos.username.trim(), None);

  show_repositories(&rt, &client, list, settings, repos.open.as_deref())
}

/// Load `list`, print it and handle `--open`
pub(crate) fn show_repositories(
  rt: &Runtime,
  client: &GitHubClient,
  mut list: RepositoryList,
  settings: &Settings,
  open: Option<&str>,
) -> Result<ExitCode> {
  let progress = spinner(format!("Loading repositories of {}", list.username()));
  rt.block_on(list.load(client));
  progress.finish_and_clear();

  if let FetchState::Error(message) = list.state() {
    print_error(message);
    return Ok(ExitCode::FAILURE);
  }

  print_header(&list.header_title());
  if let Some(profile) = list.profile() {
    println!("{}", format_login(&profile.login));
  }

  if list.is_empty_state() {
    print_info(list.empty_message());
  } else {
    if let Some(summary) = list.summary_line() {
      println!("{summary}\n");
    }
    println!("{}", render_table(list.cards(settings.date_style)));
  }

  let Some(name) = open else {
    return Ok(ExitCode::SUCCESS);
  };

  match find_repository(&list, name) {
    Some(repo) => {
      if let Err(e) = list.open_repository(repo) {
        print_warning(&format!("{e:#}"));
      } else {
        print_info(&format!(
          "Opened {} ({} stars)",
          format_url(&repo.html_url),
          format_count(repo.star_count)
        ));
      }
      Ok(ExitCode::SUCCESS)
    }
    None => {
      print_error(&format!("No repository named '{name}' in this listing"));
      Ok(ExitCode::FAILURE)
    }
  }
}

fn render_table(cards: Vec<RepositoryCard>) -> String {
  let rows: Vec<RepositoryRow> = cards.into_iter().map(RepositoryRow::from).collect();
  Table::new(rows).with(Style::sharp()).to_string()
}

/// Repository called `name`, ignoring ASCII case
fn find_repository<'a>(list: &'a RepositoryList, name: &str) -> Option<&'a ghx_gh::RepositorySummary> {
  list
    .repositories()
    .iter()
    .find(|repo| repo.name.eq_ignore_ascii_case(name))
}
