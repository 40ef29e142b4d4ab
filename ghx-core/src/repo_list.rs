//! # Repository List
//!
//! State behind the repositories screen of one user. The screen loads the
//! user's public repositories once per username, most recently updated first,
//! and renders each one as a [`RepositoryCard`].

use anyhow::Result;
use ghx_gh::{FetchError, GitHubClient, Profile, RepositorySummary};
use tracing::{debug, info};

use crate::browser::open_url;
use crate::colors::language_color;
use crate::consts::{MSG_LOAD_REPOS_FAILED, MSG_NO_REPOSITORIES};
use crate::dates::{DateStyle, format_local_date};
use crate::fetch_state::FetchState;
use crate::sequence::{RequestSequence, Ticket};

/// A repository listing request the caller should issue
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReposRequest {
  pub ticket: Ticket,
  pub username: String,
}

/// View state of the repositories screen
#[derive(Debug)]
pub struct RepositoryList {
  username: String,
  profile: Option<Profile>,
  state: FetchState<Vec<RepositorySummary>>,
  sequence: RequestSequence,
}

impl RepositoryList {
  /// Screen for `username`. A `profile` forwarded from the lookup screen is
  /// kept only when it belongs to the same user.
  pub fn new(username: impl Into<String>, profile: Option<Profile>) -> Self {
    let username = username.into();
    let profile = profile.filter(|p| p.login.eq_ignore_ascii_case(&username));

    Self {
      username,
      profile,
      state: FetchState::Idle,
      sequence: RequestSequence::new(),
    }
  }

  pub fn username(&self) -> &str {
    &self.username
  }

  pub const fn profile(&self) -> Option<&Profile> {
    self.profile.as_ref()
  }

  pub const fn state(&self) -> &FetchState<Vec<RepositorySummary>> {
    &self.state
  }

  /// Header text: the forwarded display name, or the bare username
  pub fn header_title(&self) -> String {
    match &self.profile {
      Some(profile) => format!("{}'s Repositories", profile.display_name()),
      None => format!("{}'s Repositories", self.username),
    }
  }

  /// "N repositories found", once the listing has loaded
  pub fn summary_line(&self) -> Option<String> {
    self.state.payload().map(|repos| format!("{} repositories found", repos.len()))
  }

  /// Begin loading the repositories of the current username
  pub fn start(&mut self) -> ReposRequest {
    self.state = FetchState::Loading;
    let ticket = self.sequence.issue();
    debug!(ticket = ticket.value(), username = %self.username, "Repository listing started");

    ReposRequest {
      ticket,
      username: self.username.clone(),
    }
  }

  /// Point the screen at another user.
  ///
  /// Returns a fresh request when the username actually changed. Any pending
  /// response for the previous user becomes stale.
  pub fn set_username(&mut self, username: &str) -> Option<ReposRequest> {
    if username == self.username {
      return None;
    }

    self.username = username.to_string();
    if self
      .profile
      .as_ref()
      .is_some_and(|p| !p.login.eq_ignore_ascii_case(username))
    {
      self.profile = None;
    }

    Some(self.start())
  }

  /// Replace the forwarded profile; one for a different user is dropped
  pub fn set_profile(&mut self, profile: Option<Profile>) {
    self.profile = profile.filter(|p| p.login.eq_ignore_ascii_case(&self.username));
  }

  /// Apply the outcome of the request identified by `ticket`; returns whether
  /// the state changed
  pub fn complete(&mut self, ticket: Ticket, result: Result<Vec<RepositorySummary>, FetchError>) -> bool {
    if !self.sequence.is_current(ticket) {
      debug!(ticket = ticket.value(), "Discarding stale repository response");
      return false;
    }

    self.state = match result {
      Ok(repos) => {
        debug!(count = repos.len(), "Repositories loaded");
        FetchState::Success(repos)
      }
      Err(err) => {
        debug!("Repository listing failed: {err}");
        FetchState::Error(MSG_LOAD_REPOS_FAILED.to_string())
      }
    };

    debug!(ticket = ticket.value(), state = self.state.label(), "Repository listing settled");

    true
  }

  /// Loaded repositories in API order; empty unless the listing succeeded
  pub fn repositories(&self) -> &[RepositorySummary] {
    self.state.payload().map(Vec::as_slice).unwrap_or_default()
  }

  /// Whether the listing succeeded but the user has no public repositories
  pub fn is_empty_state(&self) -> bool {
    self.state.payload().is_some_and(Vec::is_empty)
  }

  /// Message shown for the empty state
  pub const fn empty_message(&self) -> &'static str {
    MSG_NO_REPOSITORIES
  }

  /// Card view models of the loaded repositories
  pub fn cards(&self, style: DateStyle) -> Vec<RepositoryCard> {
    self
      .repositories()
      .iter()
      .map(|repo| RepositoryCard::new(repo, style))
      .collect()
  }

  /// Open `repo`'s GitHub page in the system browser
  pub fn open_repository(&self, repo: &RepositorySummary) -> Result<()> {
    info!("Opening {} in browser", repo.html_url);
    open_url(&repo.html_url)
  }

  /// Start a listing and run it against `client`
  pub async fn load(&mut self, client: &GitHubClient) -> &FetchState<Vec<RepositorySummary>> {
    let request = self.start();
    let result = client.list_user_repos(&request.username).await;
    self.complete(request.ticket, result);

    &self.state
  }
}

/// What one repository card shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryCard {
  pub name: String,
  pub description: Option<String>,
  /// Primary language with its color token
  pub language: Option<(String, &'static str)>,
  pub stars: u64,
  pub forks: u64,
  /// Formatted last-updated date
  pub updated: String,
  pub url: String,
}

impl RepositoryCard {
  pub fn new(repo: &RepositorySummary, style: DateStyle) -> Self {
    Self {
      name: repo.name.clone(),
      description: repo.description.clone().filter(|d| !d.trim().is_empty()),
      language: repo
        .primary_language
        .as_ref()
        .map(|language| (language.clone(), language_color(language))),
      stars: repo.star_count,
      forks: repo.fork_count,
      updated: format_local_date(&repo.updated_at, style),
      url: repo.html_url.clone(),
    }
  }
}
