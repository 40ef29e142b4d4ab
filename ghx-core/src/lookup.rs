//! # Profile Lookup
//!
//! State machine behind the search screen: validate the username, issue one
//! profile request, and turn its outcome into a [`FetchState`].
//!
//! The screen performs no I/O itself. [`ProfileLookup::submit`] hands back a
//! [`LookupRequest`] for the caller to run, and the outcome comes back through
//! [`ProfileLookup::complete`]. [`ProfileLookup::lookup`] wires both halves to
//! a [`GitHubClient`] for callers that can simply await.

use ghx_gh::{FetchError, GitHubClient, Profile};
use tracing::debug;

use crate::consts::{MSG_ENTER_USERNAME, MSG_FETCH_USER_FAILED, MSG_USER_NOT_FOUND};
use crate::fetch_state::FetchState;
use crate::route::Route;
use crate::sequence::{RequestSequence, Ticket};

/// A profile request the caller should issue
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest {
  pub ticket: Ticket,
  pub username: String,
}

/// One of the three counters shown on a profile card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfileStat {
  pub label: &'static str,
  pub value: u64,
}

/// Followers, following and public repository counters, in display order
pub const fn profile_stats(profile: &Profile) -> [ProfileStat; 3] {
  [
    ProfileStat {
      label: "Followers",
      value: profile.followers,
    },
    ProfileStat {
      label: "Following",
      value: profile.following,
    },
    ProfileStat {
      label: "Repos",
      value: profile.public_repo_count,
    },
  ]
}

/// View state of the profile lookup screen
#[derive(Debug, Default)]
pub struct ProfileLookup {
  state: FetchState<Profile>,
  sequence: RequestSequence,
}

impl ProfileLookup {
  pub fn new() -> Self {
    Self::default()
  }

  pub const fn state(&self) -> &FetchState<Profile> {
    &self.state
  }

  /// The fetched profile, when the last lookup succeeded
  pub const fn profile(&self) -> Option<&Profile> {
    self.state.payload()
  }

  /// Submitting is disabled while a lookup is in flight
  pub const fn is_submit_enabled(&self) -> bool {
    !self.state.is_loading()
  }

  /// Start a lookup for `input`.
  ///
  /// Returns `None` without touching the network when the trimmed input is
  /// empty (the state becomes an error) or when a lookup is already running.
  pub fn submit(&mut self, input: &str) -> Option<LookupRequest> {
    if !self.is_submit_enabled() {
      debug!("Ignoring lookup submit while a request is in flight");
      return None;
    }

    let username = input.trim();
    if username.is_empty() {
      self.state = FetchState::Error(MSG_ENTER_USERNAME.to_string());
      return None;
    }

    self.state = FetchState::Loading;
    let ticket = self.sequence.issue();
    debug!(ticket = ticket.value(), username, "Profile lookup started");

    Some(LookupRequest {
      ticket,
      username: username.to_string(),
    })
  }

  /// Apply the outcome of the request identified by `ticket`.
  ///
  /// Outcomes of superseded requests are dropped; returns whether the state
  /// changed.
  pub fn complete(&mut self, ticket: Ticket, result: Result<Profile, FetchError>) -> bool {
    if !self.sequence.is_current(ticket) {
      debug!(ticket = ticket.value(), "Discarding stale profile response");
      return false;
    }

    self.state = match result {
      Ok(profile) => FetchState::Success(profile),
      Err(err) => {
        debug!("Profile lookup failed: {err}");
        let message = if err.is_not_found() {
          MSG_USER_NOT_FOUND
        } else {
          MSG_FETCH_USER_FAILED
        };
        FetchState::Error(message.to_string())
      }
    };

    debug!(ticket = ticket.value(), state = self.state.label(), "Profile lookup settled");

    true
  }

  /// Route to the fetched user's repositories, forwarding the profile.
  /// Only available after a successful lookup.
  pub fn view_repositories(&self) -> Option<Route> {
    self
      .profile()
      .map(|profile| Route::repositories(profile.login.clone(), Some(profile.clone())))
  }

  /// Submit `input` and run the resulting request against `client`
  pub async fn lookup(&mut self, client: &GitHubClient, input: &str) -> &FetchState<Profile> {
    if let Some(request) = self.submit(input) {
      let result = client.get_user(&request.username).await;
      self.complete(request.ticket, result);
    }

    &self.state
  }
}

#[cfg(test)]
mod tests {
  use ghx_test_utils::fixtures::profile_json;
  use wiremock::matchers::{method, path};
  use wiremock::{Mock, MockServer, ResponseTemplate};

  use super::*;

  fn not_found(login: &str) -> FetchError {
    FetchError::NotFound(login.to_string())
  }

  fn octocat() -> Profile {
    serde_json::from_value(profile_json("octocat", 10, 2, 5)).unwrap()
  }

  #[test]
  fn test_empty_username_never_issues_a_request() {
    for input in ["", "   ", "\t\n"] {
      let mut lookup = ProfileLookup::new();
      assert!(lookup.submit(input).is_none());
      assert_eq!(lookup.state().error_message(), Some(MSG_ENTER_USERNAME));
    }
  }

  #[test]
  fn test_submit_trims_and_enters_loading() {
    let mut lookup = ProfileLookup::new();
    let request = lookup.submit("  octocat ").unwrap();

    assert_eq!(request.username, "octocat");
    assert!(lookup.state().is_loading());
    assert!(!lookup.is_submit_enabled());
  }

  #[test]
  fn test_submit_is_disabled_while_loading() {
    let mut lookup = ProfileLookup::new();
    lookup.submit("octocat").unwrap();

    assert!(lookup.submit("hubot").is_none());
    assert!(lookup.state().is_loading());
  }

  #[test]
  fn test_success_then_view_repositories() {
    let mut lookup = ProfileLookup::new();
    assert!(lookup.view_repositories().is_none());

    let request = lookup.submit("octocat").unwrap();
    assert!(lookup.complete(request.ticket, Ok(octocat())));

    let profile = lookup.profile().unwrap();
    let stats = profile_stats(profile);
    assert_eq!(stats.map(|stat| stat.value), [10, 2, 5]);

    match lookup.view_repositories() {
      Some(Route::Repositories { username, profile }) => {
        assert_eq!(username, "octocat");
        assert_eq!(profile.unwrap().login, "octocat");
      }
      other => panic!("Expected repositories route, got {other:?}"),
    }
  }

  #[test]
  fn test_not_found_message() {
    let mut lookup = ProfileLookup::new();
    let request = lookup.submit("doesnotexist123").unwrap();
    lookup.complete(request.ticket, Err(not_found("doesnotexist123")));

    assert_eq!(lookup.state().error_message(), Some(MSG_USER_NOT_FOUND));
  }

  #[test]
  fn test_other_failures_use_generic_message() {
    let mut lookup = ProfileLookup::new();
    let request = lookup.submit("octocat").unwrap();
    let decode_error = serde_json::from_str::<Profile>("{}").unwrap_err();
    lookup.complete(request.ticket, Err(FetchError::Decode(decode_error)));

    assert_eq!(lookup.state().error_message(), Some(MSG_FETCH_USER_FAILED));
    assert!(lookup.is_submit_enabled());
  }

  #[test]
  fn test_error_is_cleared_by_next_submit() {
    let mut lookup = ProfileLookup::new();
    lookup.submit("");
    assert!(lookup.state().is_error());

    lookup.submit("octocat").unwrap();
    assert!(lookup.state().is_loading());
    assert_eq!(lookup.state().error_message(), None);
  }

  #[test]
  fn test_stale_response_is_ignored() {
    let mut lookup = ProfileLookup::new();
    let first = lookup.submit("octocat").unwrap();
    lookup.complete(first.ticket, Err(not_found("octocat")));

    let second = lookup.submit("hubot").unwrap();
    // The first request resolving late must not overwrite the second
    assert!(!lookup.complete(first.ticket, Ok(octocat())));
    assert!(lookup.state().is_loading());

    assert!(lookup.complete(second.ticket, Err(not_found("hubot"))));
    assert_eq!(lookup.state().error_message(), Some(MSG_USER_NOT_FOUND));
  }

  #[tokio::test]
  async fn test_lookup_against_api() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = GitHubClient::with_base_url(mock_server.uri());

    Mock::given(method("GET"))
      .and(path("/users/octocat"))
      .respond_with(ResponseTemplate::new(200).set_body_json(profile_json("octocat", 10, 2, 5)))
      .mount(&mock_server)
      .await;

    let mut lookup = ProfileLookup::new();
    let state = lookup.lookup(&client, "octocat").await;
    assert_eq!(state.payload().map(|profile| profile.followers), Some(10));

    Ok(())
  }

  #[tokio::test]
  async fn test_lookup_not_found_against_api() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = GitHubClient::with_base_url(mock_server.uri());

    Mock::given(method("GET"))
      .and(path("/users/doesnotexist123"))
      .respond_with(ResponseTemplate::new(404))
      .mount(&mock_server)
      .await;

    let mut lookup = ProfileLookup::new();
    let state = lookup.lookup(&client, "doesnotexist123").await;
    assert_eq!(state.error_message(), Some(MSG_USER_NOT_FOUND));

    Ok(())
  }

  #[tokio::test]
  async fn test_empty_lookup_sends_nothing() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = GitHubClient::with_base_url(mock_server.uri());

    Mock::given(method("GET"))
      .respond_with(ResponseTemplate::new(200))
      .expect(0)
      .mount(&mock_server)
      .await;

    let mut lookup = ProfileLookup::new();
    let state = lookup.lookup(&client, "  ").await;
    assert_eq!(state.error_message(), Some(MSG_ENTER_USERNAME));

    Ok(())
  }
}
