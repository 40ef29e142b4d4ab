//! # Fetch Errors
//!
//! Error taxonomy for requests against the GitHub API. Callers only need to
//! tell a missing user apart from every other failure, so the variants stay
//! coarse.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors returned by [`crate::GitHubClient`] requests
#[derive(Debug, Error)]
pub enum FetchError {
  /// The API answered 404 for the requested user.
  #[error("GitHub user '{0}' not found")]
  NotFound(String),
  /// Any other non-success HTTP status.
  #[error("GitHub API returned HTTP {status}: {message}")]
  Status { status: StatusCode, message: String },
  /// The request never produced a response (DNS, TLS, connection reset...).
  #[error("Failed to reach GitHub: {0}")]
  Network(#[source] reqwest::Error),
  /// The response body did not match the expected shape.
  #[error("Failed to parse GitHub response: {0}")]
  Decode(#[from] serde_json::Error),
  /// The configured base URL cannot be extended with path segments.
  #[error("Invalid GitHub API URL: {0}")]
  InvalidUrl(String),
}

impl FetchError {
  /// True when the API reported the user as missing
  pub const fn is_not_found(&self) -> bool {
    matches!(self, Self::NotFound(_))
  }
}

impl From<reqwest::Error> for FetchError {
  fn from(err: reqwest::Error) -> Self {
    Self::Network(err)
  }
}
