//! # GitHub HTTP Client
//!
//! HTTP client implementation for GitHub API interactions, handling request
//! building, status mapping and response parsing for the REST endpoints ghx
//! consumes.

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::consts::{ACCEPT, API_BASE_URL, USER_AGENT};
use crate::error::FetchError;

/// Represents a GitHub API client
#[derive(Clone)]
pub struct GitHubClient {
  pub(crate) client: Client,
  pub(crate) base_url: String,
}

impl Default for GitHubClient {
  fn default() -> Self {
    Self::new()
  }
}

impl GitHubClient {
  /// Create a new GitHub client pointing at the public API
  pub fn new() -> Self {
    Self::with_base_url(API_BASE_URL)
  }

  /// Create a client for a different API root (GitHub Enterprise, mocks)
  pub fn with_base_url(base_url: impl Into<String>) -> Self {
    let mut base_url = base_url.into();
    while base_url.ends_with('/') {
      base_url.pop();
    }

    Self {
      client: Client::new(),
      base_url,
    }
  }

  /// The API root this client talks to
  pub fn base_url(&self) -> &str {
    &self.base_url
  }

  /// Build an endpoint URL from path segments. Each segment is
  /// percent-encoded, so user input can never escape its segment.
  pub(crate) fn endpoint_url(&self, segments: &[&str]) -> Result<Url, FetchError> {
    let mut url = Url::parse(&self.base_url).map_err(|e| FetchError::InvalidUrl(format!("{}: {e}", self.base_url)))?;

    url
      .path_segments_mut()
      .map_err(|()| FetchError::InvalidUrl(self.base_url.clone()))?
      .pop_if_empty()
      .extend(segments);

    Ok(url)
  }

  /// Issue a GET request and decode the JSON body.
  ///
  /// A 404 is reported as [`FetchError::NotFound`] for `login`; every other
  /// non-success status becomes [`FetchError::Status`].
  pub(crate) async fn get_json<T: DeserializeOwned>(&self, url: Url, login: &str) -> Result<T, FetchError> {
    debug!("GET {url}");

    let response = self
      .client
      .get(url)
      .header("Accept", ACCEPT)
      .header("User-Agent", USER_AGENT)
      .send()
      .await?;

    let status = response.status();
    debug!("GitHub responded with HTTP {status}");

    match status {
      StatusCode::NOT_FOUND => Err(FetchError::NotFound(login.to_string())),
      status if status.is_success() => {
        // First get the response body as text
        let body = response.text().await?;

        // Then try to parse it as JSON
        Ok(serde_json::from_str::<T>(&body)?)
      }
      status => {
        let body = response.text().await.unwrap_or_default();
        Err(FetchError::Status {
          status,
          message: extract_api_message(&body),
        })
      }
    }
  }
}

/// Pull the `message` field out of a GitHub error payload, falling back to the
/// raw body
fn extract_api_message(body: &str) -> String {
  serde_json::from_str::<serde_json::Value>(body)
    .ok()
    .and_then(|json| json.get("message").and_then(|m| m.as_str()).map(str::to_string))
    .unwrap_or_else(|| body.trim().to_string())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_github_client_creation() {
    let client = GitHubClient::new();
    assert_eq!(client.base_url(), "https://api.github.com");
  }

  #[test]
  fn test_trailing_slashes_are_trimmed() {
    let client = GitHubClient::with_base_url("http://localhost:8080/api/v3//");
    assert_eq!(client.base_url(), "http://localhost:8080/api/v3");
  }

  #[test]
  fn test_endpoint_url_encodes_segments() {
    let client = GitHubClient::new();

    let url = client.endpoint_url(&["users", "octocat"]).unwrap();
    assert_eq!(url.as_str(), "https://api.github.com/users/octocat");

    let url = client.endpoint_url(&["users", "a/b?c"]).unwrap();
    assert_eq!(url.path(), "/users/a%2Fb%3Fc");
    assert_eq!(url.query(), None);
  }

  #[test]
  fn test_endpoint_url_keeps_base_path() {
    let client = GitHubClient::with_base_url("https://ghe.example.com/api/v3");
    let url = client.endpoint_url(&["users", "octocat", "repos"]).unwrap();
    assert_eq!(url.as_str(), "https://ghe.example.com/api/v3/users/octocat/repos");
  }

  #[test]
  fn test_invalid_base_url() {
    let client = GitHubClient::with_base_url("not a url");
    let err = client.endpoint_url(&["users"]).unwrap_err();
    assert!(matches!(err, FetchError::InvalidUrl(_)));
  }

  #[test]
  fn test_extract_api_message() {
    assert_eq!(
      extract_api_message(r#"{"message":"API rate limit exceeded","documentation_url":"x"}"#),
      "API rate limit exceeded"
    );
    assert_eq!(extract_api_message("  plain failure \n"), "plain failure");
  }
}
