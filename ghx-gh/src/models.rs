use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Represents a GitHub user profile from `/users/{username}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
  pub login: String,
  #[serde(rename = "name", default)]
  pub display_name: Option<String>,
  pub avatar_url: String,
  #[serde(default)]
  pub html_url: Option<String>,
  #[serde(default)]
  pub bio: Option<String>,
  pub followers: u64,
  pub following: u64,
  #[serde(rename = "public_repos")]
  pub public_repo_count: u64,
}

impl Profile {
  /// Name to show for this profile, falling back to the login when the user
  /// has not set one
  pub fn display_name(&self) -> &str {
    self
      .display_name
      .as_deref()
      .filter(|name| !name.trim().is_empty())
      .unwrap_or(&self.login)
  }
}

/// Represents one entry of `/users/{username}/repos`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositorySummary {
  pub id: u64,
  pub name: String,
  #[serde(default)]
  pub description: Option<String>,
  #[serde(rename = "language", default)]
  pub primary_language: Option<String>,
  #[serde(rename = "stargazers_count")]
  pub star_count: u64,
  #[serde(rename = "forks_count")]
  pub fork_count: u64,
  pub updated_at: DateTime<Utc>,
  pub html_url: String,
}
