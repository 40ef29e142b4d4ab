//! GitHub API payload fixtures
//!
//! Builders for the JSON bodies returned by `/users/{username}` and
//! `/users/{username}/repos`, carrying the extra fields the real API sends so
//! tests also prove unknown fields are tolerated.

use serde_json::{Value, json};

/// A `/users/{username}` response body
pub fn profile_json(login: &str, followers: u64, following: u64, public_repos: u64) -> Value {
  json!({
      "login": login,
      "id": 583231,
      "node_id": "MDQ6VXNlcjU4MzIzMQ==",
      "avatar_url": format!("https://avatars.githubusercontent.com/{login}"),
      "html_url": format!("https://github.com/{login}"),
      "type": "User",
      "name": null,
      "company": null,
      "blog": "",
      "bio": null,
      "public_repos": public_repos,
      "public_gists": 8,
      "followers": followers,
      "following": following,
      "created_at": "2011-01-25T18:44:36Z",
      "updated_at": "2024-01-22T12:00:00Z"
  })
}

/// A `/users/{username}/repos` entry
pub fn repo_json(id: u64, name: &str, language: Option<&str>, updated_at: &str) -> Value {
  json!({
      "id": id,
      "node_id": format!("R_{id}"),
      "name": name,
      "full_name": format!("octocat/{name}"),
      "private": false,
      "html_url": format!("https://github.com/octocat/{name}"),
      "description": null,
      "fork": false,
      "language": language,
      "stargazers_count": id * 10,
      "watchers_count": id * 10,
      "forks_count": id,
      "open_issues_count": 0,
      "default_branch": "main",
      "pushed_at": updated_at,
      "created_at": "2011-01-26T19:01:12Z",
      "updated_at": updated_at
  })
}
