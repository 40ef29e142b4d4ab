use tracing::instrument;

use crate::client::GitHubClient;
use crate::consts::{REPOS_PAGE_SIZE, REPOS_SORT};
use crate::error::FetchError;
use crate::models::RepositorySummary;

impl GitHubClient {
  /// List the public repositories of `username`, most recently updated first.
  ///
  /// Only the first page of [`REPOS_PAGE_SIZE`] entries is requested; the
  /// order is whatever the API returns.
  #[instrument(skip(self), level = "debug")]
  pub async fn list_user_repos(&self, username: &str) -> Result<Vec<RepositorySummary>, FetchError> {
    let mut url = self.endpoint_url(&["users", username, "repos"])?;
    url
      .query_pairs_mut()
      .append_pair("sort", REPOS_SORT)
      .append_pair("per_page", &REPOS_PAGE_SIZE.to_string());

    self.get_json(url, username).await
  }
}
