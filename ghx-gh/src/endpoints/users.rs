use tracing::instrument;

use crate::client::GitHubClient;
use crate::error::FetchError;
use crate::models::Profile;

impl GitHubClient {
  /// Get the public profile of `username`
  #[instrument(skip(self), level = "debug")]
  pub async fn get_user(&self, username: &str) -> Result<Profile, FetchError> {
    let url = self.endpoint_url(&["users", username])?;
    self.get_json(url, username).await
  }
}
