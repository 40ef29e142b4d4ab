use ghx_test_utils::fixtures::repo_json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::client::GitHubClient;
use crate::consts::ACCEPT;
use crate::error::FetchError;

#[tokio::test]
async fn test_list_user_repos() -> anyhow::Result<()> {
  let mock_server = MockServer::start().await;
  let client = GitHubClient::with_base_url(mock_server.uri());

  Mock::given(method("GET"))
    .and(path("/users/octocat/repos"))
    .and(query_param("sort", "updated"))
    .and(query_param("per_page", "50"))
    .and(header("Accept", ACCEPT))
    .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
        repo_json(1, "Spoon-Knife", Some("HTML"), "2024-01-01T00:00:00Z"),
        repo_json(2, "Hello-World", None, "2024-06-01T00:00:00Z"),
    ])))
    .expect(1)
    .mount(&mock_server)
    .await;

  let repos = client.list_user_repos("octocat").await?;
  assert_eq!(repos.len(), 2);
  assert_eq!(repos[0].name, "Spoon-Knife");
  assert_eq!(repos[0].primary_language.as_deref(), Some("HTML"));
  assert_eq!(repos[1].name, "Hello-World");
  assert_eq!(repos[1].primary_language, None);

  Ok(())
}

#[tokio::test]
async fn test_list_user_repos_keeps_api_order() -> anyhow::Result<()> {
  let mock_server = MockServer::start().await;
  let client = GitHubClient::with_base_url(mock_server.uri());

  // Older entry first: the client must not re-sort by updated_at
  Mock::given(method("GET"))
    .and(path("/users/octocat/repos"))
    .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
        repo_json(1, "older", Some("Go"), "2020-01-01T00:00:00Z"),
        repo_json(2, "newer", Some("Go"), "2023-01-01T00:00:00Z"),
    ])))
    .mount(&mock_server)
    .await;

  let repos = client.list_user_repos("octocat").await?;
  let ids: Vec<u64> = repos.iter().map(|repo| repo.id).collect();
  assert_eq!(ids, vec![1, 2]);

  Ok(())
}

#[tokio::test]
async fn test_list_user_repos_empty() -> anyhow::Result<()> {
  let mock_server = MockServer::start().await;
  let client = GitHubClient::with_base_url(mock_server.uri());

  Mock::given(method("GET"))
    .and(path("/users/newcomer/repos"))
    .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
    .mount(&mock_server)
    .await;

  let repos = client.list_user_repos("newcomer").await?;
  assert!(repos.is_empty());

  Ok(())
}

#[tokio::test]
async fn test_list_user_repos_malformed_timestamp() -> anyhow::Result<()> {
  let mock_server = MockServer::start().await;
  let client = GitHubClient::with_base_url(mock_server.uri());

  Mock::given(method("GET"))
    .and(path("/users/octocat/repos"))
    .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
        repo_json(1, "broken", None, "yesterday"),
    ])))
    .mount(&mock_server)
    .await;

  let err = client.list_user_repos("octocat").await.unwrap_err();
  assert!(matches!(err, FetchError::Decode(_)));

  Ok(())
}

#[tokio::test]
async fn test_list_user_repos_server_error() -> anyhow::Result<()> {
  let mock_server = MockServer::start().await;
  let client = GitHubClient::with_base_url(mock_server.uri());

  Mock::given(method("GET"))
    .and(path("/users/octocat/repos"))
    .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
    .mount(&mock_server)
    .await;

  match client.list_user_repos("octocat").await {
    Err(FetchError::Status { status, message }) => {
      assert_eq!(status.as_u16(), 502);
      assert_eq!(message, "Bad Gateway");
    }
    other => panic!("Expected status error, got {other:?}"),
  }

  Ok(())
}
