//! Constants for the ghx-gh client

/// Base URL for the official SaaS GitHub API
pub const API_BASE_URL: &str = "https://api.github.com";

/// User-Agent header value for the GitHub API client
pub const USER_AGENT: &str = concat!("ghx/", env!("CARGO_PKG_VERSION"));

/// Accept header value for the GitHub API
pub const ACCEPT: &str = "application/vnd.github.v3+json";

/// Sort order requested for repository listings (most recently updated first)
pub const REPOS_SORT: &str = "updated";

/// Fixed page size for repository listings. Only one page is ever requested.
pub const REPOS_PAGE_SIZE: u32 = 50;
