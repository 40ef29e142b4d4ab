//! # GitHub API Client
//!
//! Provides read-only, unauthenticated access to the two GitHub REST
//! endpoints ghx needs: a user profile and that user's public repositories.

pub mod client;
pub mod consts;
pub mod endpoints;
pub mod error;
pub mod models;

// Re-export the client
pub use client::GitHubClient;
// Re-export the error taxonomy
pub use error::FetchError;
// Re-export models
pub use models::{Profile, RepositorySummary};
