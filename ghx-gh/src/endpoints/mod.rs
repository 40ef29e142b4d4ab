//! # GitHub API Endpoints
//!
//! Endpoint implementations grouped by resource: user profiles and the
//! repositories a user owns.

pub mod repos;
pub mod users;

#[cfg(test)]
mod tests;
