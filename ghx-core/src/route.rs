//! # Routes
//!
//! The screens of the explorer and the navigation bar entries that lead to
//! them. A route to the repository list may carry the profile that was just
//! looked up, so that screen can show the user's name without a second
//! profile request. Parsing a path never recovers a profile.

use ghx_gh::Profile;
use thiserror::Error;

const HOME_PATH: &str = "/";
const SEARCH_PATH: &str = "/search";
const REPOSITORIES_PREFIX: &str = "/repositories/";

/// A screen of the explorer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
  /// Landing screen
  Home,
  /// Profile lookup screen
  Search,
  /// Repository list of `username`, optionally with its already fetched
  /// profile
  Repositories { username: String, profile: Option<Profile> },
}

/// Errors raised while parsing a route path
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouteError {
  /// No screen lives at this path.
  #[error("no screen at path '{0}'")]
  Unknown(String),
  /// The repository route was missing its username segment.
  #[error("repository path '{0}' does not name a user")]
  MissingUsername(String),
}

impl Route {
  /// Route to the repository list of `username`
  pub fn repositories(username: impl Into<String>, profile: Option<Profile>) -> Self {
    Self::Repositories {
      username: username.into(),
      profile,
    }
  }

  /// Path of this route
  pub fn path(&self) -> String {
    match self {
      Self::Home => HOME_PATH.to_string(),
      Self::Search => SEARCH_PATH.to_string(),
      Self::Repositories { username, .. } => format!("{REPOSITORIES_PREFIX}{username}"),
    }
  }

  /// Recover a route from its path
  pub fn parse(path: &str) -> Result<Self, RouteError> {
    let trimmed = path.trim();
    let normalized = if trimmed.len() > 1 {
      trimmed.trim_end_matches('/')
    } else {
      trimmed
    };

    match normalized {
      "" | HOME_PATH => Ok(Self::Home),
      SEARCH_PATH => Ok(Self::Search),
      other => match other.strip_prefix(REPOSITORIES_PREFIX) {
        Some(username) if !username.is_empty() && !username.contains('/') => Ok(Self::repositories(username, None)),
        Some(_) => Err(RouteError::MissingUsername(path.to_string())),
        None if other == REPOSITORIES_PREFIX.trim_end_matches('/') => {
          Err(RouteError::MissingUsername(path.to_string()))
        }
        None => Err(RouteError::Unknown(path.to_string())),
      },
    }
  }
}

/// An entry of the top navigation bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
  pub label: &'static str,
  pub path: &'static str,
}

/// Brand text shown at the left of the navigation bar
pub const NAV_BRAND: &str = "GitHub Explorer";

/// Navigation bar entries, in display order
pub const NAV_ITEMS: [NavItem; 2] = [
  NavItem {
    label: "Home",
    path: HOME_PATH,
  },
  NavItem {
    label: "Search",
    path: SEARCH_PATH,
  },
];

impl NavItem {
  /// Whether this entry should be highlighted while `current` is shown
  pub fn is_active(&self, current: &Route) -> bool {
    current.path() == self.path
  }

  /// Route this entry leads to
  pub fn route(&self) -> Route {
    match self.path {
      SEARCH_PATH => Route::Search,
      _ => Route::Home,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_paths() {
    assert_eq!(Route::Home.path(), "/");
    assert_eq!(Route::Search.path(), "/search");
    assert_eq!(Route::repositories("octocat", None).path(), "/repositories/octocat");
  }

  #[test]
  fn test_parse_round_trip() {
    for route in [Route::Home, Route::Search, Route::repositories("octocat", None)] {
      assert_eq!(Route::parse(&route.path()).unwrap(), route);
    }
  }

  #[test]
  fn test_parse_tolerates_trailing_slash() {
    assert_eq!(Route::parse("/search/").unwrap(), Route::Search);
    assert_eq!(
      Route::parse("/repositories/octocat/").unwrap(),
      Route::repositories("octocat", None)
    );
  }

  #[test]
  fn test_parse_errors() {
    assert_eq!(
      Route::parse("/repositories/"),
      Err(RouteError::MissingUsername("/repositories/".to_string()))
    );
    assert_eq!(
      Route::parse("/repositories"),
      Err(RouteError::MissingUsername("/repositories".to_string()))
    );
    assert!(matches!(
      Route::parse("/repositories/a/b"),
      Err(RouteError::MissingUsername(_))
    ));
    assert_eq!(Route::parse("/settings"), Err(RouteError::Unknown("/settings".to_string())));
  }

  #[test]
  fn test_nav_items_highlight_current_route() {
    let [home, search] = NAV_ITEMS;

    assert!(home.is_active(&Route::Home));
    assert!(!search.is_active(&Route::Home));
    assert!(search.is_active(&Route::Search));

    let repos = Route::repositories("octocat", None);
    assert!(!home.is_active(&repos));
    assert!(!search.is_active(&repos));
  }

  #[test]
  fn test_nav_item_routes() {
    let [home, search] = NAV_ITEMS;
    assert_eq!(home.route(), Route::Home);
    assert_eq!(search.route(), Route::Search);
  }
}
