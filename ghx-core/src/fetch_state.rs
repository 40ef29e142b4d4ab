//! # Fetch State
//!
//! One tagged value per screen describing where its single request stands.
//! Loading, failure and data can never be observed at the same time.

/// Progress of the request owned by a screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchState<T> {
  /// Nothing requested yet
  Idle,
  /// A request is in flight
  Loading,
  /// The latest request succeeded
  Success(T),
  /// The latest request failed; holds the user-facing message
  Error(String),
}

impl<T> Default for FetchState<T> {
  fn default() -> Self {
    Self::Idle
  }
}

impl<T> FetchState<T> {
  pub const fn is_idle(&self) -> bool {
    matches!(self, Self::Idle)
  }

  pub const fn is_loading(&self) -> bool {
    matches!(self, Self::Loading)
  }

  pub const fn is_success(&self) -> bool {
    matches!(self, Self::Success(_))
  }

  pub const fn is_error(&self) -> bool {
    matches!(self, Self::Error(_))
  }

  /// The fetched payload, if the latest request succeeded
  pub const fn payload(&self) -> Option<&T> {
    match self {
      Self::Success(payload) => Some(payload),
      _ => None,
    }
  }

  /// The user-facing message, if the latest request failed
  pub fn error_message(&self) -> Option<&str> {
    match self {
      Self::Error(message) => Some(message),
      _ => None,
    }
  }

  /// Short lowercase name of the current variant, used in logs
  pub const fn label(&self) -> &'static str {
    match self {
      Self::Idle => "idle",
      Self::Loading => "loading",
      Self::Success(_) => "success",
      Self::Error(_) => "error",
    }
  }
}
