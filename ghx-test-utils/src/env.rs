//! Environment variable management for testing
//!
//! Overrides the XDG base directories for the lifetime of a guard so config
//! tests never touch the user's real `~/.config/ghx`.

use std::env;
use std::path::PathBuf;

use tempfile::TempDir;

/// XDG variables redirected by [`EnvTestGuard`], with the sub-directory each
/// one points at inside the temporary root
const XDG_VARS: [(&str, &str); 3] = [
  (EnvTestGuard::XDG_CONFIG_HOME, "config"),
  (EnvTestGuard::XDG_DATA_HOME, "data"),
  (EnvTestGuard::XDG_CACHE_HOME, "cache"),
];

/// A test environment that overrides XDG directories to use a per-test
/// temporary directory
pub struct EnvTestGuard {
  /// The temporary directory backing every XDG directory
  pub temp_dir: TempDir,
  /// Values the XDG variables had before the guard was created
  originals: Vec<(&'static str, Option<String>)>,
}

impl Default for EnvTestGuard {
  fn default() -> Self {
    Self::new()
  }
}

impl EnvTestGuard {
  /// XDG environment variable names
  pub const XDG_CONFIG_HOME: &'static str = "XDG_CONFIG_HOME";
  pub const XDG_DATA_HOME: &'static str = "XDG_DATA_HOME";
  pub const XDG_CACHE_HOME: &'static str = "XDG_CACHE_HOME";

  /// Create a new test environment with overridden XDG directories
  pub fn new() -> Self {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");

    let mut originals = Vec::with_capacity(XDG_VARS.len());
    for (var, sub_dir) in XDG_VARS {
      originals.push((var, env::var(var).ok()));

      let dir = temp_dir.path().join(sub_dir);
      std::fs::create_dir_all(&dir).expect("Failed to create XDG directory");
      unsafe {
        env::set_var(var, dir);
      }
    }

    Self { temp_dir, originals }
  }

  /// Get the path to the XDG config directory
  pub fn config_dir(&self) -> PathBuf {
    self.temp_dir.path().join("config")
  }

  /// Get the path to the XDG data directory
  pub fn data_dir(&self) -> PathBuf {
    self.temp_dir.path().join("data")
  }

  /// Get the path to the XDG cache directory
  pub fn cache_dir(&self) -> PathBuf {
    self.temp_dir.path().join("cache")
  }

  /// Config directory an application named `app` resolves to under this guard
  /// on Linux
  pub fn app_config_dir(&self, app: &str) -> PathBuf {
    self.config_dir().join(app)
  }

  /// Cache directory an application named `app` resolves to under this guard
  /// on Linux
  pub fn app_cache_dir(&self, app: &str) -> PathBuf {
    self.cache_dir().join(app)
  }
}

impl Drop for EnvTestGuard {
  fn drop(&mut self) {
    for (var, original) in &self.originals {
      match original {
        Some(val) => unsafe {
          env::set_var(var, val);
        },
        None => unsafe {
          env::remove_var(var);
        },
      }
    }
  }
}
