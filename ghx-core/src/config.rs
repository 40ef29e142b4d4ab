//! # Configuration Management
//!
//! Handles configuration directories and user settings for ghx, following the
//! XDG base directory layout on Linux and the platform conventions elsewhere.
//!
//! Settings live in `config.toml` inside the config directory. A missing file
//! means defaults; `ghx init` writes the defaults out so they can be edited.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use ghx_gh::GitHubClient;
use ghx_gh::consts::API_BASE_URL;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::consts::{APP_NAME, CONFIG_FILE_NAME, LOG_FILE_NAME};
use crate::dates::DateStyle;

/// Represents the configuration directories for ghx
#[derive(Debug, Clone)]
pub struct ConfigDirs {
  pub config_dir: PathBuf,
  pub cache_dir: PathBuf,
}

impl ConfigDirs {
  /// Resolve the platform directories for ghx
  pub fn new() -> Result<Self> {
    let proj_dirs = ProjectDirs::from("", "", APP_NAME).context("Failed to determine project directories")?;

    Ok(Self {
      config_dir: proj_dirs.config_dir().to_path_buf(),
      cache_dir: proj_dirs.cache_dir().to_path_buf(),
    })
  }

  /// Place every directory under `root`
  pub fn with_root(root: impl AsRef<Path>) -> Self {
    let root = root.as_ref();
    Self {
      config_dir: root.join("config"),
      cache_dir: root.join("cache"),
    }
  }

  pub fn config_dir(&self) -> &Path {
    &self.config_dir
  }

  pub fn cache_dir(&self) -> &Path {
    &self.cache_dir
  }

  /// Path of the settings file
  pub fn config_path(&self) -> PathBuf {
    self.config_dir.join(CONFIG_FILE_NAME)
  }

  /// Path of the log file used while the interactive UI is running
  pub fn log_path(&self) -> PathBuf {
    self.cache_dir.join(LOG_FILE_NAME)
  }

  /// Create the directories and write default settings when none exist.
  ///
  /// Returns whether a new settings file was written.
  pub fn init(&self) -> Result<bool> {
    fs::create_dir_all(&self.config_dir).context("Failed to create config directory")?;
    fs::create_dir_all(&self.cache_dir).context("Failed to create cache directory")?;

    if self.config_path().exists() {
      return Ok(false);
    }

    Settings::default().save(self)?;
    Ok(true)
  }
}

/// Get the configuration directories
pub fn get_config_dirs() -> Result<ConfigDirs> {
  ConfigDirs::new()
}

/// User settings read from `config.toml`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
  /// Root of the GitHub REST API
  pub api_base_url: String,
  /// How repository dates are written
  pub date_style: DateStyle,
}

impl Default for Settings {
  fn default() -> Self {
    Self {
      api_base_url: API_BASE_URL.to_string(),
      date_style: DateStyle::default(),
    }
  }
}

impl Settings {
  /// Load settings, falling back to defaults when the file does not exist
  pub fn load(dirs: &ConfigDirs) -> Result<Self> {
    let config_path = dirs.config_path();

    if !config_path.exists() {
      debug!("No settings at {}, using defaults", config_path.display());
      return Ok(Self::default());
    }

    let content = fs::read_to_string(&config_path)
      .with_context(|| format!("Failed to read settings from {}", config_path.display()))?;

    toml::from_str(&content).with_context(|| format!("Failed to parse settings from {}", config_path.display()))
  }

  /// Save settings, creating the config directory when needed
  pub fn save(&self, dirs: &ConfigDirs) -> Result<()> {
    let config_path = dirs.config_path();

    if let Some(parent) = config_path.parent() {
      fs::create_dir_all(parent).with_context(|| format!("Failed to create config directory {}", parent.display()))?;
    }

    let content = toml::to_string_pretty(self).context("Failed to serialize settings to TOML")?;

    fs::write(&config_path, content)
      .with_context(|| format!("Failed to write settings to {}", config_path.display()))?;

    Ok(())
  }

  /// A GitHub client for the configured API root
  pub fn client(&self) -> GitHubClient {
    GitHubClient::with_base_url(&self.api_base_url)
  }
}
