//! Core constants shared across ghx components.

/// Application name used for config directories and the binary
pub const APP_NAME: &str = "ghx";

/// Name of the settings file inside the config directory
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Name of the log file written while the interactive UI owns the terminal
pub const LOG_FILE_NAME: &str = "ghx.log";

/// Shown when a lookup is submitted without a username
pub const MSG_ENTER_USERNAME: &str = "Enter a username";

/// Shown when the profile endpoint answers 404
pub const MSG_USER_NOT_FOUND: &str = "User not found";

/// Shown for every other profile lookup failure
pub const MSG_FETCH_USER_FAILED: &str = "Failed to fetch user";

/// Shown for any repository listing failure
pub const MSG_LOAD_REPOS_FAILED: &str = "Failed to load repositories";

/// Shown when a listing succeeds with zero repositories
pub const MSG_NO_REPOSITORIES: &str = "No public repositories found";

/// Landing screen title
pub const HOME_TITLE: &str = "My GitHub Profile";

/// Landing screen subtitle
pub const HOME_SUBTITLE: &str = "Discover and explore GitHub profiles and repositories, simply";

/// Label of the landing screen action leading to the lookup screen
pub const HOME_ACTION: &str = "Get started";

/// Placeholder shown in an empty username field
pub const USERNAME_PLACEHOLDER: &str = "GitHub username";
