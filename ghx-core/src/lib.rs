//! # ghx Core Library
//!
//! Screen state machines, presentation helpers and configuration shared by the
//! ghx front ends. Nothing here touches the terminal's raw mode; the
//! interactive shell and the one-shot commands both drive these types.

pub mod browser;
pub mod colors;
pub mod config;
pub mod consts;
pub mod dates;
pub mod fetch_state;
pub mod lookup;
pub mod output;
pub mod prompts;
pub mod repo_list;
pub mod route;
pub mod sequence;

pub use config::{ConfigDirs, Settings, get_config_dirs};
pub use dates::DateStyle;
pub use fetch_state::FetchState;
pub use lookup::{LookupRequest, ProfileLookup, profile_stats};
pub use output::{ColorMode, print_error, print_info, print_success, print_warning};
pub use repo_list::{RepositoryCard, RepositoryList, ReposRequest};
pub use route::{NAV_BRAND, NAV_ITEMS, Route};
pub use sequence::Ticket;
