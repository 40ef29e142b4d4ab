//! Opening pages in the system browser.

use anyhow::{Context, Result};
use tracing::debug;

/// Open `url` with the platform's default handler
pub fn open_url(url: &str) -> Result<()> {
  debug!("Launching browser for {url}");
  open::that(url).with_context(|| format!("Failed to open browser to {url}"))
}
