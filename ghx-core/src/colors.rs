//! # Language Colors
//!
//! Fixed palette mapping a repository's primary language to the color token
//! used for its badge. Lookups are total: unknown languages get
//! [`DEFAULT_LANGUAGE_COLOR`].

use std::collections::HashMap;
use std::sync::LazyLock;

/// Color token for languages missing from the palette
pub const DEFAULT_LANGUAGE_COLOR: &str = "#667eea";

/// Language name (case-sensitive, as reported by GitHub) to color token
pub const LANGUAGE_COLORS: [(&str, &str); 15] = [
  ("JavaScript", "#f1e05a"),
  ("Python", "#3572a5"),
  ("Java", "#b07219"),
  ("TypeScript", "#2b7489"),
  ("HTML", "#e34c26"),
  ("CSS", "#1572b6"),
  ("React", "#61dafb"),
  ("Vue", "#4fc08d"),
  ("PHP", "#777bb4"),
  ("Ruby", "#701516"),
  ("Go", "#00ADD8"),
  ("C++", "#f34b7d"),
  ("C", "#555555"),
  ("Swift", "#ffac45"),
  ("Kotlin", "#F18E33"),
];

static LANGUAGE_COLOR_TABLE: LazyLock<HashMap<&'static str, &'static str>> =
  LazyLock::new(|| LANGUAGE_COLORS.into_iter().collect());

/// Color token for `language`
pub fn language_color(language: &str) -> &'static str {
  LANGUAGE_COLOR_TABLE
    .get(language)
    .copied()
    .unwrap_or(DEFAULT_LANGUAGE_COLOR)
}

/// Parse a `#rrggbb` token into its RGB components
pub fn to_rgb(token: &str) -> Option<(u8, u8, u8)> {
  let hex = token.strip_prefix('#')?;
  if hex.len() != 6 || !hex.is_ascii() {
    return None;
  }

  let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
  Some((channel(0..2)?, channel(2..4)?, channel(4..6)?))
}
