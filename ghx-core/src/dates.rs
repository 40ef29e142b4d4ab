//! # Date Formatting
//!
//! Renders repository timestamps as short, locale-ordered calendar dates.

use std::fmt::Display;

use chrono::{DateTime, Local, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Calendar date layout
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DateStyle {
  /// Day first: 26/01/2011
  #[default]
  PtBr,
  /// Month first: 01/26/2011
  EnUs,
  /// ISO 8601: 2011-01-26
  Iso,
}

impl DateStyle {
  const fn pattern(self) -> &'static str {
    match self {
      Self::PtBr => "%d/%m/%Y",
      Self::EnUs => "%m/%d/%Y",
      Self::Iso => "%Y-%m-%d",
    }
  }
}

/// Format `timestamp` in its own time zone
pub fn format_date<Tz>(timestamp: &DateTime<Tz>, style: DateStyle) -> String
where
  Tz: TimeZone,
  Tz::Offset: Display,
{
  timestamp.format(style.pattern()).to_string()
}

/// Format a UTC timestamp as a date in the local time zone
pub fn format_local_date(timestamp: &DateTime<Utc>, style: DateStyle) -> String {
  format_date(&timestamp.with_timezone(&Local), style)
}

#[cfg(test)]
mod tests {
  use chrono::FixedOffset;

  use super::*;

  #[test]
  fn test_styles() {
    let timestamp = Utc.with_ymd_and_hms(2011, 1, 26, 19, 14, 43).unwrap();

    assert_eq!(format_date(&timestamp, DateStyle::PtBr), "26/01/2011");
    assert_eq!(format_date(&timestamp, DateStyle::EnUs), "01/26/2011");
    assert_eq!(format_date(&timestamp, DateStyle::Iso), "2011-01-26");
  }

  #[test]
  fn test_default_style_is_day_first() {
    assert_eq!(DateStyle::default(), DateStyle::PtBr);
  }

  #[test]
  fn test_date_follows_time_zone() {
    // 23:30 UTC is already the next day three hours east
    let timestamp = Utc.with_ymd_and_hms(2024, 2, 29, 23, 30, 0).unwrap();
    let east = FixedOffset::east_opt(3 * 3600).unwrap();

    assert_eq!(format_date(&timestamp, DateStyle::Iso), "2024-02-29");
    assert_eq!(format_date(&timestamp.with_timezone(&east), DateStyle::Iso), "2024-03-01");
  }

  #[test]
  fn test_local_date_has_expected_shape() {
    let timestamp = Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();
    let formatted = format_local_date(&timestamp, DateStyle::Iso);
    assert!(formatted.starts_with("2024-06-1"), "{formatted}");
  }

  #[test]
  fn test_style_serde_names() {
    #[derive(Deserialize)]
    struct Wrapper {
      style: DateStyle,
    }

    let parsed: Wrapper = toml::from_str(r#"style = "en-us""#).unwrap();
    assert_eq!(parsed.style, DateStyle::EnUs);
  }
}
