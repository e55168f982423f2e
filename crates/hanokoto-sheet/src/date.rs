//! Date normalization to `YYYY-MM-DD`.
//!
//! The same logical field arrives as `2024/3/5`, `2024-03-05`, `2024.3.5`,
//! `2024/03` or `2024年3月5日` depending on the sheet. Strict calendar
//! formats are tried first; a positional digit-group pattern catches the
//! rest.

use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;

const DAY_FORMATS: [&str; 3] = ["%Y/%m/%d", "%Y-%m-%d", "%Y.%m.%d"];
const MONTH_FORMATS: [&str; 2] = ["%Y/%m", "%Y-%m"];

fn loose_date_re() -> &'static Regex {
  static LOOSE_DATE_RE: OnceLock<Regex> = OnceLock::new();
  LOOSE_DATE_RE.get_or_init(|| {
    Regex::new(r"([0-9]{4})[./\-年]?([0-9]{1,2})(?:[./\-月]?([0-9]{1,2}))?")
      .expect("valid loose date regex")
  })
}

/// Strict formats need exactly four year digits followed by a separator.
fn has_four_digit_year(s: &str) -> bool {
  let b = s.as_bytes();
  b.len() > 4 && b[..4].iter().all(u8::is_ascii_digit) && !b[4].is_ascii_digit()
}

fn parse_strict(s: &str) -> Option<NaiveDate> {
  if !has_four_digit_year(s) {
    return None;
  }
  DAY_FORMATS
    .iter()
    .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
    .or_else(|| {
      MONTH_FORMATS.iter().find_map(|fmt| {
        NaiveDate::parse_from_str(&format!("{s}|01"), &format!("{fmt}|%d")).ok()
      })
    })
}

fn parse_loose(s: &str) -> Option<String> {
  let caps = loose_date_re().captures(s)?;
  let year = caps.get(1)?.as_str();
  let month = caps.get(2)?.as_str();
  let day = caps.get(3).map_or("01", |m| m.as_str());
  Some(format!("{year}-{month:0>2}-{day:0>2}"))
}

/// Normalize a date string to `YYYY-MM-DD`; `""` when nothing matches.
///
/// A missing day becomes `01`. The loose tier does not validate the
/// calendar, so `2024/02/30` comes back as `2024-02-30`.
pub fn normalize_date(raw: &str) -> String {
  let s = raw.trim();
  if s.is_empty() {
    return String::new();
  }
  if let Some(date) = parse_strict(s) {
    return date.format("%Y-%m-%d").to_string();
  }
  parse_loose(s).unwrap_or_default()
}

/// Parse a `Y/M/D` posting date exactly, as the clip sheet writes it.
pub fn parse_slash_date(raw: &str) -> Option<NaiveDate> {
  NaiveDate::parse_from_str(raw.trim(), "%Y/%m/%d").ok()
}
