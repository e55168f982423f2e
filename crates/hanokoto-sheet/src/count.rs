//! Locale-formatted count parsing (`1,234回` → `1234`).

/// Unit words that may trail a count.
const UNIT_SUFFIXES: [&str; 2] = ["回", "views"];

/// Parse a count, returning `0` for anything that is not an integer once
/// separators, whitespace and a trailing unit word are removed.
pub fn normalize_count(raw: &str) -> i64 {
  let mut s: String = raw
    .chars()
    .filter(|c| !matches!(c, ',' | '，') && !c.is_whitespace())
    .collect();
  for suffix in UNIT_SUFFIXES {
    if let Some(stripped) = s.strip_suffix(suffix) {
      s = stripped.to_string();
      break;
    }
  }
  s.parse().unwrap_or(0)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn thousands_separators_and_unit() {
    assert_eq!(normalize_count("1,234回"), 1234);
    assert_eq!(normalize_count("1,234,567"), 1_234_567);
    assert_eq!(normalize_count(" 12 345 "), 12345);
    assert_eq!(normalize_count("１０，０００"), 0);
    assert_eq!(normalize_count("10，000 views"), 10000);
  }

  #[test]
  fn failures_are_zero() {
    assert_eq!(normalize_count(""), 0);
    assert_eq!(normalize_count("abc"), 0);
    assert_eq!(normalize_count("12abc"), 0);
    assert_eq!(normalize_count("回"), 0);
  }

  #[test]
  fn signs_are_kept() {
    assert_eq!(normalize_count("-42"), -42);
  }
}
