//! Stable, filesystem-safe page identifiers.
//!
//! Published URLs are built from these, so the output for a given input must
//! never change between runs.

use std::sync::OnceLock;

use regex::Regex;

/// Characters no file name may contain on Windows.
pub const ILLEGAL_CHARS: [char; 9] = ['\\', '/', ':', '*', '?', '"', '<', '>', '|'];

/// Placeholder for names that sanitize to nothing.
pub const UNTITLED: &str = "untitled";

fn whitespace_re() -> &'static Regex {
  static WHITESPACE_RE: OnceLock<Regex> = OnceLock::new();
  WHITESPACE_RE.get_or_init(|| Regex::new(r"\s+").expect("valid whitespace regex"))
}

fn sanitize(name: &str) -> String {
  let stripped: String = name
    .trim()
    .chars()
    .filter(|c| !ILLEGAL_CHARS.contains(c))
    .collect();
  whitespace_re().replace_all(&stripped, "_").into_owned()
}

/// Slug from the name alone; used for release pages.
pub fn name_slug(name: &str) -> String {
  let base = sanitize(name);
  if base.is_empty() { UNTITLED.to_string() } else { base }
}

/// Slug prefixed with `"{ordinal_id}-"` when the id is positive; used for
/// song pages. A non-positive id gives exactly [`name_slug`].
pub fn id_slug(name: &str, ordinal_id: i64) -> String {
  let base = name_slug(name);
  if ordinal_id > 0 { format!("{ordinal_id}-{base}") } else { base }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn strips_illegal_and_collapses_whitespace() {
    assert_eq!(name_slug("  A/B: C*D?  E  "), "AB_CD_E");
    assert_eq!(name_slug("星屑の　メロディ"), "星屑の_メロディ");
    assert_eq!(name_slug(r#"<"quoted"|\path>"#), "quotedpath");
  }

  #[test]
  fn empty_maps_to_placeholder() {
    assert_eq!(name_slug(""), UNTITLED);
    assert_eq!(name_slug(" /:* "), UNTITLED);
  }

  #[test]
  fn no_illegal_chars_survive() {
    for name in ["a\\b", "c/d", "e:f", "g*h", "i?j", "k\"l", "m<n", "o>p", "q|r", "\\/:*?\"<>|"] {
      let slug = name_slug(name);
      assert!(!slug.contains(&ILLEGAL_CHARS[..]), "{slug:?}");
      assert_eq!(slug, name_slug(name));
    }
  }

  #[test]
  fn id_slug_policies() {
    assert_eq!(id_slug("星屑のメロディ", 0), name_slug("星屑のメロディ"));
    assert_eq!(id_slug("Song Title", -3), "Song_Title");
    assert_eq!(id_slug("Song Title", 7), "7-Song_Title");
    assert!(id_slug("x", 7).starts_with("7-"));
    assert_eq!(id_slug("", 7), "7-untitled");
  }
}
