//! Songs from the release-song sheet.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display};

use crate::tag::ClassificationFlags;

/// Coarse song kind decoded from the free-text kind column.
#[derive(
  Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum KindCode {
  Original,
  Cover,
  #[default]
  Other,
}

impl KindCode {
  /// Decode a kind label such as `オリジナル`, `Cover` or `ori.`.
  pub fn from_label(raw: &str) -> Self {
    let lower = raw.trim().to_lowercase();
    if raw.contains("オリ") || lower.contains("original") || lower.starts_with("ori") {
      Self::Original
    } else if raw.contains("カバ") || lower.contains("cover") {
      Self::Cover
    } else {
      Self::Other
    }
  }
}

/// One `(role, value)` pair of a song's credits, e.g. `作詞` / `山田太郎`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credit {
  pub role:  String,
  pub value: String,
}

impl Credit {
  pub fn new(role: impl Into<String>, value: impl Into<String>) -> Self {
    Self { role: role.into(), value: value.into() }
  }
}

/// A release the song appears on, with the slug of its detail page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlbumRef {
  pub name: String,
  pub slug: String,
}

/// A fully normalized song. Identity is `slug`, derived from
/// `(name, ordinal_id)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
  pub name:         String,
  pub slug:         String,
  /// `YYYY-MM-DD`, or empty when the sheet had no usable date.
  pub release_date: String,
  /// Raw kind label for display; `不明` when the column was empty.
  pub kind:         String,
  pub kind_code:    KindCode,
  pub flags:        ClassificationFlags,
  /// Sheet ordinal; `0` when absent.
  pub ordinal_id:   i64,
  /// Key of the jacket image under `image/CD/`.
  pub image_key:    String,
  pub albums:       Vec<AlbumRef>,
  pub vocals:       Vec<String>,
  pub youtube:      String,
  /// Explicit credit columns first, then the parsed free-text credits.
  pub credits:      Vec<Credit>,
}
