//! Video listings: the cover catalog, rankings, and fan-made clips.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display};

use crate::tag::{ClassificationFlags, PrimaryTag};

/// A row of the all-covers sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverVideo {
  pub video_id:    String,
  pub title:       String,
  pub date:        String,
  pub views:       i64,
  pub flags:       ClassificationFlags,
  pub primary_tag: PrimaryTag,
}

/// A cover still under one million views, ranked by distance to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NearMillion {
  pub video_id:       String,
  pub title:          String,
  pub views:          i64,
  pub date:           String,
  pub gap_to_million: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendingVideo {
  pub video_id:      String,
  pub title:         String,
  pub increase:      i64,
  pub current_views: i64,
  pub date:          String,
  pub channel:       String,
}

/// Clip category as labelled in the clip sheet.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "label", rename_all = "snake_case")]
pub enum ClipCategory {
  Named(String),
  /// Empty cell or the literal `その他`.
  Other,
}

/// Filter token shared by the rendered clip list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, AsRefStr)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ClipToken {
  Hanokoto,
  Hanopi,
  Kotomemo,
  Other,
}

impl ClipCategory {
  pub fn from_label(raw: &str) -> Self {
    match raw.trim() {
      "" | "その他" => Self::Other,
      label => Self::Named(label.to_string()),
    }
  }

  pub fn label(&self) -> &str {
    match self {
      Self::Named(label) => label,
      Self::Other => "その他",
    }
  }

  pub fn token(&self) -> ClipToken {
    match self.label() {
      "はのこと" => ClipToken::Hanokoto,
      "見どころはのぴ" => ClipToken::Hanopi,
      "ことメモ" => ClipToken::Kotomemo,
      _ => ClipToken::Other,
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClipVideo {
  pub video_id: String,
  pub title:    String,
  /// Posting date as written in the sheet.
  pub date:     String,
  /// `YYYY-MM-DD` when the posting date parsed strictly, else empty.
  pub iso_date: String,
}

/// Clips of one category, newest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClipGroup {
  pub category: ClipCategory,
  pub token:    ClipToken,
  pub clips:    Vec<ClipVideo>,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn empty_category_is_other() {
    let cat = ClipCategory::from_label("  ");
    assert_eq!(cat, ClipCategory::Other);
    assert_eq!(cat.label(), "その他");
    assert_eq!(cat.token(), ClipToken::Other);
  }

  #[test]
  fn known_categories_map_to_tokens() {
    assert_eq!(ClipCategory::from_label("はのこと").token(), ClipToken::Hanokoto);
    assert_eq!(ClipCategory::from_label("見どころはのぴ").token(), ClipToken::Hanopi);
    assert_eq!(ClipCategory::from_label("ことメモ").token(), ClipToken::Kotomemo);
    assert_eq!(ClipCategory::from_label("歌枠").token(), ClipToken::Other);
  }

  #[test]
  fn literal_other_label_is_the_default_group() {
    assert_eq!(ClipCategory::from_label("その他"), ClipCategory::Other);
  }
}
