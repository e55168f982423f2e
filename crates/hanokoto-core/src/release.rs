//! Albums and singles.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, AsRefStr)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ReleaseKind {
  Album,
  Single,
}

impl ReleaseKind {
  /// Page label used by the rendering stage.
  pub fn label(self) -> &'static str {
    match self {
      Self::Album => "アルバム",
      Self::Single => "シングル",
    }
  }
}

/// A track-list entry, linked to a song page when the title resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackLink {
  pub title:     String,
  pub song_slug: Option<String>,
}

/// A normalized album or single. `slug` is derived from `name` alone, so two
/// releases sharing a name share a slug.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Release {
  pub kind:         ReleaseKind,
  pub name:         String,
  pub slug:         String,
  pub release_date: String,
  pub comment:      String,
  pub description:  String,
  /// Raw titles in sheet order.
  pub track_titles: Vec<String>,
  /// Filled in by the pipeline once the title index exists.
  #[serde(default)]
  pub tracks:       Vec<TrackLink>,
  pub videos:       Vec<String>,
}
