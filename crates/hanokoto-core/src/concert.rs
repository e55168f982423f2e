//! The tour → concert → setlist hierarchy read from the concert database.
//!
//! Every level is assembled once by the store and never mutated afterwards.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display};

/// Who performed a concert, decoded from the `performer` column.
#[derive(
  Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Performer {
  Unit,
  Hanon,
  Kotoha,
  #[default]
  Unknown,
}

impl Performer {
  pub fn from_label(raw: &str) -> Self {
    match raw.trim() {
      "Hanon" => Self::Hanon,
      "Kotoha" => Self::Kotoha,
      "はのこと/ハコリリ" => Self::Unit,
      _ => Self::Unknown,
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetlistEntry {
  pub order_no:   i64,
  pub song_title: String,
  pub singer:     String,
  pub encore:     bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Concert {
  pub id:        i64,
  pub name:      String,
  pub date:      String,
  pub venue:     String,
  /// Raw performer label.
  pub performer: String,
  pub performer_class: Performer,
  /// Ordered by `order_no` ascending.
  pub setlist:   Vec<SetlistEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tour {
  pub id:         i64,
  pub name:       String,
  pub page_link:  String,
  pub goods:      String,
  pub sort_order: Option<i64>,
  /// Ordered by `(date, id)`.
  pub concerts:   Vec<Concert>,
}
