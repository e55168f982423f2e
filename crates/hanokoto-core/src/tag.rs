//! Classification flags derived from free-text tag and singer columns.
//!
//! The flags themselves are computed by `hanokoto-sheet`; this module only
//! owns the types and the precedence rule that collapses them into a single
//! [`PrimaryTag`].

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display};

/// Performer membership indicators. Several may be set at once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClassificationFlags {
  pub unit:   bool,
  pub hanon:  bool,
  pub kotoha: bool,
}

/// The single classification a record is filed under.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum PrimaryTag {
  Unit,
  Hanon,
  Kotoha,
}

impl ClassificationFlags {
  /// Resolve the flags to one tag.
  ///
  /// `Unit` wins when the unit keyword matched or both soloists matched.
  /// Otherwise the single soloist wins; with nothing set the record falls
  /// back to `Unit`.
  pub fn primary_tag(self) -> PrimaryTag {
    match self {
      Self { unit: true, .. } | Self { hanon: true, kotoha: true, .. } => PrimaryTag::Unit,
      Self { hanon: true, .. } => PrimaryTag::Hanon,
      Self { kotoha: true, .. } => PrimaryTag::Kotoha,
      Self { .. } => PrimaryTag::Unit,
    }
  }

  pub fn is_empty(self) -> bool { !(self.unit || self.hanon || self.kotoha) }
}
