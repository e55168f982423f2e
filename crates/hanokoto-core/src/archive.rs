//! [`Archive`]: everything one generation run hands to the renderer.

use serde::{Deserialize, Serialize};

use crate::{
  concert::Tour,
  release::Release,
  song::Song,
  thanks::ThanksSection,
  timeline::ClassificationGroup,
  video::{ClipGroup, CoverVideo, NearMillion, TrendingVideo},
};

/// The normalized entity collections of one run. Any collection may be empty
/// when its source was unavailable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Archive {
  pub songs:         Vec<Song>,
  pub albums:        Vec<Release>,
  pub singles:       Vec<Release>,
  pub cover_catalog: Vec<CoverVideo>,
  pub near_million:  Vec<NearMillion>,
  pub trending:      Vec<TrendingVideo>,
  pub clips:         Vec<ClipGroup>,
  pub tours:         Vec<Tour>,
  pub timeline:      Vec<ClassificationGroup>,
  pub thanks:        Vec<ThanksSection>,
}
