//! Loose title keys and the song cross-reference index.
//!
//! Release track lists and the song sheet are edited separately, so the same
//! song drifts: a trailing space, a full-width `！`, brackets around a
//! subtitle. [`normalize_title`] folds those differences away and
//! [`TitleIndex`] maps the folded key to the song's slug.

use std::collections::HashMap;

use hanokoto_core::{
  release::{Release, TrackLink},
  song::Song,
};

/// Punctuation, bracket and quote characters dropped from title keys, in
/// half- and full-width forms.
const IGNORED_CHARS: &[char] = &[
  '\\', '/', ':', '：', '*', '?', '？', '"', '<', '>', '|', '(', ')', '（', '）', '[', ']',
  '{', '}', '【', '】', '「', '」', '『', '』', '・', '･', '、', ',', '，', '。', '.', '!',
  '！', '\'', '～', '〜', '-', '–', '—', '_', '^', '`',
];

/// Fold `s` into a lookup key: lowercase, no whitespace, no punctuation.
pub fn normalize_title(s: &str) -> String {
  s.trim()
    .to_lowercase()
    .chars()
    .filter(|c| !c.is_whitespace() && !IGNORED_CHARS.contains(c))
    .collect()
}

/// A key claimed by more than one song; the later song won.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleCollision {
  pub key:      String,
  pub replaced: String,
  pub winner:   String,
}

/// Normalized title → song slug.
#[derive(Debug, Clone, Default)]
pub struct TitleIndex {
  slugs:      HashMap<String, String>,
  collisions: Vec<TitleCollision>,
}

impl TitleIndex {
  /// Index `(title, slug)` pairs. On a key collision the later pair
  /// overwrites the earlier one; the overwrite is recorded, not rejected.
  pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
    let mut index = Self::default();
    for (title, slug) in pairs {
      let key = normalize_title(title);
      if key.is_empty() {
        continue;
      }
      if let Some(previous) = index.slugs.insert(key.clone(), slug.to_string())
        && previous != slug
      {
        index.collisions.push(TitleCollision {
          key,
          replaced: previous,
          winner: slug.to_string(),
        });
      }
    }
    index
  }

  pub fn build(songs: &[Song]) -> Self {
    Self::from_pairs(songs.iter().map(|s| (s.name.as_str(), s.slug.as_str())))
  }

  /// Slug of the song whose title folds to the same key as `raw_title`.
  pub fn resolve(&self, raw_title: &str) -> Option<&str> {
    self
      .slugs
      .get(&normalize_title(raw_title))
      .map(String::as_str)
  }

  pub fn collisions(&self) -> &[TitleCollision] { &self.collisions }

  pub fn len(&self) -> usize { self.slugs.len() }

  pub fn is_empty(&self) -> bool { self.slugs.is_empty() }
}

/// Resolve every track title of `release`; unresolved titles stay unlinked.
pub fn link_tracks(release: Release, index: &TitleIndex) -> Release {
  let tracks = release
    .track_titles
    .iter()
    .map(|title| TrackLink {
      title:     title.clone(),
      song_slug: index.resolve(title).map(str::to_string),
    })
    .collect();
  Release { tracks, ..release }
}

#[cfg(test)]
mod tests {
  use hanokoto_core::release::ReleaseKind;

  use super::*;

  #[test]
  fn folding_removes_case_space_and_punctuation() {
    assert_eq!(normalize_title(" Hello, World! "), "helloworld");
    assert_eq!(normalize_title("星屑の　メロディ（Acoustic）"), "星屑のメロディacoustic");
    assert_eq!(normalize_title("「夜明け」～Re:Birth～"), "夜明けrebirth");
  }

  #[test]
  fn trivially_divergent_titles_resolve_to_same_slug() {
    let index = TitleIndex::from_pairs([("星屑のメロディ", "12-星屑のメロディ")]);
    assert_eq!(index.resolve("星屑のメロディ"), Some("12-星屑のメロディ"));
    assert_eq!(index.resolve("星屑のメロディ "), Some("12-星屑のメロディ"));
    assert_eq!(index.resolve("星屑のメロディ！"), Some("12-星屑のメロディ"));
    assert_eq!(index.resolve("別の曲"), None);
  }

  #[test]
  fn later_entry_wins_on_collision() {
    let index = TitleIndex::from_pairs([
      ("Twin Song", "1-Twin_Song"),
      ("twin song!", "9-twin_song!"),
    ]);
    assert_eq!(index.len(), 1);
    assert_eq!(index.resolve("TWIN SONG"), Some("9-twin_song!"));
    assert_eq!(index.collisions(), &[TitleCollision {
      key:      "twinsong".into(),
      replaced: "1-Twin_Song".into(),
      winner:   "9-twin_song!".into(),
    }]);
  }

  #[test]
  fn empty_keys_are_not_indexed() {
    let index = TitleIndex::from_pairs([("！？", "1-x")]);
    assert!(index.is_empty());
    assert_eq!(index.resolve(""), None);
  }

  #[test]
  fn link_tracks_keeps_unresolved_titles() {
    let index = TitleIndex::from_pairs([("夜明け", "3-夜明け")]);
    let release = Release {
      kind:         ReleaseKind::Album,
      name:         "1st".into(),
      slug:         "1st".into(),
      release_date: String::new(),
      comment:      String::new(),
      description:  String::new(),
      track_titles: vec!["夜明け ".into(), "Bonus Track".into()],
      tracks:       Vec::new(),
      videos:       Vec::new(),
    };
    let linked = link_tracks(release, &index);
    assert_eq!(linked.tracks, vec![
      TrackLink { title: "夜明け ".into(), song_slug: Some("3-夜明け".into()) },
      TrackLink { title: "Bonus Track".into(), song_slug: None },
    ]);
  }
}
