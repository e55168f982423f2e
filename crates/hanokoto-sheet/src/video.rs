//! Video-sheet listings: the cover catalog, rankings, and clips.

use std::cmp::Reverse;

use hanokoto_core::video::{
  ClipCategory, ClipGroup, ClipVideo, CoverVideo, NearMillion, TrendingVideo,
};

use crate::{RawRow, count::normalize_count, date, flags::derive_flags};

/// Threshold the near-million ranking counts down to.
pub const MILLION: i64 = 1_000_000;

/// Title shown when the sheet row has none.
pub const UNKNOWN_TITLE: &str = "(タイトル不明)";

fn title_of(row: &RawRow) -> String {
  match row.resolve(&["タイトル"]) {
    "" => UNKNOWN_TITLE.to_string(),
    title => title.to_string(),
  }
}

/// Every cover with its classification flags and primary tag.
pub fn cover_catalog(rows: &[RawRow]) -> Vec<CoverVideo> {
  rows
    .iter()
    .filter_map(|row| {
      let video_id = row.resolve(&["動画ID", "video_id"]);
      if video_id.is_empty() {
        return None;
      }
      let flags = derive_flags(row.resolve(&["タグ", "tag"]));
      Some(CoverVideo {
        video_id: video_id.to_string(),
        title: title_of(row),
        date: date::normalize_date(row.resolve(&["投稿日", "投稿日（日本時間）", "投稿日時"])),
        views: normalize_count(row.resolve(&["再生数", "現在再生数"])),
        flags,
        primary_tag: flags.primary_tag(),
      })
    })
    .collect()
}

/// Covers at or under one million views, closest to the mark first.
pub fn near_million(rows: &[RawRow], top_n: usize) -> Vec<NearMillion> {
  let mut out: Vec<NearMillion> = rows
    .iter()
    .filter_map(|row| {
      let video_id = row.resolve(&["動画ID"]);
      let views = normalize_count(row.resolve(&["再生数"]));
      if video_id.is_empty() || views > MILLION {
        return None;
      }
      Some(NearMillion {
        video_id: video_id.to_string(),
        title: title_of(row),
        views,
        date: row.resolve(&["投稿日（日本時間）"]).to_string(),
        gap_to_million: MILLION - views,
      })
    })
    .collect();
  out.sort_by_key(|v| (v.gap_to_million, Reverse(v.views)));
  out.truncate(top_n);
  out
}

/// Videos by view increase, largest first; `top_n = None` keeps all.
pub fn trending(rows: &[RawRow], top_n: Option<usize>) -> Vec<TrendingVideo> {
  let mut out: Vec<TrendingVideo> = rows
    .iter()
    .filter_map(|row| {
      let video_id = row.resolve(&["動画ID"]);
      if video_id.is_empty() {
        return None;
      }
      Some(TrendingVideo {
        video_id: video_id.to_string(),
        title: title_of(row),
        increase: normalize_count(row.resolve(&["増加数"])),
        current_views: normalize_count(row.resolve(&["現在再生数"])),
        date: row.resolve(&["投稿日"]).to_string(),
        channel: row.resolve(&["チャンネル"]).to_string(),
      })
    })
    .collect();
  out.sort_by_key(|v| Reverse(v.increase));
  if let Some(n) = top_n {
    out.truncate(n);
  }
  out
}

/// Clips grouped by category in first-seen order, each group newest first.
/// Clips whose date does not parse sort after every dated clip.
pub fn clips(rows: &[RawRow]) -> Vec<ClipGroup> {
  let mut groups: Vec<ClipGroup> = Vec::new();
  for row in rows {
    let video_id = row.resolve(&["video_id"]);
    if video_id.is_empty() {
      continue;
    }
    let category = ClipCategory::from_label(row.resolve(&["種類"]));
    let raw_date = row.resolve(&["投稿日時"]);
    let clip = ClipVideo {
      video_id: video_id.to_string(),
      title:    row.resolve(&["タイトル"]).to_string(),
      date:     raw_date.to_string(),
      iso_date: date::parse_slash_date(raw_date)
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default(),
    };
    match groups.iter_mut().find(|g| g.category == category) {
      Some(group) => group.clips.push(clip),
      None => groups.push(ClipGroup {
        token: category.token(),
        category,
        clips: vec![clip],
      }),
    }
  }
  for group in &mut groups {
    group.clips.sort_by(|a, b| b.iso_date.cmp(&a.iso_date));
  }
  groups
}
