//! Row → entity builders for the song and release sheets.
//!
//! Each builder returns `None` for rows without a name; every other field
//! degrades to its default.

use std::cmp::Reverse;

use hanokoto_core::{
  release::{Release, ReleaseKind},
  song::{AlbumRef, KindCode, Song},
};

use crate::{
  RawRow,
  count::normalize_count,
  credits::{EXPLICIT_ROLES, merge_credits, parse_credits},
  date::normalize_date,
  flags::derive_flags,
  slug::{id_slug, name_slug},
};

// ─── Column aliases ──────────────────────────────────────────────────────────

const SONG_NAME: &[&str] = &["楽曲名", "曲名", "タイトル", "name"];
const SONG_ID: &[&str] = &["ID", "id", "No", "no"];
const SONG_ALBUMS: &[&str] = &["収録", "収録(収録CD)", "album"];
const SONG_KIND: &[&str] = &["種別", "タイプ", "カテゴリ", "category", "type"];
const SONG_YOUTUBE: &[&str] = &["YouTubeリンク", "Youtubeリンク", "Youtube", "URL"];
const SONG_IMAGE: &[&str] = &["表紙", "ジャケット", "cover", "image"];
const SONG_VOCAL: &[&str] = &["ボーカル", "vocal"];
const SONG_SINGER: &[&str] = &["歌唱", "歌唱者", "歌手", "singer", "タグ", "tag"];
const SONG_CREDIT: &[&str] = &["クレジット", "credit"];

const RELEASE_NAME: &[&str] = &["名前", "title", "タイトル", "name"];
const RELEASE_DATE: &[&str] = &["リリース日", "発売日", "release_date", "date"];
const RELEASE_COMMENT: &[&str] = &["一言", "備考", "comment"];
const RELEASE_TRACKS: &[&str] = &["収録曲", "tracks"];
const RELEASE_VIDEOS: &[&str] = &["視聴動画", "video"];
const RELEASE_DESCRIPTION: &[&str] = &["説明", "description"];

const SONG_DATE: &[&str] = &["リリース日", "release_date"];

/// Display label for an empty kind column.
pub const UNKNOWN_KIND: &str = "不明";

/// Split a comma list, trimming entries and dropping empties.
pub fn split_list(raw: &str) -> Vec<String> {
  raw
    .split(|c: char| c == ',' || c == '，')
    .map(str::trim)
    .filter(|s| !s.is_empty())
    .map(str::to_string)
    .collect()
}

// ─── Songs ───────────────────────────────────────────────────────────────────

pub fn song_from_row(row: &RawRow) -> Option<Song> {
  let name = row.resolve(SONG_NAME);
  if name.is_empty() {
    return None;
  }
  let ordinal_id = normalize_count(row.resolve(SONG_ID));
  let kind_raw = row.resolve(SONG_KIND);
  let image_key = match row.resolve(SONG_IMAGE) {
    "" => name,
    key => key,
  };

  let albums = split_list(row.resolve(SONG_ALBUMS))
    .into_iter()
    .map(|name| AlbumRef { slug: name_slug(&name), name })
    .collect();

  let explicit: Vec<(&str, &str)> = EXPLICIT_ROLES
    .iter()
    .map(|&role| (role, row.resolve(&[role])))
    .collect();
  let credits = merge_credits(&explicit, parse_credits(row.resolve(SONG_CREDIT)));

  Some(Song {
    name: name.to_string(),
    slug: id_slug(name, ordinal_id),
    release_date: normalize_date(row.resolve(SONG_DATE)),
    kind: (if kind_raw.is_empty() { UNKNOWN_KIND } else { kind_raw }).to_string(),
    kind_code: KindCode::from_label(kind_raw),
    flags: derive_flags(row.resolve(SONG_SINGER)),
    ordinal_id,
    image_key: image_key.to_string(),
    albums,
    vocals: split_list(row.resolve(SONG_VOCAL)),
    youtube: row.resolve(SONG_YOUTUBE).to_string(),
    credits,
  })
}

/// Build every song and order the listing: by sheet ordinal descending when
/// any song has one, else by `(release_date, name)` descending.
pub fn read_songs(rows: &[RawRow]) -> Vec<Song> {
  let mut songs: Vec<Song> = rows.iter().filter_map(song_from_row).collect();
  if songs.iter().any(|s| s.ordinal_id != 0) {
    songs.sort_by_key(|s| Reverse(s.ordinal_id));
  } else {
    songs.sort_by(|a, b| {
      (&b.release_date, &b.name).cmp(&(&a.release_date, &a.name))
    });
  }
  songs
}

// ─── Releases ────────────────────────────────────────────────────────────────

pub fn release_from_row(row: &RawRow, kind: ReleaseKind) -> Option<Release> {
  let name = row.resolve(RELEASE_NAME);
  if name.is_empty() {
    return None;
  }
  Some(Release {
    kind,
    name: name.to_string(),
    slug: name_slug(name),
    release_date: normalize_date(row.resolve(RELEASE_DATE)),
    comment: row.resolve(RELEASE_COMMENT).to_string(),
    description: row.resolve(RELEASE_DESCRIPTION).to_string(),
    track_titles: split_list(row.resolve(RELEASE_TRACKS)),
    tracks: Vec::new(),
    videos: split_list(row.resolve(RELEASE_VIDEOS)),
  })
}

/// Build every release of one sheet, newest first. Undated releases sort
/// last.
pub fn read_releases(rows: &[RawRow], kind: ReleaseKind) -> Vec<Release> {
  let mut releases: Vec<Release> = rows
    .iter()
    .filter_map(|row| release_from_row(row, kind))
    .collect();
  releases.sort_by(|a, b| b.release_date.cmp(&a.release_date));
  releases
}

#[cfg(test)]
mod tests {
  use hanokoto_core::song::Credit;

  use super::*;
  use crate::read_rows;

  #[test]
  fn song_row_with_aliases() {
    let row = RawRow::new([
      ("No", "1,024"),
      ("曲名", " 星屑のメロディ "),
      ("収録(収録CD)", "1st Album, Single A ,"),
      ("カテゴリ", "オリジナル"),
      ("歌唱者", "Hanon / Kotoha"),
      ("リリース日", "2024/3"),
      ("作詞", "山田"),
      ("クレジット", "Lyrics:別人 Music:鈴木"),
      ("ボーカル", "Hanon,Kotoha"),
    ]);
    let song = song_from_row(&row).unwrap();
    assert_eq!(song.name, "星屑のメロディ");
    assert_eq!(song.ordinal_id, 1024);
    assert_eq!(song.slug, "1024-星屑のメロディ");
    assert_eq!(song.release_date, "2024-03-01");
    assert_eq!(song.kind_code, KindCode::Original);
    assert!(song.flags.hanon && song.flags.kotoha && !song.flags.unit);
    assert_eq!(song.image_key, "星屑のメロディ");
    assert_eq!(song.albums, vec![
      AlbumRef { name: "1st Album".into(), slug: "1st_Album".into() },
      AlbumRef { name: "Single A".into(), slug: "Single_A".into() },
    ]);
    assert_eq!(song.vocals, vec!["Hanon", "Kotoha"]);
    assert_eq!(song.credits, vec![Credit::new("作詞", "山田"), Credit::new("作曲", "鈴木")]);
  }

  #[test]
  fn song_defaults() {
    let row = RawRow::new([("name", "x"), ("id", "n/a")]);
    let song = song_from_row(&row).unwrap();
    assert_eq!(song.ordinal_id, 0);
    assert_eq!(song.slug, "x");
    assert_eq!(song.kind, UNKNOWN_KIND);
    assert_eq!(song.kind_code, KindCode::Other);
    assert_eq!(song.release_date, "");
    assert!(song.credits.is_empty());
  }

  #[test]
  fn nameless_rows_are_skipped() {
    assert!(song_from_row(&RawRow::new([("ID", "3")])).is_none());
    assert!(release_from_row(&RawRow::new([("一言", "hi")]), ReleaseKind::Single).is_none());
  }

  #[test]
  fn songs_sorted_by_ordinal_when_present() {
    let rows = read_rows("ID,楽曲名\n2,b\n10,a\n,c\n").unwrap();
    let names: Vec<_> = read_songs(&rows).into_iter().map(|s| s.name).collect();
    assert_eq!(names, ["a", "b", "c"]);
  }

  #[test]
  fn songs_sorted_by_date_then_name_without_ordinals() {
    let rows = read_rows("楽曲名,リリース日\nb,2023/1/1\na,2024/1/1\nc,2023/1/1\n").unwrap();
    let names: Vec<_> = read_songs(&rows).into_iter().map(|s| s.name).collect();
    assert_eq!(names, ["a", "c", "b"]);
  }

  #[test]
  fn release_rows() {
    let csv = "タイトル,発売日,備考,収録曲,視聴動画\n\
               Single: A,2024.5.1,初シングル,\"夜明け, 星屑のメロディ\",https://y/1\n\
               Old,,,,\n\
               New,2025/1/1,,,\n";
    let rows = read_rows(csv).unwrap();
    let releases = read_releases(&rows, ReleaseKind::Single);
    let names: Vec<_> = releases.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["New", "Single: A", "Old"]);

    let a = &releases[1];
    assert_eq!(a.slug, "Single_A");
    assert_eq!(a.release_date, "2024-05-01");
    assert_eq!(a.comment, "初シングル");
    assert_eq!(a.track_titles, vec!["夜明け", "星屑のメロディ"]);
    assert_eq!(a.videos, vec!["https://y/1"]);
    assert_eq!(a.kind, ReleaseKind::Single);
  }
}
