//! One generation run: gather every source, normalize, cross-link.

use std::{io, path::Path, time::Duration};

use hanokoto_core::{
  Archive,
  concert::Tour,
  release::ReleaseKind,
  thanks::ThanksSection,
  timeline::{HistoryRecord, group_timeline},
};
use hanokoto_sheet::{
  RawRow, TitleIndex, ingest, thanks::read_thanks, title::link_tracks, video,
};
use hanokoto_store_sqlite::{load_history_at, load_tours_at};
use tracing::{info, warn};

use crate::{config::GeneratorConfig, fetch::SheetClient};

/// Everything read from the outside world, before normalization.
#[derive(Debug, Default)]
pub struct Sources {
  pub songs:      Vec<RawRow>,
  pub albums:     Vec<RawRow>,
  pub singles:    Vec<RawRow>,
  pub covers:     Vec<RawRow>,
  pub covers_all: Vec<RawRow>,
  pub trending:   Vec<RawRow>,
  pub clips:      Vec<RawRow>,
  pub thanks:     Vec<ThanksSection>,
  pub history:    Vec<HistoryRecord>,
  pub tours:      Vec<Tour>,
}

/// Fetch every source concurrently. Failures are logged per source and leave
/// that source empty.
pub async fn gather(config: &GeneratorConfig) -> anyhow::Result<Sources> {
  let client = SheetClient::new(Duration::from_secs(config.fetch_timeout_secs))?;
  let sheets = &config.sheets;

  let (songs, albums, singles, covers, covers_all, trending, clips, thanks, history, tours) = tokio::join!(
    client.fetch_rows("songs", sheets.songs.as_deref()),
    client.fetch_rows("albums", sheets.albums.as_deref()),
    client.fetch_rows("singles", sheets.singles.as_deref()),
    client.fetch_rows("covers", sheets.covers.as_deref()),
    client.fetch_rows("covers_all", sheets.covers_all.as_deref()),
    client.fetch_rows("trending", sheets.trending.as_deref()),
    client.fetch_rows("clips", sheets.clips.as_deref()),
    load_thanks(&config.thanks_csv),
    load_history(&config.history_db),
    load_tours(&config.concert_db),
  );

  Ok(Sources {
    songs,
    albums,
    singles,
    covers,
    covers_all,
    trending,
    clips,
    thanks,
    history,
    tours,
  })
}

/// Normalize and cross-link gathered sources into the archive.
pub fn assemble(sources: Sources, near_million_top_n: usize) -> Archive {
  let songs = ingest::read_songs(&sources.songs);

  let index = TitleIndex::build(&songs);
  for collision in index.collisions() {
    warn!(
      key = %collision.key,
      replaced = %collision.replaced,
      winner = %collision.winner,
      "song titles collide after normalization"
    );
  }

  let link = |rows: &[RawRow], kind: ReleaseKind| {
    ingest::read_releases(rows, kind)
      .into_iter()
      .map(|release| link_tracks(release, &index))
      .collect::<Vec<_>>()
  };
  let albums = link(&sources.albums, ReleaseKind::Album);
  let singles = link(&sources.singles, ReleaseKind::Single);

  Archive {
    songs,
    albums,
    singles,
    cover_catalog: video::cover_catalog(&sources.covers_all),
    near_million: video::near_million(&sources.covers, near_million_top_n),
    trending: video::trending(&sources.trending, None),
    clips: video::clips(&sources.clips),
    tours: sources.tours,
    timeline: group_timeline(sources.history),
    thanks: sources.thanks,
  }
}

/// Gather and assemble in one step.
pub async fn build_archive(config: &GeneratorConfig) -> anyhow::Result<Archive> {
  let sources = gather(config).await?;
  let archive = assemble(sources, config.near_million_top_n);
  info!(
    songs = archive.songs.len(),
    albums = archive.albums.len(),
    singles = archive.singles.len(),
    tours = archive.tours.len(),
    "archive assembled"
  );
  Ok(archive)
}

// ─── Local sources ───────────────────────────────────────────────────────────

async fn load_thanks(path: &Path) -> Vec<ThanksSection> {
  let text = match tokio::fs::read_to_string(path).await {
    Ok(text) => text,
    Err(e) if e.kind() == io::ErrorKind::NotFound => {
      info!(path = %path.display(), "no thanks file; skipping");
      return Vec::new();
    }
    Err(e) => {
      warn!(path = %path.display(), error = %e, "failed to read thanks file");
      return Vec::new();
    }
  };

  match read_thanks(&text) {
    Ok(sections) => sections,
    Err(e) => {
      warn!(path = %path.display(), error = %e, "failed to parse thanks file");
      Vec::new()
    }
  }
}

async fn load_history(path: &Path) -> Vec<HistoryRecord> {
  match load_history_at(path).await {
    Ok(records) => {
      info!(records = records.len(), "loaded history");
      records
    }
    Err(e) => {
      warn!(path = %path.display(), error = %e, "failed to load history");
      Vec::new()
    }
  }
}

async fn load_tours(path: &Path) -> Vec<Tour> {
  match load_tours_at(path).await {
    Ok(tours) => {
      info!(tours = tours.len(), "loaded concerts");
      tours
    }
    Err(e) => {
      warn!(path = %path.display(), error = %e, "failed to load concerts");
      Vec::new()
    }
  }
}

#[cfg(test)]
mod tests {
  use hanokoto_core::PrimaryTag;

  use super::*;

  fn rows(csv: &str) -> Vec<RawRow> { hanokoto_sheet::read_rows(csv).unwrap() }

  #[test]
  fn empty_sources_give_empty_archive() {
    assert_eq!(assemble(Sources::default(), 10), Archive::default());
  }

  #[test]
  fn release_tracks_link_to_songs() {
    let sources = Sources {
      songs: rows("ID,楽曲名\n1,星屑のメロディ\n2,Blue Sky\n"),
      albums: rows("名前,リリース日,収録曲\nFirst,2024/1/1,\"星屑のメロディ！,blue sky,Unknown\"\n"),
      ..Sources::default()
    };

    let archive = assemble(sources, 10);
    let tracks = &archive.albums[0].tracks;
    assert_eq!(tracks.len(), 3);
    assert_eq!(tracks[0].song_slug.as_deref(), Some("1-星屑のメロディ"));
    assert_eq!(tracks[1].song_slug.as_deref(), Some("2-Blue_Sky"));
    assert_eq!(tracks[2].song_slug, None);
    assert_eq!(archive.albums[0].kind, ReleaseKind::Album);
  }

  #[test]
  fn video_sections_follow_their_sheets() {
    let sources = Sources {
      covers: rows("動画ID,タイトル,再生数\na,near,\"999,000\"\nb,over,\"1,200,000\"\n"),
      covers_all: rows("動画ID,タイトル,タグ\nc,duet,はのこと\n"),
      ..Sources::default()
    };

    let archive = assemble(sources, 10);
    assert_eq!(archive.near_million.len(), 1);
    assert_eq!(archive.near_million[0].gap_to_million, 1_000);
    assert_eq!(archive.cover_catalog[0].primary_tag, PrimaryTag::Unit);
  }

  #[tokio::test]
  async fn missing_local_sources_are_empty() {
    let dir = tempfile::tempdir().unwrap();
    let config = GeneratorConfig {
      history_db: dir.path().join("history.db"),
      concert_db: dir.path().join("X_concert.db"),
      thanks_csv: dir.path().join("thanks.csv"),
      ..GeneratorConfig::default()
    };

    let archive = build_archive(&config).await.unwrap();
    assert_eq!(archive, Archive::default());
  }

  #[tokio::test]
  async fn thanks_file_is_read() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("thanks.csv");
    std::fs::write(&path, "Alice,Staff\nBob,\n").unwrap();

    let sections = load_thanks(&path).await;
    assert_eq!(sections.len(), 2);
    assert_eq!(sections[0].names, ["Alice"]);
  }
}
