//! [`SqliteStore`]: the SQLite implementation of the read-only store traits.

use std::path::Path;

use hanokoto_core::{
  concert::Tour,
  store::{ConcertStore, HistoryStore},
  timeline::HistoryRecord,
};
use rusqlite::OpenFlags;
use tracing::{debug, info};

use crate::{
  Error, Result,
  encode::{RawConcert, RawSetlist, RawTour, RawTourBatch, history_from_row},
  schema::{CONCERT_SCHEMA, HISTORY_SCHEMA},
};

/// Stand-in for an unset `sort_order`, so those tours sink to the end.
const SORT_ORDER_UNSET: i64 = i64::MAX;

const TOURS_SQL: &str = "
  SELECT id, name, page_link, goods, sort_order
  FROM tours
  ORDER BY COALESCE(sort_order, ?1), id";

const CONCERTS_SQL: &str = "
  SELECT id, name, date, venue, performer
  FROM concerts
  WHERE tour_id = ?1
  ORDER BY date, id";

const HISTORY_SQL: &str = "
  SELECT year, month, day, classification, genre, content, link
  FROM history
  ORDER BY year, month, day";

/// Setlist rows for a set of concerts, fetched in one statement.
fn setlists_sql(concert_count: usize) -> String {
  let placeholders = vec!["?"; concert_count].join(",");
  format!(
    "SELECT concert_id, order_no, song_title, singer, encore
     FROM setlists
     WHERE concert_id IN ({placeholders})
     ORDER BY concert_id, order_no"
  )
}

// ─── Query accounting ────────────────────────────────────────────────────────

/// Statements issued by one hierarchy load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QueryStats {
  pub tour_queries:    usize,
  pub concert_queries: usize,
  /// At most one per tour; tours without concerts issue none.
  pub setlist_queries: usize,
}

// ─── Store ───────────────────────────────────────────────────────────────────

/// A read-only view over one SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open an existing database read-only. A missing file is
  /// [`Error::MissingStore`]; nothing is created on disk.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref();
    if !path.is_file() {
      return Err(Error::MissingStore(path.to_path_buf()));
    }
    let conn =
      tokio_rusqlite::Connection::open_with_flags(path, OpenFlags::SQLITE_OPEN_READ_ONLY)
        .await?;
    Ok(Self { conn })
  }

  /// Open an in-memory store with both schemas applied — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    conn
      .call(|conn| {
        conn.execute_batch(CONCERT_SCHEMA)?;
        conn.execute_batch(HISTORY_SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(Self { conn })
  }

  #[cfg(test)]
  pub(crate) async fn execute_batch(&self, sql: &'static str) -> Result<()> {
    self
      .conn
      .call(move |conn| {
        conn.execute_batch(sql)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  /// Run `f` on the connection's own thread.
  #[cfg(test)]
  pub(crate) async fn with_conn<T, F>(&self, f: F) -> Result<T>
  where
    T: Send + 'static,
    F: FnOnce(&mut rusqlite::Connection) -> rusqlite::Result<T> + Send + 'static,
  {
    Ok(self.conn.call(move |conn| Ok(f(conn)?)).await?)
  }

  /// Load the tour hierarchy in two phases per tour: the concerts, then one
  /// `IN (...)` query for all of their setlist rows.
  pub async fn load_tours_with_stats(&self) -> Result<(Vec<Tour>, QueryStats)> {
    let (batches, stats) = self
      .conn
      .call(|conn| {
        let mut stats = QueryStats::default();

        let mut tour_stmt = conn.prepare(TOURS_SQL)?;
        let tours: Vec<RawTour> = tour_stmt
          .query_map(rusqlite::params![SORT_ORDER_UNSET], RawTour::from_row)?
          .collect::<rusqlite::Result<_>>()?;
        stats.tour_queries += 1;

        let mut concert_stmt = conn.prepare(CONCERTS_SQL)?;
        let mut batches = Vec::with_capacity(tours.len());
        for tour in tours {
          let concerts: Vec<RawConcert> = concert_stmt
            .query_map(rusqlite::params![tour.id], RawConcert::from_row)?
            .collect::<rusqlite::Result<_>>()?;
          stats.concert_queries += 1;

          let setlists: Vec<RawSetlist> = if concerts.is_empty() {
            Vec::new()
          } else {
            let ids: Vec<i64> = concerts.iter().map(|c| c.id).collect();
            let mut stmt = conn.prepare(&setlists_sql(ids.len()))?;
            let rows = stmt
              .query_map(rusqlite::params_from_iter(ids), RawSetlist::from_row)?
              .collect::<rusqlite::Result<Vec<_>>>()?;
            stats.setlist_queries += 1;
            rows
          };

          batches.push(RawTourBatch { tour, concerts, setlists });
        }

        Ok((batches, stats))
      })
      .await?;

    let tours: Vec<Tour> = batches.into_iter().map(RawTourBatch::into_tour).collect();
    debug!(
      tours = tours.len(),
      tour_queries = stats.tour_queries,
      concert_queries = stats.concert_queries,
      setlist_queries = stats.setlist_queries,
      "loaded concert hierarchy"
    );
    Ok((tours, stats))
  }
}

// ─── Store trait impls ───────────────────────────────────────────────────────

impl ConcertStore for SqliteStore {
  type Error = Error;

  async fn load_tours(&self) -> Result<Vec<Tour>> {
    let (tours, _) = self.load_tours_with_stats().await?;
    Ok(tours)
  }
}

impl HistoryStore for SqliteStore {
  type Error = Error;

  async fn load_history(&self) -> Result<Vec<HistoryRecord>> {
    let records = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(HISTORY_SQL)?;
        let rows = stmt
          .query_map([], history_from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;
    debug!(records = records.len(), "loaded history log");
    Ok(records)
  }
}

// ─── Path-level loaders ──────────────────────────────────────────────────────

/// Load the tour hierarchy from the file at `path`; a missing file is an
/// empty hierarchy rather than an error.
pub async fn load_tours_at(path: impl AsRef<Path>) -> Result<Vec<Tour>> {
  match SqliteStore::open(path).await {
    Ok(store) => store.load_tours().await,
    Err(Error::MissingStore(path)) => {
      info!(path = %path.display(), "no concert database; skipping concerts");
      Ok(Vec::new())
    }
    Err(e) => Err(e),
  }
}

/// Load the history log from the file at `path`; a missing file is an empty
/// log.
pub async fn load_history_at(path: impl AsRef<Path>) -> Result<Vec<HistoryRecord>> {
  match SqliteStore::open(path).await {
    Ok(store) => store.load_history().await,
    Err(Error::MissingStore(path)) => {
      info!(path = %path.display(), "no history database; skipping timeline");
      Ok(Vec::new())
    }
    Err(e) => Err(e),
  }
}
