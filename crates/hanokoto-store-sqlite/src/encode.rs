//! Raw row types read from SQLite and their conversion into domain types.
//!
//! Columns are decoded permissively: NULL text becomes `""`, and integer
//! columns that were entered as text are parsed, falling back to `0`.

use std::collections::HashMap;

use hanokoto_core::{
  concert::{Concert, Performer, SetlistEntry, Tour},
  timeline::HistoryRecord,
};
use rusqlite::{Row, types::ValueRef};

/// Read an integer column that may hold text, a real, or NULL.
pub fn lenient_int(row: &Row<'_>, idx: usize) -> rusqlite::Result<i64> {
  Ok(match row.get_ref(idx)? {
    ValueRef::Integer(i) => i,
    ValueRef::Real(f) => f as i64,
    ValueRef::Text(t) => std::str::from_utf8(t)
      .ok()
      .and_then(|s| s.trim().parse().ok())
      .unwrap_or(0),
    ValueRef::Null | ValueRef::Blob(_) => 0,
  })
}

/// Like [`lenient_int`], but NULL stays `None`.
pub fn lenient_opt_int(row: &Row<'_>, idx: usize) -> rusqlite::Result<Option<i64>> {
  match row.get_ref(idx)? {
    ValueRef::Null => Ok(None),
    _ => lenient_int(row, idx).map(Some),
  }
}

/// Read a text column, mapping NULL to `""` and numbers to their digits.
pub fn text(row: &Row<'_>, idx: usize) -> rusqlite::Result<String> {
  Ok(match row.get_ref(idx)? {
    ValueRef::Text(t) => String::from_utf8_lossy(t).into_owned(),
    ValueRef::Integer(i) => i.to_string(),
    ValueRef::Real(f) => f.to_string(),
    ValueRef::Null | ValueRef::Blob(_) => String::new(),
  })
}

// ─── Concert hierarchy ───────────────────────────────────────────────────────

pub struct RawTour {
  pub id:         i64,
  pub name:       String,
  pub page_link:  String,
  pub goods:      String,
  pub sort_order: Option<i64>,
}

impl RawTour {
  pub fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      id:         row.get(0)?,
      name:       text(row, 1)?,
      page_link:  text(row, 2)?,
      goods:      text(row, 3)?,
      sort_order: lenient_opt_int(row, 4)?,
    })
  }
}

pub struct RawConcert {
  pub id:        i64,
  pub name:      String,
  pub date:      String,
  pub venue:     String,
  pub performer: String,
}

impl RawConcert {
  pub fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      id:        row.get(0)?,
      name:      text(row, 1)?,
      date:      text(row, 2)?,
      venue:     text(row, 3)?,
      performer: text(row, 4)?,
    })
  }
}

pub struct RawSetlist {
  pub concert_id: i64,
  pub order_no:   i64,
  pub song_title: String,
  pub singer:     String,
  pub encore:     bool,
}

impl RawSetlist {
  pub fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      concert_id: row.get(0)?,
      order_no:   lenient_int(row, 1)?,
      song_title: text(row, 2)?,
      singer:     text(row, 3)?,
      encore:     lenient_int(row, 4)? != 0,
    })
  }
}

/// One tour's rows as fetched: the tour, its concerts in `(date, id)` order,
/// and the single batch of setlist rows for all of those concerts.
pub struct RawTourBatch {
  pub tour:     RawTour,
  pub concerts: Vec<RawConcert>,
  pub setlists: Vec<RawSetlist>,
}

impl RawTourBatch {
  /// Group the setlist batch by concert and nest everything under the tour.
  ///
  /// The batch arrives ordered by `(concert_id, order_no)`, so pushing in
  /// arrival order keeps each concert's setlist ascending.
  pub fn into_tour(self) -> Tour {
    let mut by_concert: HashMap<i64, Vec<SetlistEntry>> = HashMap::new();
    for raw in self.setlists {
      by_concert.entry(raw.concert_id).or_default().push(SetlistEntry {
        order_no:   raw.order_no,
        song_title: raw.song_title,
        singer:     raw.singer,
        encore:     raw.encore,
      });
    }

    let concerts = self
      .concerts
      .into_iter()
      .map(|c| Concert {
        setlist: by_concert.remove(&c.id).unwrap_or_default(),
        performer_class: Performer::from_label(&c.performer),
        id: c.id,
        name: c.name,
        date: c.date,
        venue: c.venue,
        performer: c.performer,
      })
      .collect();

    Tour {
      id: self.tour.id,
      name: self.tour.name,
      page_link: self.tour.page_link,
      goods: self.tour.goods,
      sort_order: self.tour.sort_order,
      concerts,
    }
  }
}

// ─── History ─────────────────────────────────────────────────────────────────

pub fn history_from_row(row: &Row<'_>) -> rusqlite::Result<HistoryRecord> {
  let link = text(row, 6)?;
  Ok(HistoryRecord {
    year:           lenient_int(row, 0)?,
    month:          lenient_int(row, 1)?,
    day:            lenient_int(row, 2)?,
    classification: text(row, 3)?,
    genre:          text(row, 4)?,
    content:        text(row, 5)?,
    link:           (!link.trim().is_empty()).then_some(link),
  })
}
