//! The activity timeline built from the relational event log.
//!
//! Records are grouped classification → year → month → genre. Grouping keeps
//! first-seen order at every level, so feeding records already ordered by
//! `(year, month, day)` yields a chronological timeline.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoEnumIterator};

/// The classification shown first regardless of insertion order.
pub const PREFERRED_CLASSIFICATION: &str = "はのこと・ハコリリ";

/// Timeline column a record is filed under.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, AsRefStr,
  EnumString, EnumIter,
)]
#[serde(rename_all = "snake_case")]
pub enum Genre {
  #[strum(serialize = "主な出来事")]
  Headline,
  #[strum(serialize = "ライブ")]
  Live,
  #[strum(serialize = "動画")]
  Video,
  #[strum(serialize = "その他")]
  Other,
}

impl Genre {
  /// Unrecognised labels land in [`Genre::Other`].
  pub fn from_label(raw: &str) -> Self { raw.trim().parse().unwrap_or(Self::Other) }
}

/// One row of the `history` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRecord {
  pub year:           i64,
  pub month:          i64,
  pub day:            i64,
  pub classification: String,
  pub genre:          String,
  pub content:        String,
  pub link:           Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenreCell {
  pub genre:   Genre,
  pub records: Vec<HistoryRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthGroup {
  pub month:  i64,
  /// One cell per [`Genre`], in column order, possibly empty.
  pub genres: Vec<GenreCell>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearGroup {
  pub year:   i64,
  pub months: Vec<MonthGroup>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationGroup {
  pub classification: String,
  pub count:          usize,
  pub years:          Vec<YearGroup>,
}

impl MonthGroup {
  fn new(month: i64) -> Self {
    Self {
      month,
      genres: Genre::iter()
        .map(|genre| GenreCell { genre, records: Vec::new() })
        .collect(),
    }
  }

  fn push(&mut self, record: HistoryRecord) {
    let genre = Genre::from_label(&record.genre);
    if let Some(cell) = self.genres.iter_mut().find(|c| c.genre == genre) {
      cell.records.push(record);
    }
  }
}

/// Group history records into the timeline.
pub fn group_timeline(records: Vec<HistoryRecord>) -> Vec<ClassificationGroup> {
  let mut groups: Vec<ClassificationGroup> = Vec::new();

  for record in records {
    let found = groups
      .iter()
      .position(|g| g.classification == record.classification);
    let idx = match found {
      Some(idx) => idx,
      None => {
        groups.push(ClassificationGroup {
          classification: record.classification.clone(),
          count:          0,
          years:          Vec::new(),
        });
        groups.len() - 1
      }
    };
    let group = &mut groups[idx];
    group.count += 1;

    let found = group.years.iter().position(|y| y.year == record.year);
    let y = match found {
      Some(y) => y,
      None => {
        group.years.push(YearGroup { year: record.year, months: Vec::new() });
        group.years.len() - 1
      }
    };
    let year = &mut group.years[y];

    let found = year.months.iter().position(|m| m.month == record.month);
    let m = match found {
      Some(m) => m,
      None => {
        year.months.push(MonthGroup::new(record.month));
        year.months.len() - 1
      }
    };
    year.months[m].push(record);
  }

  if let Some(idx) = groups
    .iter()
    .position(|g| g.classification == PREFERRED_CLASSIFICATION)
  {
    let preferred = groups.remove(idx);
    groups.insert(0, preferred);
  }

  groups
}

#[cfg(test)]
mod tests {
  use super::*;

  fn record(y: i64, m: i64, d: i64, class: &str, genre: &str) -> HistoryRecord {
    HistoryRecord {
      year:           y,
      month:          m,
      day:            d,
      classification: class.into(),
      genre:          genre.into(),
      content:        format!("{y}-{m}-{d}"),
      link:           None,
    }
  }

  #[test]
  fn genre_labels_parse_with_default() {
    assert_eq!(Genre::from_label("ライブ"), Genre::Live);
    assert_eq!(Genre::from_label("主な出来事"), Genre::Headline);
    assert_eq!(Genre::from_label("グッズ"), Genre::Other);
    assert_eq!(Genre::Video.to_string(), "動画");
  }

  #[test]
  fn preferred_classification_moves_first() {
    let groups = group_timeline(vec![
      record(2023, 1, 1, "Hanon", "動画"),
      record(2023, 2, 1, PREFERRED_CLASSIFICATION, "ライブ"),
      record(2023, 3, 1, "Kotoha", "動画"),
    ]);
    let names: Vec<_> = groups.iter().map(|g| g.classification.as_str()).collect();
    assert_eq!(names, [PREFERRED_CLASSIFICATION, "Hanon", "Kotoha"]);
  }

  #[test]
  fn records_grouped_by_year_month_and_genre() {
    let groups = group_timeline(vec![
      record(2023, 4, 1, "Hanon", "動画"),
      record(2023, 4, 9, "Hanon", "ライブ"),
      record(2023, 4, 20, "Hanon", "動画"),
      record(2024, 1, 3, "Hanon", "謎"),
    ]);
    assert_eq!(groups.len(), 1);
    let hanon = &groups[0];
    assert_eq!(hanon.count, 4);
    assert_eq!(hanon.years.len(), 2);

    let april = &hanon.years[0].months[0];
    assert_eq!(april.month, 4);
    assert_eq!(april.genres.len(), 4);
    let video = april.genres.iter().find(|c| c.genre == Genre::Video).unwrap();
    assert_eq!(video.records.len(), 2);
    assert_eq!(video.records[0].day, 1);
    assert_eq!(video.records[1].day, 20);

    let jan = &hanon.years[1].months[0];
    let other = jan.genres.iter().find(|c| c.genre == Genre::Other).unwrap();
    assert_eq!(other.records.len(), 1);
  }

  #[test]
  fn empty_log_yields_empty_timeline() {
    assert!(group_timeline(Vec::new()).is_empty());
  }
}
