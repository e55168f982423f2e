//! Raw tabular rows and the alias-based field resolver.
//!
//! Independently maintained sheets label the same column differently
//! (`楽曲名` in one, `name` in another). Callers list every known label in
//! order of preference and take the first one carrying a value.

use csv::{ReaderBuilder, StringRecord};

use crate::Result;

/// One CSV data row keyed by its header labels, in column order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRow {
  fields: Vec<(String, String)>,
}

impl RawRow {
  pub fn new<K, V>(fields: impl IntoIterator<Item = (K, V)>) -> Self
  where
    K: Into<String>,
    V: Into<String>,
  {
    Self {
      fields: fields
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect(),
    }
  }

  /// Raw value of `label`. With duplicate headers the rightmost column wins.
  pub fn get(&self, label: &str) -> Option<&str> {
    self
      .fields
      .iter()
      .rev()
      .find(|(k, _)| k == label)
      .map(|(_, v)| v.as_str())
  }

  /// First alias whose trimmed value is non-empty, trimmed; `""` when none
  /// match. Matching is exact: variants must be listed explicitly.
  pub fn resolve(&self, aliases: &[&str]) -> &str {
    aliases
      .iter()
      .filter_map(|alias| self.get(alias))
      .map(str::trim)
      .find(|v| !v.is_empty())
      .unwrap_or("")
  }

  pub fn is_blank(&self) -> bool { self.fields.iter().all(|(_, v)| v.trim().is_empty()) }
}

/// Decode a CSV export whose first line is the header row.
///
/// Ragged rows are tolerated: missing trailing cells are simply absent and
/// cells beyond the header width are dropped. Blank rows are skipped.
pub fn read_rows(text: &str) -> Result<Vec<RawRow>> {
  let mut reader = ReaderBuilder::new()
    .flexible(true)
    .from_reader(text.as_bytes());

  let headers: Vec<String> = reader
    .headers()?
    .iter()
    .map(|h| h.trim().to_string())
    .collect();

  let mut rows = Vec::new();
  for record in reader.records() {
    let record = record?;
    let row = RawRow::new(
      headers
        .iter()
        .zip(record.iter())
        .map(|(h, v)| (h.as_str(), v)),
    );
    if !row.is_blank() {
      rows.push(row);
    }
  }
  Ok(rows)
}

/// Decode a header-less CSV file into plain cell vectors.
pub fn read_plain_rows(text: &str) -> Result<Vec<Vec<String>>> {
  let mut reader = ReaderBuilder::new()
    .has_headers(false)
    .flexible(true)
    .from_reader(text.as_bytes());

  let mut rows = Vec::new();
  for record in reader.records() {
    let record: StringRecord = record?;
    rows.push(record.iter().map(str::to_string).collect());
  }
  Ok(rows)
}

#[cfg(test)]
mod tests {
  use super::*;

  fn row() -> RawRow {
    RawRow::new([
      ("楽曲名", "   "),
      ("曲名", ""),
      ("タイトル", " 星屑のメロディ "),
      ("name", "Stardust"),
    ])
  }

  #[test]
  fn resolve_skips_blank_aliases() {
    assert_eq!(row().resolve(&["楽曲名", "曲名", "タイトル", "name"]), "星屑のメロディ");
  }

  #[test]
  fn resolve_honours_alias_order() {
    assert_eq!(row().resolve(&["name", "タイトル"]), "Stardust");
  }

  #[test]
  fn resolve_missing_labels_is_empty() {
    assert_eq!(row().resolve(&["ID", "No"]), "");
    assert_eq!(RawRow::default().resolve(&["name"]), "");
  }

  #[test]
  fn resolve_does_no_fuzzy_matching() {
    assert_eq!(row().resolve(&["Name", "NAME", " name"]), "");
  }

  #[test]
  fn read_rows_tolerates_ragged_input() {
    let csv = "名前,リリース日,一言\nA,2024/1/1\nB,2024/2/2,hi,extra\n,,\n";
    let rows = read_rows(csv).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].get("名前"), Some("A"));
    assert_eq!(rows[0].get("一言"), None);
    assert_eq!(rows[1].resolve(&["一言"]), "hi");
  }

  #[test]
  fn read_rows_handles_quoted_commas() {
    let csv = "名前,収録曲\n\"1st\",\"曲A, 曲B\"\n";
    let rows = read_rows(csv).unwrap();
    assert_eq!(rows[0].get("収録曲"), Some("曲A, 曲B"));
  }

  #[test]
  fn read_plain_rows_keeps_short_rows() {
    let rows = read_plain_rows("alice,staff\nbob\n").unwrap();
    assert_eq!(rows, vec![vec!["alice", "staff"], vec!["bob"]]);
  }
}
