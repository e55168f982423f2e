//! Fetching published spreadsheets as CSV.

use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use hanokoto_sheet::{RawRow, read_rows};
use reqwest::Client;
use tracing::{info, warn};

/// Rewrite a spreadsheet edit URL into its CSV export URL.
///
/// The tab is taken from `gid=` (up to `&` or `#`), defaulting to `0`.
/// Returns `None` when the URL has no `/d/<id>` segment.
pub fn export_url(edit_url: &str) -> Option<String> {
  let (_, after) = edit_url.split_once("/d/")?;
  let id = after.split('/').next().unwrap_or_default();
  if id.is_empty() {
    return None;
  }

  let gid = edit_url
    .split_once("gid=")
    .map(|(_, rest)| rest.split(['&', '#']).next().unwrap_or_default())
    .filter(|gid| !gid.is_empty())
    .unwrap_or("0");

  Some(format!(
    "https://docs.google.com/spreadsheets/d/{id}/export?format=csv&gid={gid}"
  ))
}

/// HTTP client for sheet exports.
///
/// Cheap to clone — the inner [`reqwest::Client`] is `Arc`-based.
#[derive(Clone)]
pub struct SheetClient {
  client: Client,
}

impl SheetClient {
  pub fn new(timeout: Duration) -> Result<Self> {
    let client = Client::builder()
      .timeout(timeout)
      .build()
      .context("failed to build HTTP client")?;
    Ok(Self { client })
  }

  /// Fetch one sheet. Every failure is logged and yields no rows, so one
  /// broken source never takes down the rest of the build.
  pub async fn fetch_rows(&self, sheet: &str, edit_url: Option<&str>) -> Vec<RawRow> {
    let Some(edit_url) = edit_url else {
      info!(sheet, "no URL configured; section left empty");
      return Vec::new();
    };

    match self.try_fetch(edit_url).await {
      Ok(rows) => {
        info!(sheet, rows = rows.len(), "fetched sheet");
        rows
      }
      Err(e) => {
        warn!(sheet, error = %format!("{e:#}"), "sheet fetch failed");
        Vec::new()
      }
    }
  }

  async fn try_fetch(&self, edit_url: &str) -> Result<Vec<RawRow>> {
    let url =
      export_url(edit_url).ok_or_else(|| anyhow!("not a spreadsheet URL: {edit_url}"))?;

    let resp = self
      .client
      .get(&url)
      .send()
      .await
      .with_context(|| format!("GET {url} failed"))?;

    if !resp.status().is_success() {
      return Err(anyhow!("GET {url} → {}", resp.status()));
    }

    let body = resp.bytes().await.context("reading sheet body")?;
    let text = String::from_utf8_lossy(&body);
    read_rows(&text).context("decoding sheet CSV")
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn export_url_with_gid() {
    let url = "https://docs.google.com/spreadsheets/d/1AbC/edit?gid=42#gid=42";
    assert_eq!(
      export_url(url).as_deref(),
      Some("https://docs.google.com/spreadsheets/d/1AbC/export?format=csv&gid=42")
    );
  }

  #[test]
  fn export_url_gid_stops_at_ampersand() {
    let url = "https://docs.google.com/spreadsheets/d/xyz/edit?gid=7&usp=sharing";
    assert_eq!(
      export_url(url).as_deref(),
      Some("https://docs.google.com/spreadsheets/d/xyz/export?format=csv&gid=7")
    );
  }

  #[test]
  fn export_url_defaults_gid_to_zero() {
    let url = "https://docs.google.com/spreadsheets/d/xyz/edit";
    assert_eq!(
      export_url(url).as_deref(),
      Some("https://docs.google.com/spreadsheets/d/xyz/export?format=csv&gid=0")
    );
  }

  #[test]
  fn export_url_rejects_non_sheet_urls() {
    assert_eq!(export_url("https://example.com/sheet.csv"), None);
    assert_eq!(export_url(""), None);
  }

  #[tokio::test]
  async fn unconfigured_and_invalid_sources_are_empty() {
    let client = SheetClient::new(Duration::from_secs(1)).unwrap();
    assert!(client.fetch_rows("songs", None).await.is_empty());
    // Rejected before any request is made.
    assert!(client.fetch_rows("songs", Some("not a url")).await.is_empty());
  }
}
