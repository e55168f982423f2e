//! Generator configuration, layered from an optional TOML file and
//! `HANOKOTO_*` environment variables.

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use serde::Deserialize;

/// Edit URLs of the published spreadsheets. An absent URL yields an empty
/// section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SheetUrls {
  pub songs:      Option<String>,
  pub albums:     Option<String>,
  pub singles:    Option<String>,
  /// Ranking sheet feeding the near-million list.
  pub covers:     Option<String>,
  /// Full cover catalog.
  pub covers_all: Option<String>,
  pub trending:   Option<String>,
  pub clips:      Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
  pub history_db:         PathBuf,
  pub concert_db:         PathBuf,
  pub thanks_csv:         PathBuf,
  pub fetch_timeout_secs: u64,
  pub near_million_top_n: usize,
  pub sheets:             SheetUrls,
}

impl Default for GeneratorConfig {
  fn default() -> Self {
    Self {
      history_db:         PathBuf::from("data/history.db"),
      concert_db:         PathBuf::from("X_concert.db"),
      thanks_csv:         PathBuf::from("data/thanks.csv"),
      fetch_timeout_secs: 10,
      near_million_top_n: 10,
      sheets:             SheetUrls::default(),
    }
  }
}

impl GeneratorConfig {
  /// Read `path` if it exists, then let `HANOKOTO_*` variables override it.
  ///
  /// Nested keys use a double underscore, e.g. `HANOKOTO_SHEETS__SONGS`.
  pub fn load(path: &Path) -> anyhow::Result<Self> {
    let settings = config::Config::builder()
      .add_source(config::File::from(path).required(false))
      .add_source(
        config::Environment::with_prefix("HANOKOTO")
          .prefix_separator("_")
          .separator("__"),
      )
      .build()
      .context("failed to read config file")?;

    settings
      .try_deserialize()
      .context("failed to deserialise GeneratorConfig")
  }
}
