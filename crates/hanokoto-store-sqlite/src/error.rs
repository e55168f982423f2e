//! Error type for `hanokoto-store-sqlite`.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  /// The database file does not exist. Opening never creates one.
  #[error("store file not found: {0}")]
  MissingStore(PathBuf),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
