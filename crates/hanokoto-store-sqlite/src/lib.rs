//! SQLite backend for the concert database and the history event log.
//!
//! Wraps [`tokio_rusqlite`] so all database access runs on a dedicated thread
//! without blocking the async runtime. Access is read-only; the schema in
//! [`schema`] is only applied to fresh in-memory stores.

mod encode;
mod store;

pub mod error;
pub mod schema;

pub use error::{Error, Result};
pub use store::{QueryStats, SqliteStore, load_history_at, load_tours_at};
