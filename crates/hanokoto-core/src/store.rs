//! Store traits over the relational sources.
//!
//! Implemented by storage backends (e.g. `hanokoto-store-sqlite`). Access is
//! read-only: nothing in the generator writes to these stores. The concert
//! database and the history log are separate files, so each gets its own
//! trait.

use std::future::Future;

use crate::{concert::Tour, timeline::HistoryRecord};

/// Read access to the concert database.
pub trait ConcertStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Load every tour with its concerts and setlists.
  ///
  /// Tours are ordered by `sort_order` with unset values last, ties broken by
  /// id. Concerts are ordered by `(date, id)`, setlist entries by `order_no`.
  fn load_tours(&self) -> impl Future<Output = Result<Vec<Tour>, Self::Error>> + Send + '_;
}

/// Read access to the history event log.
pub trait HistoryStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Load the event log ordered by `(year, month, day)`.
  fn load_history(
    &self,
  ) -> impl Future<Output = Result<Vec<HistoryRecord>, Self::Error>> + Send + '_;
}
