//! Spreadsheet-export codec for the fan archive.
//!
//! Turns loosely-labelled CSV exports into [`hanokoto_core`] entities. Pure
//! synchronous; no network or database dependencies.
//!
//! Every normalizer here is total: missing columns, malformed dates and
//! unparseable counts degrade to empty strings, zero, or a documented
//! default rather than an error. Only CSV decoding itself can fail.
//!
//! # Quick start
//!
//! ```
//! use hanokoto_sheet::{read_rows, ingest, title::TitleIndex};
//!
//! let csv = "ID,楽曲名,リリース日\n3,星屑のメロディ,2024/3/5\n";
//! let rows = read_rows(csv).unwrap();
//! let songs = ingest::read_songs(&rows);
//! assert_eq!(songs[0].slug, "3-星屑のメロディ");
//! assert_eq!(songs[0].release_date, "2024-03-05");
//!
//! let index = TitleIndex::build(&songs);
//! assert_eq!(index.resolve("星屑のメロディ！"), Some("3-星屑のメロディ"));
//! ```

pub mod count;
pub mod credits;
pub mod date;
pub mod error;
pub mod flags;
pub mod ingest;
pub mod row;
pub mod slug;
pub mod thanks;
pub mod title;
pub mod video;

pub use count::normalize_count;
pub use credits::parse_credits;
pub use date::normalize_date;
pub use error::{Error, Result};
pub use flags::derive_flags;
pub use row::{RawRow, read_plain_rows, read_rows};
pub use slug::{id_slug, name_slug};
pub use title::{TitleIndex, normalize_title};
