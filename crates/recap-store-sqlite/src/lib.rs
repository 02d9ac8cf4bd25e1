//! SQLite backend for the recap summary store.
//!
//! Wraps [`tokio_rusqlite`] so all database access runs on a dedicated thread
//! pool without blocking the async runtime. The same database holds the
//! append-only summary log and the mirrored source records, so
//! [`SqliteStore`] implements both `SummaryStore` and `RecordSource`.

mod encode;
mod schema;
mod store;

pub mod error;

pub use error::{Error, Result};
pub use store::SqliteStore;
