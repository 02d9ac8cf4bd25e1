//! Error type for `recap-store-sqlite`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("core error: {0}")]
  Core(#[from] recap_core::Error),

  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  #[error("json error: {0}")]
  Json(#[from] serde_json::Error),

  #[error("uuid parse error: {0}")]
  Uuid(#[from] uuid::Error),

  #[error("date/time parse error: {0}")]
  DateParse(String),

  /// Attempted to invalidate a summary that was not found.
  #[error("summary not found: {0}")]
  SummaryNotFound(uuid::Uuid),

  #[error("summary {0} is already invalidated")]
  AlreadyInvalidated(uuid::Uuid),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
