//! The `SummaryStore` trait.
//!
//! The trait is implemented by storage backends (e.g. `recap-store-sqlite`).
//! The orchestrator and the API depend on this abstraction, not on any
//! concrete backend.

use std::future::Future;

use uuid::Uuid;

use crate::{
  subject::SummaryType,
  summary::{Invalidation, NewSummary, SummaryRecord},
};

/// Abstraction over a summary store backend.
///
/// All writes are append-only: regeneration appends a new record, and
/// invalidation appends a lifecycle event. Nothing is ever updated in place
/// or deleted.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait SummaryStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Append a new summary and return the persisted record.
  /// `summary_id` and `generated_at` are set by the store.
  fn append_summary(
    &self,
    input: NewSummary,
  ) -> impl Future<Output = Result<SummaryRecord, Self::Error>> + Send + '_;

  /// The most recently generated, non-invalidated summary of a type.
  /// Returns `None` when no live summary exists.
  ///
  /// Reads must reflect a total order consistent with write completion:
  /// repeated reads may never disagree about which record is most recent.
  fn latest_summary(
    &self,
    summary_type: SummaryType,
  ) -> impl Future<Output = Result<Option<SummaryRecord>, Self::Error>> + Send + '_;

  /// Record that a summary may no longer be served.
  ///
  /// Returns an error if the summary does not exist or is already
  /// invalidated.
  fn invalidate_summary(
    &self,
    summary_id: Uuid,
    reason: Option<String>,
  ) -> impl Future<Output = Result<Invalidation, Self::Error>> + Send + '_;
}
