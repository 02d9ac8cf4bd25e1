//! The `SummaryGenerator` trait, the text-production collaborator.

use std::future::Future;

use crate::record::SourceRecord;

/// Produces summary text from a batch of homogeneous source records.
///
/// The generator is a black box with a records-in/text-out contract. It must
/// only be called with a non-empty batch; the orchestrator guarantees this
/// and short-circuits empty subjects before reaching it. Aggregate counts
/// reported to callers are computed by the orchestrator, never taken from
/// generator output.
pub trait SummaryGenerator: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  fn generate<'a>(
    &'a self,
    records: &'a [SourceRecord],
  ) -> impl Future<Output = Result<String, Self::Error>> + Send + 'a;
}
