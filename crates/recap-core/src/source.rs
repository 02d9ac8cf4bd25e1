//! The `RecordSource` trait: read access to the systems of record.

use std::future::Future;

use crate::record::{RecordKind, SourceRecord};

/// Read-only access to the upstream record systems.
///
/// Fetches take an explicit ID set. IDs with no backing record are simply
/// absent from the result, never an error: a record deleted upstream must
/// not fail a summary request.
pub trait RecordSource: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Fetch the full payloads for `ids`. Result order is unspecified.
  fn fetch_records<'a>(
    &'a self,
    kind: RecordKind,
    ids: &'a [String],
  ) -> impl Future<Output = Result<Vec<SourceRecord>, Self::Error>> + Send + 'a;

  /// The IDs of every record of `kind` belonging to a customer, in
  /// insertion order.
  fn customer_record_ids<'a>(
    &'a self,
    kind: RecordKind,
    customer_id: &'a str,
  ) -> impl Future<Output = Result<Vec<String>, Self::Error>> + Send + 'a;
}
