//! Summary records, the persisted unit of the summary store.
//!
//! A summary is never updated in place. Regeneration appends a new record;
//! invalidation is a separate append-only event. "The current summary" is
//! computed at read time as the most recent non-invalidated record of a
//! type.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{metadata::SummaryMetadata, subject::SummaryType};

/// A persisted summary. Once written, no field ever changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryRecord {
  pub summary_id:   Uuid,
  pub summary_type: SummaryType,
  /// Generator output; opaque natural-language text.
  pub text:         String,
  /// Source record IDs the text was computed from. Never empty, never
  /// contains duplicates.
  pub covered_ids:  Vec<String>,
  /// Aggregate counts captured at generation time. Advisory only: validity
  /// decisions never consult it and readers recompute from live records.
  pub metadata:     SummaryMetadata,
  /// Store-assigned timestamp; never changes after creation.
  pub generated_at: DateTime<Utc>,
}

/// Input to [`crate::store::SummaryStore::append_summary`].
/// `summary_id` and `generated_at` are always set by the store; they are not
/// accepted from callers.
#[derive(Debug, Clone)]
pub struct NewSummary {
  pub summary_type: SummaryType,
  pub text:         String,
  pub covered_ids:  Vec<String>,
  pub metadata:     SummaryMetadata,
}

/// Records that a summary may no longer be served.
/// A summary can be invalidated at most once (enforced by a UNIQUE
/// constraint).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invalidation {
  pub invalidation_id: Uuid,
  pub summary_id:      Uuid,
  pub reason:          Option<String>,
  pub recorded_at:     DateTime<Utc>,
}
