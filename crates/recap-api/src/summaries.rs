//! Handlers for `/summaries` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/summaries/individual/:summary_type/:id` | Optional `?force_regenerate=true` |
//! | `GET`  | `/summaries/group/:summary_type` | `?ids=` (comma-separated) or `?customer_id=` |
//! | `GET`  | `/summaries/check/:summary_type/:id` | Read-only cache probe |
//! | `POST` | `/summaries/:summary_type/invalidate` | Body: `{"reason":"..."}` (optional) |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, Query, State},
};
use chrono::{DateTime, Utc};
use recap_core::{
  generate::SummaryGenerator,
  metadata::SummaryMetadata,
  service::{NO_RECORDS_TEXT, SummaryOutcome, SummaryService},
  source::RecordSource,
  store::SummaryStore,
  subject::{Subject, SummaryType},
  summary::Invalidation,
};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

// ─── Response bodies ─────────────────────────────────────────────────────────

/// Success body shared by the individual and group endpoints.
#[derive(Debug, Serialize)]
pub struct SummaryResponse {
  pub summary:           String,
  /// Computed from the live record batch on every request, cache hit or not.
  pub metadata:          SummaryMetadata,
  pub last_generated_at: DateTime<Utc>,
}

impl From<SummaryOutcome> for SummaryResponse {
  fn from(outcome: SummaryOutcome) -> Self {
    Self {
      summary:           outcome.text,
      metadata:          outcome.metadata,
      last_generated_at: outcome.generated_at,
    }
  }
}

#[derive(Debug, Serialize)]
pub struct CheckResponse {
  pub has_valid_summary: bool,
  pub summary:           Option<String>,
  pub last_generated_at: Option<DateTime<Utc>>,
}

fn empty_state(summary_type: SummaryType) -> SummaryResponse {
  SummaryResponse {
    summary:           NO_RECORDS_TEXT.to_owned(),
    metadata:          SummaryMetadata::empty(summary_type.record_kind()),
    last_generated_at: Utc::now(),
  }
}

fn is_force(raw: Option<&str>) -> bool {
  raw == Some("true")
}

/// Run the orchestrator on a detached task so a client disconnect cannot
/// abort an in-flight generation or append.
async fn run_detached<St, Src, G>(
  service: &Arc<SummaryService<St, Src, G>>,
  subject: Subject,
  force_regenerate: bool,
) -> Result<SummaryOutcome, ApiError>
where
  St: SummaryStore + Send + Sync + 'static,
  Src: RecordSource + Send + Sync + 'static,
  G: SummaryGenerator + Send + Sync + 'static,
{
  let service = Arc::clone(service);
  let outcome = tokio::spawn(async move {
    service.get_or_generate(&subject, force_regenerate).await
  })
  .await
  .map_err(|err| ApiError::Internal(format!("summary task failed: {err}")))??;
  Ok(outcome)
}

// ─── Individual ──────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct IndividualParams {
  pub force_regenerate: Option<String>,
}

/// `GET /summaries/individual/:summary_type/:id[?force_regenerate=true]`
pub async fn individual<St, Src, G>(
  State(service): State<Arc<SummaryService<St, Src, G>>>,
  Path((summary_type, id)): Path<(String, String)>,
  Query(params): Query<IndividualParams>,
) -> Result<Json<SummaryResponse>, ApiError>
where
  St: SummaryStore + Send + Sync + 'static,
  Src: RecordSource + Send + Sync + 'static,
  G: SummaryGenerator + Send + Sync + 'static,
{
  let summary_type = SummaryType::parse_individual(&summary_type)?;
  let subject = Subject::individual(summary_type, id);
  let force = is_force(params.force_regenerate.as_deref());

  let outcome = run_detached(&service, subject, force).await?;
  Ok(Json(outcome.into()))
}

// ─── Group ───────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct GroupParams {
  /// Comma-separated explicit member IDs.
  pub ids:              Option<String>,
  /// Membership scope when `ids` is not given.
  pub customer_id:      Option<String>,
  /// `force` is an accepted alias; older clients sent both spellings.
  #[serde(alias = "force")]
  pub force_regenerate: Option<String>,
}

/// `GET /summaries/group/:summary_type?ids=...` or `?customer_id=...`
pub async fn group<St, Src, G>(
  State(service): State<Arc<SummaryService<St, Src, G>>>,
  Path(summary_type): Path<String>,
  Query(params): Query<GroupParams>,
) -> Result<Json<SummaryResponse>, ApiError>
where
  St: SummaryStore + Send + Sync + 'static,
  Src: RecordSource + Send + Sync + 'static,
  G: SummaryGenerator + Send + Sync + 'static,
{
  let summary_type = SummaryType::parse_group(&summary_type)?;
  let force = is_force(params.force_regenerate.as_deref());

  let subject = match (&params.ids, &params.customer_id) {
    (Some(ids), _) => Subject::group(
      summary_type,
      ids
        .split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::to_owned),
    ),
    (None, Some(customer_id)) => {
      service.resolve_customer_group(summary_type, customer_id).await
    }
    (None, None) => {
      return Err(ApiError::BadRequest(
        "either ids or customer_id is required".to_owned(),
      ));
    }
  };

  let subject = match subject {
    Ok(subject) => subject,
    // Zero members is an ordinary empty state for group requests, not an
    // error.
    Err(recap_core::Error::EmptySubject) => {
      return Ok(Json(empty_state(summary_type)));
    }
    Err(err) => return Err(err.into()),
  };

  let outcome = run_detached(&service, subject, force).await?;
  Ok(Json(outcome.into()))
}

// ─── Check ───────────────────────────────────────────────────────────────────

/// `GET /summaries/check/:summary_type/:id`
pub async fn check<St, Src, G>(
  State(service): State<Arc<SummaryService<St, Src, G>>>,
  Path((summary_type, id)): Path<(String, String)>,
) -> Result<Json<CheckResponse>, ApiError>
where
  St: SummaryStore + Send + Sync + 'static,
  Src: RecordSource + Send + Sync + 'static,
  G: SummaryGenerator + Send + Sync + 'static,
{
  let summary_type = SummaryType::parse_individual(&summary_type)?;
  let subject = Subject::individual(summary_type, id);

  let probe = service.check(&subject).await;
  Ok(Json(CheckResponse {
    has_valid_summary: probe.has_valid_summary,
    summary:           probe.text,
    last_generated_at: probe.generated_at,
  }))
}

// ─── Invalidate ──────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct InvalidateBody {
  pub reason: Option<String>,
}

/// `POST /summaries/:summary_type/invalidate` with body `{"reason":"..."}`.
///
/// Returns the recorded invalidation, or 404 when no live summary of the
/// type exists.
pub async fn invalidate<St, Src, G>(
  State(service): State<Arc<SummaryService<St, Src, G>>>,
  Path(summary_type): Path<String>,
  Json(body): Json<InvalidateBody>,
) -> Result<Json<Invalidation>, ApiError>
where
  St: SummaryStore + Send + Sync + 'static,
  Src: RecordSource + Send + Sync + 'static,
  G: SummaryGenerator + Send + Sync + 'static,
{
  let summary_type = SummaryType::parse(&summary_type)?;

  let invalidation = service
    .invalidate_latest(summary_type, body.reason)
    .await?
    .ok_or_else(|| {
      ApiError::NotFound(format!("no live summary for {summary_type}"))
    })?;

  tracing::info!(
    %summary_type,
    invalidation_id = %invalidation.invalidation_id,
    "summary invalidated"
  );
  Ok(Json(invalidation))
}
