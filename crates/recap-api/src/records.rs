//! Handlers for `/tickets` record-level endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/tickets/stats` | `?customer_id=` required |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Query, State},
};
use recap_core::{
  generate::SummaryGenerator,
  metadata::SummaryMetadata,
  record::RecordKind,
  service::SummaryService,
  source::RecordSource,
  store::SummaryStore,
};
use serde::Deserialize;

use crate::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct StatsParams {
  pub customer_id: Option<String>,
}

/// `GET /tickets/stats?customer_id=...`
///
/// Live ticket counts for a customer, computed from current records. Unknown
/// customers get all-zero counts rather than an error.
pub async fn ticket_stats<St, Src, G>(
  State(service): State<Arc<SummaryService<St, Src, G>>>,
  Query(params): Query<StatsParams>,
) -> Result<Json<SummaryMetadata>, ApiError>
where
  St: SummaryStore + Send + Sync + 'static,
  Src: RecordSource + Send + Sync + 'static,
  G: SummaryGenerator + Send + Sync + 'static,
{
  let Some(customer_id) = params.customer_id else {
    return Err(ApiError::BadRequest("customer_id is required".to_owned()));
  };

  let stats = service
    .live_metadata(RecordKind::Ticket, &customer_id)
    .await?;
  Ok(Json(stats))
}
