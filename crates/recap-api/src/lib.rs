//! JSON REST API for recap.
//!
//! Exposes an axum [`Router`] over a
//! [`recap_core::service::SummaryService`]; storage, record source, and
//! generator are whatever the caller injected into the service. Auth, TLS,
//! and transport concerns are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! let service =
//!   Arc::new(SummaryService::new(store.clone(), store.clone(), Composer));
//! .nest("/api/v1", recap_api::api_router(service))
//! ```

pub mod error;
pub mod records;
pub mod seed;
pub mod summaries;

use std::{path::PathBuf, sync::Arc};

use axum::{
  Router,
  routing::{get, post},
};
use recap_core::{
  generate::SummaryGenerator, service::SummaryService, source::RecordSource,
  store::SummaryStore,
};
use serde::Deserialize;

pub use error::ApiError;

/// Runtime configuration for the recap server.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
  /// Address to bind (e.g. `127.0.0.1`).
  pub host:       String,
  /// Port to bind.
  pub port:       u16,
  /// Path to the sqlite database file.
  pub store_path: PathBuf,
}

/// Build a fully-materialised API router for `service`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<St, Src, G>(
  service: Arc<SummaryService<St, Src, G>>,
) -> Router<()>
where
  St: SummaryStore + Send + Sync + 'static,
  Src: RecordSource + Send + Sync + 'static,
  G: SummaryGenerator + Send + Sync + 'static,
{
  Router::new()
    // Summaries
    .route(
      "/summaries/individual/{summary_type}/{id}",
      get(summaries::individual::<St, Src, G>),
    )
    .route(
      "/summaries/group/{summary_type}",
      get(summaries::group::<St, Src, G>),
    )
    .route(
      "/summaries/check/{summary_type}/{id}",
      get(summaries::check::<St, Src, G>),
    )
    .route(
      "/summaries/{summary_type}/invalidate",
      post(summaries::invalidate::<St, Src, G>),
    )
    // Records
    .route("/tickets/stats", get(records::ticket_stats::<St, Src, G>))
    .with_state(service)
}

// ─── Tests ───────────────────────────────────────────────────────────────────
