//! API error type and [`axum::response::IntoResponse`] implementation.
//!
//! Every error leaves the API as `{"error": {"kind": ..., "message": ...}}`
//! so clients can branch on `kind` without parsing prose.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("not found: {0}")]
  NotFound(String),

  #[error("bad request: {0}")]
  BadRequest(String),

  #[error("upstream unavailable: {0}")]
  UpstreamUnavailable(String),

  #[error("the generator returned an unusable response")]
  MalformedResponse,

  #[error("internal error: {0}")]
  Internal(String),
}

impl ApiError {
  /// The machine-readable discriminator in the error envelope.
  pub fn kind(&self) -> &'static str {
    match self {
      ApiError::NotFound(_) => "not_found",
      ApiError::BadRequest(_) => "bad_request",
      ApiError::UpstreamUnavailable(_) => "upstream_unavailable",
      ApiError::MalformedResponse => "malformed_response",
      ApiError::Internal(_) => "internal_error",
    }
  }

  fn status(&self) -> StatusCode {
    match self {
      ApiError::NotFound(_) => StatusCode::NOT_FOUND,
      ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
      ApiError::UpstreamUnavailable(_) | ApiError::MalformedResponse => {
        StatusCode::BAD_GATEWAY
      }
      ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let message = match &self {
      ApiError::NotFound(m)
      | ApiError::BadRequest(m)
      | ApiError::UpstreamUnavailable(m)
      | ApiError::Internal(m) => m.clone(),
      ApiError::MalformedResponse => self.to_string(),
    };
    let body = json!({ "error": { "kind": self.kind(), "message": message } });
    (self.status(), Json(body)).into_response()
  }
}

impl From<recap_core::Error> for ApiError {
  fn from(err: recap_core::Error) -> Self {
    use recap_core::Error as E;

    match err {
      E::EmptySubject => {
        ApiError::NotFound("no source records match the request".to_owned())
      }
      E::UnknownSummaryType(ty) => {
        ApiError::NotFound(format!("unknown summary type: {ty}"))
      }
      E::UpstreamUnavailable { message, .. } => {
        ApiError::UpstreamUnavailable(message)
      }
      E::MalformedGeneratorResponse => ApiError::MalformedResponse,
      err @ (E::StoreRead(_) | E::StoreWrite(_)) => {
        ApiError::Internal(err.to_string())
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn kinds_map_to_expected_statuses() {
    assert_eq!(
      ApiError::NotFound("x".into()).status(),
      StatusCode::NOT_FOUND
    );
    assert_eq!(
      ApiError::BadRequest("x".into()).status(),
      StatusCode::BAD_REQUEST
    );
    assert_eq!(
      ApiError::UpstreamUnavailable("x".into()).status(),
      StatusCode::BAD_GATEWAY
    );
    assert_eq!(ApiError::MalformedResponse.status(), StatusCode::BAD_GATEWAY);
    assert_eq!(
      ApiError::Internal("x".into()).status(),
      StatusCode::INTERNAL_SERVER_ERROR
    );
  }

  #[test]
  fn core_errors_convert_with_their_kind() {
    let unknown =
      ApiError::from(recap_core::Error::UnknownSummaryType("nope".into()));
    assert_eq!(unknown.kind(), "not_found");

    let malformed =
      ApiError::from(recap_core::Error::MalformedGeneratorResponse);
    assert_eq!(malformed.kind(), "malformed_response");

    let upstream = ApiError::from(recap_core::Error::UpstreamUnavailable {
      message: "backend down".into(),
      source:  None,
    });
    let ApiError::UpstreamUnavailable(message) = &upstream else {
      panic!("expected UpstreamUnavailable, got {upstream:?}");
    };
    assert_eq!(message, "backend down");
  }
}
