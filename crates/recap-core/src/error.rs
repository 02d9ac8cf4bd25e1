//! Error types for `recap-core`.

use thiserror::Error;

/// A boxed error from a storage backend or upstream collaborator.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
pub enum Error {
  /// A group subject resolved to zero member records. Recovered locally by
  /// callers with the canned empty-state result.
  #[error("subject resolved to zero source records")]
  EmptySubject,

  #[error("unknown summary type: {0:?}")]
  UnknownSummaryType(String),

  /// The system of record or the generator failed. `message` holds the
  /// normalised form of the upstream error text.
  #[error("upstream unavailable: {message}")]
  UpstreamUnavailable {
    message: String,
    #[source]
    source:  Option<BoxError>,
  },

  /// The generator returned blank output. Nothing is persisted on this path.
  #[error("generator returned an empty summary")]
  MalformedGeneratorResponse,

  #[error("summary store read failed: {0}")]
  StoreRead(#[source] BoxError),

  #[error("summary store write failed: {0}")]
  StoreWrite(#[source] BoxError),
}

impl Error {
  /// Wrap a collaborator failure as [`Error::UpstreamUnavailable`],
  /// normalising its message for display.
  pub fn upstream(err: impl std::error::Error + Send + Sync + 'static) -> Self {
    let message = normalize_upstream_message(&err.to_string());
    Self::UpstreamUnavailable {
      message,
      source: Some(Box::new(err)),
    }
  }

  pub fn store_read(
    err: impl std::error::Error + Send + Sync + 'static,
  ) -> Self {
    Self::StoreRead(Box::new(err))
  }

  pub fn store_write(
    err: impl std::error::Error + Send + Sync + 'static,
  ) -> Self {
    Self::StoreWrite(Box::new(err))
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Reduce a raw upstream error payload to a short human-readable message.
///
/// Upstream services wrap failures inconsistently: some return a JSON body
/// with a `detail` or `error` field, some append a multi-line `HINT:` block
/// after the message proper, some return plain text. The normalised form is
/// the extracted field (or the raw text), cut at the first `\nHINT:` and
/// trimmed.
pub fn normalize_upstream_message(raw: &str) -> String {
  let extracted = serde_json::from_str::<serde_json::Value>(raw)
    .ok()
    .and_then(|body| {
      body
        .get("detail")
        .or_else(|| body.get("error"))
        .and_then(|field| field.as_str())
        .map(str::to_owned)
    })
    .unwrap_or_else(|| raw.to_owned());

  let message = extracted.split("\nHINT:").next().unwrap_or_default().trim();

  if message.is_empty() {
    "upstream request failed".to_owned()
  } else {
    message.to_owned()
  }
}
