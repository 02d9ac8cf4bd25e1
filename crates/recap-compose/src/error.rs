//! Error types for the recap-compose generator.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("cannot compose a summary from an empty record batch")]
  EmptyBatch,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
