//! Structured error types for the violation engine.

use thiserror::Error;

/// Failures at the binary boundary. Aggregation itself is pure and cannot fail.
#[derive(Debug, Error)]
pub enum EngineError {
  #[error("json: {0}")]
  Json(#[from] serde_json::Error),

  #[error("io: {0}")]
  Io(#[from] std::io::Error),
}
