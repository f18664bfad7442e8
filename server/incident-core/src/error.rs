//! Structured error types for the query engine and its collaborator seams.

use thiserror::Error;

/// Failure from the incident repository. Not recoverable by the engine;
/// surfaces as an internal error at the boundary.
#[derive(Debug, Error)]
pub enum RepositoryError {
  #[error("io: {0}")]
  Io(#[from] std::io::Error),

  #[error("malformed record {id}: {reason}")]
  Malformed { id: String, reason: String },
}

impl RepositoryError {
  pub fn malformed(id: &str, reason: impl Into<String>) -> Self {
    Self::Malformed {
      id: id.to_string(),
      reason: reason.into(),
    }
  }
}

/// Failure from the weather capability. Recovered inside the enrichment
/// boundary, never propagated past it.
#[derive(Debug, Error)]
pub enum WeatherError {
  #[error("request: {0}")]
  Request(String),

  #[error("provider returned status {0}")]
  Status(u16),

  #[error("malformed response: {0}")]
  Malformed(String),
}

impl WeatherError {
  pub fn request(msg: impl Into<String>) -> Self {
    Self::Request(msg.into())
  }

  pub fn malformed(msg: impl Into<String>) -> Self {
    Self::Malformed(msg.into())
  }
}

/// Engine-level failure for a single query.
#[derive(Debug, Error)]
pub enum EngineError {
  #[error("repository: {0}")]
  Repository(#[from] RepositoryError),
}
