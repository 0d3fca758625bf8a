//! Error types for `roster-core`.

use thiserror::Error;

/// A boxed error from a pluggable backend (store or enricher).
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
pub enum Error {
  /// A filter or identifier that must be a positive integer was not.
  #[error("invalid {field} filter: {value:?}")]
  InvalidFilter { field: &'static str, value: String },

  #[error("validation failed: {0}")]
  Validation(String),

  #[error("person not found: {0}")]
  NotFound(i64),

  #[error("enrichment failed: {0}")]
  Enrichment(#[source] BoxError),

  #[error("store error: {0}")]
  Store(#[source] BoxError),
}

impl Error {
  pub(crate) fn invalid_filter(field: &'static str, value: impl ToString) -> Self {
    Self::InvalidFilter { field, value: value.to_string() }
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
