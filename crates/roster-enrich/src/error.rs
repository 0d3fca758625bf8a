//! Error type for `roster-enrich`.

use std::{fmt, time::Duration};

use thiserror::Error;

/// Which of the three inference lookups an error came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup {
  Age,
  Gender,
  Nationality,
}

impl fmt::Display for Lookup {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(match self {
      Self::Age => "age",
      Self::Gender => "gender",
      Self::Nationality => "nationality",
    })
  }
}

#[derive(Debug, Error)]
pub enum Error {
  #[error("failed to build http client: {0}")]
  Client(#[source] reqwest::Error),

  #[error("{lookup} lookup failed: {source}")]
  Transport {
    lookup: Lookup,
    #[source]
    source: reqwest::Error,
  },

  #[error("{lookup} lookup returned status {status}")]
  Status { lookup: Lookup, status: reqwest::StatusCode },

  #[error("{lookup} lookup returned a malformed payload: {source}")]
  Payload {
    lookup: Lookup,
    #[source]
    source: serde_json::Error,
  },

  #[error("enrichment did not finish within {0:?}")]
  DeadlineExceeded(Duration),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
