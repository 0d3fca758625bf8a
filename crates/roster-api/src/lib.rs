//! JSON REST API for Roster.
//!
//! Exposes an axum [`Router`] over a [`RecordService`] built from any
//! [`PersonStore`] and [`Enricher`]. Auth and TLS are out of scope.

pub mod error;
pub mod people;

pub use error::ApiError;

use std::{path::PathBuf, sync::Arc, time::Duration};

use axum::{
  Router,
  http::StatusCode,
  middleware,
  response::{IntoResponse, Response},
  routing::{get, put},
};
use roster_core::{enrich::Enricher, service::RecordService, store::PersonStore};
use roster_enrich::GatewayConfig;
use serde::Deserialize;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` and
/// `ROSTER_*` environment variables.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
  pub host:                 String,
  pub port:                 u16,
  pub store_path:           PathBuf,
  /// Upper bound on handling one request, enrichment included.
  pub request_timeout_secs: u64,
  pub inference:            GatewayConfig,
}

// ─── Application state ────────────────────────────────────────────────────────

/// Shared state threaded through all axum handlers.
pub struct AppState<S, E> {
  pub records: RecordService<S, E>,
  pub config:  Arc<ServerConfig>,
}

impl<S, E> Clone for AppState<S, E> {
  fn clone(&self) -> Self {
    Self { records: self.records.clone(), config: Arc::clone(&self.config) }
  }
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the `/people` router with request tracing and a per-request timeout.
pub fn router<S, E>(state: AppState<S, E>) -> Router
where
  S: PersonStore + 'static,
  E: Enricher + 'static,
{
  let timeout = Duration::from_secs(state.config.request_timeout_secs);

  Router::new()
    .route(
      "/people",
      get(people::list::<S, E>)
        .post(people::create::<S, E>)
        .put(people::update_by_query::<S, E>)
        .delete(people::delete_by_query::<S, E>),
    )
    .route(
      "/people/{id}",
      put(people::update_by_path::<S, E>).delete(people::delete_by_path::<S, E>),
    )
    .layer(TimeoutLayer::with_status_code(StatusCode::REQUEST_TIMEOUT, timeout))
    .layer(middleware::map_response(timeout_envelope))
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}

/// Give the timeout layer's empty 408 the same `{"error"}` body as every
/// other failure. No handler returns 408 itself.
async fn timeout_envelope(response: Response) -> Response {
  if response.status() == StatusCode::REQUEST_TIMEOUT {
    return ApiError::Timeout.into_response();
  }
  response
}

// ─── Integration tests ────────────────────────────────────────────────────────
