//! [`InferenceGateway`] — the reqwest-backed [`Enricher`].

use std::time::Duration;

use roster_core::{enrich::Enricher, person::EnrichedProfile};
use serde::{Deserialize, de::DeserializeOwned};

use crate::{
  Error, Lookup, Result,
  payload::{AgePayload, GenderPayload, NationalityPayload},
};

// ─── Configuration ────────────────────────────────────────────────────────────

/// Endpoints and time budgets for the three lookups, deserialised from the
/// `[inference]` config section.
#[derive(Debug, Clone, Deserialize)]
pub struct GatewayConfig {
  pub age_url:             String,
  pub gender_url:          String,
  pub nationality_url:     String,
  /// Per-lookup HTTP timeout.
  #[serde(default = "default_lookup_timeout_secs")]
  pub lookup_timeout_secs: u64,
  /// Budget for the whole three-way fan-out.
  #[serde(default = "default_deadline_secs")]
  pub deadline_secs:       u64,
}

fn default_lookup_timeout_secs() -> u64 { 5 }

fn default_deadline_secs() -> u64 { 10 }

impl GatewayConfig {
  pub fn new(
    age_url: impl Into<String>,
    gender_url: impl Into<String>,
    nationality_url: impl Into<String>,
  ) -> Self {
    Self {
      age_url:             age_url.into(),
      gender_url:          gender_url.into(),
      nationality_url:     nationality_url.into(),
      lookup_timeout_secs: default_lookup_timeout_secs(),
      deadline_secs:       default_deadline_secs(),
    }
  }

  pub fn deadline(&self) -> Duration { Duration::from_secs(self.deadline_secs) }
}

// ─── Gateway ──────────────────────────────────────────────────────────────────

/// Issues the age, gender and nationality lookups for a name.
///
/// Cheap to clone — the inner [`reqwest::Client`] is `Arc`-based. Holds no
/// state between calls.
#[derive(Clone)]
pub struct InferenceGateway {
  client:   reqwest::Client,
  config:   GatewayConfig,
  deadline: Duration,
}

impl InferenceGateway {
  pub fn new(config: GatewayConfig) -> Result<Self> {
    let client = reqwest::Client::builder()
      .timeout(Duration::from_secs(config.lookup_timeout_secs))
      .build()
      .map_err(Error::Client)?;
    let deadline = config.deadline();
    Ok(Self { client, config, deadline })
  }

  /// Override the overall deadline (mostly useful in tests).
  pub fn with_deadline(mut self, deadline: Duration) -> Self {
    self.deadline = deadline;
    self
  }

  /// `GET <endpoint>?name=<name>` and decode the body as `T`.
  async fn lookup<T: DeserializeOwned>(
    &self,
    lookup: Lookup,
    endpoint: &str,
    name: &str,
  ) -> Result<T> {
    let resp = self
      .client
      .get(endpoint)
      .query(&[("name", name)])
      .send()
      .await
      .map_err(|source| Error::Transport { lookup, source })?;

    let status = resp.status();
    if !status.is_success() {
      return Err(Error::Status { lookup, status });
    }

    let body = resp
      .bytes()
      .await
      .map_err(|source| Error::Transport { lookup, source })?;
    serde_json::from_slice(&body).map_err(|source| Error::Payload { lookup, source })
  }

  /// Run all three lookups concurrently and assemble the profile.
  ///
  /// The first failing lookup aborts the others; exceeding the deadline
  /// aborts all of them.
  pub async fn resolve(&self, name: &str) -> Result<EnrichedProfile> {
    let fan_out = async {
      tokio::try_join!(
        self.lookup::<AgePayload>(Lookup::Age, &self.config.age_url, name),
        self.lookup::<GenderPayload>(Lookup::Gender, &self.config.gender_url, name),
        self.lookup::<NationalityPayload>(
          Lookup::Nationality,
          &self.config.nationality_url,
          name,
        ),
      )
    };

    let (age, gender, nationality) = tokio::time::timeout(self.deadline, fan_out)
      .await
      .map_err(|_| Error::DeadlineExceeded(self.deadline))??;

    let profile = EnrichedProfile {
      age:         age.resolve(),
      gender:      gender.resolve(),
      nationality: nationality.resolve(),
    };
    tracing::debug!(name, ?profile, "inference lookups resolved");
    Ok(profile)
  }
}

impl Enricher for InferenceGateway {
  type Error = Error;

  async fn enrich(&self, name: &str) -> Result<EnrichedProfile> {
    self.resolve(name).await.inspect_err(|e| {
      tracing::warn!(name, error = %e, "enrichment failed");
    })
  }
}
