//! Inference gateway: derives age, gender and nationality for a first name
//! from three external name-inference services.
//!
//! [`InferenceGateway`] implements [`roster_core::enrich::Enricher`]. The
//! three lookups run concurrently under a single deadline; any failure
//! aborts the whole enrichment.

mod gateway;
mod payload;

pub mod error;

pub use error::{Error, Lookup, Result};
pub use gateway::{GatewayConfig, InferenceGateway};
pub use payload::{AgePayload, CountryProbability, GenderPayload, NationalityPayload};
