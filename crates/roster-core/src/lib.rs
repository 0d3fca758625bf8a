//! Core types and trait definitions for the Roster person registry.
//!
//! This crate is deliberately free of HTTP and database dependencies. The
//! store backend and the inference gateway plug in through the
//! [`PersonStore`](store::PersonStore) and [`Enricher`](enrich::Enricher)
//! traits; [`RecordService`](service::RecordService) ties them together.

pub mod enrich;
pub mod error;
pub mod patch;
pub mod person;
pub mod query;
pub mod service;
pub mod store;

pub use error::{Error, Result};
