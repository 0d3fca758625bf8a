//! The `Enricher` trait — the seam behind which the inference gateway lives.

use std::future::Future;

use crate::person::EnrichedProfile;

/// Derives an [`EnrichedProfile`] from a first name.
///
/// An implementation either resolves every attribute or fails as a whole;
/// there is no partially enriched result.
pub trait Enricher: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  fn enrich<'a>(
    &'a self,
    name: &'a str,
  ) -> impl Future<Output = Result<EnrichedProfile, Self::Error>> + Send + 'a;
}
