//! The `PersonStore` trait.
//!
//! Implemented by storage backends (e.g. `roster-store-sqlite`). The record
//! service depends on this abstraction, never on a concrete backend, and
//! receives its instance by injection.

use std::future::Future;

use crate::{
  patch::FieldChange,
  person::{EnrichedProfile, NewPerson, Person},
  query::PersonQuery,
};

/// Abstraction over a person table.
///
/// Implementations must be safe for concurrent use; callers perform no
/// additional locking.
pub trait PersonStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Insert a new person with its enriched fields. The store assigns the id.
  fn insert(
    &self,
    person: NewPerson,
    profile: EnrichedProfile,
  ) -> impl Future<Output = Result<Person, Self::Error>> + Send + '_;

  /// Run a filtered, paginated read. An empty result is not an error.
  fn find<'a>(
    &'a self,
    query: &'a PersonQuery,
  ) -> impl Future<Output = Result<Vec<Person>, Self::Error>> + Send + 'a;

  /// Write a single field of the record with `id`. Returns the number of
  /// rows affected.
  fn update(
    &self,
    id: i64,
    change: FieldChange,
  ) -> impl Future<Output = Result<u64, Self::Error>> + Send + '_;

  /// Delete the record with `id`. Returns the number of rows affected.
  fn delete(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<u64, Self::Error>> + Send + '_;
}
