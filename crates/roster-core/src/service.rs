//! [`RecordService`] — create / read / update / delete orchestration.
//!
//! Only creation talks to the enricher. Every read path, including the
//! existence check inside update, goes through [`PersonStore::find`].

use std::sync::Arc;

use crate::{
  Error, Result,
  enrich::Enricher,
  patch::{FieldChange, PersonPatch},
  person::{NewPerson, Person},
  query::PersonQuery,
  store::PersonStore,
};

/// Orchestrates person records over an injected store and enricher.
///
/// Cloning is cheap; both collaborators are reference-counted.
pub struct RecordService<S, E> {
  store:    Arc<S>,
  enricher: Arc<E>,
}

impl<S, E> Clone for RecordService<S, E> {
  fn clone(&self) -> Self {
    Self { store: Arc::clone(&self.store), enricher: Arc::clone(&self.enricher) }
  }
}

impl<S, E> RecordService<S, E>
where
  S: PersonStore,
  E: Enricher,
{
  pub fn new(store: Arc<S>, enricher: Arc<E>) -> Self { Self { store, enricher } }

  pub fn store(&self) -> &Arc<S> { &self.store }

  /// Validate, enrich, then persist. Nothing is written if enrichment fails.
  pub async fn create(&self, input: NewPerson) -> Result<Person> {
    if input.name.trim().is_empty() {
      return Err(Error::Validation("name must not be empty".into()));
    }
    if input.surname.trim().is_empty() {
      return Err(Error::Validation("surname must not be empty".into()));
    }

    let profile = self
      .enricher
      .enrich(&input.name)
      .await
      .map_err(|e| Error::Enrichment(Box::new(e)))?;
    tracing::debug!(name = %input.name, ?profile, "enriched");

    let person = self
      .store
      .insert(input, profile)
      .await
      .map_err(|e| Error::Store(Box::new(e)))?;

    tracing::info!(id = person.id, "created person {} {}", person.name, person.surname);
    Ok(person)
  }

  /// Return one page of matching records.
  pub async fn list(&self, query: &PersonQuery) -> Result<Vec<Person>> {
    let people = self
      .store
      .find(query)
      .await
      .map_err(|e| Error::Store(Box::new(e)))?;
    tracing::info!(count = people.len(), "listed people");
    Ok(people)
  }

  /// Apply the highest-priority present field of `patch` to record `id`.
  ///
  /// See [`crate::patch`] for why only one field is applied.
  pub async fn update(&self, id: i64, patch: PersonPatch) -> Result<Person> {
    if id <= 0 {
      return Err(Error::invalid_filter("id", id));
    }

    let mut person = self
      .store
      .find(&PersonQuery::by_id(id))
      .await
      .map_err(|e| Error::Store(Box::new(e)))?
      .into_iter()
      .next()
      .ok_or(Error::NotFound(id))?;

    let Some(change) = patch.into_change() else {
      tracing::debug!(id, "empty patch; nothing to update");
      return Ok(person);
    };

    if let FieldChange::Name(v) | FieldChange::Surname(v) = &change
      && v.trim().is_empty()
    {
      return Err(Error::Validation(format!("{} must not be empty", change.field())));
    }

    let field = change.field();
    let affected = self
      .store
      .update(id, change.clone())
      .await
      .map_err(|e| Error::Store(Box::new(e)))?;
    if affected == 0 {
      return Err(Error::NotFound(id));
    }

    change.apply_to(&mut person);
    tracing::info!(id, field, "updated person");
    Ok(person)
  }

  /// Delete record `id`. A missing record is not an error.
  pub async fn delete(&self, id: i64) -> Result<()> {
    if id <= 0 {
      return Err(Error::invalid_filter("id", id));
    }

    let affected = self
      .store
      .delete(id)
      .await
      .map_err(|e| Error::Store(Box::new(e)))?;
    tracing::info!(id, affected, "deleted person");
    Ok(())
  }
}
