//! [`SqliteStore`] — the SQLite implementation of [`PersonStore`].

use std::path::Path;

use roster_core::{
  patch::FieldChange,
  person::{EnrichedProfile, NewPerson, Person},
  query::PersonQuery,
  store::PersonStore,
};

use crate::{
  Result,
  encode::{RawPerson, encode_change, encode_gender},
  query::{CompiledQuery, build_select},
  schema::SCHEMA,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A person table backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted. Access is
/// serialised on the connection's own thread, so concurrent requests need no
/// further locking.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  /// Total number of stored records.
  pub async fn count(&self) -> Result<u64> {
    let n: i64 = self
      .conn
      .call(|conn| {
        Ok(conn.query_row("SELECT COUNT(*) FROM people", [], |r| r.get(0))?)
      })
      .await?;
    Ok(n as u64)
  }
}

// ─── PersonStore impl ────────────────────────────────────────────────────────

impl PersonStore for SqliteStore {
  type Error = crate::Error;

  async fn insert(&self, person: NewPerson, profile: EnrichedProfile) -> Result<Person> {
    let NewPerson { name, surname, patronymic } = person;
    let EnrichedProfile { age, gender, nationality } = profile;

    let row = (
      name.clone(),
      surname.clone(),
      patronymic.clone(),
      i64::from(age),
      encode_gender(gender),
      nationality.clone(),
    );

    let id: i64 = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO people (name, surname, patronymic, age, gender, nationality)
           VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
          rusqlite::params![row.0, row.1, row.2, row.3, row.4, row.5],
        )?;
        Ok(conn.last_insert_rowid())
      })
      .await?;

    Ok(Person { id, name, surname, patronymic, age, gender, nationality })
  }

  async fn find(&self, query: &PersonQuery) -> Result<Vec<Person>> {
    let CompiledQuery { sql, params } = build_select(query);
    tracing::debug!(%sql, params = params.len(), "compiled person query");

    let raws: Vec<RawPerson> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
          .query_map(rusqlite::params_from_iter(params), RawPerson::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawPerson::into_person).collect()
  }

  async fn update(&self, id: i64, change: FieldChange) -> Result<u64> {
    let (column, value) = encode_change(change);
    // `column` comes from a closed set of static names, never from input.
    let sql = format!("UPDATE people SET {column} = ?1 WHERE id = ?2");

    let affected = self
      .conn
      .call(move |conn| Ok(conn.execute(&sql, rusqlite::params![value, id])?))
      .await?;
    Ok(affected as u64)
  }

  async fn delete(&self, id: i64) -> Result<u64> {
    let affected = self
      .conn
      .call(move |conn| {
        Ok(conn.execute("DELETE FROM people WHERE id = ?1", rusqlite::params![id])?)
      })
      .await?;
    Ok(affected as u64)
  }
}
