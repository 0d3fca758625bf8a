//! Encoding and decoding helpers between Rust domain types and the plain
//! values stored in SQLite columns.
//!
//! Gender is stored as lowercase text; ages as non-negative integers.

use roster_core::{
  patch::FieldChange,
  person::{Gender, Person},
};
use rusqlite::types::Value;

use crate::{Error, Result};

// ─── Gender ──────────────────────────────────────────────────────────────────

pub fn encode_gender(g: Gender) -> &'static str { g.as_str() }

pub fn decode_gender(s: &str) -> Result<Gender> {
  match s {
    "male" => Ok(Gender::Male),
    "female" => Ok(Gender::Female),
    "unknown" => Ok(Gender::Unknown),
    other => Err(Error::Decode(format!("unknown gender: {other:?}"))),
  }
}

// ─── Single-field updates ────────────────────────────────────────────────────

/// Column name and bound value for a [`FieldChange`].
pub fn encode_change(change: FieldChange) -> (&'static str, Value) {
  let column = change.field();
  let value = match change {
    FieldChange::Name(v)
    | FieldChange::Surname(v)
    | FieldChange::Patronymic(v)
    | FieldChange::Nationality(v) => Value::Text(v),
    FieldChange::Age(v) => Value::Integer(i64::from(v)),
    FieldChange::Gender(g) => Value::Text(encode_gender(g).to_owned()),
  };
  (column, value)
}

// ─── Row types ───────────────────────────────────────────────────────────────

/// Columns selected for every person read, in order.
pub const PERSON_COLUMNS: &str =
  "id, name, surname, patronymic, age, gender, nationality";

/// Raw values read directly from a `people` row.
pub struct RawPerson {
  pub id:          i64,
  pub name:        String,
  pub surname:     String,
  pub patronymic:  Option<String>,
  pub age:         i64,
  pub gender:      String,
  pub nationality: String,
}

impl RawPerson {
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      id:          row.get(0)?,
      name:        row.get(1)?,
      surname:     row.get(2)?,
      patronymic:  row.get(3)?,
      age:         row.get(4)?,
      gender:      row.get(5)?,
      nationality: row.get(6)?,
    })
  }

  pub fn into_person(self) -> Result<Person> {
    let age = u32::try_from(self.age)
      .map_err(|_| Error::Decode(format!("age out of range: {}", self.age)))?;
    Ok(Person {
      id: self.id,
      name: self.name,
      surname: self.surname,
      patronymic: self.patronymic,
      age,
      gender: decode_gender(&self.gender)?,
      nationality: self.nationality,
    })
  }
}
