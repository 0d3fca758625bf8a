//! Partial updates.
//!
//! A [`PersonPatch`] may carry any subset of the mutable fields, but only
//! **one** of them is ever applied: the first present field in the order
//! name, surname, patronymic, age, gender, nationality. The rest are ignored.
//!
//! This is a known oddity carried over for behavioural compatibility with
//! existing clients. It may originally have been meant as a full merge; do
//! not "fix" it without versioning the API.

use serde::Deserialize;

use crate::person::{Gender, Person};

/// Body of `PUT /people`. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PersonPatch {
  pub name:        Option<String>,
  pub surname:     Option<String>,
  pub patronymic:  Option<String>,
  pub age:         Option<u32>,
  pub gender:      Option<Gender>,
  pub nationality: Option<String>,
}

/// A single-field change selected from a [`PersonPatch`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldChange {
  Name(String),
  Surname(String),
  Patronymic(String),
  Age(u32),
  Gender(Gender),
  Nationality(String),
}

impl PersonPatch {
  /// Select the first present field in priority order.
  ///
  /// Returns `None` when the patch is empty.
  pub fn into_change(self) -> Option<FieldChange> {
    let ordered = [
      self.name.map(FieldChange::Name),
      self.surname.map(FieldChange::Surname),
      self.patronymic.map(FieldChange::Patronymic),
      self.age.map(FieldChange::Age),
      self.gender.map(FieldChange::Gender),
      self.nationality.map(FieldChange::Nationality),
    ];
    ordered.into_iter().flatten().next()
  }
}

impl FieldChange {
  /// Column / JSON field name the change targets.
  pub fn field(&self) -> &'static str {
    match self {
      Self::Name(_) => "name",
      Self::Surname(_) => "surname",
      Self::Patronymic(_) => "patronymic",
      Self::Age(_) => "age",
      Self::Gender(_) => "gender",
      Self::Nationality(_) => "nationality",
    }
  }

  /// Apply the change to an in-memory record.
  pub fn apply_to(self, person: &mut Person) {
    match self {
      Self::Name(v) => person.name = v,
      Self::Surname(v) => person.surname = v,
      Self::Patronymic(v) => person.patronymic = Some(v),
      Self::Age(v) => person.age = v,
      Self::Gender(v) => person.gender = v,
      Self::Nationality(v) => person.nationality = v,
    }
  }
}
