//! Person — the single persistent entity — and its creation inputs.

use serde::{Deserialize, Serialize};

// ─── Gender ──────────────────────────────────────────────────────────────────

/// Closed gender enumeration. Serialised as lowercase text at both the JSON
/// and the storage boundary.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
  Male,
  Female,
  #[default]
  Unknown,
}

impl Gender {
  /// Map a free-form label to a gender. Only the exact strings `"male"` and
  /// `"female"` are recognised; everything else is [`Gender::Unknown`].
  pub fn from_label(label: &str) -> Self {
    match label {
      "male" => Self::Male,
      "female" => Self::Female,
      _ => Self::Unknown,
    }
  }

  pub fn as_str(self) -> &'static str {
    match self {
      Self::Male => "male",
      Self::Female => "female",
      Self::Unknown => "unknown",
    }
  }
}

// ─── Person ──────────────────────────────────────────────────────────────────

/// A stored person record.
///
/// `age == 0`, `gender == Unknown` and `nationality == ""` are the
/// "not determined" sentinels; none of them is ever absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
  pub id:          i64,
  pub name:        String,
  pub surname:     String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub patronymic:  Option<String>,
  pub age:         u32,
  pub gender:      Gender,
  pub nationality: String,
}

/// Creation input. Any `age`, `gender` or `nationality` supplied by the
/// caller is dropped during deserialisation; enrichment provides them.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewPerson {
  pub name:       String,
  pub surname:    String,
  #[serde(default)]
  pub patronymic: Option<String>,
}

impl NewPerson {
  pub fn new(name: impl Into<String>, surname: impl Into<String>) -> Self {
    Self { name: name.into(), surname: surname.into(), patronymic: None }
  }

  pub fn with_patronymic(mut self, patronymic: impl Into<String>) -> Self {
    self.patronymic = Some(patronymic.into());
    self
  }
}

/// The derived profile for a first name, assembled from the three inference
/// lookups. Never stored on its own.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EnrichedProfile {
  pub age:         u32,
  pub gender:      Gender,
  pub nationality: String,
}
