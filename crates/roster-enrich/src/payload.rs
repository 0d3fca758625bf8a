//! Wire shapes returned by the inference services, and how each resolves
//! into its part of an [`EnrichedProfile`](roster_core::person::EnrichedProfile).

use roster_core::person::Gender;
use serde::Deserialize;

/// `{"name": "...", "age": 42}`. `age` is `null` for unknown names.
#[derive(Debug, Clone, Deserialize)]
pub struct AgePayload {
  #[serde(default)]
  pub name: String,
  pub age:  Option<u32>,
}

/// `{"name": "...", "gender": "male"}`. `gender` is `null` for unknown names.
#[derive(Debug, Clone, Deserialize)]
pub struct GenderPayload {
  #[serde(default)]
  pub name:   String,
  pub gender: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CountryProbability {
  pub country_id:  String,
  pub probability: f64,
}

/// `{"name": "...", "country": [{"country_id": "UA", "probability": 0.4}]}`.
#[derive(Debug, Clone, Deserialize)]
pub struct NationalityPayload {
  #[serde(default)]
  pub name:    String,
  #[serde(default)]
  pub country: Vec<CountryProbability>,
}

impl AgePayload {
  pub fn resolve(&self) -> u32 { self.age.unwrap_or(0) }
}

impl GenderPayload {
  pub fn resolve(&self) -> Gender {
    Gender::from_label(self.gender.as_deref().unwrap_or_default())
  }
}

impl NationalityPayload {
  /// The most probable country code, or `""` when the list is empty.
  ///
  /// The list is stable-sorted by descending probability, so among equal
  /// probabilities the entry listed first wins.
  pub fn resolve(mut self) -> String {
    self
      .country
      .sort_by(|a, b| b.probability.total_cmp(&a.probability));
    self
      .country
      .into_iter()
      .next()
      .map(|c| c.country_id)
      .unwrap_or_default()
  }
}
