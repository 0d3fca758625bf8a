//! Read-side query model: raw request parameters and their normalised form.
//!
//! [`QueryParams`] is exactly what arrives on the wire (every field an
//! optional string). [`PersonQuery::from_params`] turns it into the filter
//! set a store backend compiles into a single bounded read.

use serde::Deserialize;

use crate::{Error, Result};

pub const DEFAULT_LIMIT: u32 = 10;
pub const DEFAULT_OFFSET: u32 = 0;

// ─── Raw parameters ──────────────────────────────────────────────────────────

/// Query-string parameters accepted by `GET /people`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QueryParams {
  pub id:          Option<String>,
  pub name:        Option<String>,
  pub surname:     Option<String>,
  pub patronymic:  Option<String>,
  pub age:         Option<String>,
  pub gender:      Option<String>,
  pub nationality: Option<String>,
  pub limit:       Option<String>,
  pub offset:      Option<String>,
}

// ─── Normalised query ────────────────────────────────────────────────────────

/// Pagination window. Always applied, even with no filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
  pub limit:  u32,
  pub offset: u32,
}

impl Default for Page {
  fn default() -> Self { Self { limit: DEFAULT_LIMIT, offset: DEFAULT_OFFSET } }
}

/// A normalised person query. Every present filter is AND-ed; `None` imposes
/// no constraint. Text filters are case-sensitive substring matches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonQuery {
  pub id:          Option<i64>,
  pub name:        Option<String>,
  pub surname:     Option<String>,
  pub patronymic:  Option<String>,
  pub age:         Option<i64>,
  pub gender:      Option<String>,
  pub nationality: Option<String>,
  pub page:        Page,
}

impl PersonQuery {
  /// Id-only lookup returning at most one record.
  pub fn by_id(id: i64) -> Self {
    Self {
      id: Some(id),
      page: Page { limit: 1, offset: 0 },
      ..Self::default()
    }
  }

  /// Normalise raw request parameters.
  ///
  /// A non-numeric `id` or `age` is treated as absent; a numeric one that is
  /// not positive is rejected with [`Error::InvalidFilter`]. A bad `limit` or
  /// `offset` silently falls back to its default; one beyond `u32::MAX` is
  /// clamped.
  pub fn from_params(params: QueryParams) -> Result<Self> {
    let id = lenient_positive("id", params.id.as_deref())?;
    let age = lenient_positive("age", params.age.as_deref())?;

    let limit = params
      .limit
      .as_deref()
      .and_then(|s| s.parse::<i64>().ok())
      .filter(|&l| l > 0)
      .map(saturate_u32)
      .unwrap_or(DEFAULT_LIMIT);

    let offset = params
      .offset
      .as_deref()
      .and_then(|s| s.parse::<i64>().ok())
      .filter(|&o| o >= 0)
      .map(saturate_u32)
      .unwrap_or(DEFAULT_OFFSET);

    Ok(Self {
      id,
      name: non_empty(params.name),
      surname: non_empty(params.surname),
      patronymic: non_empty(params.patronymic),
      age,
      gender: non_empty(params.gender),
      nationality: non_empty(params.nationality),
      page: Page { limit, offset },
    })
  }
}

/// Strictly parse a record identifier: it must be a positive integer.
///
/// Used where an id is mandatory (update, delete), in contrast to the lenient
/// handling in [`PersonQuery::from_params`].
pub fn parse_id(raw: &str) -> Result<i64> {
  match raw.parse::<i64>() {
    Ok(id) if id > 0 => Ok(id),
    _ => Err(Error::invalid_filter("id", raw)),
  }
}

fn saturate_u32(n: i64) -> u32 { u32::try_from(n).unwrap_or(u32::MAX) }

fn non_empty(value: Option<String>) -> Option<String> {
  value.filter(|s| !s.is_empty())
}

fn lenient_positive(field: &'static str, raw: Option<&str>) -> Result<Option<i64>> {
  let Some(raw) = raw.filter(|s| !s.is_empty()) else {
    return Ok(None);
  };
  match raw.parse::<i64>() {
    Ok(n) if n > 0 => Ok(Some(n)),
    Ok(n) => Err(Error::invalid_filter(field, n)),
    Err(_) => Ok(None),
  }
}
