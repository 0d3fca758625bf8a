//! Handlers for `/people` endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/people` | Filters: `id,name,surname,patronymic,age,gender,nationality`; paging: `limit,offset` |
//! | `POST`   | `/people` | Body: `{"name","surname","patronymic"?}`; returns 201 + enriched person |
//! | `PUT`    | `/people?id=N`, `/people/:id` | Body: [`PersonPatch`]; applies the first present field; 200 |
//! | `DELETE` | `/people?id=N`, `/people/:id` | 204 |

use axum::{
  Json,
  extract::{
    Path, Query, State,
    rejection::{JsonRejection, QueryRejection},
  },
  http::StatusCode,
  response::IntoResponse,
};
use roster_core::{
  enrich::Enricher,
  patch::PersonPatch,
  person::{NewPerson, Person},
  query::{PersonQuery, QueryParams, parse_id},
  store::PersonStore,
};
use serde::Deserialize;

use crate::{AppState, error::ApiError};

/// `?id=` for the query-string routing variant of update and delete.
#[derive(Debug, Deserialize)]
pub struct IdParam {
  pub id: Option<String>,
}

impl IdParam {
  fn parse(&self) -> Result<i64, ApiError> {
    Ok(parse_id(self.id.as_deref().unwrap_or_default())?)
  }
}

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /people[?id=...][&name=...][&limit=...][&offset=...]`
pub async fn list<S, E>(
  State(state): State<AppState<S, E>>,
  params: Result<Query<QueryParams>, QueryRejection>,
) -> Result<Json<Vec<Person>>, ApiError>
where
  S: PersonStore + 'static,
  E: Enricher + 'static,
{
  let Query(params) = params?;
  let query = PersonQuery::from_params(params)?;
  let people = state.records.list(&query).await?;
  Ok(Json(people))
}

// ─── Create ───────────────────────────────────────────────────────────────────

/// `POST /people` — returns 201 + the stored, enriched [`Person`].
pub async fn create<S, E>(
  State(state): State<AppState<S, E>>,
  body: Result<Json<NewPerson>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError>
where
  S: PersonStore + 'static,
  E: Enricher + 'static,
{
  let Json(input) = body?;
  let person = state.records.create(input).await?;
  Ok((StatusCode::CREATED, Json(person)))
}

// ─── Update ───────────────────────────────────────────────────────────────────

async fn update<S, E>(
  state: &AppState<S, E>,
  id: i64,
  patch: PersonPatch,
) -> Result<StatusCode, ApiError>
where
  S: PersonStore + 'static,
  E: Enricher + 'static,
{
  state.records.update(id, patch).await?;
  Ok(StatusCode::OK)
}

/// `PUT /people?id=<id>`
pub async fn update_by_query<S, E>(
  State(state): State<AppState<S, E>>,
  param: Result<Query<IdParam>, QueryRejection>,
  body: Result<Json<PersonPatch>, JsonRejection>,
) -> Result<StatusCode, ApiError>
where
  S: PersonStore + 'static,
  E: Enricher + 'static,
{
  let Query(param) = param?;
  let Json(patch) = body?;
  update(&state, param.parse()?, patch).await
}

/// `PUT /people/:id`
pub async fn update_by_path<S, E>(
  State(state): State<AppState<S, E>>,
  Path(raw_id): Path<String>,
  body: Result<Json<PersonPatch>, JsonRejection>,
) -> Result<StatusCode, ApiError>
where
  S: PersonStore + 'static,
  E: Enricher + 'static,
{
  let Json(patch) = body?;
  update(&state, parse_id(&raw_id)?, patch).await
}

// ─── Delete ───────────────────────────────────────────────────────────────────

/// `DELETE /people?id=<id>`
pub async fn delete_by_query<S, E>(
  State(state): State<AppState<S, E>>,
  param: Result<Query<IdParam>, QueryRejection>,
) -> Result<StatusCode, ApiError>
where
  S: PersonStore + 'static,
  E: Enricher + 'static,
{
  let Query(param) = param?;
  state.records.delete(param.parse()?).await?;
  Ok(StatusCode::NO_CONTENT)
}

/// `DELETE /people/:id`
pub async fn delete_by_path<S, E>(
  State(state): State<AppState<S, E>>,
  Path(raw_id): Path<String>,
) -> Result<StatusCode, ApiError>
where
  S: PersonStore + 'static,
  E: Enricher + 'static,
{
  state.records.delete(parse_id(&raw_id)?).await?;
  Ok(StatusCode::NO_CONTENT)
}
