//! Integration tests for `SqliteStore` against an in-memory database.

use roster_core::{
  patch::FieldChange,
  person::{EnrichedProfile, Gender, NewPerson},
  query::{Page, PersonQuery, QueryParams},
  store::PersonStore,
};

use crate::SqliteStore;

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

fn profile(age: u32, gender: Gender, nationality: &str) -> EnrichedProfile {
  EnrichedProfile { age, gender, nationality: nationality.into() }
}

/// Seed a small, varied table and return the store.
async fn seeded() -> SqliteStore {
  let s = store().await;
  let rows = [
    ("Ivan", "Petrov", Some("Sergeevich"), profile(30, Gender::Male, "RU")),
    ("Anna", "Ivanova", None, profile(25, Gender::Female, "RU")),
    ("John", "Smith", None, profile(30, Gender::Male, "US")),
    ("Maria", "Petrova", Some("Ivanovna"), profile(41, Gender::Female, "UA")),
    ("Alex", "100%_real", None, profile(0, Gender::Unknown, "")),
  ];
  for (name, surname, patronymic, p) in rows {
    let mut np = NewPerson::new(name, surname);
    np.patronymic = patronymic.map(str::to_owned);
    s.insert(np, p).await.unwrap();
  }
  s
}

async fn names(s: &SqliteStore, q: PersonQuery) -> Vec<String> {
  s.find(&q).await.unwrap().into_iter().map(|p| p.name).collect()
}

// ─── Insert / read back ──────────────────────────────────────────────────────

#[tokio::test]
async fn insert_assigns_unique_ids_and_reads_back() {
  let s = store().await;

  let a = s
    .insert(
      NewPerson::new("Dmitriy", "Ushakov").with_patronymic("Vasilevich"),
      profile(43, Gender::Male, "UA"),
    )
    .await
    .unwrap();
  let b = s
    .insert(NewPerson::new("Olga", "Ushakova"), profile(38, Gender::Female, "UA"))
    .await
    .unwrap();

  assert!(a.id > 0);
  assert_ne!(a.id, b.id);

  let fetched = s.find(&PersonQuery::by_id(a.id)).await.unwrap();
  assert_eq!(fetched, vec![a]);
}

#[tokio::test]
async fn unknown_sentinels_are_stored_not_null() {
  let s = store().await;
  let p = s
    .insert(NewPerson::new("Zed", "Unknown"), EnrichedProfile::default())
    .await
    .unwrap();

  let fetched = s.find(&PersonQuery::by_id(p.id)).await.unwrap().remove(0);
  assert_eq!(fetched.age, 0);
  assert_eq!(fetched.gender, Gender::Unknown);
  assert_eq!(fetched.nationality, "");
  assert_eq!(fetched.patronymic, None);
}

#[tokio::test]
async fn empty_name_violates_schema() {
  let s = store().await;
  let err = s
    .insert(NewPerson::new("", "Nobody"), EnrichedProfile::default())
    .await;
  assert!(matches!(err, Err(crate::Error::Database(_))));
  assert_eq!(s.count().await.unwrap(), 0);
}

// ─── Filtering ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn no_filters_returns_first_page() {
  let s = seeded().await;
  let all = s.find(&PersonQuery::default()).await.unwrap();
  assert_eq!(all.len(), 5);
}

#[tokio::test]
async fn substring_filters_are_case_sensitive() {
  let s = seeded().await;

  let q = PersonQuery { surname: Some("Petrov".into()), ..PersonQuery::default() };
  assert_eq!(names(&s, q).await, ["Ivan", "Maria"]);

  let q = PersonQuery { surname: Some("petrov".into()), ..PersonQuery::default() };
  assert!(names(&s, q).await.is_empty());
}

#[tokio::test]
async fn wildcard_characters_match_literally() {
  let s = seeded().await;
  let q = PersonQuery { surname: Some("%_".into()), ..PersonQuery::default() };
  assert_eq!(names(&s, q).await, ["Alex"]);

  let q = PersonQuery { name: Some("%".into()), ..PersonQuery::default() };
  assert!(names(&s, q).await.is_empty());
}

#[tokio::test]
async fn gender_filter_is_a_substring_match() {
  let s = seeded().await;

  let q = PersonQuery { gender: Some("female".into()), ..PersonQuery::default() };
  assert_eq!(names(&s, q).await, ["Anna", "Maria"]);

  // "male" is contained in "female" as well.
  let q = PersonQuery { gender: Some("male".into()), ..PersonQuery::default() };
  assert_eq!(names(&s, q).await.len(), 4);
}

#[tokio::test]
async fn filters_are_conjoined() {
  let s = seeded().await;
  let q = PersonQuery {
    age: Some(30),
    nationality: Some("RU".into()),
    ..PersonQuery::default()
  };
  assert_eq!(names(&s, q).await, ["Ivan"]);
}

#[tokio::test]
async fn patronymic_filter_skips_null_patronymics() {
  let s = seeded().await;
  let q = PersonQuery { patronymic: Some("Iv".into()), ..PersonQuery::default() };
  assert_eq!(names(&s, q).await, ["Maria"]);
}

#[tokio::test]
async fn empty_result_is_not_an_error() {
  let s = seeded().await;
  let q = PersonQuery { nationality: Some("JP".into()), ..PersonQuery::default() };
  assert!(s.find(&q).await.unwrap().is_empty());
}

#[tokio::test]
async fn age_beyond_u32_matches_nothing() {
  let s = seeded().await;
  let params = QueryParams { age: Some("5000000000".into()), ..QueryParams::default() };
  let q = PersonQuery::from_params(params).unwrap();
  assert!(s.find(&q).await.unwrap().is_empty());
}

// ─── Pagination ──────────────────────────────────────────────────────────────

#[tokio::test]
async fn pagination_windows_do_not_overlap() {
  let s = seeded().await;

  let first = PersonQuery { page: Page { limit: 2, offset: 0 }, ..PersonQuery::default() };
  let second = PersonQuery { page: Page { limit: 2, offset: 2 }, ..PersonQuery::default() };
  let third = PersonQuery { page: Page { limit: 2, offset: 4 }, ..PersonQuery::default() };

  assert_eq!(names(&s, first).await, ["Ivan", "Anna"]);
  assert_eq!(names(&s, second).await, ["John", "Maria"]);
  assert_eq!(names(&s, third).await, ["Alex"]);
}

#[tokio::test]
async fn default_limit_caps_results_at_ten() {
  let s = store().await;
  for i in 0..12 {
    s.insert(NewPerson::new(format!("N{i}"), "S"), EnrichedProfile::default())
      .await
      .unwrap();
  }

  let params = QueryParams { limit: Some("0".into()), offset: Some("-1".into()), ..QueryParams::default() };
  let q = PersonQuery::from_params(params).unwrap();
  assert_eq!(s.find(&q).await.unwrap().len(), 10);
}

#[tokio::test]
async fn oversized_limit_returns_every_row() {
  let s = seeded().await;
  let params = QueryParams { limit: Some("5000000000".into()), ..QueryParams::default() };
  let q = PersonQuery::from_params(params).unwrap();
  assert_eq!(s.find(&q).await.unwrap().len(), 5);
}

// ─── Update / delete ─────────────────────────────────────────────────────────

#[tokio::test]
async fn update_writes_a_single_column() {
  let s = seeded().await;

  let affected = s.update(1, FieldChange::Gender(Gender::Unknown)).await.unwrap();
  assert_eq!(affected, 1);

  let p = s.find(&PersonQuery::by_id(1)).await.unwrap().remove(0);
  assert_eq!(p.gender, Gender::Unknown);
  assert_eq!(p.name, "Ivan");
  assert_eq!(p.age, 30);
}

#[tokio::test]
async fn update_missing_row_affects_nothing() {
  let s = seeded().await;
  let affected = s.update(999, FieldChange::Age(1)).await.unwrap();
  assert_eq!(affected, 0);
}

#[tokio::test]
async fn delete_removes_row_and_is_idempotent() {
  let s = seeded().await;

  assert_eq!(s.delete(2).await.unwrap(), 1);
  assert_eq!(s.delete(2).await.unwrap(), 0);
  assert!(s.find(&PersonQuery::by_id(2)).await.unwrap().is_empty());
  assert_eq!(s.count().await.unwrap(), 4);
}

#[tokio::test]
async fn ids_are_not_reused_after_delete() {
  let s = store().await;
  let a = s.insert(NewPerson::new("A", "A"), EnrichedProfile::default()).await.unwrap();
  s.delete(a.id).await.unwrap();
  let b = s.insert(NewPerson::new("B", "B"), EnrichedProfile::default()).await.unwrap();
  assert!(b.id > a.id);
}
