//! Compile a [`PersonQuery`] into one parameterised `SELECT`.
//!
//! Every present filter becomes one `AND`-ed condition; values are always
//! bound, never interpolated. Text filters use `instr` rather than `LIKE`,
//! which keeps them case-sensitive and treats `%` / `_` literally.

use roster_core::query::PersonQuery;
use rusqlite::types::Value;

use crate::encode::PERSON_COLUMNS;

/// SQL text plus positional parameters, in placeholder order.
pub struct CompiledQuery {
  pub sql:    String,
  pub params: Vec<Value>,
}

pub fn build_select(query: &PersonQuery) -> CompiledQuery {
  let mut conds: Vec<String> = vec![];
  let mut params: Vec<Value> = vec![];

  let mut push = |cond: &str, value: Value| {
    params.push(value);
    conds.push(cond.replace('?', &format!("?{}", params.len())));
  };

  if let Some(id) = query.id {
    push("id = ?", Value::Integer(id));
  }
  let substrings = [
    ("name", &query.name),
    ("surname", &query.surname),
    ("patronymic", &query.patronymic),
  ];
  for (column, needle) in substrings {
    if let Some(n) = needle {
      push(&format!("instr({column}, ?) > 0"), Value::Text(n.clone()));
    }
  }
  if let Some(age) = query.age {
    push("age = ?", Value::Integer(age));
  }
  let substrings = [("gender", &query.gender), ("nationality", &query.nationality)];
  for (column, needle) in substrings {
    if let Some(n) = needle {
      push(&format!("instr({column}, ?) > 0"), Value::Text(n.clone()));
    }
  }

  let where_clause = if conds.is_empty() {
    String::new()
  } else {
    format!(" WHERE {}", conds.join(" AND "))
  };

  let limit_idx = params.len() + 1;
  let offset_idx = params.len() + 2;
  params.push(Value::Integer(i64::from(query.page.limit)));
  params.push(Value::Integer(i64::from(query.page.offset)));

  CompiledQuery {
    sql: format!(
      "SELECT {PERSON_COLUMNS} FROM people{where_clause} \
       ORDER BY id LIMIT ?{limit_idx} OFFSET ?{offset_idx}"
    ),
    params,
  }
}
