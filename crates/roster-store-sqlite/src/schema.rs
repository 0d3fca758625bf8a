//! SQL schema for the Roster SQLite store.
//!
//! Executed once at connection startup. Idempotent, so reopening an existing
//! file is safe.

/// Full schema DDL.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

CREATE TABLE IF NOT EXISTS people (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    name        TEXT    NOT NULL CHECK (name <> ''),
    surname     TEXT    NOT NULL CHECK (surname <> ''),
    patronymic  TEXT,
    age         INTEGER NOT NULL DEFAULT 0 CHECK (age >= 0),
    gender      TEXT    NOT NULL DEFAULT 'unknown'
                CHECK (gender IN ('male', 'female', 'unknown')),
    nationality TEXT    NOT NULL DEFAULT ''
);

PRAGMA user_version = 1;
";
