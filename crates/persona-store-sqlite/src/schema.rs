//! SQL schema for the Persona SQLite store.
//!
//! Executed once at connection startup. Future migrations will be gated on
//! `PRAGMA user_version`.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

CREATE TABLE IF NOT EXISTS personas (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    first_name  TEXT    NOT NULL,
    last_name   TEXT    NOT NULL,
    age         INTEGER NOT NULL,
    sex         TEXT    NOT NULL CHECK (sex IN ('M', 'F'))  -- Sex wire code
);

CREATE INDEX IF NOT EXISTS personas_sex_idx ON personas(sex);

PRAGMA user_version = 1;
";
