//! [`SqliteStore`] — the SQLite implementation of [`PersonStore`].

use std::path::Path;

use persona_core::{Person, PersonStore, Sex};
use rusqlite::OptionalExtension as _;

use crate::{
  Error, Result,
  encode::{COLUMNS, RawPerson, encode_person},
  schema::SCHEMA,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A Persona store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  /// Run a `SELECT` returning whole rows and decode them.
  async fn query_persons(
    &self,
    sql: String,
    sex: Option<&'static str>,
  ) -> Result<Vec<Person>> {
    let raws: Vec<RawPerson> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(&sql)?;
        let rows = match sex {
          Some(code) => stmt
            .query_map(rusqlite::params![code], RawPerson::from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?,
          None => stmt
            .query_map([], RawPerson::from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?,
        };
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawPerson::into_person).collect()
  }
}

// ─── PersonStore impl ────────────────────────────────────────────────────────

impl PersonStore for SqliteStore {
  type Error = Error;

  async fn save(&self, mut person: Person) -> Result<Person> {
    if let Some(id) = person.id {
      return Err(Error::AlreadyPersisted(id));
    }
    let row = encode_person(&person)?;

    let id = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO personas (first_name, last_name, age, sex)
           VALUES (?1, ?2, ?3, ?4)",
          rusqlite::params![row.first_name, row.last_name, row.age, row.sex],
        )?;
        Ok(conn.last_insert_rowid())
      })
      .await?;

    tracing::debug!(id, "inserted person row");
    person.id = Some(id);
    Ok(person)
  }

  async fn find_by_id(&self, id: i64) -> Result<Option<Person>> {
    let raw: Option<RawPerson> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              &format!("SELECT {COLUMNS} FROM personas WHERE id = ?1"),
              rusqlite::params![id],
              RawPerson::from_row,
            )
            .optional()?,
        )
      })
      .await?;

    raw.map(RawPerson::into_person).transpose()
  }

  async fn update(&self, person: Person) -> Result<Person> {
    let id = person.id.ok_or(Error::MissingId)?;
    let row = encode_person(&person)?;

    let changed = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "UPDATE personas
           SET first_name = ?1, last_name = ?2, age = ?3, sex = ?4
           WHERE id = ?5",
          rusqlite::params![row.first_name, row.last_name, row.age, row.sex, id],
        )?)
      })
      .await?;

    if changed == 0 {
      return Err(Error::NotFound(id));
    }
    Ok(person)
  }

  async fn find_all(&self) -> Result<Vec<Person>> {
    self
      .query_persons(format!("SELECT {COLUMNS} FROM personas ORDER BY id"), None)
      .await
  }

  async fn find_by_sex(&self, sex: Sex) -> Result<Vec<Person>> {
    self
      .query_persons(
        format!("SELECT {COLUMNS} FROM personas WHERE sex = ?1 ORDER BY id"),
        Some(sex.code()),
      )
      .await
  }

  async fn delete_by_id(&self, id: i64) -> Result<bool> {
    let removed = self
      .conn
      .call(move |conn| {
        Ok(conn.execute("DELETE FROM personas WHERE id = ?1", rusqlite::params![id])?)
      })
      .await?;
    Ok(removed > 0)
  }

  async fn count(&self) -> Result<u64> {
    let count: i64 = self
      .conn
      .call(|conn| {
        Ok(conn.query_row("SELECT COUNT(*) FROM personas", [], |r| r.get(0))?)
      })
      .await?;
    Ok(count as u64)
  }
}
