//! Error type for `persona-store-sqlite`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  /// A stored row could not be turned back into a domain value.
  #[error("corrupt row {id}: {message}")]
  Decode { id: i64, message: String },

  #[error("cannot insert person that already has id {0}")]
  AlreadyPersisted(i64),

  #[error("person is missing required field '{0}'")]
  Incomplete(&'static str),

  #[error("cannot update person without an id")]
  MissingId,

  #[error("no person with id {0}")]
  NotFound(i64),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
