//! The `PersonStore` trait.
//!
//! The trait is implemented by storage backends (e.g. `persona-store-sqlite`).
//! Use cases depend on this abstraction, not on any concrete backend.

use std::future::Future;

use crate::{person::Person, sex::Sex};

/// Abstraction over a Persona store backend.
///
/// Callers guarantee that every person handed to [`save`](Self::save) or
/// [`update`](Self::update) has already passed
/// [`Person::validate`](crate::Person::validate).
///
/// All methods return `Send` futures so the trait can be used in multi-threaded
/// async runtimes (e.g. tokio with `axum`).
pub trait PersonStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Insert a person that has no id yet and return it with the id the
  /// store assigned.
  fn save(
    &self,
    person: Person,
  ) -> impl Future<Output = Result<Person, Self::Error>> + Send + '_;

  /// Retrieve a person by id. Returns `None` if not found.
  fn find_by_id(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<Person>, Self::Error>> + Send + '_;

  /// Persist changes to a person that already carries an id and return the
  /// stored state. Never inserts.
  fn update(
    &self,
    person: Person,
  ) -> impl Future<Output = Result<Person, Self::Error>> + Send + '_;

  /// List every stored person. No ordering is guaranteed.
  fn find_all(
    &self,
  ) -> impl Future<Output = Result<Vec<Person>, Self::Error>> + Send + '_;

  /// List every person whose sex equals `sex`.
  fn find_by_sex(
    &self,
    sex: Sex,
  ) -> impl Future<Output = Result<Vec<Person>, Self::Error>> + Send + '_;

  /// Remove a person. Returns whether a record was actually removed.
  fn delete_by_id(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;

  /// Total number of stored persons.
  fn count(&self) -> impl Future<Output = Result<u64, Self::Error>> + Send + '_;
}
