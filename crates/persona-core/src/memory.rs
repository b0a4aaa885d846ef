//! In-memory [`PersonStore`] used by the use-case tests.

use std::{
  collections::BTreeMap,
  sync::{
    Mutex,
    atomic::{AtomicI64, AtomicUsize, Ordering},
  },
};

use thiserror::Error;

use crate::{Person, PersonStore, Sex};

#[derive(Debug, Error)]
pub enum MemoryError {
  #[error("person has no id")]
  MissingId,
  #[error("person already has id {0}")]
  AlreadyPersisted(i64),
  #[error("no person with id {0}")]
  Missing(i64),
}

#[derive(Default)]
pub struct MemoryStore {
  rows:    Mutex<BTreeMap<i64, Person>>,
  next_id: AtomicI64,
  /// Number of `update` calls that reached the store.
  pub updates: AtomicUsize,
}

impl MemoryStore {
  fn rows(&self) -> std::sync::MutexGuard<'_, BTreeMap<i64, Person>> {
    self.rows.lock().unwrap_or_else(|e| e.into_inner())
  }
}

impl PersonStore for MemoryStore {
  type Error = MemoryError;

  async fn save(&self, mut person: Person) -> Result<Person, MemoryError> {
    if let Some(id) = person.id {
      return Err(MemoryError::AlreadyPersisted(id));
    }
    let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
    person.id = Some(id);
    self.rows().insert(id, person.clone());
    Ok(person)
  }

  async fn find_by_id(&self, id: i64) -> Result<Option<Person>, MemoryError> {
    Ok(self.rows().get(&id).cloned())
  }

  async fn update(&self, person: Person) -> Result<Person, MemoryError> {
    self.updates.fetch_add(1, Ordering::SeqCst);
    let id = person.id.ok_or(MemoryError::MissingId)?;
    let mut rows = self.rows();
    let slot = rows.get_mut(&id).ok_or(MemoryError::Missing(id))?;
    *slot = person.clone();
    Ok(person)
  }

  async fn find_all(&self) -> Result<Vec<Person>, MemoryError> {
    Ok(self.rows().values().cloned().collect())
  }

  async fn find_by_sex(&self, sex: Sex) -> Result<Vec<Person>, MemoryError> {
    Ok(
      self
        .rows()
        .values()
        .filter(|p| p.sex == Some(sex))
        .cloned()
        .collect(),
    )
  }

  async fn delete_by_id(&self, id: i64) -> Result<bool, MemoryError> {
    Ok(self.rows().remove(&id).is_some())
  }

  async fn count(&self) -> Result<u64, MemoryError> {
    Ok(self.rows().len() as u64)
  }
}
