use std::sync::Arc;

use crate::{Error, Person, PersonStore, Result};

pub struct UpdatePerson<S> {
  store: Arc<S>,
}

impl<S: PersonStore> UpdatePerson<S> {
  pub fn new(store: Arc<S>) -> Self { Self { store } }

  /// Load person `id`, overwrite its fields with those of `changes`,
  /// revalidate and persist. The id of `changes` is ignored.
  pub async fn execute(&self, id: i64, changes: Person) -> Result<Person> {
    tracing::debug!(id, "updating person");
    let mut person = self
      .store
      .find_by_id(id)
      .await
      .map_err(Error::store)?
      .ok_or(Error::NotFound(id))?;

    person.update(changes.first_name, changes.last_name, changes.age, changes.sex);
    person.validate()?;

    let updated = self.store.update(person).await.map_err(Error::store)?;
    tracing::info!(id, "person updated");
    Ok(updated)
  }
}
