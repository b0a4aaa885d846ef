use std::sync::Arc;

use crate::{Error, Person, PersonStore, Result};

pub struct CreatePerson<S> {
  store: Arc<S>,
}

impl<S: PersonStore> CreatePerson<S> {
  pub fn new(store: Arc<S>) -> Self { Self { store } }

  /// Validate `person` and insert it.
  pub async fn execute(&self, person: Person) -> Result<Person> {
    tracing::debug!(first_name = %person.first_name, "creating person");
    person.validate()?;

    let saved = self.store.save(person).await.map_err(Error::store)?;
    tracing::info!(id = ?saved.id, "person created");
    Ok(saved)
  }
}
