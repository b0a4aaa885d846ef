use std::sync::Arc;

use crate::{Error, Person, PersonStore, Result};

pub struct FindPersonById<S> {
  store: Arc<S>,
}

impl<S: PersonStore> FindPersonById<S> {
  pub fn new(store: Arc<S>) -> Self { Self { store } }

  pub async fn execute(&self, id: i64) -> Result<Person> {
    tracing::debug!(id, "looking up person");
    self
      .store
      .find_by_id(id)
      .await
      .map_err(Error::store)?
      .ok_or(Error::NotFound(id))
  }
}
