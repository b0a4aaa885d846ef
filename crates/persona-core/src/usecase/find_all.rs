use std::sync::Arc;

use crate::{Error, Person, PersonStore, Result};

pub struct FindAllPersons<S> {
  store: Arc<S>,
}

impl<S: PersonStore> FindAllPersons<S> {
  pub fn new(store: Arc<S>) -> Self { Self { store } }

  pub async fn execute(&self) -> Result<Vec<Person>> {
    tracing::debug!("listing all persons");
    self.store.find_all().await.map_err(Error::store)
  }
}
