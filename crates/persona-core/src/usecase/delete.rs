use std::sync::Arc;

use crate::{Error, PersonStore, Result};

pub struct DeletePerson<S> {
  store: Arc<S>,
}

impl<S: PersonStore> DeletePerson<S> {
  pub fn new(store: Arc<S>) -> Self { Self { store } }

  pub async fn execute(&self, id: i64) -> Result<()> {
    tracing::debug!(id, "deleting person");
    let exists = self
      .store
      .find_by_id(id)
      .await
      .map_err(Error::store)?
      .is_some();
    if !exists {
      return Err(Error::NotFound(id));
    }

    // A concurrent delete may win between the lookup and here; the record
    // is gone either way.
    let removed = self.store.delete_by_id(id).await.map_err(Error::store)?;
    tracing::info!(id, removed, "person deleted");
    Ok(())
  }
}
