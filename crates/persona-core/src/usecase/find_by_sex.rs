use std::sync::Arc;

use crate::{Error, Person, PersonStore, Result, Sex};

pub struct FindPersonsBySex<S> {
  store: Arc<S>,
}

impl<S: PersonStore> FindPersonsBySex<S> {
  pub fn new(store: Arc<S>) -> Self { Self { store } }

  /// `code` is a wire code such as `"F"`; see [`Sex::parse`].
  pub async fn execute(&self, code: &str) -> Result<Vec<Person>> {
    let sex = Sex::parse(code)?;
    tracing::debug!(sex = sex.description(), "listing persons by sex");
    self.store.find_by_sex(sex).await.map_err(Error::store)
  }
}
