//! [`PersonService`] — the single entry point consumed by transports.

use std::sync::Arc;

use crate::{
  Person, PersonStore, Result,
  usecase::{
    CreatePerson, DeletePerson, FindAllPersons, FindPersonById,
    FindPersonsBySex, UpdatePerson,
  },
};

/// Composes the six use cases over one shared store. Every method delegates
/// to exactly one use case.
pub struct PersonService<S> {
  create:      CreatePerson<S>,
  find_by_id:  FindPersonById<S>,
  update:      UpdatePerson<S>,
  find_all:    FindAllPersons<S>,
  find_by_sex: FindPersonsBySex<S>,
  delete:      DeletePerson<S>,
}

impl<S: PersonStore> PersonService<S> {
  pub fn new(store: Arc<S>) -> Self {
    Self {
      create:      CreatePerson::new(store.clone()),
      find_by_id:  FindPersonById::new(store.clone()),
      update:      UpdatePerson::new(store.clone()),
      find_all:    FindAllPersons::new(store.clone()),
      find_by_sex: FindPersonsBySex::new(store.clone()),
      delete:      DeletePerson::new(store),
    }
  }

  pub async fn create(&self, person: Person) -> Result<Person> {
    self.create.execute(person).await
  }

  pub async fn get_by_id(&self, id: i64) -> Result<Person> {
    self.find_by_id.execute(id).await
  }

  pub async fn update(&self, id: i64, changes: Person) -> Result<Person> {
    self.update.execute(id, changes).await
  }

  pub async fn list_all(&self) -> Result<Vec<Person>> {
    self.find_all.execute().await
  }

  pub async fn list_by_sex(&self, code: &str) -> Result<Vec<Person>> {
    self.find_by_sex.execute(code).await
  }

  pub async fn remove(&self, id: i64) -> Result<()> {
    self.delete.execute(id).await
  }
}
