//! One orchestration unit per operation.
//!
//! Each use case owns a handle to the [`PersonStore`](crate::PersonStore) and
//! exposes a single `execute` method. Business rules stay in
//! [`Person::validate`](crate::Person::validate) and
//! [`Sex::parse`](crate::Sex::parse).

mod create;
mod delete;
mod find_all;
mod find_by_id;
mod find_by_sex;
mod update;

pub use create::CreatePerson;
pub use delete::DeletePerson;
pub use find_all::FindAllPersons;
pub use find_by_id::FindPersonById;
pub use find_by_sex::FindPersonsBySex;
pub use update::UpdatePerson;
