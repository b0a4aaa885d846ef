//! Encoding and decoding helpers between [`Person`] and the plain column
//! values stored in SQLite.
//!
//! `sex` is stored as its one-character wire code.

use persona_core::{Person, Sex};

use crate::{Error, Result};

/// Column list shared by every `SELECT`, in [`RawPerson`] field order.
pub const COLUMNS: &str = "id, first_name, last_name, age, sex";

/// Column values for an `INSERT` or `UPDATE`.
pub struct PersonRow {
  pub first_name: String,
  pub last_name:  String,
  pub age:        i32,
  pub sex:        &'static str,
}

pub fn encode_person(person: &Person) -> Result<PersonRow> {
  Ok(PersonRow {
    first_name: person.first_name.clone(),
    last_name:  person.last_name.clone(),
    age:        person.age.ok_or(Error::Incomplete("age"))?,
    sex:        person.sex.map(Sex::code).ok_or(Error::Incomplete("sex"))?,
  })
}

/// A row as read from `personas`, before the sex code is parsed.
#[derive(Debug)]
pub struct RawPerson {
  pub id:         i64,
  pub first_name: String,
  pub last_name:  String,
  pub age:        i32,
  pub sex:        String,
}

impl RawPerson {
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      id:         row.get(0)?,
      first_name: row.get(1)?,
      last_name:  row.get(2)?,
      age:        row.get(3)?,
      sex:        row.get(4)?,
    })
  }

  pub fn into_person(self) -> Result<Person> {
    let sex = Sex::parse(&self.sex).map_err(|e| Error::Decode {
      id:      self.id,
      message: e.to_string(),
    })?;
    Ok(Person::with_id(
      self.id,
      self.first_name,
      self.last_name,
      self.age,
      sex,
    ))
  }
}
