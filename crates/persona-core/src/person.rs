//! The `Person` entity.
//!
//! A person may transiently hold invalid field values between construction
//! (or [`Person::update`]) and [`Person::validate`]; the use cases always
//! validate before anything reaches the store.

use serde::Serialize;

use crate::{Error, Result, sex::Sex};

/// Youngest and oldest accepted ages, inclusive.
pub const AGE_RANGE: std::ops::RangeInclusive<i32> = 0..=150;

/// Minimum length of a name or surname after trimming.
pub const MIN_NAME_LEN: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
  /// Assigned by the store on first save; never set by the domain.
  pub id:         Option<i64>,
  pub first_name: String,
  pub last_name:  String,
  pub age:        Option<i32>,
  pub sex:        Option<Sex>,
}

impl Person {
  /// A person that has not been persisted yet.
  pub fn new(
    first_name: impl Into<String>,
    last_name: impl Into<String>,
    age: Option<i32>,
    sex: Option<Sex>,
  ) -> Self {
    Self {
      id: None,
      first_name: first_name.into(),
      last_name: last_name.into(),
      age,
      sex,
    }
  }

  /// Rehydrate a stored person.
  pub fn with_id(
    id: i64,
    first_name: impl Into<String>,
    last_name: impl Into<String>,
    age: i32,
    sex: Sex,
  ) -> Self {
    Self {
      id: Some(id),
      first_name: first_name.into(),
      last_name: last_name.into(),
      age: Some(age),
      sex: Some(sex),
    }
  }

  /// Check every field in the order name, surname, age, sex and fail on the
  /// first violation.
  pub fn validate(&self) -> Result<()> {
    validate_name("firstName", &self.first_name)?;
    validate_name("lastName", &self.last_name)?;

    match self.age {
      None => return Err(Error::validation("age", "must not be null")),
      Some(age) if !AGE_RANGE.contains(&age) => {
        return Err(Error::validation("age", "must be between 0 and 150"));
      }
      Some(_) => {}
    }

    if self.sex.is_none() {
      return Err(Error::validation("sex", "must not be null"));
    }

    Ok(())
  }

  /// Replace all four mutable fields. Does not validate.
  pub fn update(
    &mut self,
    first_name: String,
    last_name: String,
    age: Option<i32>,
    sex: Option<Sex>,
  ) {
    self.first_name = first_name;
    self.last_name = last_name;
    self.age = age;
    self.sex = sex;
  }
}

fn validate_name(field: &'static str, value: &str) -> Result<()> {
  let trimmed = value.trim();
  if trimmed.is_empty() {
    return Err(Error::validation(field, "must not be blank"));
  }
  if trimmed.chars().count() < MIN_NAME_LEN {
    return Err(Error::validation(field, "must be at least 2 characters long"));
  }
  Ok(())
}
