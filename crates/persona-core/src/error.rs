//! Error types for `persona-core`.

use thiserror::Error;

use crate::sex::ParseSexError;

#[derive(Debug, Error)]
pub enum Error {
  #[error("person with id {0} not found")]
  NotFound(i64),

  #[error("validation failed on '{field}': {reason}")]
  Validation {
    field:  &'static str,
    reason: &'static str,
  },

  /// A sex wire code that does not parse; reported against field `sex`.
  #[error("validation failed on 'sex': {0}")]
  InvalidSex(#[from] ParseSexError),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
  pub(crate) fn validation(field: &'static str, reason: &'static str) -> Self {
    Self::Validation { field, reason }
  }

  /// Wrap a backend error raised by a [`PersonStore`](crate::PersonStore).
  pub fn store<E>(err: E) -> Self
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    Self::Store(Box::new(err))
  }

  /// The input field a client error refers to.
  pub fn field(&self) -> Option<&'static str> {
    match self {
      Self::Validation { field, .. } => Some(*field),
      Self::InvalidSex(_) => Some("sex"),
      Self::NotFound(_) | Self::Store(_) => None,
    }
  }

  /// `true` when the caller supplied bad input (as opposed to a missing
  /// record or a storage failure).
  pub fn is_client_error(&self) -> bool {
    matches!(self, Self::Validation { .. } | Self::InvalidSex(_))
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
  use super::*;
  use crate::Sex;

  #[test]
  fn invalid_sex_is_a_validation_failure_on_sex() {
    let err = Error::from(Sex::parse("X").unwrap_err());
    assert_eq!(err.field(), Some("sex"));
    assert!(err.is_client_error());
    assert_eq!(
      err.to_string(),
      "validation failed on 'sex': invalid sex code 'X', valid values: M, F"
    );
  }

  #[test]
  fn only_client_errors_name_a_field() {
    assert_eq!(Error::validation("age", "must not be null").field(), Some("age"));
    assert_eq!(Error::NotFound(3).field(), None);
    assert!(!Error::NotFound(3).is_client_error());
  }
}
