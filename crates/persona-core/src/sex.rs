//! The closed two-valued `Sex` code and its one-character wire form.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Sex of a [`Person`](crate::Person); serialised as its wire code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
  #[serde(rename = "M")]
  Male,
  #[serde(rename = "F")]
  Female,
}

/// Failure to parse a wire code into a [`Sex`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseSexError {
  #[error("sex code must not be blank")]
  Blank,

  #[error("invalid sex code '{0}', valid values: M, F")]
  Unknown(String),
}

impl Sex {
  pub const ALL: [Sex; 2] = [Sex::Male, Sex::Female];

  /// Parse a wire code. Surrounding whitespace and case are ignored.
  pub fn parse(code: &str) -> Result<Self, ParseSexError> {
    let trimmed = code.trim();
    if trimmed.is_empty() {
      return Err(ParseSexError::Blank);
    }
    Self::ALL
      .into_iter()
      .find(|sex| sex.code().eq_ignore_ascii_case(trimmed))
      .ok_or_else(|| ParseSexError::Unknown(code.to_owned()))
  }

  /// The single-character wire representation.
  pub fn code(self) -> &'static str {
    match self {
      Self::Male => "M",
      Self::Female => "F",
    }
  }

  pub fn description(self) -> &'static str {
    match self {
      Self::Male => "Male",
      Self::Female => "Female",
    }
  }
}

impl FromStr for Sex {
  type Err = ParseSexError;

  fn from_str(s: &str) -> Result<Self, Self::Err> { Self::parse(s) }
}

impl fmt::Display for Sex {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.code())
  }
}
