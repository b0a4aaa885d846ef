//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  Json,
  extract::rejection::{JsonRejection, PathRejection},
  http::StatusCode,
  response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("not found: {0}")]
  NotFound(String),

  /// Client input failed domain validation.
  #[error("bad request: {message}")]
  BadRequest {
    field:   Option<&'static str>,
    message: String,
  },

  #[error("malformed request body: {0}")]
  InvalidBody(#[from] JsonRejection),

  #[error("malformed request path: {0}")]
  InvalidPath(#[from] PathRejection),

  /// Anything the client cannot fix. Details are logged, never returned.
  #[error("internal error: {0}")]
  Internal(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl From<persona_core::Error> for ApiError {
  fn from(err: persona_core::Error) -> Self {
    use persona_core::Error as E;
    match err {
      E::NotFound(_) => ApiError::NotFound(err.to_string()),
      E::Validation { .. } | E::InvalidSex(_) => ApiError::BadRequest {
        field:   err.field(),
        message: err.to_string(),
      },
      E::Store(inner) => ApiError::Internal(inner),
    }
  }
}

/// JSON body of every error response.
///
/// The request path is not echoed back; clients already know it.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
  pub status:    u16,
  pub error:     &'static str,
  pub message:   String,
  pub timestamp: DateTime<Utc>,
  /// Offending input field, for validation failures.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub field:     Option<&'static str>,
  #[serde(skip_serializing_if = "Vec::is_empty")]
  pub details:   Vec<String>,
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let mut field = None;
    let (status, error, message, details) = match self {
      ApiError::NotFound(m) => (StatusCode::NOT_FOUND, "Not Found", m, vec![]),
      ApiError::BadRequest { field: f, message } => {
        field = f;
        (StatusCode::BAD_REQUEST, "Validation Failed", message, vec![])
      }
      ApiError::InvalidBody(rejection) => (
        StatusCode::BAD_REQUEST,
        "Validation Failed",
        "request body does not match the expected shape".to_owned(),
        vec![rejection.body_text()],
      ),
      ApiError::InvalidPath(rejection) => (
        StatusCode::BAD_REQUEST,
        "Bad Request",
        "request path is not valid".to_owned(),
        vec![rejection.body_text()],
      ),
      ApiError::Internal(e) => {
        tracing::error!(error = %e, "request failed");
        (
          StatusCode::INTERNAL_SERVER_ERROR,
          "Internal Server Error",
          "internal server error".to_owned(),
          vec![],
        )
      }
    };

    let body = ErrorBody {
      status: status.as_u16(),
      error,
      message,
      timestamp: Utc::now(),
      field,
      details,
    };
    (status, Json(body)).into_response()
  }
}
