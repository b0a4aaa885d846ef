//! Handlers for `/persona` endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/persona` | Every stored person |
//! | `POST`   | `/persona` | Body: [`PersonBody`]; returns 201 + stored person |
//! | `GET`    | `/persona/{id}` | 404 if not found |
//! | `PUT`    | `/persona/{id}` | Body: [`PersonBody`]; 404 / 400 on failure |
//! | `DELETE` | `/persona/{id}` | 204; 404 if not found |
//! | `GET`    | `/persona/sexo/{code}` | `code` is `M` or `F`; 400 otherwise |

use std::sync::Arc;

use axum::{
  Json,
  extract::{
    Path, State,
    rejection::{JsonRejection, PathRejection},
  },
  http::StatusCode,
  response::IntoResponse,
};
use persona_core::{Person, PersonService, PersonStore, Sex};
use serde::Deserialize;

use crate::error::ApiError;

type Service<S> = State<Arc<PersonService<S>>>;

/// `{id}` segment; parse failures are reported as [`ApiError::InvalidPath`].
type IdPath = Result<Path<i64>, PathRejection>;

// ─── Request body ─────────────────────────────────────────────────────────────

/// JSON body accepted by `POST /persona` and `PUT /persona/{id}`.
///
/// Every field is optional here; missing values are reported by domain
/// validation so the client sees which field failed.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonBody {
  pub first_name: Option<String>,
  pub last_name:  Option<String>,
  pub age:        Option<i32>,
  /// Wire code, `"M"` or `"F"`.
  pub sex:        Option<String>,
}

impl TryFrom<PersonBody> for Person {
  type Error = persona_core::Error;

  fn try_from(b: PersonBody) -> Result<Self, Self::Error> {
    let sex = b.sex.as_deref().map(Sex::parse).transpose()?;
    Ok(Person::new(
      b.first_name.unwrap_or_default(),
      b.last_name.unwrap_or_default(),
      b.age,
      sex,
    ))
  }
}

fn person_from_body(
  body: Result<Json<PersonBody>, JsonRejection>,
) -> Result<Person, ApiError> {
  let Json(body) = body?;
  Ok(Person::try_from(body)?)
}

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /persona`
pub async fn list<S>(State(service): Service<S>) -> Result<Json<Vec<Person>>, ApiError>
where
  S: PersonStore + 'static,
{
  Ok(Json(service.list_all().await?))
}

/// `GET /persona/sexo/{code}`
pub async fn list_by_sex<S>(
  State(service): Service<S>,
  code: Result<Path<String>, PathRejection>,
) -> Result<Json<Vec<Person>>, ApiError>
where
  S: PersonStore + 'static,
{
  let Path(code) = code?;
  Ok(Json(service.list_by_sex(&code).await?))
}

// ─── Create ───────────────────────────────────────────────────────────────────

/// `POST /persona` — returns 201 + the stored [`Person`] with its new id.
pub async fn create<S>(
  State(service): Service<S>,
  body: Result<Json<PersonBody>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError>
where
  S: PersonStore + 'static,
{
  let person = person_from_body(body)?;
  let created = service.create(person).await?;
  Ok((StatusCode::CREATED, Json(created)))
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /persona/{id}`
pub async fn get_one<S>(
  State(service): Service<S>,
  id: IdPath,
) -> Result<Json<Person>, ApiError>
where
  S: PersonStore + 'static,
{
  let Path(id) = id?;
  Ok(Json(service.get_by_id(id).await?))
}

// ─── Update ───────────────────────────────────────────────────────────────────

/// `PUT /persona/{id}`
pub async fn update<S>(
  State(service): Service<S>,
  id: IdPath,
  body: Result<Json<PersonBody>, JsonRejection>,
) -> Result<Json<Person>, ApiError>
where
  S: PersonStore + 'static,
{
  let Path(id) = id?;
  let changes = person_from_body(body)?;
  Ok(Json(service.update(id, changes).await?))
}

// ─── Delete ───────────────────────────────────────────────────────────────────

/// `DELETE /persona/{id}` — 204 on success.
pub async fn remove<S>(
  State(service): Service<S>,
  id: IdPath,
) -> Result<StatusCode, ApiError>
where
  S: PersonStore + 'static,
{
  let Path(id) = id?;
  service.remove(id).await?;
  Ok(StatusCode::NO_CONTENT)
}
