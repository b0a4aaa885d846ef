//! JSON REST API for Persona.
//!
//! Exposes an axum [`Router`] backed by a [`PersonService`] over any
//! [`persona_core::PersonStore`]. TLS and transport concerns are the caller's
//! responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .merge(persona_api::api_router(Arc::new(PersonService::new(store))))
//! ```

pub mod error;
pub mod persons;

use std::sync::Arc;

use axum::{Router, routing::get};
use persona_core::{PersonService, PersonStore};

pub use error::ApiError;

/// Build a fully-materialised API router for `service`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(service: Arc<PersonService<S>>) -> Router<()>
where
  S: PersonStore + 'static,
{
  Router::new()
    .route("/persona", get(persons::list::<S>).post(persons::create::<S>))
    .route(
      "/persona/{id}",
      get(persons::get_one::<S>)
        .put(persons::update::<S>)
        .delete(persons::remove::<S>),
    )
    .route("/persona/sexo/{code}", get(persons::list_by_sex::<S>))
    .with_state(service)
}
