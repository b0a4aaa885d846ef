//! Core types, the storage port and the use cases for the Persona service.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! Transport and storage crates depend on it; it depends on neither.

// We intentionally use native `async fn` in traits (stabilised in Rust 1.75).
// Suppress the advisory lint about `Send` bounds on the returned futures.
#![allow(async_fn_in_trait)]

pub mod error;
pub mod person;
pub mod service;
pub mod sex;
pub mod store;
pub mod usecase;

#[cfg(test)]
mod memory;

pub use error::{Error, Result};
pub use person::Person;
pub use service::PersonService;
pub use sex::{ParseSexError, Sex};
pub use store::PersonStore;
