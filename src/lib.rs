//! # person-registry
//!
//! A CRUD HTTP service over `Person` records.
//!
//! The HTTP surface lives in [`controller::PersonController`], which parses
//! and validates each request through [`pipe`]s and then delegates to an
//! injected [`service::PersonService`]. Wiring happens in a small
//! type-keyed DI [`di::Container`]; [`module::PersonModule`] registers the
//! default in-memory stack.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use person_registry::app::{bootstrap, build_app};
//! use person_registry::di::Container;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let container = bootstrap(Container::new())?;
//!     let app = build_app(&container)?;
//!
//!     let listener = tokio::net::TcpListener::bind("127.0.0.1:8080").await?;
//!     axum::serve(listener, app).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Routes
//!
//! | Method | Path | Response |
//! |---|---|---|
//! | POST | `/api/v1/person` | empty |
//! | GET | `/api/v1/person` | `[Person]` |
//! | GET | `/api/v1/person/{id}` | `Person` or empty |
//! | DELETE | `/api/v1/person/{id}` | removed count |
//! | PUT | `/api/v1/person/{id}` | updated count |

// lets `#[derive(Injectable)]` expand to `::person_registry::...` inside this crate
extern crate self as person_registry;

pub mod app;
pub mod common;
pub mod config;
pub mod controller;
pub mod di;
pub mod domain;
pub mod error;
pub mod exception;
pub mod interceptor;
pub mod lifecycle;
pub mod module;
pub mod pipe;
pub mod repository;
pub mod service;

// Re-export core types
pub use error::{RegistryError, Result};

/// Prelude module for convenient imports
///
/// ```
/// use person_registry::prelude::*;
/// ```
pub mod prelude {
    pub use crate::common::OptionalJson;
    pub use crate::controller::PersonController;
    pub use crate::di::{Container, ContainerBuilder, Injectable};
    pub use crate::domain::{NewPerson, Person, PersonRequest};
    pub use crate::error::{RegistryError, Result};
    pub use crate::exception::HttpException;
    pub use crate::interceptor::{Interceptor, InterceptorLayer, InterceptorResult, Next};
    pub use crate::module::{Module, PersonModule};
    pub use crate::pipe::builtins::*;
    pub use crate::pipe::{ConstraintViolation, Pipe, PipeError, PipeResult};
    pub use crate::repository::{InMemoryPersonRepository, PersonRepository};
    pub use crate::service::{PersonService, PersonServiceImpl};
    pub use async_trait::async_trait;
    pub use std::sync::Arc;
}
