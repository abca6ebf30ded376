//! HTTP-facing error taxonomy.
//!
//! Every request that fails before or during a service call ends up as an
//! [`HttpException`]. Client errors (malformed identifiers, unreadable or
//! invalid bodies) are rejected before the service is touched; anything the
//! service itself returns as an error becomes [`HttpException::Internal`].

use crate::error::RegistryError;
use crate::pipe::{ConstraintViolation, PipeError};
use axum::extract::rejection::{JsonRejection, PathRejection};

pub mod http;

#[derive(Debug, thiserror::Error)]
pub enum HttpException {
    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Validation failed: {} constraint violation(s)", .0.len())]
    Validation(Vec<ConstraintViolation>),

    #[error("Internal Server Error: {0}")]
    Internal(String),
}

impl From<PipeError> for HttpException {
    fn from(err: PipeError) -> Self {
        match err {
            PipeError::InvalidArgument(message) => HttpException::BadRequest(message),
            PipeError::Validation(violations) => HttpException::Validation(violations),
        }
    }
}

impl From<RegistryError> for HttpException {
    fn from(err: RegistryError) -> Self {
        HttpException::Internal(err.to_string())
    }
}

impl From<JsonRejection> for HttpException {
    fn from(rejection: JsonRejection) -> Self {
        HttpException::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for HttpException {
    fn from(rejection: PathRejection) -> Self {
        HttpException::BadRequest(rejection.body_text())
    }
}
