use async_trait::async_trait;
use serde::Serialize;

pub mod builtins;

pub type PipeResult<T> = Result<T, PipeError>;

/// A single failed constraint on a request payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConstraintViolation {
    pub field: String,
    pub code: String,
    pub message: String,
}

#[derive(Debug, thiserror::Error)]
pub enum PipeError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Validation failed: {0:?}")]
    Validation(Vec<ConstraintViolation>),
}

/// The Pipe trait for transformation and validation
///
/// Pipes run before a controller hands anything to its service, so a failing
/// pipe short-circuits the request.
#[async_trait]
pub trait Pipe: Send + Sync + 'static {
    type Input: Send + 'static;
    type Output: Send + 'static;

    async fn transform(&self, input: Self::Input) -> PipeResult<Self::Output>;
}
