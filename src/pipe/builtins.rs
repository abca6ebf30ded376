use crate::pipe::{ConstraintViolation, Pipe, PipeError, PipeResult};
use async_trait::async_trait;
use std::marker::PhantomData;
use uuid::Uuid;
use validator::{Validate, ValidationErrors};

/// A pipe that parses a path segment into a UUID
#[derive(Debug, Default, Clone, Copy)]
pub struct ParseUuidPipe;

#[async_trait]
impl Pipe for ParseUuidPipe {
    type Input = String;
    type Output = Uuid;

    async fn transform(&self, input: String) -> PipeResult<Uuid> {
        Uuid::parse_str(&input)
            .map_err(|e| PipeError::InvalidArgument(format!("'{}' is not a valid UUID: {}", input, e)))
    }
}

/// A pipe that runs the `validator` rules declared on `T`
pub struct ValidationPipe<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T> ValidationPipe<T> {
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T> Default for ValidationPipe<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T> Pipe for ValidationPipe<T>
where
    T: Validate + Send + 'static,
{
    type Input = T;
    type Output = T;

    async fn transform(&self, input: T) -> PipeResult<T> {
        match input.validate() {
            Ok(()) => Ok(input),
            Err(errors) => Err(PipeError::Validation(collect_violations(&errors))),
        }
    }
}

/// Flattens field-level errors, ordered by field then code.
fn collect_violations(errors: &ValidationErrors) -> Vec<ConstraintViolation> {
    let mut violations: Vec<ConstraintViolation> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, field_errors)| {
            let field = field.to_string();
            field_errors.iter().map(move |error| ConstraintViolation {
                field: field.clone(),
                code: error.code.to_string(),
                message: error
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| error.code.to_string()),
            })
        })
        .collect();

    violations.sort_by(|a, b| a.field.cmp(&b.field).then_with(|| a.code.cmp(&b.code)));
    violations
}
