use crate::pipe::{ConstraintViolation, PipeError};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// A stored person record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: Uuid,
    pub name: String,
}

impl Person {
    pub fn new(id: Uuid, person: NewPerson) -> Self {
        Self {
            id,
            name: person.name,
        }
    }
}

/// Request body for create and update.
///
/// Fields are optional at the wire level so that a missing field surfaces as a
/// validation error rather than a deserialization failure.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct PersonRequest {
    #[validate(
        required(message = "must not be null"),
        length(min = 1, max = 255, message = "length must be between 1 and 255")
    )]
    pub name: Option<String>,
}

/// Validated person attributes, everything except the identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPerson {
    pub name: String,
}

impl NewPerson {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl TryFrom<PersonRequest> for NewPerson {
    type Error = PipeError;

    fn try_from(request: PersonRequest) -> Result<Self, Self::Error> {
        let name = request.name.ok_or_else(|| {
            PipeError::Validation(vec![ConstraintViolation {
                field: "name".to_string(),
                code: "required".to_string(),
                message: "must not be null".to_string(),
            }])
        })?;
        Ok(NewPerson { name })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_ignores_client_supplied_id() {
        let request: PersonRequest =
            serde_json::from_str(r#"{"id":"00000000-0000-0000-0000-000000000001","name":"Alice"}"#)
                .unwrap();
        assert_eq!(request.name.as_deref(), Some("Alice"));
    }

    #[test]
    fn test_empty_object_fails_required() {
        let request: PersonRequest = serde_json::from_str("{}").unwrap();
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
    }

    #[test]
    fn test_person_serializes_id_and_name() {
        let id = Uuid::new_v4();
        let person = Person::new(id, NewPerson::new("Alice"));
        let json = serde_json::to_value(&person).unwrap();
        assert_eq!(json["id"], id.to_string());
        assert_eq!(json["name"], "Alice");
    }
}
