use axum::{
    Json,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Response for a lookup that may find nothing
///
/// `Some` renders as a JSON body with HTTP 200. `None` is also HTTP 200 but
/// with an empty body: absence is not an error.
///
/// # Example
/// ```
/// use person_registry::common::OptionalJson;
/// use axum::response::IntoResponse;
///
/// let response = OptionalJson::<String>(None).into_response();
/// assert_eq!(response.status(), axum::http::StatusCode::OK);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionalJson<T>(pub Option<T>);

impl<T: Serialize> IntoResponse for OptionalJson<T> {
    fn into_response(self) -> Response {
        match self.0 {
            Some(value) => Json(value).into_response(),
            None => ().into_response(),
        }
    }
}

impl<T> From<Option<T>> for OptionalJson<T> {
    fn from(value: Option<T>) -> Self {
        Self(value)
    }
}
