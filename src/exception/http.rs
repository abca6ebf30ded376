use crate::exception::HttpException;
use crate::pipe::ConstraintViolation;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// JSON body written for every [`HttpException`]
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    pub status_code: u16,
    pub error: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub violations: Vec<ConstraintViolation>,
    pub timestamp: String,
}

impl HttpException {
    pub fn status(&self) -> StatusCode {
        match self {
            HttpException::BadRequest(_) | HttpException::Validation(_) => StatusCode::BAD_REQUEST,
            HttpException::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Stable, machine-readable error kind
    pub fn kind(&self) -> &'static str {
        match self {
            HttpException::BadRequest(_) => "BadRequest",
            HttpException::Validation(_) => "ValidationError",
            HttpException::Internal(_) => "InternalServerError",
        }
    }

    fn into_body(self) -> ErrorBody {
        let status_code = self.status().as_u16();
        let error = self.kind();
        let message = self.to_string();
        let violations = match self {
            HttpException::Validation(violations) => violations,
            _ => Vec::new(),
        };

        ErrorBody {
            status_code,
            error,
            message,
            violations,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

impl IntoResponse for HttpException {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            HttpException::Internal(message) => tracing::error!(%status, "{}", message),
            other => tracing::warn!(%status, "Request rejected: {}", other),
        }

        (status, Json(self.into_body())).into_response()
    }
}
