//! Unified error handling
//!
//! Success responses are the bare JSON payload; failures serialize as an
//! [`AppResponse`] envelope carrying an error code and a message.
//!
//! | Code  | Meaning            | Status |
//! |-------|--------------------|--------|
//! | E0002 | Validation failed  | 400    |
//! | E0003 | Not found          | 404    |
//! | E0004 | Conflict           | 409    |
//! | E0006 | Invalid request    | 400    |
//! | E9002 | Database error     | 500    |

use axum::{
    Json,
    response::{IntoResponse, Response},
};
use http::StatusCode;
use serde::Serialize;
use tracing::error;

/// API error response structure
///
/// ```json
/// {
///   "code": "E0003",
///   "message": "product not found"
/// }
/// ```
#[derive(Debug, Serialize)]
pub struct AppResponse<T> {
    /// Error code
    pub code: String,
    /// Human-readable message
    pub message: String,
    /// Response data (unused on the error path, kept for symmetry)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

/// Application error enum
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Requested entity does not exist (404)
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Unique constraint conflict (409)
    #[error("Resource already exists: {0}")]
    Conflict(String),

    /// Request field failed validation (400)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Request could not be decoded (400)
    #[error("Invalid request: {0}")]
    Invalid(String),

    /// Query or store failure (500); the message is surfaced verbatim
    #[error("Database error: {0}")]
    Database(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "E0003", msg.as_str()),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, "E0004", msg.as_str()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "E0002", msg.as_str()),
            AppError::Invalid(msg) => (StatusCode::BAD_REQUEST, "E0006", msg.as_str()),
            AppError::Database(msg) => {
                error!(target: "database", error = %msg, "Database error occurred");
                (StatusCode::INTERNAL_SERVER_ERROR, "E9002", msg.as_str())
            }
        };

        let body = Json(AppResponse::<()> {
            code: code.to_string(),
            message: message.to_string(),
            data: None,
        });

        (status, body).into_response()
    }
}

/// Result alias for handler return types
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (AppError::NotFound("x".into()), StatusCode::NOT_FOUND),
            (AppError::Conflict("x".into()), StatusCode::CONFLICT),
            (AppError::Validation("x".into()), StatusCode::BAD_REQUEST),
            (AppError::Invalid("x".into()), StatusCode::BAD_REQUEST),
            (
                AppError::Database("x".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (err, status) in cases {
            assert_eq!(err.into_response().status(), status);
        }
    }

    #[test]
    fn test_display() {
        let err = AppError::NotFound("product not found".into());
        assert_eq!(format!("{err}"), "Resource not found: product not found");
    }

    #[test]
    fn test_envelope_serialization() {
        let body = AppResponse::<()> {
            code: "E0002".to_string(),
            message: "code is required".to_string(),
            data: None,
        };
        let json = serde_json::to_string(&body).unwrap();
        assert_eq!(json, r#"{"code":"E0002","message":"code is required"}"#);
    }
}
