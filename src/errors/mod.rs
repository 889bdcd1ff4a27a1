//! Error handling module for the Maglinc backend.
//!
//! Provides centralized error types with mapping to HTTP status codes and response envelopes.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::models::ValidationError;

/// Error codes as constants to avoid stringly-typed errors.
pub mod codes {
    pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
    pub const NOT_FOUND: &str = "NOT_FOUND";
    pub const STORE_UNAVAILABLE: &str = "STORE_UNAVAILABLE";
    pub const INTERNAL_ERROR: &str = "INTERNAL_ERROR";
}

/// Message returned for every store failure. Driver detail only goes to the log.
const STORE_UNAVAILABLE_MESSAGE: &str = "The content store is temporarily unavailable";

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    /// Input failed schema constraints
    Validation(ValidationError),
    /// Resource not found
    NotFound(String),
    /// The document store could not be reached or the operation failed
    StoreUnavailable(String),
    /// Internal server error
    Internal(String),
}

impl AppError {
    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::StoreUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error.
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::Validation(_) => codes::VALIDATION_ERROR,
            AppError::NotFound(_) => codes::NOT_FOUND,
            AppError::StoreUnavailable(_) => codes::STORE_UNAVAILABLE,
            AppError::Internal(_) => codes::INTERNAL_ERROR,
        }
    }

    /// Get the client-facing error message.
    ///
    /// Server-side failures are opaque; the detail they carry is for logs only.
    pub fn message(&self) -> String {
        match self {
            AppError::Validation(err) => err.to_string(),
            AppError::NotFound(msg) => msg.clone(),
            AppError::StoreUnavailable(_) => STORE_UNAVAILABLE_MESSAGE.to_string(),
            AppError::Internal(_) => "Internal server error".to_string(),
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::StoreUnavailable(detail) | AppError::Internal(detail) => {
                write!(f, "{}: {}", self.error_code(), detail)
            }
            _ => write!(f, "{}: {}", self.error_code(), self.message()),
        }
    }
}

impl std::error::Error for AppError {}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::Validation(err)
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        tracing::error!("Database error: {:?}", err);
        AppError::StoreUnavailable(format!("Database error: {}", err))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        tracing::error!("JSON error: {:?}", err);
        AppError::Internal(format!("JSON error: {}", err))
    }
}

/// Error details in the response envelope.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDetails {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// Error response envelope.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: ErrorDetails,
}

impl ErrorResponse {
    pub fn new(error: &AppError) -> Self {
        let details = match error {
            AppError::Validation(err) => Some(serde_json::json!({ "fields": err.fields })),
            _ => None,
        };

        Self {
            success: false,
            error: ErrorDetails {
                code: error.error_code().to_string(),
                message: error.message(),
                details,
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse::new(&self);
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FieldError;

    #[test]
    fn test_validation_maps_to_unprocessable() {
        let err = AppError::from(ValidationError::new(vec![FieldError::new(
            "email",
            "value is not a valid email address",
        )]));

        assert_eq!(err.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(err.error_code(), codes::VALIDATION_ERROR);

        let body = serde_json::to_value(ErrorResponse::new(&err)).unwrap();
        assert_eq!(body["success"], false);
        assert_eq!(body["error"]["details"]["fields"][0]["field"], "email");
        assert!(body["error"]["message"].as_str().unwrap().contains("email"));
    }

    #[test]
    fn test_store_failure_message_is_opaque() {
        let err = AppError::StoreUnavailable("connection refused at /var/db/secret".to_string());

        assert_eq!(err.status_code(), StatusCode::SERVICE_UNAVAILABLE);
        assert!(!err.message().contains("secret"));

        let body = serde_json::to_value(ErrorResponse::new(&err)).unwrap();
        assert_eq!(body["error"]["code"], "STORE_UNAVAILABLE");
        assert!(body["error"].get("details").is_none());
    }

    #[test]
    fn test_not_found_keeps_its_message() {
        let err = AppError::NotFound("Blog post missing-post not found".to_string());

        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        let body = serde_json::to_value(ErrorResponse::new(&err)).unwrap();
        assert_eq!(body["error"]["code"], "NOT_FOUND");
        assert_eq!(body["error"]["message"], "Blog post missing-post not found");
    }
}
