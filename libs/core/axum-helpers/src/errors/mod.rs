pub mod codes;
pub mod handlers;

pub use codes::ErrorCode;

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::ValidationErrors;

/// Standard error response structure.
///
/// Returned for every failure that happens before a request reaches a domain
/// handler: malformed JSON, invalid path ids, validation failures and unknown
/// routes.
///
/// # JSON Example
///
/// ```json
/// {
///   "code": 1001,
///   "error": "VALIDATION_ERROR",
///   "message": "Request validation failed",
///   "details": { "price": [ { "code": "range", ... } ] }
/// }
/// ```
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Integer error code for logging and monitoring
    pub code: i32,
    /// Machine-readable error identifier for programmatic handling
    pub error: String,
    /// Human-readable error message
    pub message: String,
    /// Optional structured error details (e.g., validation field errors)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code.code(),
            error: code.as_str().to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}

/// Extractor failures, rendered as a 400 `ErrorResponse`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("JSON extraction error: {0}")]
    JsonExtractorRejection(#[from] JsonRejection),

    #[error("Path extraction error: {0}")]
    PathRejection(#[from] PathRejection),

    #[error("Validation error: {0}")]
    ValidationError(#[from] ValidationErrors),

    #[error("Bad Request: {0}")]
    BadRequest(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // axum's 415/422 JSON rejections are folded into 400.
        let body = match self {
            AppError::JsonExtractorRejection(e) => {
                tracing::warn!(
                    error_code = ErrorCode::JsonExtraction.code(),
                    "JSON extraction error: {:?}",
                    e
                );
                ErrorResponse::new(ErrorCode::JsonExtraction, e.body_text())
            }
            AppError::PathRejection(e) => {
                tracing::warn!(
                    error_code = ErrorCode::InvalidId.code(),
                    "Path extraction error: {:?}",
                    e
                );
                ErrorResponse::new(ErrorCode::InvalidId, e.body_text())
            }
            AppError::ValidationError(e) => {
                tracing::info!(
                    error_code = ErrorCode::ValidationError.code(),
                    "Validation error: {}",
                    e
                );
                ErrorResponse::new(
                    ErrorCode::ValidationError,
                    ErrorCode::ValidationError.default_message(),
                )
                .with_details(field_details(&e))
            }
            AppError::BadRequest(msg) => {
                tracing::info!("Bad request: {}", msg);
                ErrorResponse::new(ErrorCode::BadRequest, msg)
            }
        };

        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}

/// `{ "<field>": [ { "code", "message", "params" } ] }`
fn field_details(errors: &ValidationErrors) -> serde_json::Value {
    let details = errors
        .field_errors()
        .iter()
        .map(|(field, errors)| {
            let error_messages: Vec<serde_json::Value> = errors
                .iter()
                .map(|err| {
                    serde_json::json!({
                        "code": err.code,
                        "message": err.message,
                        "params": err.params,
                    })
                })
                .collect();
            (field.to_string(), serde_json::json!(error_messages))
        })
        .collect::<serde_json::Map<_, _>>();

    serde_json::Value::Object(details)
}
