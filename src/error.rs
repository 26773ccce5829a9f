// src/error.rs

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// Global Application Error Enum.
/// Every failure is terminal for its request and maps to one JSON response.
#[derive(Debug, Error)]
pub enum AppError {
    // 400 Bad Request
    #[error("invalid payload: {0}")]
    InvalidPayload(String),

    // 500: the articles directory could not be created or accessed
    #[error("storage unavailable: {0}")]
    StorageUnavailable(String),

    // 500: the external document template could not be read
    #[error("template unavailable: {0}")]
    TemplateUnavailable(String),

    // 500: the article file could not be written
    #[error("persistence failure: {0}")]
    PersistenceFailure(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidPayload(_) => StatusCode::BAD_REQUEST,
            AppError::StorageUnavailable(_)
            | AppError::TemplateUnavailable(_)
            | AppError::PersistenceFailure(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Converts the error into a JSON response with appropriate HTTP status code.
/// Internal causes of 5xx errors are logged, never sent to the client.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            AppError::InvalidPayload(details) => json!({
                "error": "Invalid request payload",
                "details": details,
            }),
            AppError::StorageUnavailable(msg) => {
                tracing::error!("Failed to create article directory: {}", msg);
                json!({ "error": "Failed to create article directory" })
            }
            AppError::TemplateUnavailable(msg) => {
                tracing::error!("Failed to read article template: {}", msg);
                json!({ "error": "Failed to read article template" })
            }
            AppError::PersistenceFailure(msg) => {
                tracing::error!("Failed to save article: {}", msg);
                json!({ "error": "Failed to save article content" })
            }
        };

        (status, Json(body)).into_response()
    }
}

/// Every body-extraction failure is reported as a bad payload, including
/// wrong content type and oversized bodies.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::InvalidPayload(rejection.body_text())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::InvalidPayload(errors.to_string())
    }
}
