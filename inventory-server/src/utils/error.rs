//! Unified API error handling
//!
//! Application-level error type and response envelope:
//! - [`AppError`] - HTTP-facing error enum
//! - [`AppResponse`] - coded response envelope
//!
//! # Error code scheme
//!
//! | Code | Meaning |
//! |-------|---------|
//! | E0000 | success |
//! | E0002 | validation failure |
//! | E0003 | not found |
//! | E0005 | business rule violation |
//! | E9001 | internal error |
//! | E9002 | storage error |

use crate::reconcile::ReconcileError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::error;

/// Coded response envelope
///
/// ```json
/// {
///   "code": "E0000",
///   "message": "Success",
///   "data": { ... }
/// }
/// ```
#[derive(Debug, Serialize)]
pub struct AppResponse<T> {
    /// Error code (E0000 on success)
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

/// HTTP-facing error enum
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Business rule violation: {0}")]
    BusinessRule(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "E0003", msg.as_str()),

            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "E0002", msg.as_str()),

            AppError::BusinessRule(msg) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "E0005", msg.as_str())
            }

            AppError::Storage(msg) => {
                error!(target: "storage", error = %msg, "Storage error occurred");
                (StatusCode::INTERNAL_SERVER_ERROR, "E9002", "Storage error")
            }

            AppError::Internal(msg) => {
                error!(target: "internal", error = %msg, "Internal error occurred");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "E9001",
                    "Internal server error",
                )
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

impl From<ReconcileError> for AppError {
    fn from(e: ReconcileError) -> Self {
        match e {
            ReconcileError::InvalidDate { .. } | ReconcileError::InvalidLineItem(_) => {
                AppError::Validation(e.to_string())
            }
            ReconcileError::InsufficientStock | ReconcileError::NoReservableStock => {
                AppError::BusinessRule(e.to_string())
            }
            ReconcileError::NotFound(what) => AppError::NotFound(what),
            ReconcileError::Store(inner) => AppError::Storage(inner.to_string()),
        }
    }
}

/// Handler result alias
pub type AppResult<T> = Result<T, AppError>;

// ========== Helper functions ==========

/// Create a successful response
pub fn ok<T: Serialize>(data: T) -> Json<AppResponse<T>> {
    Json(AppResponse {
        code: "E0000".to_string(),
        message: "Success".to_string(),
        data: Some(data),
    })
}

/// Create a response for a query result list
///
/// An empty result is not an HTTP error: it is reported as an empty list
/// with a not-found code in the envelope.
pub fn ok_list<T: Serialize>(items: Vec<T>) -> Json<AppResponse<Vec<T>>> {
    if items.is_empty() {
        Json(AppResponse {
            code: "E0003".to_string(),
            message: "No matching records".to_string(),
            data: Some(items),
        })
    } else {
        ok(items)
    }
}
