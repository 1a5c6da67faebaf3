//! # API Error Types
//!
//! Structured error type implementing `axum::response::IntoResponse`.
//! Covers the whole taxonomy the service can surface: invalid body,
//! business-rule validation, duplicate name, unknown id, and storage
//! failure. Internal error details are never exposed to clients.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Structured JSON error response body.
///
/// Every error response uses this format, so clients can branch on
/// `error.code` without parsing messages.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

/// Inner error detail.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDetail {
    /// Machine-readable error code (e.g., "NOT_FOUND", "CONFLICT").
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

/// Application-level error type that implements [`IntoResponse`] for Axum.
#[derive(Error, Debug)]
pub enum AppError {
    /// Resource not found (404).
    #[error("not found: {0}")]
    NotFound(String),

    /// A business rule was violated (422): empty name, negative stock.
    #[error("validation error: {0}")]
    Validation(String),

    /// Request body missing or undeserializable (422).
    ///
    /// Normalized with `Validation` to 422 Unprocessable Entity: the client
    /// sent syntactically valid HTTP but semantically invalid content. Only
    /// malformed HTTP framing is 400, and axum rejects that before us.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Duplicate name at create or rename (409).
    #[error("conflict: {0}")]
    Conflict(String),

    /// Storage failure (500). Message is logged but not returned to client.
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Return the HTTP status code and machine-readable error code.
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            Self::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            Self::Validation(_) => (StatusCode::UNPROCESSABLE_ENTITY, "VALIDATION_ERROR"),
            Self::BadRequest(_) => (StatusCode::UNPROCESSABLE_ENTITY, "BAD_REQUEST"),
            Self::Conflict(_) => (StatusCode::CONFLICT, "CONFLICT"),
            Self::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        // Never expose storage error messages to clients.
        let message = match &self {
            Self::Internal(_) => "An internal error occurred".to_string(),
            other => other.to_string(),
        };

        if let Self::Internal(_) = &self {
            tracing::error!(error = %self, "internal server error");
        }

        let body = ErrorBody {
            error: ErrorDetail {
                code: code.to_string(),
                message,
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Map storage errors to the API taxonomy.
///
/// The unique indexes on the three `name` columns are the authoritative
/// uniqueness check, so a unique violation is a 409 even when the
/// find-by-name pre-check raced and passed. A foreign key violation means
/// the caller referenced a parent id that does not exist.
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            match db_err.kind() {
                sqlx::error::ErrorKind::UniqueViolation => {
                    return Self::Conflict("an entity with that name already exists".to_string());
                }
                sqlx::error::ErrorKind::ForeignKeyViolation => {
                    return Self::Validation("referenced parent entity does not exist".to_string());
                }
                sqlx::error::ErrorKind::CheckViolation => {
                    return Self::Validation("value violates a storage constraint".to_string());
                }
                _ => {}
            }
        }
        Self::Internal(err.to_string())
    }
}
