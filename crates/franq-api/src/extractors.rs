//! # Request Body Extraction & Validation
//!
//! Handlers take `Result<Json<T>, JsonRejection>` so an absent or
//! undeserializable body reaches us as a value instead of a framework 400,
//! and is mapped to the API's 422 taxonomy before any lookup runs.

use axum::extract::rejection::JsonRejection;
use axum::Json;

use crate::error::AppError;

/// Business-rule validation for request DTOs, beyond what serde checks.
pub trait Validate {
    /// Returns an error message describing the first violated rule.
    fn validate(&self) -> Result<(), String>;
}

/// Unwrap a JSON body, mapping missing/undeserializable bodies to
/// [`AppError::BadRequest`] and then applying [`Validate`].
pub fn validated_json<T: Validate>(body: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    let Json(value) = body.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    value.validate().map_err(AppError::Validation)?;
    Ok(value)
}
