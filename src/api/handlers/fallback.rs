//! Catch-all 404 handlers.

use serde_json::json;

use crate::api::envelope::EnvelopeError;
use crate::error::AppError;

pub async fn shortener_not_found() -> AppError {
    AppError::not_found("Resource not found", json!({}))
}

pub async fn users_not_found() -> EnvelopeError {
    AppError::not_found("Resource not found", json!({})).into()
}
