//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::IntoResponse,
};
use serde_json::json;

use crate::error::AppError;
use crate::state::ShortenerState;

/// Redirects a short code to its target URL and counts the click.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Response
///
/// `302 Found` with the target in the `Location` header.
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<ShortenerState>,
) -> Result<impl IntoResponse, AppError> {
    let target = state.link_service.resolve(&code).await?;

    let location = HeaderValue::try_from(target).map_err(|e| {
        tracing::error!(code = %code, error = %e, "Stored target is not a valid Location header");
        AppError::internal("Internal server error", json!({}))
    })?;

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]))
}
