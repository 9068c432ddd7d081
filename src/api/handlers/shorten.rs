//! Handler for the link shortening endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use serde_json::{Value, json};

use crate::api::dto::shortener::ShortenResponse;
use crate::error::AppError;
use crate::state::ShortenerState;
use crate::utils::url_validator::UrlValidationError;

/// Creates a short link for a single URL.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "https://www.example.com" }
/// ```
///
/// # Response
///
/// `201 Created`
///
/// ```json
/// {
///   "short_code": "aB3xY9",
///   "short_url": "http://localhost:5000/aB3xY9",
///   "original_url": "https://www.example.com"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the body is missing or the URL is missing/invalid.
/// Returns 500 Internal Server Error if no short code could be allocated.
pub async fn shorten_handler(
    State(state): State<ShortenerState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    let body = match payload {
        Ok(Json(Value::Object(body))) if !body.is_empty() => body,
        Ok(Json(_)) => {
            return Err(AppError::bad_request(
                "Request body is required",
                json!({ "reason": "Expected a non-empty JSON object" }),
            ));
        }
        Err(rejection) => {
            return Err(AppError::bad_request(
                "Request body is required",
                json!({ "reason": rejection.body_text() }),
            ));
        }
    };

    let raw = match body.get("url") {
        None | Some(Value::Null) => {
            return Err(AppError::bad_request("URL is required", json!({})));
        }
        Some(Value::String(s)) if s.is_empty() => {
            return Err(AppError::bad_request("URL is required", json!({})));
        }
        Some(Value::String(s)) => s,
        Some(_) => {
            return Err(AppError::bad_request(
                UrlValidationError::NotAString.to_string(),
                json!({}),
            ));
        }
    };

    let link = state.link_service.shorten(raw).await?;

    Ok((
        StatusCode::CREATED,
        Json(ShortenResponse {
            short_code: link.code,
            short_url: link.short_url,
            original_url: link.target,
        }),
    ))
}
