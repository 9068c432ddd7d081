//! Handler for per-link statistics.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::shortener::StatsResponse;
use crate::error::AppError;
use crate::state::ShortenerState;

/// Returns target, click count and creation time for a short code.
///
/// # Endpoint
///
/// `GET /api/stats/{code}`
///
/// Reading stats never changes the click count.
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn stats_handler(
    State(state): State<ShortenerState>,
    Path(code): Path<String>,
) -> Result<Json<StatsResponse>, AppError> {
    let stats = state.link_service.stats(&code).await?;

    Ok(Json(StatsResponse {
        url: stats.target,
        clicks: stats.clicks,
        created_at: stats.created_at,
    }))
}
