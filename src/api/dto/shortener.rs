//! DTOs for the URL shortener endpoints.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Response body of `POST /api/shorten`.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub short_code: String,
    pub short_url: String,
    pub original_url: String,
}

/// Analytics for a single short code.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub url: String,
    pub clicks: u64,
    pub created_at: DateTime<Utc>,
}
