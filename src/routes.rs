//! Top-level routers for the two services.
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging, tagged per service
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::middleware::tracing;
use crate::state::{ShortenerState, UsersState};
use axum::Router;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the URL shortener application.
pub fn shortener_app(state: ShortenerState) -> NormalizePath<Router> {
    let router = api::routes::shortener_routes()
        .with_state(state)
        .layer(tracing::layer("shortener"));

    NormalizePathLayer::trim_trailing_slash().layer(router)
}

/// Constructs the user-management application.
pub fn users_app(state: UsersState) -> NormalizePath<Router> {
    let router = api::routes::users_routes()
        .with_state(state)
        .layer(tracing::layer("users"));

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
