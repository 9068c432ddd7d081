//! Liveness handlers.

use axum::Json;

use crate::api::dto::health::{HealthResponse, ServiceStatus};

/// `GET /` on the shortener.
pub async fn service_status_handler() -> Json<ServiceStatus> {
    Json(ServiceStatus {
        status: "healthy",
        service: "URL Shortener API",
    })
}

/// `GET /api/health` on the shortener.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        message: "URL Shortener API is running",
    })
}

/// `GET /` on the user-management API.
pub async fn users_home_handler() -> &'static str {
    "User Management System"
}
