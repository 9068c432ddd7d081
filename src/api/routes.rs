//! Route tables for the two services.

use axum::{
    Router,
    routing::{get, post},
};

use crate::api::handlers::{
    create_user_handler, delete_user_handler, get_user_handler, health_handler,
    list_users_handler, login_handler, redirect_handler, search_users_handler,
    service_status_handler, shorten_handler, shortener_not_found, stats_handler,
    update_user_handler, users_home_handler, users_not_found,
};
use crate::state::{ShortenerState, UsersState};

/// URL shortener routes.
///
/// # Endpoints
///
/// - `GET  /`                  - Service status
/// - `GET  /api/health`        - Liveness probe
/// - `POST /api/shorten`       - Create a short link
/// - `GET  /api/stats/{code}`  - Click statistics for a link
/// - `GET  /{code}`            - Redirect (counts a click)
pub fn shortener_routes() -> Router<ShortenerState> {
    Router::new()
        .route("/", get(service_status_handler))
        .route("/api/health", get(health_handler))
        .route("/api/shorten", post(shorten_handler))
        .route("/api/stats/{code}", get(stats_handler))
        .route("/{code}", get(redirect_handler))
        .fallback(shortener_not_found)
}

/// User-management routes.
///
/// # Endpoints
///
/// - `GET    /`           - Banner
/// - `GET    /users`      - List users
/// - `POST   /users`      - Register a user
/// - `GET    /user/{id}`  - Fetch a user
/// - `PUT    /user/{id}`  - Update name and e-mail
/// - `DELETE /user/{id}`  - Delete a user
/// - `GET    /search`     - Search by name (`?name=`)
/// - `POST   /login`      - Check credentials
pub fn users_routes() -> Router<UsersState> {
    Router::new()
        .route("/", get(users_home_handler))
        .route("/users", get(list_users_handler).post(create_user_handler))
        .route(
            "/user/{id}",
            get(get_user_handler)
                .put(update_user_handler)
                .delete(delete_user_handler),
        )
        .route("/search", get(search_users_handler))
        .route("/login", post(login_handler))
        .fallback(users_not_found)
}
