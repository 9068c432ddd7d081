#![allow(dead_code)]

use axum::extract::Request;
use axum::{Router, ServiceExt};
use axum_test::TestServer;
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;
use std::sync::Arc;
use link_desk::api::routes::{shortener_routes, users_routes};
use link_desk::application::services::{LinkService, UserService};
use link_desk::infrastructure::memory::InMemoryLinkStore;
use link_desk::infrastructure::persistence::SqliteUserRepository;
use link_desk::infrastructure::persistence::pool::MIGRATOR;
use link_desk::routes::shortener_app;
use link_desk::state::{ShortenerState, UsersState};

pub const BASE_URL: &str = "http://localhost:5000";

/// Fresh in-memory database with migrations applied.
///
/// A single connection that never expires keeps the database alive for the
/// whole test.
pub async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .unwrap();

    MIGRATOR.run(&pool).await.unwrap();
    pool
}

pub fn create_shortener_state() -> ShortenerState {
    let store = Arc::new(InMemoryLinkStore::default());
    ShortenerState::new(Arc::new(LinkService::new(store, BASE_URL)))
}

pub fn create_users_state(pool: SqlitePool) -> UsersState {
    let repository = Arc::new(SqliteUserRepository::new(Arc::new(pool)));
    UsersState::new(Arc::new(UserService::new(repository)))
}

pub fn shortener_server() -> TestServer {
    let app: Router = shortener_routes().with_state(create_shortener_state());
    TestServer::new(app).unwrap()
}

/// Full shortener application, including path normalization and tracing.
pub fn shortener_app_server() -> TestServer {
    let app = shortener_app(create_shortener_state());
    TestServer::new(ServiceExt::<Request>::into_make_service(app)).unwrap()
}

pub async fn users_server() -> (TestServer, SqlitePool) {
    let pool = test_pool().await;
    let app: Router = users_routes().with_state(create_users_state(pool.clone()));
    (TestServer::new(app).unwrap(), pool)
}
