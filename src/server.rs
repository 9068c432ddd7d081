//! HTTP server initialization and runtime setup.
//!
//! Wires storage, services and routers for each service and runs the Axum
//! server until Ctrl-C or SIGTERM.

use crate::application::services::{LinkService, UserService};
use crate::config::Config;
use crate::infrastructure::memory::InMemoryLinkStore;
use crate::infrastructure::persistence::{SqliteUserRepository, pool};
use crate::routes::{shortener_app, users_app};
use crate::state::{ShortenerState, UsersState};

use anyhow::{Context, Result};
use axum::extract::Request;
use axum::{Router, ServiceExt};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::normalize_path::NormalizePath;

/// Runs the URL shortener.
///
/// The link store is created here and lives for the lifetime of the process.
///
/// # Errors
///
/// Returns an error if the listen address is invalid or the bind fails.
pub async fn run_shortener(config: Config) -> Result<()> {
    let store = Arc::new(InMemoryLinkStore::new(config.code_max_attempts));
    let link_service = Arc::new(LinkService::new(store, config.base_url.clone()));

    let app = shortener_app(ShortenerState::new(link_service.clone()));

    serve(app, &config.listen_addr, "shortener").await?;

    tracing::info!(
        links = link_service.link_count(),
        "In-memory links discarded"
    );
    Ok(())
}

/// Runs the user-management API.
///
/// Initializes:
/// - SQLite connection pool
/// - Apply migrations
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run_users(config: Config) -> Result<()> {
    let pool = pool::connect(&config).await?;
    tracing::info!("Connected to database");

    pool::migrate(&pool).await?;
    tracing::info!("Migrations applied");

    let repository = Arc::new(SqliteUserRepository::new(Arc::new(pool)));
    let user_service = Arc::new(UserService::new(repository));

    let app = users_app(UsersState::new(user_service));

    serve(app, &config.listen_addr, "users").await
}

async fn serve(app: NormalizePath<Router>, listen_addr: &str, service: &str) -> Result<()> {
    let addr: SocketAddr = listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{listen_addr}'"))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!(service, "Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!(service, "Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl-C handler: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
