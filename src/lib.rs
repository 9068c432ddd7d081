//! # link-desk
//!
//! Two small HTTP services built with Axum: a URL shortener backed by an
//! in-memory store, and a user-management API backed by SQLite.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Core entities and storage traits
//! - **Application Layer** ([`application`]) - Business logic and service orchestration
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory link store, SQLite persistence
//! - **API Layer** ([`api`]) - Handlers, DTOs, response envelope and middleware
//!
//! ## Features
//!
//! - Random 6-character short codes with bounded collision retries
//! - Click counting on redirect, read-only stats
//! - User registration with argon2 password hashing
//! - Name search and login
//!
//! ## Quick Start
//!
//! ```bash
//! # URL shortener
//! cargo run -- shortener
//!
//! # User management (creates users.db on first start)
//! DATABASE_PATH=users.db cargo run -- users
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::{ShortenerState, UsersState};

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{LinkService, ShortenedLink, UserService};
    pub use crate::domain::entities::{LinkStats, ShortLink, User};
    pub use crate::error::AppError;
    pub use crate::infrastructure::memory::InMemoryLinkStore;
    pub use crate::infrastructure::persistence::SqliteUserRepository;
    pub use crate::state::{ShortenerState, UsersState};
}
