//! Application layer services implementing business logic.
//!
//! Services consume storage traits and provide a clean API for HTTP handlers.
//!
//! - [`services::link_service::LinkService`] - Short link creation, redirects and stats
//! - [`services::user_service::UserService`] - User registration, profile management and login
//! - [`services::password`] - Argon2 password hashing

pub mod services;
