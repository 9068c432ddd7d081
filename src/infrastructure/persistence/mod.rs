//! SQLite persistence.
//!
//! - [`SqliteUserRepository`] - User storage, lookup and search
//! - [`pool`] - Connection pool setup and embedded migrations

pub mod pool;
pub mod sqlite_user_repository;

pub use sqlite_user_repository::SqliteUserRepository;
