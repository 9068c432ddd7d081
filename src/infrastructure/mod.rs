//! Infrastructure layer for storage backends.
//!
//! Implements the storage traits defined by the domain layer.
//!
//! - [`memory`] - In-memory link store for the shortener
//! - [`persistence`] - SQLite user repository, pool setup and migrations

pub mod memory;
pub mod persistence;
