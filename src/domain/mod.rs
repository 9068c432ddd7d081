//! Domain layer containing business entities and storage contracts.
//!
//! - [`entities`] - Core data structures
//! - [`repositories`] - Storage trait definitions
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers. Business rules live in [`crate::application::services`].

pub mod entities;
pub mod repositories;
