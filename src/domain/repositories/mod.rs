//! Storage trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; implementations live in
//! `crate::infrastructure`. Mock implementations are generated via `mockall`
//! for service tests.
//!
//! - [`LinkStore`] - Short link allocation, lookup and click counting
//! - [`UserRepository`] - User CRUD and search

pub mod link_store;
pub mod user_repository;

pub use link_store::LinkStore;
pub use user_repository::UserRepository;

#[cfg(test)]
pub use link_store::MockLinkStore;
#[cfg(test)]
pub use user_repository::MockUserRepository;
