//! In-memory storage implementations.

mod in_memory_link_store;

pub use in_memory_link_store::{DEFAULT_MAX_ATTEMPTS, InMemoryLinkStore};
