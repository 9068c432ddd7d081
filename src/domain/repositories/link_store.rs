//! Storage trait for short links.

use crate::domain::entities::LinkStats;
use crate::error::AppError;

/// Store of short code → target URL mappings with click accounting.
///
/// Absence is reported as `None`, never as an error. The only fallible
/// operation is [`LinkStore::add`], which can run out of code-generation
/// attempts.
///
/// # Implementations
///
/// - [`crate::infrastructure::memory::InMemoryLinkStore`] - mutex-guarded map
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
pub trait LinkStore: Send + Sync {
    /// Stores `target` under a freshly generated, unused code and returns the code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if no free code was found within the
    /// configured number of attempts.
    fn add(&self, target: String) -> Result<String, AppError>;

    /// Returns the target for `code` and counts one click.
    fn resolve(&self, code: &str) -> Option<String>;

    /// Returns a snapshot of `code` without touching its click counter.
    fn stats(&self, code: &str) -> Option<LinkStats>;

    /// Returns true if `code` is present.
    fn contains(&self, code: &str) -> bool;

    /// Number of stored links.
    fn count(&self) -> usize;
}
