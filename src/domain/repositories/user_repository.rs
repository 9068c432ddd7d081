//! Repository trait for user data access.

use crate::domain::entities::{NewUser, User, UserCredentials, UserUpdate};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing users.
///
/// Every method is a single, independent statement. E-mail uniqueness is
/// enforced by the storage engine and surfaces as [`AppError::Conflict`].
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteUserRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_user.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Inserts a user and returns its id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the e-mail is already registered.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_user: NewUser) -> Result<i64, AppError>;

    /// Finds a user by id.
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError>;

    /// Finds a user by exact e-mail, including the password hash.
    async fn find_by_email(&self, email: &str) -> Result<Option<UserCredentials>, AppError>;

    /// Lists all users ordered by id.
    async fn list(&self) -> Result<Vec<User>, AppError>;

    /// Lists users whose name contains `term` (case-insensitive).
    async fn search_by_name(&self, term: &str) -> Result<Vec<User>, AppError>;

    /// Replaces name and e-mail of user `id`.
    ///
    /// Returns `Ok(false)` if no such user exists.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the new e-mail belongs to another user.
    async fn update(&self, id: i64, update: UserUpdate) -> Result<bool, AppError>;

    /// Deletes user `id`. Returns `Ok(false)` if no such user exists.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;

    /// Returns true if user `id` exists.
    async fn exists(&self, id: i64) -> Result<bool, AppError>;
}
