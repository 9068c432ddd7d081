//! User registration, profile management, search and login.

use std::sync::Arc;

use serde_json::json;
use tracing::{info, warn};

use crate::application::services::password::{hash_password, verify_password};
use crate::domain::entities::{NewUser, User, UserUpdate};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;

/// Minimum search term length after trimming.
pub const MIN_SEARCH_LENGTH: usize = 2;

/// Service orchestrating user operations over a [`UserRepository`].
///
/// Inputs are expected to be validated and trimmed by the caller
/// (see [`crate::utils::user_validator`]).
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> Result<Vec<User>, AppError> {
        self.repository.list().await
    }

    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no user has this id.
    pub async fn get(&self, id: i64) -> Result<User, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| user_not_found(id))
    }

    /// Searches users by name substring.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the trimmed term is blank or too short.
    pub async fn search(&self, term: &str) -> Result<Vec<User>, AppError> {
        let term = term.trim();

        if term.is_empty() {
            return Err(AppError::bad_request(
                "Please provide a name to search",
                json!({}),
            ));
        }
        if term.chars().count() < MIN_SEARCH_LENGTH {
            return Err(AppError::bad_request(
                format!("Search term must be at least {MIN_SEARCH_LENGTH} characters"),
                json!({ "term": term }),
            ));
        }

        self.repository.search_by_name(term).await
    }

    /// Registers a user and returns the new id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the e-mail is already registered,
    /// including when a concurrent registration wins the insert.
    pub async fn register(
        &self,
        name: String,
        email: String,
        password: String,
    ) -> Result<i64, AppError> {
        if self.repository.find_by_email(&email).await?.is_some() {
            return Err(email_taken(&email));
        }

        let password_hash = hash_password(password).await?;

        let id = self
            .repository
            .create(NewUser {
                name,
                email: email.clone(),
                password_hash,
            })
            .await
            .map_err(|e| match e {
                AppError::Conflict { .. } => email_taken(&email),
                other => other,
            })?;

        info!(user_id = id, "User registered");
        Ok(id)
    }

    /// Replaces a user's name and e-mail.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the user does not exist.
    /// Returns [`AppError::Conflict`] if the e-mail belongs to another user.
    pub async fn update(&self, id: i64, name: String, email: String) -> Result<(), AppError> {
        if !self.repository.exists(id).await? {
            return Err(user_not_found(id));
        }

        if let Some(owner) = self.repository.find_by_email(&email).await?
            && owner.id != id
        {
            return Err(email_taken(&email));
        }

        let updated = self
            .repository
            .update(id, UserUpdate {
                name,
                email: email.clone(),
            })
            .await
            .map_err(|e| match e {
                AppError::Conflict { .. } => email_taken(&email),
                other => other,
            })?;

        if !updated {
            return Err(user_not_found(id));
        }

        info!(user_id = id, "User updated");
        Ok(())
    }

    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the user does not exist.
    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        if !self.repository.delete(id).await? {
            return Err(user_not_found(id));
        }

        info!(user_id = id, "User deleted");
        Ok(())
    }

    /// Verifies credentials and returns the user id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for an unknown e-mail and
    /// [`AppError::Unauthorized`] for a wrong password.
    pub async fn login(&self, email: &str, password: String) -> Result<i64, AppError> {
        let Some(user) = self.repository.find_by_email(email).await? else {
            warn!("Login failed: user not found");
            return Err(AppError::not_found("User not found", json!({})));
        };

        if !verify_password(password, user.password_hash).await? {
            warn!(user_id = user.id, "Login failed: invalid password");
            return Err(AppError::unauthorized("Invalid password", json!({})));
        }

        info!(user_id = user.id, "User authenticated");
        Ok(user.id)
    }
}

fn user_not_found(id: i64) -> AppError {
    AppError::not_found("User not found", json!({ "id": id }))
}

fn email_taken(email: &str) -> AppError {
    AppError::conflict("Email already exists", json!({ "email": email }))
}
