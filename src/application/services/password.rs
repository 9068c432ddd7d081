//! Password hashing with Argon2id.
//!
//! Hashes are stored as PHC strings, which embed algorithm, parameters and salt.
//! Both functions are CPU-bound and are run on the blocking thread pool.

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use serde_json::json;

use crate::error::AppError;

/// Hashes `password` with a fresh random salt.
///
/// # Errors
///
/// Returns [`AppError::Internal`] if hashing fails.
pub async fn hash_password(password: String) -> Result<String, AppError> {
    tokio::task::spawn_blocking(move || hash_password_blocking(&password))
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Password hashing task failed");
            AppError::internal("Failed to hash password", json!({}))
        })?
}

/// Checks `password` against a stored PHC hash.
///
/// Returns `Ok(false)` on mismatch.
///
/// # Errors
///
/// Returns [`AppError::Internal`] if the stored hash cannot be parsed.
pub async fn verify_password(password: String, stored_hash: String) -> Result<bool, AppError> {
    tokio::task::spawn_blocking(move || verify_password_blocking(&password, &stored_hash))
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Password verification task failed");
            AppError::internal("Failed to verify password", json!({}))
        })?
}

pub fn hash_password_blocking(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| {
            tracing::error!(error = %e, "Failed to hash password");
            AppError::internal("Failed to hash password", json!({}))
        })
}

pub fn verify_password_blocking(password: &str, stored_hash: &str) -> Result<bool, AppError> {
    let parsed = PasswordHash::new(stored_hash).map_err(|e| {
        tracing::error!(error = %e, "Stored password hash is malformed");
        AppError::internal("Failed to verify password", json!({}))
    })?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_is_phc_string() {
        let hash = hash_password_blocking("SecurePass123!").unwrap();
        assert!(hash.starts_with("$argon2"));
        assert_ne!(hash, "SecurePass123!");
    }

    #[test]
    fn test_same_password_different_salts() {
        let a = hash_password_blocking("SecurePass123!").unwrap();
        let b = hash_password_blocking("SecurePass123!").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_verify_roundtrip() {
        let hash = hash_password_blocking("SecurePass123!").unwrap();

        assert!(verify_password_blocking("SecurePass123!", &hash).unwrap());
        assert!(!verify_password_blocking("WrongPass123!", &hash).unwrap());
    }

    #[test]
    fn test_verify_malformed_hash_is_error() {
        let result = verify_password_blocking("SecurePass123!", "not-a-hash");
        assert!(matches!(result, Err(AppError::Internal { .. })));
    }

    #[tokio::test]
    async fn test_async_wrappers() {
        let hash = hash_password("MySecret456@".to_string()).await.unwrap();
        assert!(verify_password("MySecret456@".to_string(), hash).await.unwrap());
    }
}
