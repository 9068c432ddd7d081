//! User entity and its creation/update inputs.

use serde::Serialize;

/// A registered user as exposed by the API (never carries the password hash).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
}

impl User {
    pub fn new(id: i64, name: String, email: String) -> Self {
        Self { id, name, email }
    }
}

/// A user together with the stored password hash.
///
/// Only produced by e-mail lookups, which back login and e-mail conflict checks.
#[derive(Debug, Clone)]
pub struct UserCredentials {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

/// Input data for creating a user. `password_hash` is already hashed.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

/// Replacement values for an existing user's profile.
#[derive(Debug, Clone)]
pub struct UserUpdate {
    pub name: String,
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_serializes_without_hash() {
        let user = User::new(1, "John Doe".to_string(), "john@example.com".to_string());
        let json = serde_json::to_value(&user).unwrap();

        assert_eq!(json["id"], 1);
        assert_eq!(json["name"], "John Doe");
        assert_eq!(json["email"], "john@example.com");
        assert!(json.get("password_hash").is_none());
    }
}
