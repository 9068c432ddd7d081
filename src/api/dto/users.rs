//! DTOs for the user-management endpoints.
//!
//! Request fields are optional so that missing values are reported as
//! validation errors rather than as malformed JSON.

use serde::{Deserialize, Serialize};

use crate::domain::entities::User;
use crate::utils::user_validator::UserFields;

/// Body of `POST /users`.
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

impl CreateUserRequest {
    pub fn fields(&self) -> UserFields<'_> {
        UserFields {
            name: self.name.as_deref(),
            email: self.email.as_deref(),
            password: self.password.as_deref(),
        }
    }
}

/// Body of `PUT /user/{id}`.
#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl UpdateUserRequest {
    pub fn fields(&self) -> UserFields<'_> {
        UserFields {
            name: self.name.as_deref(),
            email: self.email.as_deref(),
            password: None,
        }
    }
}

/// Body of `POST /login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Query of `GET /search`.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub name: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct UserList {
    pub users: Vec<User>,
}

#[derive(Debug, Serialize)]
pub struct UserDetail {
    pub user: User,
}

#[derive(Debug, Serialize)]
pub struct UserIdData {
    pub user_id: i64,
}
