//! SQLite implementation of the user repository.

use async_trait::async_trait;
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

use crate::domain::entities::{NewUser, User, UserCredentials, UserUpdate};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;

/// SQLite repository for user storage and retrieval.
///
/// All statements bind their parameters; e-mail uniqueness comes from the
/// `UNIQUE` constraint on `users.email`.
pub struct SqliteUserRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteUserRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct UserRow {
    id: i64,
    name: String,
    email: String,
}

impl From<UserRow> for User {
    fn from(r: UserRow) -> Self {
        User::new(r.id, r.name, r.email)
    }
}

#[derive(FromRow)]
struct CredentialsRow {
    id: i64,
    name: String,
    email: String,
    password: String,
}

/// Escapes `LIKE` wildcards so the term matches literally.
fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[async_trait]
impl UserRepository for SqliteUserRepository {
    async fn create(&self, new_user: NewUser) -> Result<i64, AppError> {
        let result = sqlx::query("INSERT INTO users (name, email, password) VALUES (?, ?, ?)")
            .bind(&new_user.name)
            .bind(&new_user.email)
            .bind(&new_user.password_hash)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.last_insert_rowid())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError> {
        let row = sqlx::query_as::<_, UserRow>("SELECT id, name, email FROM users WHERE id = ?")
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row.map(User::from))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<UserCredentials>, AppError> {
        let row = sqlx::query_as::<_, CredentialsRow>(
            "SELECT id, name, email, password FROM users WHERE email = ?",
        )
        .bind(email)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(|r| UserCredentials {
            id: r.id,
            name: r.name,
            email: r.email,
            password_hash: r.password,
        }))
    }

    async fn list(&self) -> Result<Vec<User>, AppError> {
        let rows = sqlx::query_as::<_, UserRow>("SELECT id, name, email FROM users ORDER BY id")
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn search_by_name(&self, term: &str) -> Result<Vec<User>, AppError> {
        let pattern = format!("%{}%", escape_like(term));

        let rows = sqlx::query_as::<_, UserRow>(
            r"SELECT id, name, email FROM users WHERE name LIKE ? ESCAPE '\' ORDER BY id",
        )
        .bind(pattern)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn update(&self, id: i64, update: UserUpdate) -> Result<bool, AppError> {
        let result = sqlx::query("UPDATE users SET name = ?, email = ? WHERE id = ?")
            .bind(&update.name)
            .bind(&update.email)
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn exists(&self, id: i64) -> Result<bool, AppError> {
        let found = sqlx::query_scalar::<_, i64>("SELECT id FROM users WHERE id = ?")
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(found.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_like_plain_term() {
        assert_eq!(escape_like("john"), "john");
    }

    #[test]
    fn test_escape_like_wildcards() {
        assert_eq!(escape_like("50%_off"), r"50\%\_off");
        assert_eq!(escape_like(r"a\b"), r"a\\b");
    }
}
