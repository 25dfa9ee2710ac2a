//! # User Repository
//!
//! Database operations for user accounts. Password hashing happens in the
//! API layer; this repository only stores and returns the PHC hash string.

use sqlx::SqlitePool;
use tracing::info;

use crate::error::{DbError, DbResult};
use qa3at_core::types::User;

/// Repository for user account operations.
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: SqlitePool,
}

#[derive(Debug, sqlx::FromRow)]
struct UserRecord {
    id: String,
    email: String,
    name: String,
    password_hash: String,
    role: String,
    created_at: chrono::DateTime<chrono::Utc>,
}

impl UserRecord {
    fn into_domain(self) -> DbResult<User> {
        let role = self
            .role
            .parse()
            .map_err(|e| DbError::corrupt("users", format!("{e}")))?;

        Ok(User {
            id: self.id,
            email: self.email,
            name: self.name,
            password_hash: self.password_hash,
            role,
            created_at: self.created_at,
        })
    }
}

impl UserRepository {
    /// Creates a new UserRepository.
    pub fn new(pool: SqlitePool) -> Self {
        UserRepository { pool }
    }

    /// Inserts a new user. A duplicate email surfaces as
    /// [`DbError::UniqueViolation`].
    pub async fn create(&self, user: &User) -> DbResult<()> {
        sqlx::query(
            r#"
            INSERT INTO users (id, email, name, password_hash, role, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
        )
        .bind(&user.id)
        .bind(&user.email)
        .bind(&user.name)
        .bind(&user.password_hash)
        .bind(user.role.as_str())
        .bind(user.created_at.to_rfc3339())
        .execute(&self.pool)
        .await?;

        info!(user_id = %user.id, "User created");
        Ok(())
    }

    /// Finds a user by email (login path).
    pub async fn find_by_email(&self, email: &str) -> DbResult<Option<User>> {
        let record = sqlx::query_as::<_, UserRecord>(
            r#"
            SELECT id, email, name, password_hash, role, created_at
            FROM users
            WHERE email = ?1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        record.map(UserRecord::into_domain).transpose()
    }

    /// Finds a user by id (profile path, token subject lookup).
    pub async fn find_by_id(&self, id: &str) -> DbResult<Option<User>> {
        let record = sqlx::query_as::<_, UserRecord>(
            r#"
            SELECT id, email, name, password_hash, role, created_at
            FROM users
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        record.map(UserRecord::into_domain).transpose()
    }
}
