//! Admins repository for database operations

use chrono::Utc;
use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::admin::Admin,
};

#[derive(Clone)]
pub struct AdminsRepository {
    pool: Pool<Postgres>,
}

impl AdminsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get admin by username
    pub async fn get_by_username(&self, username: &str) -> AppResult<Option<Admin>> {
        let admin = sqlx::query_as::<_, Admin>(
            "SELECT * FROM admins WHERE LOWER(username) = LOWER($1)",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(admin)
    }

    /// Check if a username already exists
    pub async fn username_exists(&self, username: &str) -> AppResult<bool> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM admins WHERE LOWER(username) = LOWER($1))",
        )
        .bind(username)
        .fetch_one(&self.pool)
        .await?;
        Ok(exists)
    }

    /// Create a new admin account. The username pre-check in the service is
    /// racy; a concurrent signup hitting the UNIQUE constraint still comes
    /// back as a duplicate, not a database error.
    pub async fn create(
        &self,
        username: &str,
        department: &str,
        password_hash: &str,
    ) -> AppResult<Admin> {
        let admin = sqlx::query_as::<_, Admin>(
            r#"
            INSERT INTO admins (username, department, password_hash)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(username)
        .bind(department)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if e.as_database_error()
                .map_or(false, |d| d.is_unique_violation())
            {
                AppError::Duplicate("Username already exists".to_string())
            } else {
                AppError::Database(e)
            }
        })?;

        Ok(admin)
    }

    /// Refresh the last-login timestamp
    pub async fn touch_last_login(&self, id: i32) -> AppResult<()> {
        sqlx::query("UPDATE admins SET last_login = $1 WHERE id = $2")
            .bind(Utc::now())
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
