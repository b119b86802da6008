//! Asset categories repository for database operations

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::category::Category,
};

#[derive(Clone)]
pub struct CategoriesRepository {
    pool: Pool<Postgres>,
}

impl CategoriesRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all categories ordered by name
    pub async fn list(&self) -> AppResult<Vec<Category>> {
        let categories =
            sqlx::query_as::<_, Category>("SELECT * FROM asset_categories ORDER BY name")
                .fetch_all(&self.pool)
                .await?;

        Ok(categories)
    }

    /// Check if a category name already exists
    pub async fn name_exists(&self, name: &str) -> AppResult<bool> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM asset_categories WHERE LOWER(name) = LOWER($1))",
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await?;
        Ok(exists)
    }

    /// Create a new category
    pub async fn create(&self, name: &str) -> AppResult<Category> {
        if self.name_exists(name).await? {
            return Err(AppError::Duplicate("Category name already exists".to_string()));
        }

        let category = sqlx::query_as::<_, Category>(
            "INSERT INTO asset_categories (name) VALUES ($1) RETURNING *",
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if e.as_database_error()
                .map_or(false, |d| d.is_unique_violation())
            {
                AppError::Duplicate("Category name already exists".to_string())
            } else {
                AppError::Database(e)
            }
        })?;

        Ok(category)
    }
}
