//! Vendors repository for database operations

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::vendor::Vendor,
};

#[derive(Clone)]
pub struct VendorsRepository {
    pool: Pool<Postgres>,
}

impl VendorsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get vendor by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Vendor> {
        sqlx::query_as::<_, Vendor>("SELECT * FROM vendors WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Vendor with id {} not found", id)))
    }

    /// Get vendor by email. Emails are not unique in the schema; the first
    /// registered match wins.
    pub async fn get_by_email(&self, email: &str) -> AppResult<Option<Vendor>> {
        let vendor = sqlx::query_as::<_, Vendor>(
            "SELECT * FROM vendors WHERE LOWER(email) = LOWER($1) ORDER BY id LIMIT 1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(vendor)
    }

    /// List all vendors, newest first
    pub async fn list(&self) -> AppResult<Vec<Vendor>> {
        let vendors =
            sqlx::query_as::<_, Vendor>("SELECT * FROM vendors ORDER BY registered_at DESC")
                .fetch_all(&self.pool)
                .await?;

        Ok(vendors)
    }

    /// Create a new vendor
    pub async fn create(&self, name: &str, email: &str, password_hash: &str) -> AppResult<Vendor> {
        let vendor = sqlx::query_as::<_, Vendor>(
            r#"
            INSERT INTO vendors (name, email, password_hash)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(name)
        .bind(email)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await?;

        Ok(vendor)
    }

    /// Delete a vendor. Fails while the vendor still owns assets; the check
    /// and the delete run in one transaction with the vendor row locked.
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let mut tx = self.pool.begin().await?;

        let exists: Option<i32> =
            sqlx::query_scalar("SELECT id FROM vendors WHERE id = $1 FOR UPDATE")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?;
        if exists.is_none() {
            return Err(AppError::NotFound(format!("Vendor with id {} not found", id)));
        }

        let assets_count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM assets WHERE vendor_id = $1")
                .bind(id)
                .fetch_one(&mut *tx)
                .await?;
        if assets_count > 0 {
            return Err(AppError::BusinessRule(
                "Vendor has assets. Reassign or delete assets first.".to_string(),
            ));
        }

        sqlx::query("DELETE FROM vendors WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(())
    }

    /// Count all vendors
    pub async fn count(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM vendors")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}
