//! Assets repository for database operations.
//!
//! Lifecycle mutations (status change, assignment) run inside a single
//! transaction so the asset row and its history/assignment rows can never
//! disagree. The current status row is locked before the policy check.

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::{
        asset::{Asset, AssetOverview, AssetStatus, CreateAsset},
        assignment::Assignment,
        history::StatusHistory,
    },
};

#[derive(Clone)]
pub struct AssetsRepository {
    pool: Pool<Postgres>,
}

impl AssetsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get asset by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Asset> {
        sqlx::query_as::<_, Asset>("SELECT * FROM assets WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Asset with id {} not found", id)))
    }

    /// List all assets with vendor/category names, newest first
    pub async fn list_overview(&self) -> AppResult<Vec<AssetOverview>> {
        let assets = sqlx::query_as::<_, AssetOverview>(
            r#"
            SELECT a.id, a.name, a.serial_number, a.picture, a.quantity,
                   a.current_status, a.current_holder, a.created_at,
                   v.name as vendor_name, c.name as category_name
            FROM assets a
            LEFT JOIN vendors v ON v.id = a.vendor_id
            LEFT JOIN asset_categories c ON c.id = a.category_id
            ORDER BY a.created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(assets)
    }

    /// List assets owned by a vendor, newest first
    pub async fn list_by_vendor(&self, vendor_id: i32) -> AppResult<Vec<AssetOverview>> {
        let assets = sqlx::query_as::<_, AssetOverview>(
            r#"
            SELECT a.id, a.name, a.serial_number, a.picture, a.quantity,
                   a.current_status, a.current_holder, a.created_at,
                   v.name as vendor_name, c.name as category_name
            FROM assets a
            LEFT JOIN vendors v ON v.id = a.vendor_id
            LEFT JOIN asset_categories c ON c.id = a.category_id
            WHERE a.vendor_id = $1
            ORDER BY a.created_at DESC
            "#,
        )
        .bind(vendor_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(assets)
    }

    /// Sum of quantities for a vendor's assets
    pub async fn total_quantity_for_vendor(&self, vendor_id: i32) -> AppResult<i64> {
        let total: i64 = sqlx::query_scalar(
            "SELECT COALESCE(SUM(quantity), 0)::bigint FROM assets WHERE vendor_id = $1",
        )
        .bind(vendor_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(total)
    }

    /// Create a new asset
    pub async fn create(&self, asset: &CreateAsset, picture: Option<&str>) -> AppResult<Asset> {
        let status = asset.current_status.unwrap_or(AssetStatus::Inventory);

        let created = sqlx::query_as::<_, Asset>(
            r#"
            INSERT INTO assets (name, serial_number, model_number, make, picture,
                                quantity, vendor_id, category_id, current_status, current_holder)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING *
            "#,
        )
        .bind(&asset.name)
        .bind(&asset.serial_number)
        .bind(&asset.model_number)
        .bind(&asset.make)
        .bind(picture)
        .bind(asset.quantity)
        .bind(asset.vendor_id)
        .bind(asset.category_id)
        .bind(status)
        .bind(&asset.current_holder)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    /// Delete an asset, returning the removed row (history and assignments
    /// go with it via ON DELETE CASCADE)
    pub async fn delete(&self, id: i32) -> AppResult<Asset> {
        sqlx::query_as::<_, Asset>("DELETE FROM assets WHERE id = $1 RETURNING *")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Asset with id {} not found", id)))
    }

    /// Change an asset's status and append one history row, atomically
    pub async fn change_status(
        &self,
        asset_id: i32,
        status: AssetStatus,
        changed_by: &str,
        note: &str,
        retired_is_terminal: bool,
    ) -> AppResult<StatusHistory> {
        let mut tx = self.pool.begin().await?;

        let current: AssetStatus = sqlx::query_scalar(
            "SELECT current_status FROM assets WHERE id = $1 FOR UPDATE",
        )
        .bind(asset_id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Asset with id {} not found", asset_id)))?;

        if !current.can_leave(retired_is_terminal) {
            return Err(AppError::BusinessRule(
                "Retired assets can no longer change status".to_string(),
            ));
        }

        sqlx::query("UPDATE assets SET current_status = $1 WHERE id = $2")
            .bind(status)
            .bind(asset_id)
            .execute(&mut *tx)
            .await?;

        let history = sqlx::query_as::<_, StatusHistory>(
            r#"
            INSERT INTO asset_status_history (asset_id, status, changed_by, note)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(asset_id)
        .bind(status)
        .bind(changed_by)
        .bind(note)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(history)
    }

    /// Assign an asset to a holder: sets status ASSIGNED and current_holder,
    /// creates one assignment row and one history row in the same transaction
    pub async fn assign(
        &self,
        asset_id: i32,
        holder: &str,
        changed_by: &str,
        note: &str,
        retired_is_terminal: bool,
    ) -> AppResult<(Assignment, StatusHistory)> {
        let mut tx = self.pool.begin().await?;

        let current: AssetStatus = sqlx::query_scalar(
            "SELECT current_status FROM assets WHERE id = $1 FOR UPDATE",
        )
        .bind(asset_id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Asset with id {} not found", asset_id)))?;

        if !current.can_leave(retired_is_terminal) {
            return Err(AppError::BusinessRule(
                "Retired assets can no longer be assigned".to_string(),
            ));
        }

        sqlx::query("UPDATE assets SET current_status = $1, current_holder = $2 WHERE id = $3")
            .bind(AssetStatus::Assigned)
            .bind(holder)
            .bind(asset_id)
            .execute(&mut *tx)
            .await?;

        let assignment = sqlx::query_as::<_, Assignment>(
            r#"
            INSERT INTO asset_assignments (asset_id, assigned_to)
            VALUES ($1, $2)
            RETURNING *
            "#,
        )
        .bind(asset_id)
        .bind(holder)
        .fetch_one(&mut *tx)
        .await?;

        let history = sqlx::query_as::<_, StatusHistory>(
            r#"
            INSERT INTO asset_status_history (asset_id, status, changed_by, note)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(asset_id)
        .bind(AssetStatus::Assigned)
        .bind(changed_by)
        .bind(note)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok((assignment, history))
    }

    /// Status history for an asset, most recent first
    pub async fn status_history(&self, asset_id: i32) -> AppResult<Vec<StatusHistory>> {
        let history = sqlx::query_as::<_, StatusHistory>(
            r#"
            SELECT * FROM asset_status_history
            WHERE asset_id = $1
            ORDER BY changed_at DESC, id DESC
            "#,
        )
        .bind(asset_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(history)
    }

    /// Count all assets
    pub async fn count(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM assets")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// Count assets in a given status
    pub async fn count_by_status(&self, status: AssetStatus) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM assets WHERE current_status = $1")
            .bind(status)
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// Most recently created assets
    pub async fn latest(&self, limit: i64) -> AppResult<Vec<AssetOverview>> {
        let assets = sqlx::query_as::<_, AssetOverview>(
            r#"
            SELECT a.id, a.name, a.serial_number, a.picture, a.quantity,
                   a.current_status, a.current_holder, a.created_at,
                   v.name as vendor_name, c.name as category_name
            FROM assets a
            LEFT JOIN vendors v ON v.id = a.vendor_id
            LEFT JOIN asset_categories c ON c.id = a.category_id
            ORDER BY a.created_at DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(assets)
    }
}
