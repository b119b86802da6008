//! Assignments repository for database operations.
//!
//! Assignment rows are only created by the lifecycle path in the assets
//! repository; this repository is read-only.

use sqlx::{Pool, Postgres};

use crate::{
    error::AppResult,
    models::assignment::{Assignment, AssignmentOverview},
};

#[derive(Clone)]
pub struct AssignmentsRepository {
    pool: Pool<Postgres>,
}

impl AssignmentsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Assignments for an asset, most recent first
    pub async fn list_for_asset(&self, asset_id: i32) -> AppResult<Vec<Assignment>> {
        let assignments = sqlx::query_as::<_, Assignment>(
            r#"
            SELECT * FROM asset_assignments
            WHERE asset_id = $1
            ORDER BY assigned_at DESC, id DESC
            "#,
        )
        .bind(asset_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(assignments)
    }

    /// All assignments joined with asset names, most recent first
    pub async fn list_all(&self) -> AppResult<Vec<AssignmentOverview>> {
        let assignments = sqlx::query_as::<_, AssignmentOverview>(
            r#"
            SELECT aa.id, aa.asset_id, a.name as asset_name,
                   aa.assigned_to, aa.assigned_at, aa.returned_at
            FROM asset_assignments aa
            JOIN assets a ON a.id = aa.asset_id
            ORDER BY aa.assigned_at DESC, aa.id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(assignments)
    }
}
