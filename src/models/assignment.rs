//! Asset assignment model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Assignment record linking an asset to a holder
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Assignment {
    pub id: i32,
    pub asset_id: i32,
    pub assigned_to: String,
    pub assigned_at: DateTime<Utc>,
    /// Kept for schema compatibility; no operation writes it
    pub returned_at: Option<DateTime<Utc>>,
}

/// Assignment joined with the asset name for listings
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct AssignmentOverview {
    pub id: i32,
    pub asset_id: i32,
    pub asset_name: String,
    pub assigned_to: String,
    pub assigned_at: DateTime<Utc>,
    pub returned_at: Option<DateTime<Utc>>,
}
