//! Asset status history model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use super::asset::AssetStatus;

/// One entry in an asset's status history
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct StatusHistory {
    pub id: i32,
    pub asset_id: i32,
    pub status: AssetStatus,
    pub changed_by: String,
    pub changed_at: DateTime<Utc>,
    pub note: Option<String>,
}
