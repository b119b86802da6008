//! Asset model and lifecycle status

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{Decode, Encode, FromRow, Postgres};
use utoipa::ToSchema;
use validator::Validate;

/// Asset lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AssetStatus {
    Inventory,
    Assigned,
    Repair,
    Retired,
}

impl AssetStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetStatus::Inventory => "inventory",
            AssetStatus::Assigned => "assigned",
            AssetStatus::Repair => "repair",
            AssetStatus::Retired => "retired",
        }
    }

    /// Whether an asset currently in this status may be transitioned away.
    /// All transitions are open unless the retired-is-terminal policy is on.
    pub fn can_leave(&self, retired_is_terminal: bool) -> bool {
        !(retired_is_terminal && *self == AssetStatus::Retired)
    }
}

impl std::fmt::Display for AssetStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for AssetStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "inventory" => Ok(AssetStatus::Inventory),
            "assigned" => Ok(AssetStatus::Assigned),
            "repair" => Ok(AssetStatus::Repair),
            "retired" => Ok(AssetStatus::Retired),
            _ => Err(format!("Invalid asset status: {}", s)),
        }
    }
}

// SQLx conversion: statuses are stored as their lowercase text form
impl sqlx::Type<Postgres> for AssetStatus {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <String as sqlx::Type<Postgres>>::type_info()
    }
}

impl<'r> Decode<'r, Postgres> for AssetStatus {
    fn decode(value: sqlx::postgres::PgValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        let s: String = Decode::<Postgres>::decode(value)?;
        s.parse().map_err(|e: String| e.into())
    }
}

impl Encode<'_, Postgres> for AssetStatus {
    fn encode_by_ref(&self, buf: &mut sqlx::postgres::PgArgumentBuffer) -> sqlx::encode::IsNull {
        let s: String = self.as_str().to_string();
        <String as Encode<Postgres>>::encode(s, buf)
    }
}

/// Asset model from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Asset {
    pub id: i32,
    pub name: String,
    pub serial_number: Option<String>,
    pub model_number: Option<String>,
    pub make: Option<String>,
    pub picture: Option<String>,
    pub quantity: i32,
    pub vendor_id: Option<i32>,
    pub category_id: Option<i32>,
    pub current_status: AssetStatus,
    pub current_holder: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Asset joined with vendor and category names for listings
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct AssetOverview {
    pub id: i32,
    pub name: String,
    pub serial_number: Option<String>,
    pub picture: Option<String>,
    pub quantity: i32,
    pub current_status: AssetStatus,
    pub current_holder: Option<String>,
    pub created_at: DateTime<Utc>,
    pub vendor_name: Option<String>,
    pub category_name: Option<String>,
}

/// Create asset payload (picture handled separately by the upload service)
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct CreateAsset {
    #[validate(length(min = 1, message = "Asset name is required"))]
    pub name: String,
    pub serial_number: Option<String>,
    pub model_number: Option<String>,
    pub make: Option<String>,
    #[validate(range(min = 0, message = "Quantity cannot be negative"))]
    pub quantity: i32,
    pub vendor_id: Option<i32>,
    pub category_id: Option<i32>,
    pub current_status: Option<AssetStatus>,
    pub current_holder: Option<String>,
}
