//! Vendor model and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Vendor account model from database
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct Vendor {
    pub id: i32,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub registered_at: DateTime<Utc>,
}

/// Vendor signup payload
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct VendorSignup {
    #[validate(length(min = 1, message = "Vendor name is required"))]
    pub name: String,
    #[validate(email(message = "Enter a valid email"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
    pub confirm_password: String,
}

/// Vendor login payload
#[derive(Debug, Deserialize, ToSchema)]
pub struct VendorLogin {
    pub email: String,
    pub password: String,
}
