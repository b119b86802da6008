//! Admin account model and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Admin account model from database
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct Admin {
    pub id: i32,
    pub username: String,
    pub department: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub last_login: DateTime<Utc>,
}

/// Admin signup payload
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct AdminSignup {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
    pub confirm_password: String,
    #[validate(length(min = 1, message = "Department is required"))]
    pub department: String,
}

/// Admin login payload
#[derive(Debug, Deserialize, ToSchema)]
pub struct AdminLogin {
    pub username: String,
    pub password: String,
}
