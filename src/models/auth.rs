//! Authenticated-context claims carried by bearer tokens

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::AppError;

/// Account role encoded in the token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AccountRole {
    Admin,
    Vendor,
}

/// JWT claims identifying the authenticated account.
/// Handlers receive this explicitly through an extractor; there is no
/// server-side session state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthClaims {
    /// Username (admin) or email (vendor)
    pub sub: String,
    pub account_id: i32,
    pub role: AccountRole,
    pub exp: i64,
    pub iat: i64,
}

impl AuthClaims {
    /// Create a new JWT token
    pub fn create_token(&self, secret: &str) -> Result<String, jsonwebtoken::errors::Error> {
        use jsonwebtoken::{encode, EncodingKey, Header};
        encode(
            &Header::default(),
            self,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
    }

    /// Parse JWT token
    pub fn from_token(token: &str, secret: &str) -> Result<Self, jsonwebtoken::errors::Error> {
        use jsonwebtoken::{decode, DecodingKey, Validation};
        let token_data = decode::<Self>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &Validation::default(),
        )?;
        Ok(token_data.claims)
    }

    pub fn require_admin(&self) -> Result<(), AppError> {
        if self.role == AccountRole::Admin {
            Ok(())
        } else {
            Err(AppError::Authorization(
                "Admin account required".to_string(),
            ))
        }
    }

    pub fn require_vendor(&self) -> Result<(), AppError> {
        if self.role == AccountRole::Vendor {
            Ok(())
        } else {
            Err(AppError::Authorization(
                "Vendor account required".to_string(),
            ))
        }
    }
}
