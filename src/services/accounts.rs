//! Admin and vendor account management

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use chrono::Utc;
use validator::Validate;

use crate::{
    config::AuthConfig,
    error::{AppError, AppResult},
    models::{
        admin::{Admin, AdminSignup},
        auth::{AccountRole, AuthClaims},
        vendor::{Vendor, VendorSignup},
    },
    repository::Repository,
};

/// Hash a password using Argon2
pub fn hash_password(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))?;
    Ok(hash.to_string())
}

/// Verify a password against a stored Argon2 hash
pub fn verify_password(hash: &str, password: &str) -> AppResult<bool> {
    let parsed_hash = PasswordHash::new(hash)
        .map_err(|_| AppError::Internal("Invalid password hash".to_string()))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

#[derive(Clone)]
pub struct AccountsService {
    repository: Repository,
    config: AuthConfig,
}

impl AccountsService {
    pub fn new(repository: Repository, config: AuthConfig) -> Self {
        Self { repository, config }
    }

    /// Register a new vendor account. Only the salted hash is stored.
    pub async fn register_vendor(&self, signup: VendorSignup) -> AppResult<Vendor> {
        signup
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        if signup.password != signup.confirm_password {
            return Err(AppError::PasswordMismatch);
        }

        let hash = hash_password(&signup.password)?;
        self.repository
            .vendors
            .create(&signup.name, &signup.email, &hash)
            .await
    }

    /// Register a new admin account
    pub async fn register_admin(&self, signup: AdminSignup) -> AppResult<Admin> {
        signup
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        if self.repository.admins.username_exists(&signup.username).await? {
            return Err(AppError::Duplicate("Username already exists".to_string()));
        }

        if signup.password != signup.confirm_password {
            return Err(AppError::PasswordMismatch);
        }

        let hash = hash_password(&signup.password)?;
        self.repository
            .admins
            .create(&signup.username, &signup.department, &hash)
            .await
    }

    /// Authenticate an admin by username and password, returning a bearer
    /// token. Refreshes the account's last-login timestamp on success.
    pub async fn login_admin(&self, username: &str, password: &str) -> AppResult<(String, Admin)> {
        let admin = self
            .repository
            .admins
            .get_by_username(username)
            .await?
            .ok_or_else(|| AppError::Authentication("Invalid username or password".to_string()))?;

        if !verify_password(&admin.password_hash, password)? {
            return Err(AppError::Authentication(
                "Invalid username or password".to_string(),
            ));
        }

        self.repository.admins.touch_last_login(admin.id).await?;

        let token = self.create_token(&admin.username, admin.id, AccountRole::Admin)?;
        Ok((token, admin))
    }

    /// Authenticate a vendor by email and password, returning a bearer token
    pub async fn login_vendor(&self, email: &str, password: &str) -> AppResult<(String, Vendor)> {
        let vendor = self
            .repository
            .vendors
            .get_by_email(email)
            .await?
            .ok_or_else(|| AppError::Authentication("Invalid email or password".to_string()))?;

        if !verify_password(&vendor.password_hash, password)? {
            return Err(AppError::Authentication(
                "Invalid email or password".to_string(),
            ));
        }

        let token = self.create_token(&vendor.email, vendor.id, AccountRole::Vendor)?;
        Ok((token, vendor))
    }

    /// List all vendors, newest first
    pub async fn list_vendors(&self) -> AppResult<Vec<Vendor>> {
        self.repository.vendors.list().await
    }

    /// Delete a vendor; fails while the vendor still owns assets
    pub async fn delete_vendor(&self, id: i32) -> AppResult<()> {
        self.repository.vendors.delete(id).await
    }

    fn create_token(&self, sub: &str, account_id: i32, role: AccountRole) -> AppResult<String> {
        let now = Utc::now().timestamp();
        let exp = now + (self.config.jwt_expiration_hours as i64 * 3600);

        let claims = AuthClaims {
            sub: sub.to_string(),
            account_id,
            role,
            exp,
            iat: now,
        };

        claims
            .create_token(&self.config.jwt_secret)
            .map_err(|e| AppError::Internal(format!("Failed to create token: {}", e)))
    }
}
