//! Authentication endpoints: admin and vendor signup and login

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::{
        admin::{Admin, AdminLogin, AdminSignup},
        auth::AccountRole,
        vendor::{Vendor, VendorLogin, VendorSignup},
    },
    AppState,
};

/// Successful login response with a bearer token
#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    pub token: String,
    pub token_type: String,
    pub account_id: i32,
    pub role: AccountRole,
    /// Admin username or vendor name
    pub display_name: String,
}

/// Register a new admin account
#[utoipa::path(
    post,
    path = "/admin_signup/",
    tag = "auth",
    request_body = AdminSignup,
    responses(
        (status = 201, description = "Admin account created", body = Admin),
        (status = 400, description = "Validation failed or passwords do not match"),
        (status = 409, description = "Username already exists")
    )
)]
pub async fn admin_signup(
    State(state): State<AppState>,
    Json(signup): Json<AdminSignup>,
) -> AppResult<(StatusCode, Json<Admin>)> {
    let admin = state.services.accounts.register_admin(signup).await?;
    tracing::info!(username = %admin.username, "Admin account created");
    Ok((StatusCode::CREATED, Json(admin)))
}

/// Authenticate an admin account
#[utoipa::path(
    post,
    path = "/admin_login/",
    tag = "auth",
    request_body = AdminLogin,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 401, description = "Invalid username or password")
    )
)]
pub async fn admin_login(
    State(state): State<AppState>,
    Json(login): Json<AdminLogin>,
) -> AppResult<Json<LoginResponse>> {
    let (token, admin) = state
        .services
        .accounts
        .login_admin(&login.username, &login.password)
        .await?;

    Ok(Json(LoginResponse {
        token,
        token_type: "Bearer".to_string(),
        account_id: admin.id,
        role: AccountRole::Admin,
        display_name: admin.username,
    }))
}

/// Register a new vendor account
#[utoipa::path(
    post,
    path = "/vendor-signup/",
    tag = "auth",
    request_body = VendorSignup,
    responses(
        (status = 201, description = "Vendor account created", body = Vendor),
        (status = 400, description = "Validation failed or passwords do not match")
    )
)]
pub async fn vendor_signup(
    State(state): State<AppState>,
    Json(signup): Json<VendorSignup>,
) -> AppResult<(StatusCode, Json<Vendor>)> {
    let vendor = state.services.accounts.register_vendor(signup).await?;
    tracing::info!(vendor_id = vendor.id, "Vendor account created");
    Ok((StatusCode::CREATED, Json(vendor)))
}

/// Authenticate a vendor account
#[utoipa::path(
    post,
    path = "/vendor-login/",
    tag = "auth",
    request_body = VendorLogin,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 401, description = "Invalid email or password")
    )
)]
pub async fn vendor_login(
    State(state): State<AppState>,
    Json(login): Json<VendorLogin>,
) -> AppResult<Json<LoginResponse>> {
    let (token, vendor) = state
        .services
        .accounts
        .login_vendor(&login.email, &login.password)
        .await?;

    Ok(Json(LoginResponse {
        token,
        token_type: "Bearer".to_string(),
        account_id: vendor.id,
        role: AccountRole::Vendor,
        display_name: vendor.name,
    }))
}
