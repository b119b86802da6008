//! Vendor endpoints: admin-side management and vendor self-service

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use axum_extra::extract::Multipart;
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    api::{assets::parse_asset_form, AuthenticatedAccount},
    error::AppResult,
    models::{
        asset::{Asset, AssetOverview},
        vendor::{Vendor, VendorSignup},
    },
    AppState,
};

/// A vendor with their assets and summed quantity
#[derive(Debug, Serialize, ToSchema)]
pub struct VendorAssetsResponse {
    pub vendor: Vendor,
    pub assets: Vec<AssetOverview>,
    pub total_quantity: i64,
}

/// List all vendors
#[utoipa::path(
    get,
    path = "/admin/vendors/",
    tag = "vendors",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All vendors, newest first", body = Vec<Vendor>),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Not an admin account")
    )
)]
pub async fn list_vendors(
    State(state): State<AppState>,
    AuthenticatedAccount(claims): AuthenticatedAccount,
) -> AppResult<Json<Vec<Vendor>>> {
    claims.require_admin()?;
    let vendors = state.services.accounts.list_vendors().await?;
    Ok(Json(vendors))
}

/// Create a vendor account from the admin side
#[utoipa::path(
    post,
    path = "/admin/vendors/add/",
    tag = "vendors",
    security(("bearer_auth" = [])),
    request_body = VendorSignup,
    responses(
        (status = 201, description = "Vendor created", body = Vendor),
        (status = 400, description = "Validation failed or passwords do not match"),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Not an admin account")
    )
)]
pub async fn add_vendor(
    State(state): State<AppState>,
    AuthenticatedAccount(claims): AuthenticatedAccount,
    Json(signup): Json<VendorSignup>,
) -> AppResult<(StatusCode, Json<Vendor>)> {
    claims.require_admin()?;
    let vendor = state.services.accounts.register_vendor(signup).await?;
    tracing::info!(vendor_id = vendor.id, "Vendor created by admin");
    Ok((StatusCode::CREATED, Json(vendor)))
}

/// Delete a vendor that owns no assets
#[utoipa::path(
    post,
    path = "/admin/vendors/delete/{id}/",
    tag = "vendors",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Vendor ID")),
    responses(
        (status = 204, description = "Vendor deleted"),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Not an admin account"),
        (status = 404, description = "Vendor not found"),
        (status = 422, description = "Vendor still owns assets")
    )
)]
pub async fn delete_vendor(
    State(state): State<AppState>,
    AuthenticatedAccount(claims): AuthenticatedAccount,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    claims.require_admin()?;
    state.services.accounts.delete_vendor(id).await?;
    tracing::info!(vendor_id = id, "Vendor deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// A vendor's assets as seen by an admin
#[utoipa::path(
    get,
    path = "/admin/vendor/{id}/assets",
    tag = "vendors",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Vendor ID")),
    responses(
        (status = 200, description = "Vendor with assets", body = VendorAssetsResponse),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Not an admin account"),
        (status = 404, description = "Vendor not found")
    )
)]
pub async fn vendor_assets(
    State(state): State<AppState>,
    AuthenticatedAccount(claims): AuthenticatedAccount,
    Path(id): Path<i32>,
) -> AppResult<Json<VendorAssetsResponse>> {
    claims.require_admin()?;
    let (vendor, assets, total_quantity) = state.services.assets.vendor_assets(id).await?;
    Ok(Json(VendorAssetsResponse {
        vendor,
        assets,
        total_quantity,
    }))
}

/// The logged-in vendor's own dashboard
#[utoipa::path(
    get,
    path = "/vendor/",
    tag = "vendor-portal",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Vendor with their assets", body = VendorAssetsResponse),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Not a vendor account")
    )
)]
pub async fn vendor_dashboard(
    State(state): State<AppState>,
    AuthenticatedAccount(claims): AuthenticatedAccount,
) -> AppResult<Json<VendorAssetsResponse>> {
    claims.require_vendor()?;
    let (vendor, assets, total_quantity) =
        state.services.assets.vendor_assets(claims.account_id).await?;
    Ok(Json(VendorAssetsResponse {
        vendor,
        assets,
        total_quantity,
    }))
}

/// A vendor adds an asset to their own inventory. The vendor id always
/// comes from the token, never from the form.
#[utoipa::path(
    post,
    path = "/vendor-add-asset/",
    tag = "vendor-portal",
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Asset created", body = Asset),
        (status = 400, description = "Validation failed"),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Not a vendor account")
    )
)]
pub async fn vendor_add_asset(
    State(state): State<AppState>,
    AuthenticatedAccount(claims): AuthenticatedAccount,
    multipart: Multipart,
) -> AppResult<(StatusCode, Json<Asset>)> {
    claims.require_vendor()?;

    let (mut asset, picture) = parse_asset_form(multipart).await?;
    asset.vendor_id = Some(claims.account_id);

    let created = state.services.assets.create_asset(asset, picture).await?;
    tracing::info!(asset_id = created.id, vendor_id = claims.account_id, "Vendor added asset");
    Ok((StatusCode::CREATED, Json(created)))
}
