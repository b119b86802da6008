//! Asset endpoints: catalog, lifecycle and history

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Form, Json,
};
use axum_extra::extract::Multipart;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    api::AuthenticatedAccount,
    error::{AppError, AppResult},
    models::{
        asset::{Asset, AssetOverview, CreateAsset},
        assignment::Assignment,
        history::StatusHistory,
    },
    services::assets::PictureUpload,
    AppState,
};

/// Status change form payload
#[derive(Debug, Deserialize, ToSchema)]
pub struct StatusChangeForm {
    pub status: String,
    pub note: Option<String>,
}

/// An asset together with its full trail
#[derive(Debug, Serialize, ToSchema)]
pub struct AssetHistoryResponse {
    pub asset: Asset,
    pub history: Vec<StatusHistory>,
    pub assignments: Vec<Assignment>,
}

/// Parse the asset multipart form shared by the admin and vendor add flows
pub(super) async fn parse_asset_form(
    mut multipart: Multipart,
) -> AppResult<(CreateAsset, Option<PictureUpload>)> {
    let mut asset = CreateAsset {
        quantity: 1,
        ..Default::default()
    };
    let mut picture = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart form: {}", e)))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "picture" => {
                let filename = field.file_name().map(str::to_string);
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("Failed to read picture: {}", e)))?;
                if let Some(filename) = filename {
                    if !filename.is_empty() && !data.is_empty() {
                        picture = Some(PictureUpload {
                            filename,
                            data: data.to_vec(),
                        });
                    }
                }
            }
            "name" => asset.name = text_field(field, "name").await?.trim().to_string(),
            "serial_number" => {
                asset.serial_number = optional(text_field(field, "serial_number").await?)
            }
            "model_number" => {
                asset.model_number = optional(text_field(field, "model_number").await?)
            }
            "make" => asset.make = optional(text_field(field, "make").await?),
            "quantity" => {
                let raw = text_field(field, "quantity").await?;
                asset.quantity = raw
                    .trim()
                    .parse()
                    .map_err(|_| AppError::Validation("Quantity must be a number".to_string()))?;
            }
            "vendor_id" => asset.vendor_id = optional_id(text_field(field, "vendor_id").await?)?,
            "category_id" => {
                asset.category_id = optional_id(text_field(field, "category_id").await?)?
            }
            "current_status" => {
                let raw = text_field(field, "current_status").await?;
                if !raw.trim().is_empty() {
                    asset.current_status =
                        Some(raw.trim().parse().map_err(AppError::InvalidStatus)?);
                }
            }
            "current_holder" => {
                asset.current_holder = optional(text_field(field, "current_holder").await?)
            }
            _ => {}
        }
    }

    Ok((asset, picture))
}

async fn text_field(
    field: axum_extra::extract::multipart::Field,
    name: &str,
) -> AppResult<String> {
    field
        .text()
        .await
        .map_err(|e| AppError::Validation(format!("Failed to read field {}: {}", name, e)))
}

fn optional(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn optional_id(value: String) -> AppResult<Option<i32>> {
    match optional(value) {
        None => Ok(None),
        Some(raw) => raw
            .parse()
            .map(Some)
            .map_err(|_| AppError::Validation(format!("Invalid id: {}", raw))),
    }
}

/// List all assets with vendor and category names
#[utoipa::path(
    get,
    path = "/admin/assets/",
    tag = "assets",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All assets, newest first", body = Vec<AssetOverview>),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Not an admin account")
    )
)]
pub async fn list_assets(
    State(state): State<AppState>,
    AuthenticatedAccount(claims): AuthenticatedAccount,
) -> AppResult<Json<Vec<AssetOverview>>> {
    claims.require_admin()?;
    let assets = state.services.assets.list_assets().await?;
    Ok(Json(assets))
}

/// Create an asset from a multipart form with an optional picture
#[utoipa::path(
    post,
    path = "/admin/assets/add/",
    tag = "assets",
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Asset created", body = Asset),
        (status = 400, description = "Validation failed"),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Not an admin account")
    )
)]
pub async fn create_asset(
    State(state): State<AppState>,
    AuthenticatedAccount(claims): AuthenticatedAccount,
    multipart: Multipart,
) -> AppResult<(StatusCode, Json<Asset>)> {
    claims.require_admin()?;

    let (asset, picture) = parse_asset_form(multipart).await?;
    let created = state.services.assets.create_asset(asset, picture).await?;
    tracing::info!(asset_id = created.id, "Asset created");
    Ok((StatusCode::CREATED, Json(created)))
}

/// Delete an asset and its picture file
#[utoipa::path(
    post,
    path = "/admin/assets/delete/{id}/",
    tag = "assets",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Asset ID")),
    responses(
        (status = 204, description = "Asset deleted"),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Not an admin account"),
        (status = 404, description = "Asset not found")
    )
)]
pub async fn delete_asset(
    State(state): State<AppState>,
    AuthenticatedAccount(claims): AuthenticatedAccount,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    claims.require_admin()?;
    state.services.lifecycle.delete_asset(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Change an asset's lifecycle status
#[utoipa::path(
    post,
    path = "/admin/assets/status/{id}/",
    tag = "assets",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Asset ID")),
    responses(
        (status = 201, description = "Status changed, history row recorded", body = StatusHistory),
        (status = 400, description = "Unknown status"),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Not an admin account"),
        (status = 404, description = "Asset not found"),
        (status = 422, description = "Transition not allowed")
    )
)]
pub async fn change_status(
    State(state): State<AppState>,
    AuthenticatedAccount(claims): AuthenticatedAccount,
    Path(id): Path<i32>,
    Form(form): Form<StatusChangeForm>,
) -> AppResult<(StatusCode, Json<StatusHistory>)> {
    claims.require_admin()?;

    let note = form.note.unwrap_or_default();
    let history = state
        .services
        .lifecycle
        .change_status(id, &form.status, &claims.sub, &note)
        .await?;

    Ok((StatusCode::CREATED, Json(history)))
}

/// Full trail for an asset: status history and assignments
#[utoipa::path(
    get,
    path = "/admin/history/{id}/",
    tag = "assets",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Asset ID")),
    responses(
        (status = 200, description = "Asset with history and assignments", body = AssetHistoryResponse),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Not an admin account"),
        (status = 404, description = "Asset not found")
    )
)]
pub async fn asset_history(
    State(state): State<AppState>,
    AuthenticatedAccount(claims): AuthenticatedAccount,
    Path(id): Path<i32>,
) -> AppResult<Json<AssetHistoryResponse>> {
    claims.require_admin()?;

    let (asset, history) = state.services.lifecycle.history(id).await?;
    let assignments = state.services.assignments.list_for_asset(id).await?;

    Ok(Json(AssetHistoryResponse {
        asset,
        history,
        assignments,
    }))
}
