//! Admin dashboard endpoint

use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    api::AuthenticatedAccount,
    error::AppResult,
    models::asset::AssetOverview,
    AppState,
};

/// Asset counts broken down by lifecycle status
#[derive(Debug, Serialize, ToSchema)]
pub struct StatusCounts {
    pub inventory: i64,
    pub assigned: i64,
    pub repair: i64,
    pub retired: i64,
}

/// Aggregate figures shown on the admin dashboard
#[derive(Debug, Serialize, ToSchema)]
pub struct DashboardResponse {
    pub total_vendors: i64,
    pub total_assets: i64,
    pub status_counts: StatusCounts,
    /// Most recently created assets
    pub latest_assets: Vec<AssetOverview>,
}

/// Admin dashboard statistics
#[utoipa::path(
    get,
    path = "/admin/",
    tag = "dashboard",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Dashboard figures", body = DashboardResponse),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Not an admin account")
    )
)]
pub async fn dashboard(
    State(state): State<AppState>,
    AuthenticatedAccount(claims): AuthenticatedAccount,
) -> AppResult<Json<DashboardResponse>> {
    claims.require_admin()?;
    let dashboard = state.services.stats.dashboard().await?;
    Ok(Json(dashboard))
}
