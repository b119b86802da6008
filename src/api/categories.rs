//! Category endpoints

use axum::{extract::State, http::StatusCode, Json};

use crate::{
    api::AuthenticatedAccount,
    error::AppResult,
    models::category::{Category, CreateCategory},
    AppState,
};

/// List all categories
#[utoipa::path(
    get,
    path = "/admin/categories/",
    tag = "categories",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All categories ordered by name", body = Vec<Category>),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Not an admin account")
    )
)]
pub async fn list_categories(
    State(state): State<AppState>,
    AuthenticatedAccount(claims): AuthenticatedAccount,
) -> AppResult<Json<Vec<Category>>> {
    claims.require_admin()?;
    let categories = state.services.assets.list_categories().await?;
    Ok(Json(categories))
}

/// Create a category
#[utoipa::path(
    post,
    path = "/admin/categories/add/",
    tag = "categories",
    security(("bearer_auth" = [])),
    request_body = CreateCategory,
    responses(
        (status = 201, description = "Category created", body = Category),
        (status = 400, description = "Validation failed"),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Not an admin account"),
        (status = 409, description = "Category name already exists")
    )
)]
pub async fn add_category(
    State(state): State<AppState>,
    AuthenticatedAccount(claims): AuthenticatedAccount,
    Json(category): Json<CreateCategory>,
) -> AppResult<(StatusCode, Json<Category>)> {
    claims.require_admin()?;
    let created = state.services.assets.create_category(category).await?;
    tracing::info!(category_id = created.id, "Category created");
    Ok((StatusCode::CREATED, Json(created)))
}
