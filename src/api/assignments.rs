//! Assignment endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Form, Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    api::AuthenticatedAccount,
    error::AppResult,
    models::{
        assignment::{Assignment, AssignmentOverview},
        history::StatusHistory,
    },
    AppState,
};

/// Assignment form payload
#[derive(Debug, Deserialize, ToSchema)]
pub struct AssignForm {
    pub assigned_to: String,
    /// Name recorded in the history row; defaults to the logged-in admin
    pub assigned_by: Option<String>,
    pub note: Option<String>,
}

/// Assignment with the paired history row it produced
#[derive(Debug, Serialize, ToSchema)]
pub struct AssignResponse {
    pub assignment: Assignment,
    pub history: StatusHistory,
}

/// List all assignments across assets
#[utoipa::path(
    get,
    path = "/admin/assignments/",
    tag = "assignments",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All assignments, newest first", body = Vec<AssignmentOverview>),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Not an admin account")
    )
)]
pub async fn list_assignments(
    State(state): State<AppState>,
    AuthenticatedAccount(claims): AuthenticatedAccount,
) -> AppResult<Json<Vec<AssignmentOverview>>> {
    claims.require_admin()?;
    let assignments = state.services.assignments.list_all().await?;
    Ok(Json(assignments))
}

/// Assign an asset to a holder
#[utoipa::path(
    post,
    path = "/admin/assignments/assign/{id}/",
    tag = "assignments",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Asset ID")),
    responses(
        (status = 201, description = "Asset assigned", body = AssignResponse),
        (status = 400, description = "Assignee name missing"),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Not an admin account"),
        (status = 404, description = "Asset not found"),
        (status = 422, description = "Transition not allowed")
    )
)]
pub async fn assign_asset(
    State(state): State<AppState>,
    AuthenticatedAccount(claims): AuthenticatedAccount,
    Path(id): Path<i32>,
    Form(form): Form<AssignForm>,
) -> AppResult<(StatusCode, Json<AssignResponse>)> {
    claims.require_admin()?;

    let actor = form.assigned_by.unwrap_or_else(|| claims.sub.clone());
    let note = form.note.unwrap_or_default();
    let (assignment, history) = state
        .services
        .lifecycle
        .assign_to(id, &form.assigned_to, &actor, &note)
        .await?;

    tracing::info!(asset_id = id, assigned_to = %assignment.assigned_to, "Asset assigned");
    Ok((StatusCode::CREATED, Json(AssignResponse { assignment, history })))
}
