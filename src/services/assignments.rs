//! Assignment manager.
//!
//! Read side only: assignment rows are created through the lifecycle
//! manager so the status/history/assignment triple cannot drift apart.

use crate::{
    error::AppResult,
    models::assignment::{Assignment, AssignmentOverview},
    repository::Repository,
};

#[derive(Clone)]
pub struct AssignmentsService {
    repository: Repository,
}

impl AssignmentsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Assignments for an asset, most recent first
    pub async fn list_for_asset(&self, asset_id: i32) -> AppResult<Vec<Assignment>> {
        // Verify asset exists
        self.repository.assets.get_by_id(asset_id).await?;
        self.repository.assignments.list_for_asset(asset_id).await
    }

    /// All assignments across assets, most recent first
    pub async fn list_all(&self) -> AppResult<Vec<AssignmentOverview>> {
        self.repository.assignments.list_all().await
    }
}
