//! Asset lifecycle manager.
//!
//! Every status mutation goes through here so the asset's current status,
//! its history and its assignments stay consistent. The repository performs
//! the paired writes in one transaction.

use crate::{
    error::{AppError, AppResult},
    models::{
        asset::{Asset, AssetStatus},
        assignment::Assignment,
        history::StatusHistory,
    },
    repository::Repository,
    services::uploads::UploadsService,
};

#[derive(Clone)]
pub struct LifecycleService {
    repository: Repository,
    uploads: UploadsService,
    retired_is_terminal: bool,
}

impl LifecycleService {
    pub fn new(repository: Repository, uploads: UploadsService, retired_is_terminal: bool) -> Self {
        Self {
            repository,
            uploads,
            retired_is_terminal,
        }
    }

    /// Change an asset's status, appending one history row.
    /// An unknown status string fails before anything is touched.
    pub async fn change_status(
        &self,
        asset_id: i32,
        status: &str,
        actor: &str,
        note: &str,
    ) -> AppResult<StatusHistory> {
        let status: AssetStatus = status.parse().map_err(AppError::InvalidStatus)?;

        self.repository
            .assets
            .change_status(asset_id, status, actor, note, self.retired_is_terminal)
            .await
    }

    /// Assign an asset to a holder: status ASSIGNED + current_holder +
    /// one assignment row + one history row, all in one transaction
    pub async fn assign_to(
        &self,
        asset_id: i32,
        holder: &str,
        actor: &str,
        note: &str,
    ) -> AppResult<(Assignment, StatusHistory)> {
        let holder = holder.trim();
        if holder.is_empty() {
            return Err(AppError::Validation("Assignee name is required".to_string()));
        }

        self.repository
            .assets
            .assign(asset_id, holder, actor, note, self.retired_is_terminal)
            .await
    }

    /// Delete an asset. The picture file removal is best-effort and never
    /// blocks the record deletion.
    pub async fn delete_asset(&self, asset_id: i32) -> AppResult<()> {
        let asset = self.repository.assets.delete(asset_id).await?;

        if let Some(ref picture) = asset.picture {
            self.uploads.remove_picture(picture).await;
        }

        tracing::info!(asset_id, "Asset deleted");
        Ok(())
    }

    /// Status history for an asset, most recent first
    pub async fn history(&self, asset_id: i32) -> AppResult<(Asset, Vec<StatusHistory>)> {
        let asset = self.repository.assets.get_by_id(asset_id).await?;
        let history = self.repository.assets.status_history(asset_id).await?;
        Ok((asset, history))
    }
}
