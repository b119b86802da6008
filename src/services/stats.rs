//! Dashboard statistics service

use crate::{
    api::stats::{DashboardResponse, StatusCounts},
    error::AppResult,
    models::asset::AssetStatus,
    repository::Repository,
};

#[derive(Clone)]
pub struct StatsService {
    repository: Repository,
}

impl StatsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Admin dashboard figures: totals, per-status counts and latest assets
    pub async fn dashboard(&self) -> AppResult<DashboardResponse> {
        let total_vendors = self.repository.vendors.count().await?;
        let total_assets = self.repository.assets.count().await?;

        let status_counts = StatusCounts {
            inventory: self
                .repository
                .assets
                .count_by_status(AssetStatus::Inventory)
                .await?,
            assigned: self
                .repository
                .assets
                .count_by_status(AssetStatus::Assigned)
                .await?,
            repair: self
                .repository
                .assets
                .count_by_status(AssetStatus::Repair)
                .await?,
            retired: self
                .repository
                .assets
                .count_by_status(AssetStatus::Retired)
                .await?,
        };

        let latest_assets = self.repository.assets.latest(6).await?;

        Ok(DashboardResponse {
            total_vendors,
            total_assets,
            status_counts,
            latest_assets,
        })
    }
}
