//! Business logic services

pub mod accounts;
pub mod assets;
pub mod assignments;
pub mod lifecycle;
pub mod stats;
pub mod uploads;

use crate::{
    config::{AssetsConfig, AuthConfig, UploadsConfig},
    repository::Repository,
};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub lifecycle: lifecycle::LifecycleService,
    pub assignments: assignments::AssignmentsService,
    pub assets: assets::AssetsService,
    pub accounts: accounts::AccountsService,
    pub stats: stats::StatsService,
    pub uploads: uploads::UploadsService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(
        repository: Repository,
        auth_config: AuthConfig,
        uploads_config: UploadsConfig,
        assets_config: AssetsConfig,
    ) -> Self {
        let uploads = uploads::UploadsService::new(&uploads_config);
        Self {
            lifecycle: lifecycle::LifecycleService::new(
                repository.clone(),
                uploads.clone(),
                assets_config.retired_is_terminal,
            ),
            assignments: assignments::AssignmentsService::new(repository.clone()),
            assets: assets::AssetsService::new(repository.clone(), uploads.clone()),
            accounts: accounts::AccountsService::new(repository.clone(), auth_config),
            stats: stats::StatsService::new(repository),
            uploads,
        }
    }
}
