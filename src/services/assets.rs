//! Asset catalog service: creation, listings, per-vendor views

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::{
        asset::{Asset, AssetOverview, CreateAsset},
        category::{Category, CreateCategory},
        vendor::Vendor,
    },
    repository::Repository,
    services::uploads::UploadsService,
};

/// An uploaded picture extracted from a multipart form
pub struct PictureUpload {
    pub filename: String,
    pub data: Vec<u8>,
}

#[derive(Clone)]
pub struct AssetsService {
    repository: Repository,
    uploads: UploadsService,
}

impl AssetsService {
    pub fn new(repository: Repository, uploads: UploadsService) -> Self {
        Self { repository, uploads }
    }

    /// Create an asset with an optional picture upload
    pub async fn create_asset(
        &self,
        asset: CreateAsset,
        picture: Option<PictureUpload>,
    ) -> AppResult<Asset> {
        asset
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let stored = match picture {
            Some(p) => Some(self.uploads.store_picture(&p.filename, &p.data).await?),
            None => None,
        };

        self.repository.assets.create(&asset, stored.as_deref()).await
    }

    /// List all assets with vendor/category names, newest first
    pub async fn list_assets(&self) -> AppResult<Vec<AssetOverview>> {
        self.repository.assets.list_overview().await
    }

    /// A vendor's assets plus the summed quantity
    pub async fn vendor_assets(
        &self,
        vendor_id: i32,
    ) -> AppResult<(Vendor, Vec<AssetOverview>, i64)> {
        let vendor = self.repository.vendors.get_by_id(vendor_id).await?;
        let assets = self.repository.assets.list_by_vendor(vendor_id).await?;
        let total_quantity = self
            .repository
            .assets
            .total_quantity_for_vendor(vendor_id)
            .await?;
        Ok((vendor, assets, total_quantity))
    }

    /// List all categories ordered by name
    pub async fn list_categories(&self) -> AppResult<Vec<Category>> {
        self.repository.categories.list().await
    }

    /// Create a new category
    pub async fn create_category(&self, category: CreateCategory) -> AppResult<Category> {
        category
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        self.repository.categories.create(&category.name).await
    }
}
