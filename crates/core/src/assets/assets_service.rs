use std::sync::Arc;

use async_trait::async_trait;

use super::assets_model::{Asset, NewAsset};
use super::assets_traits::{AssetRepositoryTrait, AssetServiceTrait};
use crate::errors::{Error, Result};

pub struct AssetService {
    repository: Arc<dyn AssetRepositoryTrait>,
}

impl AssetService {
    pub fn new(repository: Arc<dyn AssetRepositoryTrait>) -> Self {
        AssetService { repository }
    }
}

#[async_trait]
impl AssetServiceTrait for AssetService {
    fn get_assets(&self) -> Result<Vec<Asset>> {
        self.repository.list()
    }

    fn get_asset(&self, asset_id: &str) -> Result<Asset> {
        self.repository
            .get_by_id(asset_id)?
            .ok_or_else(|| Error::not_found("Asset", asset_id))
    }

    async fn create_asset(&self, new_asset: NewAsset) -> Result<Asset> {
        new_asset.validate()?;
        self.repository.create(new_asset).await
    }

    async fn update_asset(&self, asset_id: &str, changes: NewAsset) -> Result<Asset> {
        changes.validate()?;
        self.get_asset(asset_id)?;
        self.repository.update(asset_id, changes).await
    }

    async fn delete_asset(&self, asset_id: &str) -> Result<()> {
        if self.repository.delete(asset_id).await? == 0 {
            return Err(Error::not_found("Asset", asset_id));
        }
        Ok(())
    }
}
