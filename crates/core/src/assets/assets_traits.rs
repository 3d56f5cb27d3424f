use crate::assets::assets_model::{Asset, NewAsset};
use crate::errors::Result;
use async_trait::async_trait;

/// Trait for asset repository operations
#[async_trait]
pub trait AssetRepositoryTrait: Send + Sync {
    fn list(&self) -> Result<Vec<Asset>>;
    fn get_by_id(&self, asset_id: &str) -> Result<Option<Asset>>;
    async fn create(&self, new_asset: NewAsset) -> Result<Asset>;
    async fn update(&self, asset_id: &str, changes: NewAsset) -> Result<Asset>;
    async fn delete(&self, asset_id: &str) -> Result<usize>;
}

/// Trait for asset service operations
#[async_trait]
pub trait AssetServiceTrait: Send + Sync {
    fn get_assets(&self) -> Result<Vec<Asset>>;
    fn get_asset(&self, asset_id: &str) -> Result<Asset>;
    async fn create_asset(&self, new_asset: NewAsset) -> Result<Asset>;
    async fn update_asset(&self, asset_id: &str, changes: NewAsset) -> Result<Asset>;
    async fn delete_asset(&self, asset_id: &str) -> Result<()>;
}
