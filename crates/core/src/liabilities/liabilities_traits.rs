use crate::errors::Result;
use crate::liabilities::liabilities_model::{Liability, NewLiability};
use async_trait::async_trait;

/// Trait for liability repository operations
#[async_trait]
pub trait LiabilityRepositoryTrait: Send + Sync {
    fn list(&self) -> Result<Vec<Liability>>;
    fn get_by_id(&self, liability_id: &str) -> Result<Option<Liability>>;
    async fn create(&self, new_liability: NewLiability) -> Result<Liability>;
    async fn update(&self, liability_id: &str, changes: NewLiability) -> Result<Liability>;
    async fn delete(&self, liability_id: &str) -> Result<usize>;
}

/// Trait for liability service operations
#[async_trait]
pub trait LiabilityServiceTrait: Send + Sync {
    fn get_liabilities(&self) -> Result<Vec<Liability>>;
    fn get_liability(&self, liability_id: &str) -> Result<Liability>;
    async fn create_liability(&self, new_liability: NewLiability) -> Result<Liability>;
    async fn update_liability(
        &self,
        liability_id: &str,
        changes: NewLiability,
    ) -> Result<Liability>;
    async fn delete_liability(&self, liability_id: &str) -> Result<()>;
}
