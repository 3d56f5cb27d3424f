use std::sync::Arc;

use async_trait::async_trait;

use super::liabilities_model::{Liability, NewLiability};
use super::liabilities_traits::{LiabilityRepositoryTrait, LiabilityServiceTrait};
use crate::errors::{Error, Result};

pub struct LiabilityService {
    repository: Arc<dyn LiabilityRepositoryTrait>,
}

impl LiabilityService {
    pub fn new(repository: Arc<dyn LiabilityRepositoryTrait>) -> Self {
        LiabilityService { repository }
    }
}

#[async_trait]
impl LiabilityServiceTrait for LiabilityService {
    fn get_liabilities(&self) -> Result<Vec<Liability>> {
        self.repository.list()
    }

    fn get_liability(&self, liability_id: &str) -> Result<Liability> {
        self.repository
            .get_by_id(liability_id)?
            .ok_or_else(|| Error::not_found("Liability", liability_id))
    }

    async fn create_liability(&self, new_liability: NewLiability) -> Result<Liability> {
        new_liability.validate()?;
        self.repository.create(new_liability).await
    }

    async fn update_liability(
        &self,
        liability_id: &str,
        changes: NewLiability,
    ) -> Result<Liability> {
        changes.validate()?;
        self.get_liability(liability_id)?;
        self.repository.update(liability_id, changes).await
    }

    async fn delete_liability(&self, liability_id: &str) -> Result<()> {
        if self.repository.delete(liability_id).await? == 0 {
            return Err(Error::not_found("Liability", liability_id));
        }
        Ok(())
    }
}
