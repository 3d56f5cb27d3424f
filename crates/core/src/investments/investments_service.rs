use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, info};

use super::investments_model::{Investment, InvestmentUpdate, NewInvestment};
use super::investments_traits::{InvestmentRepositoryTrait, InvestmentServiceTrait};
use crate::errors::{Error, Result};

const ENTITY: &str = "Investment";

pub struct InvestmentService {
    repository: Arc<dyn InvestmentRepositoryTrait>,
}

impl InvestmentService {
    pub fn new(repository: Arc<dyn InvestmentRepositoryTrait>) -> Self {
        InvestmentService { repository }
    }
}

#[async_trait]
impl InvestmentServiceTrait for InvestmentService {
    fn get_investments(&self) -> Result<Vec<Investment>> {
        self.repository.list()
    }

    fn get_investment(&self, investment_id: &str) -> Result<Investment> {
        self.repository
            .get_by_id(investment_id)?
            .ok_or_else(|| Error::not_found(ENTITY, investment_id))
    }

    async fn create_investment(&self, mut new_investment: NewInvestment) -> Result<Investment> {
        new_investment.validate()?;
        // Ids are always assigned by the store
        new_investment.id = None;
        let created = self.repository.save(new_investment).await?;
        info!(
            "Created investment {} ({} / {})",
            created.id, created.investment_type, created.provider_broker
        );
        Ok(created)
    }

    async fn update_investment(
        &self,
        investment_id: &str,
        update: InvestmentUpdate,
    ) -> Result<Investment> {
        let existing = self.get_investment(investment_id)?;
        let record = update.apply_to(&existing);
        record.validate()?;
        let updated = self.repository.save(record).await?;
        debug!("Updated investment {}", updated.id);
        Ok(updated)
    }

    async fn delete_investment(&self, investment_id: &str) -> Result<()> {
        let existing = self.get_investment(investment_id)?;
        self.repository.delete(&existing.id).await?;
        info!("Deleted investment {}", existing.id);
        Ok(())
    }
}
