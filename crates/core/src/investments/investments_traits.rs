use crate::errors::Result;
use crate::investments::investments_model::{Investment, InvestmentUpdate, NewInvestment};
use async_trait::async_trait;

/// Record store for investments.
#[async_trait]
pub trait InvestmentRepositoryTrait: Send + Sync {
    fn list(&self) -> Result<Vec<Investment>>;
    fn get_by_id(&self, investment_id: &str) -> Result<Option<Investment>>;
    /// Looks up a broker-synced investment by its natural key.
    fn find_by_external_id_and_provider(
        &self,
        external_id: &str,
        provider_broker: &str,
    ) -> Result<Option<Investment>>;
    /// Inserts when `id` is `None` (or unknown), updates otherwise.
    ///
    /// `created_at` is set on insert only; `updated_at` is refreshed on every call.
    async fn save(&self, investment: NewInvestment) -> Result<Investment>;
    async fn delete(&self, investment_id: &str) -> Result<usize>;
}

/// Trait for investment service operations
#[async_trait]
pub trait InvestmentServiceTrait: Send + Sync {
    fn get_investments(&self) -> Result<Vec<Investment>>;
    fn get_investment(&self, investment_id: &str) -> Result<Investment>;
    async fn create_investment(&self, new_investment: NewInvestment) -> Result<Investment>;
    async fn update_investment(
        &self,
        investment_id: &str,
        update: InvestmentUpdate,
    ) -> Result<Investment>;
    async fn delete_investment(&self, investment_id: &str) -> Result<()>;
}
