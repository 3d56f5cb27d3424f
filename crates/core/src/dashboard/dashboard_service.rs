use std::sync::Arc;

use rust_decimal::Decimal;

use super::dashboard_model::DashboardSummary;
use crate::assets::{Asset, AssetRepositoryTrait};
use crate::errors::Result;
use crate::investments::{Investment, InvestmentRepositoryTrait};
use crate::liabilities::{Liability, LiabilityRepositoryTrait};

/// Trait for dashboard operations
pub trait DashboardServiceTrait: Send + Sync {
    fn get_summary(&self) -> Result<DashboardSummary>;
}

pub struct DashboardService {
    asset_repository: Arc<dyn AssetRepositoryTrait>,
    investment_repository: Arc<dyn InvestmentRepositoryTrait>,
    liability_repository: Arc<dyn LiabilityRepositoryTrait>,
}

impl DashboardService {
    pub fn new(
        asset_repository: Arc<dyn AssetRepositoryTrait>,
        investment_repository: Arc<dyn InvestmentRepositoryTrait>,
        liability_repository: Arc<dyn LiabilityRepositoryTrait>,
    ) -> Self {
        Self {
            asset_repository,
            investment_repository,
            liability_repository,
        }
    }
}

/// Builds the summary from already loaded records.
pub fn summarize(
    assets: &[Asset],
    investments: &[Investment],
    liabilities: &[Liability],
) -> DashboardSummary {
    let total_assets: Decimal = assets.iter().map(|a| a.value).sum();
    let total_investments: Decimal = investments.iter().map(|i| i.current_amount).sum();
    let total_liabilities: Decimal = liabilities.iter().map(|l| l.amount).sum();
    let total_assets_with_investments = total_assets + total_investments;

    DashboardSummary {
        total_assets,
        total_investments,
        total_assets_with_investments,
        total_liabilities,
        net_worth: total_assets_with_investments - total_liabilities,
        asset_count: assets.len(),
        investment_count: investments.len(),
        liability_count: liabilities.len(),
    }
}

impl DashboardServiceTrait for DashboardService {
    fn get_summary(&self) -> Result<DashboardSummary> {
        let assets = self.asset_repository.list()?;
        let investments = self.investment_repository.list()?;
        let liabilities = self.liability_repository.list()?;
        Ok(summarize(&assets, &investments, &liabilities))
    }
}
