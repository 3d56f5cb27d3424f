//! Dashboard domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Net-worth summary across every tracked entity.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    /// Sum of asset values
    pub total_assets: Decimal,
    /// Sum of investment current amounts
    pub total_investments: Decimal,
    /// Assets plus investments
    pub total_assets_with_investments: Decimal,
    /// Sum of outstanding liabilities
    pub total_liabilities: Decimal,
    /// total_assets_with_investments - total_liabilities
    pub net_worth: Decimal,
    pub asset_count: usize,
    pub investment_count: usize,
    pub liability_count: usize,
}
