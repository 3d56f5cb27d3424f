//! Investment domain models.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::constants::{DISPLAY_DECIMAL_PRECISION, RATIO_DECIMAL_PRECISION};
use crate::validation::{require_non_blank, require_non_negative, require_positive};
use crate::Result;

/// Domain model representing a persisted investment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Investment {
    pub id: String,
    pub investment_type: String,
    pub provider_broker: String,
    pub investment_amount: Decimal,
    pub current_amount: Decimal,
    /// Broker-side identifier (the SIP id for synced mutual funds)
    pub external_id: Option<String>,
    pub scheme_code: Option<String>,
    pub scheme_name: Option<String>,
    pub purchased_date: Option<NaiveDate>,
    pub maturity_date: Option<NaiveDate>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Investment {
    /// Current amount minus invested amount.
    pub fn gain_loss(&self) -> Decimal {
        self.current_amount - self.investment_amount
    }

    /// Gain/loss as a percentage of the invested amount, rounded to 2 places.
    ///
    /// The ratio is first rounded half-up to 4 places, then scaled to a
    /// percentage. Returns zero when nothing was invested.
    pub fn gain_loss_percent(&self) -> Decimal {
        if self.investment_amount <= Decimal::ZERO {
            return Decimal::ZERO;
        }
        let ratio = (self.gain_loss() / self.investment_amount).round_dp_with_strategy(
            RATIO_DECIMAL_PRECISION,
            RoundingStrategy::MidpointAwayFromZero,
        );
        (ratio * Decimal::ONE_HUNDRED).round_dp_with_strategy(
            DISPLAY_DECIMAL_PRECISION,
            RoundingStrategy::MidpointAwayFromZero,
        )
    }
}

/// Input model for persisting an investment.
///
/// `id: None` means insert; `Some(id)` of an existing row means update.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewInvestment {
    #[serde(default)]
    pub id: Option<String>,
    pub investment_type: String,
    pub provider_broker: String,
    pub investment_amount: Decimal,
    pub current_amount: Decimal,
    #[serde(default)]
    pub external_id: Option<String>,
    #[serde(default)]
    pub scheme_code: Option<String>,
    #[serde(default)]
    pub scheme_name: Option<String>,
    #[serde(default)]
    pub purchased_date: Option<NaiveDate>,
    #[serde(default)]
    pub maturity_date: Option<NaiveDate>,
}

impl NewInvestment {
    /// Validates a manually entered investment.
    pub fn validate(&self) -> Result<()> {
        require_non_blank("investmentType", &self.investment_type)?;
        require_non_blank("providerBroker", &self.provider_broker)?;
        require_positive("investmentAmount", self.investment_amount)?;
        require_non_negative("currentAmount", self.current_amount)?;
        Ok(())
    }

    /// Validates an investment mirrored from a broker.
    ///
    /// Brokers report paused or newly registered SIPs without amounts, which
    /// are stored as zero; only negative amounts are rejected.
    pub fn validate_synced(&self) -> Result<()> {
        require_non_blank("investmentType", &self.investment_type)?;
        require_non_blank("providerBroker", &self.provider_broker)?;
        require_non_negative("investmentAmount", self.investment_amount)?;
        require_non_negative("currentAmount", self.current_amount)?;
        Ok(())
    }
}

/// Editable fields of an existing investment.
///
/// Broker-owned fields (external id, scheme code/name) are not editable.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentUpdate {
    pub investment_type: String,
    pub provider_broker: String,
    pub investment_amount: Decimal,
    pub current_amount: Decimal,
    #[serde(default)]
    pub purchased_date: Option<NaiveDate>,
    #[serde(default)]
    pub maturity_date: Option<NaiveDate>,
}

impl InvestmentUpdate {
    /// Applies the update on top of a stored investment, producing the record to save.
    pub fn apply_to(self, existing: &Investment) -> NewInvestment {
        NewInvestment {
            id: Some(existing.id.clone()),
            investment_type: self.investment_type,
            provider_broker: self.provider_broker,
            investment_amount: self.investment_amount,
            current_amount: self.current_amount,
            external_id: existing.external_id.clone(),
            scheme_code: existing.scheme_code.clone(),
            scheme_name: existing.scheme_name.clone(),
            purchased_date: self.purchased_date,
            maturity_date: self.maturity_date,
        }
    }
}
