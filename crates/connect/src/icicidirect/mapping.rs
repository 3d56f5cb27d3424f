//! Mapping of remote SIP records onto local investments.

use fintrack_core::constants::MUTUAL_FUND_INVESTMENT_TYPE;
use fintrack_core::investments::{Investment, NewInvestment};
use rust_decimal::Decimal;

use super::models::RemoteSip;
use super::PROVIDER_NAME;

/// Builds the record to persist for `sip`.
///
/// When the SIP is already stored its id and user-entered dates are kept;
/// broker-owned fields are overwritten. Missing amounts become zero.
pub fn to_new_investment(sip: RemoteSip, sip_id: &str, existing: Option<&Investment>) -> NewInvestment {
    NewInvestment {
        id: existing.map(|i| i.id.clone()),
        investment_type: MUTUAL_FUND_INVESTMENT_TYPE.to_string(),
        provider_broker: PROVIDER_NAME.to_string(),
        investment_amount: sip.sip_amount.unwrap_or(Decimal::ZERO),
        current_amount: sip.current_value.unwrap_or(Decimal::ZERO),
        external_id: Some(sip_id.to_string()),
        scheme_code: sip.scheme_code,
        scheme_name: sip.scheme_name,
        purchased_date: existing.and_then(|i| i.purchased_date),
        maturity_date: existing.and_then(|i| i.maturity_date),
    }
}
