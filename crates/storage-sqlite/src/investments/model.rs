//! Database model for investments.

use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;
use fintrack_core::investments::{Investment, NewInvestment};

use crate::utils::parse_decimal;

#[derive(
    Queryable, Identifiable, Selectable, Insertable, AsChangeset, PartialEq, Debug, Clone,
)]
#[diesel(table_name = crate::schema::investments)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[diesel(treat_none_as_null = true)]
pub struct InvestmentDB {
    pub id: String,
    pub investment_type: String,
    pub provider_broker: String,
    pub investment_amount: String,
    pub current_amount: String,
    pub external_id: Option<String>,
    pub scheme_code: Option<String>,
    pub scheme_name: Option<String>,
    pub purchased_date: Option<NaiveDate>,
    pub maturity_date: Option<NaiveDate>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl InvestmentDB {
    /// Row for `investment` under `id`, created at `created_at` and touched at `now`.
    pub fn from_new(
        investment: NewInvestment,
        id: String,
        created_at: NaiveDateTime,
        now: NaiveDateTime,
    ) -> Self {
        Self {
            id,
            investment_type: investment.investment_type,
            provider_broker: investment.provider_broker,
            investment_amount: investment.investment_amount.to_string(),
            current_amount: investment.current_amount.to_string(),
            external_id: investment.external_id,
            scheme_code: investment.scheme_code,
            scheme_name: investment.scheme_name,
            purchased_date: investment.purchased_date,
            maturity_date: investment.maturity_date,
            created_at,
            updated_at: now,
        }
    }
}

impl From<InvestmentDB> for Investment {
    fn from(db: InvestmentDB) -> Self {
        Self {
            investment_amount: parse_decimal(&db.investment_amount, "investment_amount"),
            current_amount: parse_decimal(&db.current_amount, "current_amount"),
            id: db.id,
            investment_type: db.investment_type,
            provider_broker: db.provider_broker,
            external_id: db.external_id,
            scheme_code: db.scheme_code,
            scheme_name: db.scheme_name,
            purchased_date: db.purchased_date,
            maturity_date: db.maturity_date,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}
