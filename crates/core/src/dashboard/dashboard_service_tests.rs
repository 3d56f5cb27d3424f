//! Unit tests for the dashboard service.

use super::*;
use crate::assets::{Asset, AssetRepositoryTrait, NewAsset};
use crate::errors::Result;
use crate::investments::{Investment, InvestmentRepositoryTrait, NewInvestment};
use crate::liabilities::{Liability, LiabilityRepositoryTrait, NewLiability};
use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::sync::Arc;

fn ts() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, 31)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

fn asset(id: &str, value: Decimal) -> Asset {
    Asset {
        id: id.to_string(),
        name: format!("Asset {}", id),
        asset_type: "Cash".to_string(),
        value,
        description: None,
        created_at: ts(),
        updated_at: ts(),
    }
}

fn investment(id: &str, invested: Decimal, current: Decimal) -> Investment {
    Investment {
        id: id.to_string(),
        investment_type: "Mutual Fund".to_string(),
        provider_broker: "ICICIDirect".to_string(),
        investment_amount: invested,
        current_amount: current,
        external_id: None,
        scheme_code: None,
        scheme_name: None,
        purchased_date: None,
        maturity_date: None,
        created_at: ts(),
        updated_at: ts(),
    }
}

fn liability(id: &str, amount: Decimal) -> Liability {
    Liability {
        id: id.to_string(),
        name: format!("Loan {}", id),
        liability_type: "Home Loan".to_string(),
        amount,
        description: None,
        created_at: ts(),
        updated_at: ts(),
    }
}

// ============================================================================
// Mock Implementations
// ============================================================================

struct MockAssetRepository(Vec<Asset>);

#[async_trait]
impl AssetRepositoryTrait for MockAssetRepository {
    fn list(&self) -> Result<Vec<Asset>> {
        Ok(self.0.clone())
    }
    fn get_by_id(&self, _asset_id: &str) -> Result<Option<Asset>> {
        unimplemented!()
    }
    async fn create(&self, _new_asset: NewAsset) -> Result<Asset> {
        unimplemented!()
    }
    async fn update(&self, _asset_id: &str, _changes: NewAsset) -> Result<Asset> {
        unimplemented!()
    }
    async fn delete(&self, _asset_id: &str) -> Result<usize> {
        unimplemented!()
    }
}

struct MockInvestmentRepository(Vec<Investment>);

#[async_trait]
impl InvestmentRepositoryTrait for MockInvestmentRepository {
    fn list(&self) -> Result<Vec<Investment>> {
        Ok(self.0.clone())
    }
    fn get_by_id(&self, _investment_id: &str) -> Result<Option<Investment>> {
        unimplemented!()
    }
    fn find_by_external_id_and_provider(
        &self,
        _external_id: &str,
        _provider_broker: &str,
    ) -> Result<Option<Investment>> {
        unimplemented!()
    }
    async fn save(&self, _investment: NewInvestment) -> Result<Investment> {
        unimplemented!()
    }
    async fn delete(&self, _investment_id: &str) -> Result<usize> {
        unimplemented!()
    }
}

struct MockLiabilityRepository(Vec<Liability>);

#[async_trait]
impl LiabilityRepositoryTrait for MockLiabilityRepository {
    fn list(&self) -> Result<Vec<Liability>> {
        Ok(self.0.clone())
    }
    fn get_by_id(&self, _liability_id: &str) -> Result<Option<Liability>> {
        unimplemented!()
    }
    async fn create(&self, _new_liability: NewLiability) -> Result<Liability> {
        unimplemented!()
    }
    async fn update(&self, _liability_id: &str, _changes: NewLiability) -> Result<Liability> {
        unimplemented!()
    }
    async fn delete(&self, _liability_id: &str) -> Result<usize> {
        unimplemented!()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[test]
fn test_summary_counts_investments_at_current_amount() {
    let service = DashboardService::new(
        Arc::new(MockAssetRepository(vec![
            asset("a1", dec!(250000)),
            asset("a2", dec!(15000.50)),
        ])),
        Arc::new(MockInvestmentRepository(vec![investment(
            "i1",
            dec!(60000),
            dec!(72500.25),
        )])),
        Arc::new(MockLiabilityRepository(vec![liability("l1", dec!(100000))])),
    );

    let summary = service.get_summary().unwrap();

    assert_eq!(summary.total_assets, dec!(265000.50));
    assert_eq!(summary.total_investments, dec!(72500.25));
    assert_eq!(summary.total_assets_with_investments, dec!(337500.75));
    assert_eq!(summary.total_liabilities, dec!(100000));
    assert_eq!(summary.net_worth, dec!(237500.75));
    assert_eq!(summary.asset_count, 2);
    assert_eq!(summary.investment_count, 1);
    assert_eq!(summary.liability_count, 1);
}

#[test]
fn test_summary_of_nothing_is_zero() {
    assert_eq!(summarize(&[], &[], &[]), DashboardSummary::default());
}

#[test]
fn test_net_worth_can_be_negative() {
    let summary = summarize(&[asset("a1", dec!(10))], &[], &[liability("l1", dec!(25))]);
    assert_eq!(summary.net_worth, dec!(-15));
}

proptest! {
    #[test]
    fn prop_net_worth_is_assets_plus_investments_minus_liabilities(
        asset_cents in proptest::collection::vec(0i64..1_000_000_000, 0..8),
        investment_cents in proptest::collection::vec(0i64..1_000_000_000, 0..8),
        liability_cents in proptest::collection::vec(0i64..1_000_000_000, 0..8),
    ) {
        let assets: Vec<Asset> = asset_cents
            .iter()
            .enumerate()
            .map(|(i, c)| asset(&i.to_string(), Decimal::new(*c, 2)))
            .collect();
        let investments: Vec<Investment> = investment_cents
            .iter()
            .enumerate()
            .map(|(i, c)| investment(&i.to_string(), Decimal::ONE, Decimal::new(*c, 2)))
            .collect();
        let liabilities: Vec<Liability> = liability_cents
            .iter()
            .enumerate()
            .map(|(i, c)| liability(&i.to_string(), Decimal::new(*c, 2)))
            .collect();

        let summary = summarize(&assets, &investments, &liabilities);

        let expected = Decimal::new(asset_cents.iter().sum::<i64>(), 2)
            + Decimal::new(investment_cents.iter().sum::<i64>(), 2)
            - Decimal::new(liability_cents.iter().sum::<i64>(), 2);
        prop_assert_eq!(summary.net_worth, expected);
        prop_assert_eq!(summary.investment_count, investments.len());
    }
}
