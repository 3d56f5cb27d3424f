//! Shared fixtures for the sync pipeline tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Local, TimeZone, Utc};
use fintrack_core::investments::{Investment, InvestmentRepositoryTrait, NewInvestment};
use fintrack_core::Result;

use super::config::IcicidirectConfig;
use super::errors::{SyncError, SyncResult};
use super::models::{RemoteSip, SipBook};
use super::traits::{Clock, HoldingsSource};

pub(crate) fn test_config(base_url: &str) -> IcicidirectConfig {
    IcicidirectConfig {
        base_url: base_url.to_string(),
        app_key: "app-key".to_string(),
        client_secret: "client-secret".to_string(),
        user_id: "TESTUSER".to_string(),
        password: "hunter2".to_string(),
        ..Default::default()
    }
}

pub(crate) struct MockClock {
    now: Mutex<DateTime<Local>>,
}

impl Default for MockClock {
    fn default() -> Self {
        let start = Utc
            .with_ymd_and_hms(2026, 10, 14, 2, 0, 0)
            .unwrap()
            .with_timezone(&Local);
        Self {
            now: Mutex::new(start),
        }
    }
}

impl MockClock {
    pub(crate) fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap();
        *now += by;
    }
}

impl Clock for MockClock {
    fn now(&self) -> DateTime<Local> {
        *self.now.lock().unwrap()
    }
}

pub(crate) fn sip(sip_id: &str, amount: i64, current: i64) -> RemoteSip {
    RemoteSip {
        scheme_name: Some(format!("Scheme {}", sip_id)),
        scheme_code: Some(format!("P{}", sip_id)),
        sip_amount: Some(amount.into()),
        current_value: Some(current.into()),
        sip_id: Some(sip_id.to_string()),
        transaction_date: Some("05-Oct-2026".to_string()),
        order_sip_status: Some("A".to_string()),
    }
}

/// In-memory investment store that counts every call it receives.
#[derive(Default)]
pub(crate) struct InMemoryInvestmentRepository {
    rows: Mutex<Vec<Investment>>,
    next_id: AtomicUsize,
    pub(crate) calls: AtomicUsize,
}

impl InMemoryInvestmentRepository {
    pub(crate) fn rows(&self) -> Vec<Investment> {
        self.rows.lock().unwrap().clone()
    }

    pub(crate) fn insert(&self, investment: Investment) {
        self.rows.lock().unwrap().push(investment);
    }
}

#[async_trait]
impl InvestmentRepositoryTrait for InMemoryInvestmentRepository {
    fn list(&self) -> Result<Vec<Investment>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.rows())
    }

    fn get_by_id(&self, investment_id: &str) -> Result<Option<Investment>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.rows().into_iter().find(|i| i.id == investment_id))
    }

    fn find_by_external_id_and_provider(
        &self,
        external_id: &str,
        provider_broker: &str,
    ) -> Result<Option<Investment>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.rows().into_iter().find(|i| {
            i.external_id.as_deref() == Some(external_id) && i.provider_broker == provider_broker
        }))
    }

    async fn save(&self, investment: NewInvestment) -> Result<Investment> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let now = Utc::now().naive_utc();
        let mut rows = self.rows.lock().unwrap();
        let position = investment
            .id
            .as_ref()
            .and_then(|id| rows.iter().position(|i| &i.id == id));
        let (id, created_at) = match position {
            Some(idx) => (rows[idx].id.clone(), rows[idx].created_at),
            None => (
                format!("inv-{}", self.next_id.fetch_add(1, Ordering::SeqCst) + 1),
                now,
            ),
        };
        let saved = Investment {
            id,
            investment_type: investment.investment_type,
            provider_broker: investment.provider_broker,
            investment_amount: investment.investment_amount,
            current_amount: investment.current_amount,
            external_id: investment.external_id,
            scheme_code: investment.scheme_code,
            scheme_name: investment.scheme_name,
            purchased_date: investment.purchased_date,
            maturity_date: investment.maturity_date,
            created_at,
            updated_at: now,
        };
        match position {
            Some(idx) => rows[idx] = saved.clone(),
            None => rows.push(saved.clone()),
        }
        Ok(saved)
    }

    async fn delete(&self, investment_id: &str) -> Result<usize> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|i| i.id != investment_id);
        Ok(before - rows.len())
    }
}

/// Holdings source returning a canned response.
pub(crate) struct StaticHoldingsSource {
    response: SyncResult<SipBook>,
    pub(crate) fetches: AtomicUsize,
    pub(crate) resets: AtomicUsize,
}

impl StaticHoldingsSource {
    pub(crate) fn returning(records: Vec<RemoteSip>) -> Self {
        Self::with_response(Ok(records.into()))
    }

    pub(crate) fn failing(error: SyncError) -> Self {
        Self::with_response(Err(error))
    }

    pub(crate) fn with_response(response: SyncResult<SipBook>) -> Self {
        Self {
            response,
            fetches: AtomicUsize::new(0),
            resets: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl HoldingsSource for StaticHoldingsSource {
    async fn fetch_holdings(&self, _status_filter: Option<&str>) -> SyncResult<SipBook> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        self.response.clone()
    }

    async fn reset_session(&self) {
        self.resets.fetch_add(1, Ordering::SeqCst);
    }
}
