//! Reconciliation of remote SIP records into the investment store.

use std::sync::Arc;

use fintrack_core::investments::InvestmentRepositoryTrait;
use log::{debug, error, info};

use super::errors::{SyncError, SyncResult};
use super::mapping;
use super::models::{RemoteSip, SipBook, SyncRunResult};
use super::PROVIDER_NAME;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RecordOutcome {
    Created,
    Updated,
}

/// Upserts remote SIPs by `(sip_id, provider)`, one record at a time.
pub struct ReconciliationEngine {
    repository: Arc<dyn InvestmentRepositoryTrait>,
}

impl ReconciliationEngine {
    pub fn new(repository: Arc<dyn InvestmentRepositoryTrait>) -> Self {
        Self { repository }
    }

    /// Stores every record it can. A failing or unreadable record is logged
    /// and reported in `failed_ids`; it never aborts the batch.
    pub async fn reconcile(&self, book: impl Into<SipBook>) -> SyncRunResult {
        let book = book.into();
        if book.is_empty() {
            return SyncRunResult::default();
        }

        let mut outcomes = Vec::with_capacity(book.len());
        for sip in book.records {
            outcomes.push(self.reconcile_one(sip).await);
        }
        outcomes.extend(
            book.rejected
                .into_iter()
                .map(|rejected| Err(record_failure(rejected.label, rejected.reason))),
        );

        let result = outcomes
            .into_iter()
            .fold(SyncRunResult::default(), |mut acc, outcome| {
                match outcome {
                    Ok(RecordOutcome::Created) => {
                        acc.created += 1;
                        acc.total += 1;
                    }
                    Ok(RecordOutcome::Updated) => {
                        acc.updated += 1;
                        acc.total += 1;
                    }
                    Err(SyncError::Record { external_id, message }) => {
                        error!("Error syncing SIP {}: {}", external_id, message);
                        acc.failed_ids.push(external_id);
                    }
                    Err(other) => error!("Error syncing SIP: {}", other),
                }
                acc
            });

        info!(
            "ICICIDirect sync completed. Created: {}, Updated: {}, Total: {}, Failed: {}",
            result.created,
            result.updated,
            result.total,
            result.failed_ids.len()
        );
        result
    }

    async fn reconcile_one(&self, sip: RemoteSip) -> SyncResult<RecordOutcome> {
        let sip_id = match sip.sip_id.clone().filter(|id| !id.trim().is_empty()) {
            Some(id) => id,
            None => {
                let label = sip
                    .scheme_name
                    .clone()
                    .unwrap_or_else(|| "unknown".to_string());
                return Err(record_failure(label, "SIP id is missing"));
            }
        };

        let existing = self
            .repository
            .find_by_external_id_and_provider(&sip_id, PROVIDER_NAME)
            .map_err(|e| record_failure(sip_id.clone(), e))?;
        let outcome = if existing.is_some() {
            RecordOutcome::Updated
        } else {
            RecordOutcome::Created
        };

        let record = mapping::to_new_investment(sip, &sip_id, existing.as_ref());
        debug!(
            "{} investment for SIP {} ({})",
            if outcome == RecordOutcome::Created { "Creating" } else { "Updating" },
            sip_id,
            record.scheme_name.as_deref().unwrap_or("-")
        );
        record
            .validate_synced()
            .map_err(|e| record_failure(sip_id.clone(), e))?;
        self.repository
            .save(record)
            .await
            .map_err(|e| record_failure(sip_id, e))?;

        Ok(outcome)
    }
}

fn record_failure(external_id: String, cause: impl ToString) -> SyncError {
    SyncError::Record {
        external_id,
        message: cause.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icicidirect::test_support::{sip, InMemoryInvestmentRepository};
    use chrono::NaiveDate;
    use fintrack_core::investments::Investment;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use serde_json::json;
    use std::sync::atomic::Ordering;

    fn engine() -> (ReconciliationEngine, Arc<InMemoryInvestmentRepository>) {
        let repo = Arc::new(InMemoryInvestmentRepository::default());
        (ReconciliationEngine::new(repo.clone()), repo)
    }

    #[tokio::test]
    async fn test_first_run_creates_every_record() {
        let (engine, repo) = engine();

        let result = engine
            .reconcile(vec![sip("S1", 1000, 1100), sip("S2", 2000, 1900)])
            .await;

        assert_eq!(
            result,
            SyncRunResult {
                created: 2,
                updated: 0,
                total: 2,
                failed_ids: vec![],
            }
        );
        assert_eq!(repo.rows().len(), 2);
    }

    #[tokio::test]
    async fn test_second_run_is_idempotent() {
        let (engine, repo) = engine();
        let records = vec![sip("S1", 1000, 1100), sip("S2", 2000, 1900)];

        engine.reconcile(records.clone()).await;
        let second = engine.reconcile(records).await;

        assert_eq!(second.created, 0);
        assert_eq!(second.updated, 2);
        assert_eq!(second.total, 2);
        assert_eq!(repo.rows().len(), 2);
    }

    #[tokio::test]
    async fn test_match_overwrites_fields_and_keeps_identity() {
        let (engine, repo) = engine();
        let ts = NaiveDate::from_ymd_opt(2025, 6, 1)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap();
        repo.insert(Investment {
            id: "inv-existing".to_string(),
            investment_type: "Mutual Fund".to_string(),
            provider_broker: "ICICIDirect".to_string(),
            investment_amount: dec!(500),
            current_amount: dec!(480),
            external_id: Some("S1".to_string()),
            scheme_code: Some("OLD".to_string()),
            scheme_name: Some("Old scheme".to_string()),
            purchased_date: NaiveDate::from_ymd_opt(2025, 6, 1),
            maturity_date: None,
            created_at: ts,
            updated_at: ts,
        });

        let result = engine.reconcile(vec![sip("S1", 750, 900)]).await;

        assert_eq!(result.updated, 1);
        let rows = repo.rows();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, "inv-existing");
        assert_eq!(rows[0].investment_amount, dec!(750));
        assert_eq!(rows[0].current_amount, dec!(900));
        assert_eq!(rows[0].scheme_code.as_deref(), Some("PS1"));
        assert_eq!(rows[0].purchased_date, NaiveDate::from_ymd_opt(2025, 6, 1));
        assert_eq!(rows[0].created_at, ts);
    }

    #[tokio::test]
    async fn test_same_external_id_from_other_provider_is_not_matched() {
        let (engine, repo) = engine();
        let ts = NaiveDate::from_ymd_opt(2025, 6, 1)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap();
        repo.insert(Investment {
            id: "inv-other".to_string(),
            investment_type: "Mutual Fund".to_string(),
            provider_broker: "Zerodha".to_string(),
            investment_amount: dec!(500),
            current_amount: dec!(500),
            external_id: Some("S1".to_string()),
            scheme_code: None,
            scheme_name: None,
            purchased_date: None,
            maturity_date: None,
            created_at: ts,
            updated_at: ts,
        });

        let result = engine.reconcile(vec![sip("S1", 750, 900)]).await;

        assert_eq!(result.created, 1);
        assert_eq!(repo.rows().len(), 2);
    }

    #[tokio::test]
    async fn test_missing_amounts_are_stored_as_zero() {
        let (engine, repo) = engine();
        let mut record = sip("S1", 0, 0);
        record.sip_amount = None;
        record.current_value = None;

        let result = engine.reconcile(vec![record]).await;

        assert_eq!(result.total, 1);
        let rows = repo.rows();
        assert_eq!(rows[0].investment_amount, Decimal::ZERO);
        assert_eq!(rows[0].current_amount, Decimal::ZERO);
    }

    #[tokio::test]
    async fn test_failing_record_does_not_abort_batch() {
        let (engine, repo) = engine();
        let mut bad = sip("S2", 0, 0);
        bad.sip_amount = Some(dec!(-10));

        let result = engine
            .reconcile(vec![sip("S1", 100, 100), bad, sip("S3", 300, 300)])
            .await;

        assert_eq!(result.total, 2);
        assert_eq!(result.created, 2);
        assert_eq!(result.failed_ids, vec!["S2".to_string()]);
        let ids: Vec<_> = repo
            .rows()
            .into_iter()
            .filter_map(|i| i.external_id)
            .collect();
        assert_eq!(ids, vec!["S1".to_string(), "S3".to_string()]);
    }

    #[tokio::test]
    async fn test_record_without_sip_id_fails() {
        let (engine, repo) = engine();
        let mut anonymous = sip("S9", 100, 100);
        anonymous.sip_id = None;

        let result = engine.reconcile(vec![anonymous]).await;

        assert_eq!(result.total, 0);
        assert_eq!(result.failed_ids, vec!["Scheme S9".to_string()]);
        assert!(repo.rows().is_empty());
    }

    #[tokio::test]
    async fn test_unreadable_element_is_reported_with_the_rest_stored() {
        let (engine, repo) = engine();
        let book = SipBook::from_elements(vec![
            json!({ "sip_id": "S1", "scheme_name": "Scheme S1", "sip_amount": "100" }),
            json!({ "sip_id": "S2", "sip_amount": "", "current_value": 250.5 }),
            json!({ "sip_id": "S3", "sip_amount": [1, 2] }),
            json!({ "scheme_name": "Gilt Fund", "current_value": true }),
        ]);

        let result = engine.reconcile(book).await;

        assert_eq!(result.created, 2);
        assert_eq!(result.total, 2);
        assert_eq!(
            result.failed_ids,
            vec!["S3".to_string(), "Gilt Fund".to_string()]
        );
        let rows = repo.rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].investment_amount, Decimal::ZERO);
        assert_eq!(rows[1].current_amount, dec!(250.5));
    }

    #[tokio::test]
    async fn test_empty_input_does_not_touch_store() {
        let (engine, repo) = engine();

        let result = engine.reconcile(SipBook::default()).await;

        assert_eq!(result, SyncRunResult::default());
        assert_eq!(repo.calls.load(Ordering::SeqCst), 0);
    }
}
