//! Entry points of the ICICIDirect sync: the manual trigger and the scheduled run.

use std::sync::Arc;

use fintrack_core::investments::InvestmentRepositoryTrait;
use log::{debug, error, info, warn};
use tokio::sync::Mutex;

use super::client::IcicidirectClient;
use super::clock::SystemClock;
use super::config::IcicidirectConfig;
use super::errors::{SyncError, SyncResult};
use super::fetcher::RemoteHoldingsFetcher;
use super::models::SyncRunResult;
use super::service::ReconciliationEngine;
use super::session::SessionAuthenticator;
use super::traits::{Clock, HoldingsSource};

/// Runs fetch + reconcile passes, one at a time per process.
pub struct SyncOrchestrator {
    source: Arc<dyn HoldingsSource>,
    engine: ReconciliationEngine,
    sync_enabled: bool,
    run_lock: Mutex<()>,
}

impl SyncOrchestrator {
    pub fn new(
        source: Arc<dyn HoldingsSource>,
        engine: ReconciliationEngine,
        sync_enabled: bool,
    ) -> Self {
        Self {
            source,
            engine,
            sync_enabled,
            run_lock: Mutex::new(()),
        }
    }

    /// Wires the HTTP client, session and fetcher for `config`.
    pub fn from_config(
        config: IcicidirectConfig,
        repository: Arc<dyn InvestmentRepositoryTrait>,
    ) -> SyncResult<Self> {
        let clock: Arc<dyn Clock> = Arc::new(SystemClock);
        let client = Arc::new(IcicidirectClient::new(&config)?);
        let sync_enabled = config.sync_enabled;
        let session = Arc::new(SessionAuthenticator::new(
            config,
            client.clone(),
            clock.clone(),
        ));
        let fetcher = RemoteHoldingsFetcher::new(client, session, clock);
        Ok(Self::new(
            Arc::new(fetcher),
            ReconciliationEngine::new(repository),
            sync_enabled,
        ))
    }

    pub fn is_enabled(&self) -> bool {
        self.sync_enabled
    }

    /// Manual trigger. Runs regardless of the enabled flag.
    pub async fn run_sync(&self) -> SyncResult<SyncRunResult> {
        let _guard = self.run_lock.lock().await;
        info!("Starting ICICIDirect mutual fund sync...");

        match self.run_once().await {
            Ok(result) => Ok(result),
            Err(err) => {
                error!("Error during ICICIDirect sync: {}", err);
                if matches!(err, SyncError::FetchFailed(_)) {
                    self.source.reset_session().await;
                }
                Err(SyncError::SyncFailed(err.to_string()))
            }
        }
    }

    /// Scheduled trigger. A no-op when sync is disabled; failures are logged
    /// and reported as an empty result.
    pub async fn run_scheduled_sync(&self) -> SyncRunResult {
        if !self.sync_enabled {
            debug!("ICICIDirect sync is disabled");
            return SyncRunResult::default();
        }

        info!("Starting scheduled ICICIDirect mutual fund sync...");
        match self.run_sync().await {
            Ok(result) => {
                info!(
                    "Scheduled sync completed. Synced {} investments",
                    result.total
                );
                result
            }
            Err(err) => {
                error!("Error during scheduled sync: {}", err);
                SyncRunResult::default()
            }
        }
    }

    async fn run_once(&self) -> SyncResult<SyncRunResult> {
        let book = self.source.fetch_holdings(None).await?;
        if book.is_empty() {
            warn!("No mutual fund SIPs found");
            return Ok(SyncRunResult::default());
        }
        Ok(self.engine.reconcile(book).await)
    }
}
