pub mod checksum;
mod client;
mod clock;
mod config;
mod errors;
mod fetcher;
pub mod mapping;
mod models;
mod orchestrator;
mod service;
mod session;
mod traits;

#[cfg(test)]
mod test_support;

pub use client::IcicidirectClient;
pub use clock::SystemClock;
pub use config::{IcicidirectConfig, DEFAULT_STATUS_FILTER, DEFAULT_SYNC_CRON, DEFAULT_TIMEOUT_SECS};
pub use errors::{SyncError, SyncResult};
pub use fetcher::RemoteHoldingsFetcher;
pub use models::*;
pub use orchestrator::SyncOrchestrator;
pub use service::ReconciliationEngine;
pub use session::SessionAuthenticator;
pub use traits::*;

/// Provider name stored on synced investments.
pub const PROVIDER_NAME: &str = "ICICIDirect";
