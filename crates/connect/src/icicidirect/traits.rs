//! Seams of the sync pipeline.

use async_trait::async_trait;
use chrono::{DateTime, Local};

use super::errors::SyncResult;
use super::models::SipBook;

/// Source of time for session expiry and request timestamps.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Local>;
}

/// Something that can list remote SIP holdings.
#[async_trait]
pub trait HoldingsSource: Send + Sync {
    /// Fetch holdings matching `status_filter` ("A" when `None`).
    async fn fetch_holdings(&self, status_filter: Option<&str>) -> SyncResult<SipBook>;

    /// Drop any cached session so the next fetch logs in again.
    async fn reset_session(&self);
}
