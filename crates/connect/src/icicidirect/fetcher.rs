use std::sync::Arc;

use async_trait::async_trait;
use log::{error, info, warn};

use super::checksum::format_timestamp;
use super::client::{IcicidirectClient, SIP_BOOK_PATH};
use super::config::DEFAULT_STATUS_FILTER;
use super::errors::{SyncError, SyncResult};
use super::models::{is_success, SipBook, SipBookPayload, SipBookResponse, UNKNOWN_ERROR};
use super::session::SessionAuthenticator;
use super::traits::{Clock, HoldingsSource};

/// Reads the mutual-fund SIP book of the configured account.
pub struct RemoteHoldingsFetcher {
    client: Arc<IcicidirectClient>,
    session: Arc<SessionAuthenticator>,
    clock: Arc<dyn Clock>,
}

impl RemoteHoldingsFetcher {
    pub fn new(
        client: Arc<IcicidirectClient>,
        session: Arc<SessionAuthenticator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            client,
            session,
            clock,
        }
    }
}

#[async_trait]
impl HoldingsSource for RemoteHoldingsFetcher {
    async fn fetch_holdings(&self, status_filter: Option<&str>) -> SyncResult<SipBook> {
        let token = self.session.get_session_token().await?;
        let payload = SipBookPayload {
            session_token: &token,
            user_id: self.session.user_id(),
            order_sip_status: status_filter.unwrap_or(DEFAULT_STATUS_FILTER),
        };
        let request = self
            .client
            .signed_request(&payload, format_timestamp(self.clock.now()))?;

        let response: SipBookResponse = self
            .client
            .post(SIP_BOOK_PATH, &request)
            .await
            .map_err(|cause| {
                warn!("ICICIDirect SIP book request failed: {}", cause);
                SyncError::FetchFailed(UNKNOWN_ERROR.to_string())
            })?;

        if !is_success(response.status.as_deref()) {
            let message = response
                .message
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| UNKNOWN_ERROR.to_string());
            error!("Failed to fetch SIP data: {}", message);
            return Err(SyncError::FetchFailed(message));
        }

        let book = SipBook::from_elements(response.data.unwrap_or_default());
        for rejected in &book.rejected {
            warn!("Unreadable SIP record {}: {}", rejected.label, rejected.reason);
        }
        info!(
            "Successfully fetched {} SIP records from ICICIDirect",
            book.len()
        );
        Ok(book)
    }

    async fn reset_session(&self) {
        self.session.invalidate_token().await;
    }
}
