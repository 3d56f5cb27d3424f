//! Session token lifecycle.
//!
//! A token is obtained through the login call and cached for one hour. It is
//! renewed lazily once fewer than five minutes of its lifetime remain.

use std::sync::Arc;

use chrono::{DateTime, Duration, Local};
use log::{debug, error, info, warn};
use tokio::sync::Mutex;

use super::checksum::format_timestamp;
use super::client::{IcicidirectClient, LOGIN_PATH};
use super::config::IcicidirectConfig;
use super::errors::{SyncError, SyncResult};
use super::models::{is_success, LoginPayload, LoginResponse, UNKNOWN_ERROR};
use super::traits::Clock;

const TOKEN_LIFETIME_MINUTES: i64 = 60;
const RENEWAL_MARGIN_MINUTES: i64 = 5;

#[derive(Debug, Default)]
struct SessionState {
    token: Option<String>,
    expires_at: Option<DateTime<Local>>,
}

impl SessionState {
    fn valid_token(&self, now: DateTime<Local>) -> Option<&str> {
        match (&self.token, self.expires_at) {
            (Some(token), Some(expires_at))
                if now < expires_at - Duration::minutes(RENEWAL_MARGIN_MINUTES) =>
            {
                Some(token.as_str())
            }
            _ => None,
        }
    }
}

pub struct SessionAuthenticator {
    config: IcicidirectConfig,
    client: Arc<IcicidirectClient>,
    clock: Arc<dyn Clock>,
    state: Mutex<SessionState>,
}

impl SessionAuthenticator {
    pub fn new(
        config: IcicidirectConfig,
        client: Arc<IcicidirectClient>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            config,
            client,
            clock,
            state: Mutex::new(SessionState::default()),
        }
    }

    pub fn user_id(&self) -> &str {
        &self.config.user_id
    }

    /// Returns the cached token, logging in first when it is missing or about
    /// to expire. Concurrent callers share a single login.
    pub async fn get_session_token(&self) -> SyncResult<String> {
        let mut state = self.state.lock().await;
        if let Some(token) = state.valid_token(self.clock.now()) {
            return Ok(token.to_string());
        }

        debug!("[IcicidirectApi] No usable session, logging in");
        let token = self.login().await?;
        let expires_at = self.clock.now() + Duration::minutes(TOKEN_LIFETIME_MINUTES);
        state.token = Some(token.clone());
        state.expires_at = Some(expires_at);
        info!(
            "ICICIDirect authentication successful, session valid until {}",
            expires_at.format("%Y-%m-%d %H:%M:%S")
        );
        Ok(token)
    }

    pub async fn invalidate_token(&self) {
        let mut state = self.state.lock().await;
        state.token = None;
        state.expires_at = None;
        debug!("[IcicidirectApi] Session invalidated");
    }

    pub async fn session_expiry(&self) -> Option<DateTime<Local>> {
        self.state.lock().await.expires_at
    }

    async fn login(&self) -> SyncResult<String> {
        self.config.ensure_complete()?;

        let payload = LoginPayload {
            user_id: &self.config.user_id,
            password: &self.config.password,
        };
        let request = self
            .client
            .signed_request(&payload, format_timestamp(self.clock.now()))?;

        let response: LoginResponse = match self.client.post(LOGIN_PATH, &request).await {
            Ok(response) => response,
            Err(cause) => {
                warn!("ICICIDirect login request failed: {}", cause);
                return Err(SyncError::AuthenticationFailed(UNKNOWN_ERROR.to_string()));
            }
        };

        let succeeded = is_success(response.status.as_deref());
        match response.session_token.filter(|t| !t.is_empty()) {
            Some(token) if succeeded => Ok(token),
            _ => {
                let message = response
                    .message
                    .filter(|m| !m.trim().is_empty())
                    .unwrap_or_else(|| UNKNOWN_ERROR.to_string());
                error!("ICICIDirect authentication failed: {}", message);
                Err(SyncError::AuthenticationFailed(message))
            }
        }
    }
}
