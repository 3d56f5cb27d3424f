use std::fmt;
use std::time::Duration;

use super::errors::{SyncError, SyncResult};

/// Cron expression of the default nightly run (02:00 every day).
pub const DEFAULT_SYNC_CRON: &str = "0 0 2 * * ?";

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// SIP status filter sent with the SIP book request ("A" = active).
pub const DEFAULT_STATUS_FILTER: &str = "A";

/// Credentials and sync settings for the ICICIDirect integration.
#[derive(Clone)]
pub struct IcicidirectConfig {
    pub base_url: String,
    pub app_key: String,
    pub client_secret: String,
    pub user_id: String,
    pub password: String,
    pub sync_enabled: bool,
    pub sync_cron: String,
    pub timeout: Duration,
}

impl Default for IcicidirectConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            app_key: String::new(),
            client_secret: String::new(),
            user_id: String::new(),
            password: String::new(),
            sync_enabled: false,
            sync_cron: DEFAULT_SYNC_CRON.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

// Secrets stay out of logs.
impl fmt::Debug for IcicidirectConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IcicidirectConfig")
            .field("base_url", &self.base_url)
            .field("app_key", &"***")
            .field("client_secret", &"***")
            .field("user_id", &self.user_id)
            .field("password", &"***")
            .field("sync_enabled", &self.sync_enabled)
            .field("sync_cron", &self.sync_cron)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl IcicidirectConfig {
    /// Names of required settings that are blank.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("base_url", &self.base_url),
            ("app_key", &self.app_key),
            ("client_secret", &self.client_secret),
            ("user_id", &self.user_id),
            ("password", &self.password),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// Fails with a configuration error when a credential is missing or the
    /// base URL is not an http(s) URL.
    pub fn ensure_complete(&self) -> SyncResult<()> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(SyncError::Configuration(format!(
                "missing ICICIDirect settings: {}",
                missing.join(", ")
            )));
        }
        let url = reqwest::Url::parse(&self.base_url).map_err(|e| {
            SyncError::Configuration(format!("invalid base URL '{}': {}", self.base_url, e))
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(SyncError::Configuration(format!(
                "unsupported base URL scheme '{}'",
                url.scheme()
            )));
        }
        Ok(())
    }
}
