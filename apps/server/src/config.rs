use std::{net::SocketAddr, time::Duration};

use anyhow::{anyhow, Context};
use fintrack_connect::icicidirect::{DEFAULT_SYNC_CRON, DEFAULT_TIMEOUT_SECS};
use fintrack_connect::IcicidirectConfig;

use crate::scheduler::parse_schedule;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

pub struct Config {
    pub listen_addr: SocketAddr,
    pub db_path: String,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    pub log_format: LogFormat,
    pub icicidirect: IcicidirectConfig,
}

impl Config {
    /// Reads `FT_*` variables, loading `.env` first when present.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let listen_addr: SocketAddr = var("FT_LISTEN_ADDR", "0.0.0.0:8080")
            .parse()
            .context("Invalid FT_LISTEN_ADDR")?;
        let db_path = var("FT_DB_PATH", "./db/app.db");
        let cors_allow = var("FT_CORS_ALLOW_ORIGINS", "*")
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let timeout_ms: u64 = var("FT_REQUEST_TIMEOUT_MS", "30000")
            .parse()
            .context("Invalid FT_REQUEST_TIMEOUT_MS")?;
        let log_format = parse_log_format(&var("FT_LOG_FORMAT", "text"))?;

        let sync_cron = var("FT_ICICIDIRECT_SYNC_CRON", DEFAULT_SYNC_CRON);
        parse_schedule(&sync_cron).context("Invalid FT_ICICIDIRECT_SYNC_CRON")?;
        let timeout_secs: u64 = var(
            "FT_ICICIDIRECT_TIMEOUT_SECS",
            &DEFAULT_TIMEOUT_SECS.to_string(),
        )
        .parse()
        .context("Invalid FT_ICICIDIRECT_TIMEOUT_SECS")?;

        let icicidirect = IcicidirectConfig {
            base_url: var("FT_ICICIDIRECT_BASE_URL", ""),
            app_key: var("FT_ICICIDIRECT_APP_KEY", ""),
            client_secret: var("FT_ICICIDIRECT_CLIENT_SECRET", ""),
            user_id: var("FT_ICICIDIRECT_USER_ID", ""),
            password: var("FT_ICICIDIRECT_PASSWORD", ""),
            sync_enabled: parse_bool(
                "FT_ICICIDIRECT_SYNC_ENABLED",
                &var("FT_ICICIDIRECT_SYNC_ENABLED", "false"),
            )?,
            sync_cron,
            timeout: Duration::from_secs(timeout_secs),
        };

        Ok(Self {
            listen_addr,
            db_path,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
            log_format,
            icicidirect,
        })
    }
}

fn parse_bool(key: &str, value: &str) -> anyhow::Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" | "" => Ok(false),
        other => Err(anyhow!("Invalid {}: expected true or false, got '{}'", key, other)),
    }
}

fn parse_log_format(value: &str) -> anyhow::Result<LogFormat> {
    match value.trim().to_ascii_lowercase().as_str() {
        "text" => Ok(LogFormat::Text),
        "json" => Ok(LogFormat::Json),
        other => Err(anyhow!(
            "Invalid FT_LOG_FORMAT: expected text or json, got '{}'",
            other
        )),
    }
}
