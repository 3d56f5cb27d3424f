use std::sync::Arc;

use crate::config::{Config, LogFormat};
use fintrack_connect::SyncOrchestrator;
use fintrack_core::{
    assets::{AssetService, AssetServiceTrait},
    dashboard::{DashboardService, DashboardServiceTrait},
    investments::{InvestmentService, InvestmentServiceTrait},
    liabilities::{LiabilityService, LiabilityServiceTrait},
};
use fintrack_storage_sqlite::{
    db, AssetRepository, InvestmentRepository, LiabilityRepository,
};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub asset_service: Arc<dyn AssetServiceTrait>,
    pub liability_service: Arc<dyn LiabilityServiceTrait>,
    pub investment_service: Arc<dyn InvestmentServiceTrait>,
    pub dashboard_service: Arc<dyn DashboardServiceTrait>,
    pub icicidirect_sync: Arc<SyncOrchestrator>,
}

/// Installs the global subscriber. `log` records from the library crates are
/// forwarded through the subscriber's `tracing-log` bridge.
pub fn init_tracing(log_format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    match log_format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_current_span(false))
            .init(),
        LogFormat::Text => registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init(),
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    db::init(&config.db_path)?;
    tracing::info!("Database path in use: {}", config.db_path);

    let pool = db::create_pool(&config.db_path)?;
    db::run_migrations(&pool)?;
    let writer = db::spawn_writer((*pool).clone());

    let asset_repository = Arc::new(AssetRepository::new(pool.clone(), writer.clone()));
    let liability_repository = Arc::new(LiabilityRepository::new(pool.clone(), writer.clone()));
    let investment_repository = Arc::new(InvestmentRepository::new(pool.clone(), writer.clone()));

    let asset_service = Arc::new(AssetService::new(asset_repository.clone()));
    let liability_service = Arc::new(LiabilityService::new(liability_repository.clone()));
    let investment_service = Arc::new(InvestmentService::new(investment_repository.clone()));
    let dashboard_service = Arc::new(DashboardService::new(
        asset_repository,
        investment_repository.clone(),
        liability_repository,
    ));

    if config.icicidirect.sync_enabled && !config.icicidirect.is_complete() {
        tracing::warn!(
            "ICICIDirect sync is enabled but settings are missing: {}",
            config.icicidirect.missing_fields().join(", ")
        );
    }
    let icicidirect_sync = Arc::new(SyncOrchestrator::from_config(
        config.icicidirect.clone(),
        investment_repository,
    )?);

    Ok(Arc::new(AppState {
        asset_service,
        liability_service,
        investment_service,
        dashboard_service,
        icicidirect_sync,
    }))
}
