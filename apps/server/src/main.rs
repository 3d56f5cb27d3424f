use fintrack_server::api::app_router;
use fintrack_server::config::Config;
use fintrack_server::{build_state, init_tracing, scheduler};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    init_tracing(config.log_format);
    let state = build_state(&config).await?;

    if state.icicidirect_sync.is_enabled() {
        let schedule = scheduler::parse_schedule(&config.icicidirect.sync_cron)?;
        scheduler::start_icicidirect_sync_scheduler(state.clone(), schedule);
    } else {
        tracing::info!("ICICIDirect scheduled sync is disabled");
    }

    let router = app_router(state, &config);
    tracing::info!("Listening on {}", config.listen_addr);
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    axum::serve(listener, router).await?;
    Ok(())
}
