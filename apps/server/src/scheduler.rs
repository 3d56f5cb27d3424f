//! Background scheduler for the ICICIDirect mutual fund sync.
//!
//! Fire times come from the configured cron expression (six or seven
//! fields, seconds first). A `?` day field is accepted and treated as `*`.

use std::str::FromStr;
use std::sync::Arc;

use chrono::{DateTime, Local, TimeZone};
use cron::Schedule;
use tokio::time::Duration;
use tracing::{info, warn};

use crate::main_lib::AppState;

pub fn parse_schedule(expression: &str) -> Result<Schedule, cron::error::Error> {
    Schedule::from_str(&expression.trim().replace('?', "*"))
}

/// Time left until `next`, zero if it already passed.
fn delay_until<Tz: TimeZone>(next: &DateTime<Tz>, now: &DateTime<Tz>) -> Duration {
    next.clone()
        .signed_duration_since(now.clone())
        .to_std()
        .unwrap_or(Duration::ZERO)
}

/// Starts the background sync task.
pub fn start_icicidirect_sync_scheduler(state: Arc<AppState>, schedule: Schedule) {
    tokio::spawn(async move {
        info!("ICICIDirect sync scheduler started");

        loop {
            let Some(next) = schedule.upcoming(Local).next() else {
                warn!("ICICIDirect sync schedule has no upcoming fire time; scheduler stopped");
                return;
            };
            info!("Next ICICIDirect sync at {}", next);
            tokio::time::sleep(delay_until(&next, &Local::now())).await;

            let result = state.icicidirect_sync.run_scheduled_sync().await;
            info!(
                "Scheduled ICICIDirect sync finished: {} created, {} updated, {} failed",
                result.created,
                result.updated,
                result.failed_ids.len()
            );
        }
    });
}
