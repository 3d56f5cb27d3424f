use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use serde::Serialize;

use crate::main_lib::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SyncResponse {
    success: bool,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    created_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    updated_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    total_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    failed_ids: Option<Vec<String>>,
}

/// Manual trigger. Runs even when the scheduled sync is disabled.
async fn sync_icicidirect(State(state): State<Arc<AppState>>) -> (StatusCode, Json<SyncResponse>) {
    match state.icicidirect_sync.run_sync().await {
        Ok(result) => (
            StatusCode::OK,
            Json(SyncResponse {
                success: true,
                message: "Successfully synced mutual fund investments".to_string(),
                created_count: Some(result.created),
                updated_count: Some(result.updated),
                total_count: Some(result.total),
                failed_ids: Some(result.failed_ids),
            }),
        ),
        Err(err) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(SyncResponse {
                success: false,
                message: format!("Failed to sync: {}", err),
                created_count: None,
                updated_count: None,
                total_count: None,
                failed_ids: None,
            }),
        ),
    }
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/icicidirect/sync", post(sync_icicidirect))
}
