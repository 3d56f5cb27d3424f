use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Response,
    routing::get,
    Json, Router,
};
use fintrack_core::assets::{Asset, NewAsset};
use fintrack_core::export::export_assets_csv;

use super::csv_attachment;
use crate::{error::ApiResult, main_lib::AppState};

async fn list_assets(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Asset>>> {
    Ok(Json(state.asset_service.get_assets()?))
}

async fn get_asset(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<Asset>> {
    Ok(Json(state.asset_service.get_asset(&id)?))
}

async fn create_asset(
    State(state): State<Arc<AppState>>,
    Json(asset): Json<NewAsset>,
) -> ApiResult<(StatusCode, Json<Asset>)> {
    let created = state.asset_service.create_asset(asset).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn update_asset(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(asset): Json<NewAsset>,
) -> ApiResult<Json<Asset>> {
    Ok(Json(state.asset_service.update_asset(&id, asset).await?))
}

async fn delete_asset(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    state.asset_service.delete_asset(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn export_assets(State(state): State<Arc<AppState>>) -> ApiResult<Response> {
    let assets = state.asset_service.get_assets()?;
    Ok(csv_attachment("assets_export.csv", export_assets_csv(&assets)?))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/assets", get(list_assets).post(create_asset))
        .route("/assets/export", get(export_assets))
        .route(
            "/assets/{id}",
            get(get_asset).put(update_asset).delete(delete_asset),
        )
}
