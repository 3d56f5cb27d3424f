use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Response,
    routing::get,
    Json, Router,
};
use fintrack_core::export::export_liabilities_csv;
use fintrack_core::liabilities::{Liability, NewLiability};

use super::csv_attachment;
use crate::{error::ApiResult, main_lib::AppState};

async fn list_liabilities(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Liability>>> {
    Ok(Json(state.liability_service.get_liabilities()?))
}

async fn get_liability(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<Liability>> {
    Ok(Json(state.liability_service.get_liability(&id)?))
}

async fn create_liability(
    State(state): State<Arc<AppState>>,
    Json(liability): Json<NewLiability>,
) -> ApiResult<(StatusCode, Json<Liability>)> {
    let created = state.liability_service.create_liability(liability).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn update_liability(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(liability): Json<NewLiability>,
) -> ApiResult<Json<Liability>> {
    Ok(Json(
        state
            .liability_service
            .update_liability(&id, liability)
            .await?,
    ))
}

async fn delete_liability(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    state.liability_service.delete_liability(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn export_liabilities(State(state): State<Arc<AppState>>) -> ApiResult<Response> {
    let liabilities = state.liability_service.get_liabilities()?;
    Ok(csv_attachment(
        "liabilities_export.csv",
        export_liabilities_csv(&liabilities)?,
    ))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/liabilities", get(list_liabilities).post(create_liability))
        .route("/liabilities/export", get(export_liabilities))
        .route(
            "/liabilities/{id}",
            get(get_liability)
                .put(update_liability)
                .delete(delete_liability),
        )
}
