use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Response,
    routing::get,
    Json, Router,
};
use fintrack_core::export::export_investments_csv;
use fintrack_core::investments::{Investment, InvestmentUpdate, NewInvestment};

use super::csv_attachment;
use crate::{error::ApiResult, main_lib::AppState};

async fn list_investments(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<Investment>>> {
    Ok(Json(state.investment_service.get_investments()?))
}

async fn get_investment(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<Investment>> {
    Ok(Json(state.investment_service.get_investment(&id)?))
}

async fn create_investment(
    State(state): State<Arc<AppState>>,
    Json(investment): Json<NewInvestment>,
) -> ApiResult<(StatusCode, Json<Investment>)> {
    let created = state
        .investment_service
        .create_investment(investment)
        .await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Only the manually editable fields are accepted; broker-owned fields stay as stored.
async fn update_investment(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(update): Json<InvestmentUpdate>,
) -> ApiResult<Json<Investment>> {
    Ok(Json(
        state
            .investment_service
            .update_investment(&id, update)
            .await?,
    ))
}

async fn delete_investment(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    state.investment_service.delete_investment(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn export_investments(State(state): State<Arc<AppState>>) -> ApiResult<Response> {
    let investments = state.investment_service.get_investments()?;
    Ok(csv_attachment(
        "investments_export.csv",
        export_investments_csv(&investments)?,
    ))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/investments", get(list_investments).post(create_investment))
        .route("/investments/export", get(export_investments))
        .route(
            "/investments/{id}",
            get(get_investment)
                .put(update_investment)
                .delete(delete_investment),
        )
}
