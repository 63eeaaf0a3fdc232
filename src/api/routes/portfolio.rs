//! Portfolio Routes
//!
//! Read-only endpoints consumed by the dashboard.
//!
//! - GET /portfolio - All assets, in portfolio order
//! - GET /alerts - Risk alert messages
//! - GET /asset/:id - One asset with its transaction history

use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::model::{Asset, AssetDetails};

/// GET /portfolio
pub async fn list_portfolio(State(state): State<Arc<AppState>>) -> Json<Vec<Asset>> {
    Json(state.store.portfolio().to_vec())
}

/// GET /alerts
pub async fn list_alerts(State(state): State<Arc<AppState>>) -> Json<Vec<String>> {
    Json(state.store.alerts().to_vec())
}

/// GET /asset/:id
pub async fn get_asset(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<AssetDetails>> {
    state
        .store
        .asset_details(&id)
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("asset {}", id)))
}
