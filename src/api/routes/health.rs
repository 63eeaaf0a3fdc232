//! Health Routes
//!
//! - GET /health - Service status

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::state::AppState;
use crate::model::HealthStatus;

/// GET /health
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.uptime_seconds(),
        assets: state.store.asset_count(),
    })
}
