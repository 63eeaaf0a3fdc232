//! Portfolio REST API
//!
//! HTTP API layer built with Axum. Every endpoint is a read-only view of
//! the [`PortfolioStore`](crate::store::PortfolioStore).
//!
//! # Endpoints
//!
//! - `GET /portfolio` - List all assets
//! - `GET /alerts` - List risk alert messages
//! - `GET /asset/:id` - Asset with its transactions (404 if unknown)
//! - `GET /health` - Service status
//!
//! # Example
//!
//! ```rust,no_run
//! use portfolio_tracker::api::{serve, AppState};
//! use portfolio_tracker::config::ServerConfig;
//! use portfolio_tracker::store::PortfolioStore;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let state = AppState::new(PortfolioStore::seeded()?);
//!     serve(state, &ServerConfig::default()).await?;
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::AppState;

use axum::{routing::get, Router};
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::ServerConfig;

/// Build the API router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let shared_state = Arc::new(state);

    Router::new()
        .route("/portfolio", get(routes::portfolio::list_portfolio))
        .route("/alerts", get(routes::portfolio::list_alerts))
        .route("/asset/:id", get(routes::portfolio::get_asset))
        .route("/health", get(routes::health::health))
        .layer(TraceLayer::new_for_http())
        // The dashboard is served from a different origin
        .layer(CorsLayer::permissive())
        .with_state(shared_state)
}

/// Start the API server
pub async fn serve(state: AppState, config: &ServerConfig) -> Result<(), ApiError> {
    let listener = TcpListener::bind(config.addr()).await?;
    serve_on(listener, state, shutdown_signal()).await
}

/// Serve on an already-bound listener until `shutdown` resolves
pub async fn serve_on<F>(listener: TcpListener, state: AppState, shutdown: F) -> Result<(), ApiError>
where
    F: Future<Output = ()> + Send + 'static,
{
    let router = build_router(state);

    tracing::info!("Portfolio API listening on {}", listener.local_addr()?);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Portfolio API shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::error::ErrorResponse;
    use crate::model::{Asset, AssetDetails, HealthStatus};
    use crate::store::{LedgerEntry, PortfolioStore};
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
        response::Response,
    };
    use serde::de::DeserializeOwned;
    use tower::util::ServiceExt;

    fn create_test_app() -> Router {
        let assets = vec![
            Asset::new("1", "ACME", 10.0, "Tech"),
            Asset::new("2", "Globex", 42.5, "Energy"),
        ];
        let entries = vec![LedgerEntry {
            date: "2024-01-01".to_string(),
            asset_id: "1".to_string(),
            kind: "buy".to_string(),
            quantity: 5.0,
            price: 9.5,
            line: 2,
        }];
        let store = PortfolioStore::from_parts(assets, vec![], entries).unwrap();
        build_router(AppState::new(store))
    }

    async fn get(app: Router, uri: &str) -> Response {
        app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn json<T: DeserializeOwned>(response: Response) -> T {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_portfolio_in_order() {
        let response = get(create_test_app(), "/portfolio").await;
        assert_eq!(response.status(), StatusCode::OK);

        let assets: Vec<Asset> = json(response).await;
        let names: Vec<_> = assets.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["ACME", "Globex"]);
    }

    #[tokio::test]
    async fn test_alerts_empty() {
        let response = get(create_test_app(), "/alerts").await;
        assert_eq!(response.status(), StatusCode::OK);

        let alerts: Vec<String> = json(response).await;
        assert!(alerts.is_empty());
    }

    #[tokio::test]
    async fn test_asset_details() {
        let response = get(create_test_app(), "/asset/1").await;
        assert_eq!(response.status(), StatusCode::OK);

        let details: AssetDetails = json(response).await;
        assert_eq!(details.asset.name, "ACME");
        assert_eq!(details.transactions.len(), 1);
        assert_eq!(details.transactions[0].amount, 5.0);
    }

    #[tokio::test]
    async fn test_asset_without_transactions() {
        let details: AssetDetails = json(get(create_test_app(), "/asset/2").await).await;
        assert!(details.transactions.is_empty());
    }

    #[tokio::test]
    async fn test_unknown_asset() {
        let response = get(create_test_app(), "/asset/404").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body: ErrorResponse = json(response).await;
        assert_eq!(body.error.code, "NOT_FOUND");
        assert!(!body.request_id.is_empty());
    }

    #[tokio::test]
    async fn test_health() {
        let response = get(create_test_app(), "/health").await;
        assert_eq!(response.status(), StatusCode::OK);

        let health: HealthStatus = json(response).await;
        assert_eq!(health.status, "healthy");
        assert_eq!(health.assets, 2);
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let response = get(create_test_app(), "/metrics").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
