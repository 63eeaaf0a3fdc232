//! Dashboard Page
//!
//! Portfolio overview: graph placeholder, risk alerts and one card per asset.

use leptos::*;

use crate::api::{ApiClient, ApiError};
use crate::components::{AssetCard, ErrorState, PortfolioGraph, RiskAlerts};
use crate::model::{graph_points, Asset};
use crate::state::LoadState;

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let client = use_context::<ApiClient>().expect("ApiClient not provided");

    let portfolio = create_rw_signal(LoadState::<Vec<Asset>>::Loading);
    let alerts = create_rw_signal(LoadState::<Vec<String>>::Loading);

    // Both requests run concurrently; each slot fills when its own response arrives
    let portfolio_client = client.clone();
    spawn_local(async move {
        let result = portfolio_client.fetch_portfolio().await;
        if let Err(e) = &result {
            log_failure("portfolio", e);
        }
        portfolio.set(LoadState::from_result(result));
    });

    spawn_local(async move {
        let result = client.fetch_risk_alerts().await;
        if let Err(e) = &result {
            log_failure("risk alerts", e);
        }
        alerts.set(LoadState::from_result(result));
    });

    view! {
        <div class="dashboard">
            <h2>"Dashboard"</h2>

            {move || {
                let data = portfolio.with(|p| graph_points(&p.loaded_or_default()));
                view! { <PortfolioGraph data=data /> }
            }}

            {move || match alerts.get() {
                LoadState::Failed(e) => view! {
                    <ErrorState message=format!("Could not load risk alerts: {}", e) />
                }.into_view(),
                state => view! {
                    <RiskAlerts alerts=state.loaded_or_default() />
                }.into_view(),
            }}

            <div class="assets">
                {move || portfolio.with(|p| p.error().cloned()).map(|e| view! {
                    <ErrorState message=format!("Could not load portfolio: {}", e) />
                })}

                <For
                    each=move || portfolio.with(asset_cards)
                    key=|asset| asset.id.clone()
                    children=move |asset: Asset| view! { <AssetCard asset=asset /> }
                />
            </div>
        </div>
    }
}

/// Assets to render as cards, in server order; none until the portfolio loads
pub fn asset_cards(portfolio: &LoadState<Vec<Asset>>) -> Vec<Asset> {
    portfolio.loaded_or_default()
}

fn log_failure(what: &str, error: &ApiError) {
    web_sys::console::error_1(&format!("Failed to fetch {}: {}", what, error).into());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn asset(id: &str, name: &str, price: f64) -> Asset {
        Asset {
            id: id.to_string(),
            name: name.to_string(),
            price,
            sector: "Tech".to_string(),
        }
    }

    #[test]
    fn test_one_card_per_asset_in_order() {
        let portfolio = vec![
            asset("2", "Beta", 2.5),
            asset("1", "ACME", 10.0),
            asset("3", "Gamma", 7.0),
        ];
        let cards = asset_cards(&LoadState::Loaded(portfolio.clone()));

        assert_eq!(cards, portfolio);
        assert_eq!(cards[1].card_price_line(), "Current Price: $10");
    }

    #[test]
    fn test_no_cards_until_loaded() {
        assert!(asset_cards(&LoadState::Loading).is_empty());
        assert!(asset_cards(&LoadState::Failed(ApiError::Status(503))).is_empty());
    }
}
