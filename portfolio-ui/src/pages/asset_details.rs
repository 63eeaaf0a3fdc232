//! Asset Details Page
//!
//! One asset with its transaction history. Reloads whenever the `:id`
//! route parameter changes.

use leptos::*;
use leptos_router::use_params_map;

use crate::api::{ApiClient, ApiError};
use crate::components::{ErrorState, Loading, TransactionList};
use crate::model::{self, Transaction};
use crate::state::{LoadState, RequestTracker};

/// Asset details page component
#[component]
pub fn AssetDetails() -> impl IntoView {
    let client = use_context::<ApiClient>().expect("ApiClient not provided");
    let params = use_params_map();
    let asset_id = create_memo(move |_| params.with(|p| p.get("id").cloned()));

    let state = create_rw_signal(LoadState::<model::AssetDetails>::Loading);
    let tracker = RequestTracker::new();

    create_effect(move |_| {
        let Some(id) = asset_id.get() else {
            return;
        };

        let generation = tracker.begin();
        state.set(LoadState::Loading);

        let client = client.clone();
        let tracker = tracker.clone();
        spawn_local(async move {
            let result = client.fetch_asset_details(&id).await;

            let Some(next) = tracker.settle(generation, result) else {
                web_sys::console::debug_1(
                    &format!("Discarding stale response for asset {}", id).into(),
                );
                return;
            };

            if let Some(e) = next.error() {
                web_sys::console::error_1(
                    &format!("Failed to fetch asset {}: {}", id, e).into(),
                );
            }
            state.set(next);
        });
    });

    move || match state.with(DetailView::from_state) {
        DetailView::Loading => view! { <Loading /> }.into_view(),
        DetailView::Failed(message) => view! { <ErrorState message=message /> }.into_view(),
        DetailView::Loaded {
            name,
            price,
            sector,
            transactions,
        } => view! {
            <div class="asset-details">
                <h2>{name}</h2>
                <p>{price}</p>
                <p>{sector}</p>
                <TransactionList transactions=transactions />
            </div>
        }
        .into_view(),
    }
}

/// Text content of the page for one load state
#[derive(Debug, Clone, PartialEq)]
pub enum DetailView {
    Loading,
    Failed(String),
    Loaded {
        name: String,
        price: String,
        sector: String,
        transactions: Vec<Transaction>,
    },
}

impl DetailView {
    pub fn from_state(state: &LoadState<model::AssetDetails>) -> Self {
        match state {
            LoadState::Loading => DetailView::Loading,
            LoadState::Failed(e) => DetailView::Failed(failure_message(e)),
            LoadState::Loaded(details) => DetailView::Loaded {
                name: details.asset.name.clone(),
                price: details.asset.price_line(),
                sector: details.asset.sector_line(),
                transactions: details.transactions.clone(),
            },
        }
    }
}

/// User-facing text for a failed load
pub fn failure_message(error: &ApiError) -> String {
    match error {
        ApiError::NotFound => "Asset not found".to_string(),
        other => format!("Could not load asset: {}", other),
    }
}
