//! Asset Card Component
//!
//! Dashboard summary of one asset with a link to its detail page.

use leptos::*;
use leptos_router::A;

use crate::model::Asset;

#[component]
pub fn AssetCard(asset: Asset) -> impl IntoView {
    let href = asset.href();

    view! {
        <div class="asset-card">
            <h3>{asset.name.clone()}</h3>
            <p>{asset.card_price_line()}</p>
            <p>{asset.sector_line()}</p>
            <A href=href>"View Details"</A>
        </div>
    }
}
