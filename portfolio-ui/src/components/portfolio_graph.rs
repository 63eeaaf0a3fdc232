//! Portfolio Graph Component
//!
//! Placeholder slot for a distribution chart. It accepts the projected
//! portfolio but does not draw anything yet.

use leptos::*;

use crate::model::GraphPoint;

#[component]
pub fn PortfolioGraph(data: Vec<GraphPoint>) -> impl IntoView {
    let _ = data;

    view! {
        <div class="portfolio-graph">
            <h3>"Portfolio Distribution"</h3>
            <div>"Graph Visualization Coming Soon"</div>
        </div>
    }
}
