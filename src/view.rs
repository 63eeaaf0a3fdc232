//! Terminal Views
//!
//! Plain-text renditions of the dashboard and asset detail pages. Line
//! formats match the web dashboard.

use crate::model::{price_line, transaction_line, Asset, AssetDetails};

/// Fallback text when there are no alerts
pub const NO_ALERTS: &str = "No recent alerts";

/// Render the dashboard: graph placeholder, alerts, then one card per asset
pub fn render_dashboard(portfolio: &[Asset], alerts: &[String]) -> String {
    let mut out = String::from("Dashboard\n\n");
    out.push_str("Portfolio Distribution\n  Graph Visualization Coming Soon\n\n");

    out.push_str("Risk Alerts\n");
    if alerts.is_empty() {
        out.push_str(&format!("  {}\n", NO_ALERTS));
    }
    for alert in alerts {
        out.push_str(&format!("  {}\n", alert));
    }

    for asset in portfolio {
        out.push('\n');
        out.push_str(&render_asset_card(asset));
    }

    out
}

/// Render a single dashboard card
pub fn render_asset_card(asset: &Asset) -> String {
    format!(
        "{}\n  Current Price: ${}\n  Sector: {}\n  View Details: /asset/{}\n",
        asset.name, asset.price, asset.sector, asset.id
    )
}

/// Render the asset detail page
pub fn render_asset_details(details: &AssetDetails) -> String {
    let mut out = format!(
        "{}\n{}\nSector: {}\n\nTransaction History\n",
        details.asset.name,
        price_line(details.asset.price),
        details.asset.sector
    );
    for tx in &details.transactions {
        out.push_str(&format!("  {}\n", transaction_line(tx)));
    }

    out
}
