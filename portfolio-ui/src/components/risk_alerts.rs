//! Risk Alerts Component
//!
//! Lists alert messages, or a fallback line when there are none.

use leptos::*;

/// Shown when the alert list is empty
pub const NO_ALERTS: &str = "No recent alerts";

/// Lines to display for a list of alerts
pub fn alert_lines(alerts: &[String]) -> Vec<String> {
    if alerts.is_empty() {
        vec![NO_ALERTS.to_string()]
    } else {
        alerts.to_vec()
    }
}

#[component]
pub fn RiskAlerts(alerts: Vec<String>) -> impl IntoView {
    view! {
        <div class="risk-alerts">
            <h3>"Risk Alerts"</h3>
            {alert_lines(&alerts)
                .into_iter()
                .map(|line| view! { <p>{line}</p> })
                .collect_view()}
        </div>
    }
}
