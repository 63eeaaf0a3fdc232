//! App Root Component
//!
//! Provides the API client and maps routes to pages.

use leptos::*;
use leptos_router::*;

use crate::api::{ApiClient, ApiConfig};
use crate::pages::{AssetDetails, Dashboard};

/// Root application component
#[component]
pub fn App(
    /// API configuration; defaults to the build-time base URL
    #[prop(optional)]
    config: Option<ApiConfig>,
) -> impl IntoView {
    provide_context(ApiClient::new(config.unwrap_or_default()));

    view! {
        <Router>
            <main class="container">
                <Routes>
                    <Route path="/" view=Dashboard />
                    <Route path="/asset/:id" view=AssetDetails />
                </Routes>
            </main>
        </Router>
    }
}
