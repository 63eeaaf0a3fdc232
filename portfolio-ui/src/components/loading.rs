//! Loading Component
//!
//! Placeholders shown while a page has no data to render.

use leptos::*;

/// Text shown while a page's data is in flight
pub const LOADING_TEXT: &str = "Loading...";

/// Page-level loading placeholder
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="loading">{LOADING_TEXT}</div>
    }
}

/// Inline error line for a failed load
#[component]
pub fn ErrorState(
    #[prop(into)]
    message: String,
) -> impl IntoView {
    view! {
        <div class="error-state" role="alert">{message}</div>
    }
}
