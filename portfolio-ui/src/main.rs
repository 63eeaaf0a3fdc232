//! Portfolio Dashboard
//!
//! Investment portfolio dashboard built with Leptos (WASM).
//!
//! # Pages
//!
//! - `/` lists every asset with its price and sector, plus risk alerts
//! - `/asset/:id` shows one asset and its transaction history
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It reads from the portfolio REST API over HTTP; set
//! `PORTFOLIO_API_URL` at build time to target a server other than
//! `http://localhost:5000`.

use leptos::*;

mod api;
mod app;
mod components;
mod model;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
