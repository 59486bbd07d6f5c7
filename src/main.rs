//! TableLens - Dioxus web client for the PDF table extraction service
//!
//! Uploads PDFs to the extraction backend and presents the results: every
//! extracted table, per-column statistics, and the full document text.
//!
//! ## Running
//!
//! Development (with hot reload):
//! ```bash
//! dx serve --features web
//! ```
//!
//! Production build:
//! ```bash
//! dx build --release --features web
//! ```

#![allow(non_snake_case)]

mod aggregate;
mod api;
mod app;
mod components;
mod export;
mod pages;
mod routes;
mod state;
mod types;

fn main() {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Compile-time override for deployments where the backend is not
    // reachable at the default /api prefix.
    if let Some(url) = option_env!("TABLELENS_API_URL") {
        api::init_api_url(url.to_string());
    }

    dioxus::launch(app::App);
}
