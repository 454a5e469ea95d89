//! Material Library Dashboard
//!
//! Browser dashboard for a media material library built with Leptos (WASM).
//!
//! # Features
//!
//! - Library-wide counts for each material category
//! - 7-day upload trend chart
//! - Per-project resource table
//! - Tabbed resource detail modal with expandable sub-item rows
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It communicates with the medialib API over HTTP.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
