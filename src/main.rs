//! Tellus UI
//!
//! Browser-side presentation layer for Tellus, the internal link/knowledge
//! directory. Built with Leptos (WASM, client-side rendered).
//!
//! # Architecture
//!
//! All data comes from the Tellus REST API; this layer is a hash-routed
//! single-page UI. A hash fragment of the form `#<view>[.<param>]` maps onto
//! exactly one view constructor through the route table, making every view
//! bookmarkable and shareable.

use leptos::*;

mod api;
mod app;
mod components;
mod model;
mod pages;
mod router;
mod state;
mod wiring;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
