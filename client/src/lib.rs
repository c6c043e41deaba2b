//! # vorrenti-client
//!
//! Leptos + WASM frontend for the Vorrenti coming-soon page.
//!
//! This crate contains the landing page, its signup form and toast stack,
//! the document head metadata model, and the logo color sampler. Pure logic
//! is testable natively; browser glue is gated behind the `hydrate` feature
//! and the server renders the same components under `ssr`.

pub mod app;
pub mod components;
pub mod content;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: attach to the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
