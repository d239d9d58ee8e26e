//! # auction-client
//!
//! Leptos + WASM session core for the auction frontend.
//!
//! This crate keeps the bearer token consistent across `localStorage`, the
//! reactive session signal, outbound HTTP calls, and route navigation. Pages
//! beyond login/register/home are owned by the embedding application and only
//! consume the [`context::AuthContext`] provided here.

pub mod app;
pub mod config;
pub mod context;
pub mod nav;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(test)]
pub(crate) mod test_support;

/// Browser entry point: install panic + console logging, then hydrate `App`.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
