//! # dropify-dashboard
//!
//! Leptos + WASM dashboard for the Dropify bot: a Twitch chat integration
//! that creates single-use Shopify discount codes when viewers trigger
//! commands like `!drop` and `!discount`.
//!
//! This crate contains pages, components, per-card state, network types,
//! and the cancellable keyed-fetch helper every card loads its data with.
//! It talks to the remote Dropify HTTP API; there is no backend logic here.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
