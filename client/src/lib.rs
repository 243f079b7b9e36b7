//! # client
//!
//! Leptos + WASM frontend for the SmartParking dashboard. Renders the lot
//! list and per-lot detail views, fed by named realtime events pushed from
//! the backend over one socket per page load.
//!
//! This crate contains pages, components, application state, the socket
//! client, and startup configuration. The wire model lives in the `events`
//! crate.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
