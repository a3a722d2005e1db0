//! # client
//!
//! Leptos + WASM frontend for the auth portal: login, registration, the
//! profile view with its session-expiry display, and the admin dashboard.
//!
//! Token handling and session state transitions live in the `session` crate;
//! this crate adapts them to the browser (localStorage, `gloo-net`, router
//! navigation, toasts) and renders the views.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
