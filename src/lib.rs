//! # academy-console
//!
//! Leptos + WASM frontend for the academy administration panel.
//!
//! This crate contains pages, components, application state, and the typed
//! HTTP client for the academy API. Pages render on the server and hydrate
//! in the browser; all persistent records live behind the remote API, so
//! every mutation is followed by a fresh fetch rather than a local patch.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point that hydrates the server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(crate::app::App);
}
