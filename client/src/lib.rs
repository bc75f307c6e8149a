//! # client
//!
//! Leptos + WASM frontend for the thermoview transformer thermal-inspection
//! dashboard. Contains pages, components, application state, the REST
//! client for the inspection-management backend, and the transport glue
//! around the `assistant` chat-completion core.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: attach the app to the server-rendered DOM.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
