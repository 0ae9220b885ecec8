//! # client
//!
//! Leptos + WASM frontend for Trip Maker.
//!
//! Contains the route table, pages, presentational components, trip settings
//! form state, and the browser geolocation capture that fills the form's
//! coordinate fields. The `server` crate renders [`app::App`] over SSR and
//! the `hydrate` build takes over in the browser.

#![recursion_limit = "512"]

pub mod app;
pub mod components;
pub mod location;
pub mod pages;
pub mod routes;
pub mod state;

/// WASM entry point: installs browser logging and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&format!("console logging unavailable: {e}").into());
    }
    leptos::mount::hydrate_body(app::App);
}
