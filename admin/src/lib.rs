//! # admin
//!
//! Leptos + WASM admin panel for the product catalog.
//!
//! This crate contains the add-product page, its components, the local form
//! state (fields, variant attributes, staged images), and the REST helpers
//! that submit products to the catalog backend with the cached bearer token.

pub mod app;
pub mod components;
pub mod config;
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
