//! # shiftdeck
//!
//! Leptos + WASM front end for the shiftdeck workforce-management app.
//! Authentication and account data live in a hosted backend service; this
//! crate owns the pages, components, client-side state, and the thin HTTP
//! layer that talks to that service.
//!
//! The same crate builds two ways: `hydrate` produces the browser bundle,
//! `ssr` produces the axum host binary that renders the shell.

#![recursion_limit = "512"]

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs panic/log forwarding, then hydrates the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
