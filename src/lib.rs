//! # taskboard
//!
//! Leptos + WASM single-page client for a personal task manager backed by a
//! remote REST API.
//!
//! The core is the session layer: `session` (token storage, token decoding,
//! identity confirmation), `state::session` (the reactive session instance),
//! and `util::route_guard` (navigation decisions). Pages and components are
//! thin views over those and the task API in `net`.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod session;
pub mod state;
pub mod util;

/// Browser entry point: install panic/log hooks and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
