//! # pim-client
//!
//! Leptos + WASM frontend for the personal information manager. This crate
//! is the client-side session layer: it tracks authentication state,
//! attaches the bearer credential to every outbound request, reacts to
//! authorization failures, and gates navigation on login and role.
//!
//! The session store (`state::session`) is the single source of truth; the
//! interceptor pipeline (`net::http`) keeps outbound calls authenticated and
//! detects expiry reactively; the route guard (`routes`) decides before each
//! transition whether to proceed, redirect to login, or bounce to home.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// Browser entry point: hook up logging and hydrate the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
