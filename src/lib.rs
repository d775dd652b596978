//! # shopfront
//!
//! Leptos + WASM frontend for the storefront e-commerce platform: public
//! catalog, authenticated shopping pages (cart, favorites, dashboard), and
//! the admin panel.
//!
//! The load-bearing piece is the client-side auth gate: the identity
//! provider bridge (`net::identity`), the backend profile fetcher
//! (`net::api`), the auth context state machine (`state::auth`), and the
//! route guard (`state::access`). Pages and components consume the gate's
//! output and stay presentational.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered shell in the browser.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
