//! # newsdesk-client
//!
//! Leptos + WASM frontend for the Newsdesk content-management system.
//!
//! This crate contains pages, components, the persisted session store,
//! network types, and the authenticated request pipeline with transparent
//! token refresh. Route access is enforced by the guard components in
//! [`components::route_guards`] on top of the pure rules in [`guards`].

pub mod app;
pub mod components;
pub mod guards;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Client-side entry point. Called by the generated WASM loader.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
