//! # mirath
//!
//! Leptos + WASM frontend for the bilingual (Arabic/French) Hassaniya
//! heritage publishing platform: public news, articles, podcasts, programs,
//! and a video library, plus a gated admin area for content-entry staff.
//!
//! The backend of record is an external hosted service (auth + row REST
//! interface) and a third-party CDN for media; both are consumed through
//! their HTTP contracts in `net`. The session/permission gating core lives
//! in `auth`.

pub mod app;
pub mod auth;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install panic/log hooks and hydrate the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
