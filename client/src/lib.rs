//! # client
//!
//! Leptos + WASM frontend for the Askdesk Q&A application.
//!
//! This crate contains the single-page UI: the session state owning the
//! question/answer/summary/history record, the REST helpers for the ask and
//! summarize endpoints, and the page/component tree rendered around them.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
