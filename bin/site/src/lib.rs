//! amber-relay web site and UI.
//!
//! This crate provides the Leptos-based single-page portfolio site,
//! including the interactive n8n workflow viewer.

#![allow(non_snake_case)]

pub mod app;
pub mod components;
pub mod error;
pub mod i18n;
pub mod loader;
pub mod pages;
pub mod settings;

#[cfg(feature = "ssr")]
pub mod config;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
