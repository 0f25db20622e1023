//! Student Registry
//!
//! Student sign-up web application built with Leptos and WebAssembly.
//! Accounts are created with a hosted auth service and each student gets a
//! profile row in the hosted `estudiantes` table.

#![recursion_limit = "256"]

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
