//! Verifyd Landing Page
//!
//! Leptos-based WASM frontend: marketing sections plus two waitlist forms
//! driven by `waitlist-core`.

mod app;
mod components;
mod content;
mod form;
mod pages;

pub use app::App;

use wasm_bindgen::prelude::*;

/// WASM entry point
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}
