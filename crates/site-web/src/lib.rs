//! Web X Media Frontend
//!
//! Leptos-based WASM frontend: informational pages plus the checkout flow
//! that hands off to the hosted payment page and confirms the payment by
//! polling on return.

mod api;
mod app;
mod components;
mod pages;

pub use app::App;

use wasm_bindgen::prelude::*;

/// WASM entry point
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}
