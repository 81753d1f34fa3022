//! Resgatados Web Frontend
//!
//! Leptos-based WASM frontend for the nonprofit's site: informational pages,
//! contact/partnership forms and the donation checkout.

mod api;
mod app;
mod checkout;
mod components;
mod content;
mod pages;
mod stripe;

pub use app::App;

use wasm_bindgen::prelude::*;

/// WASM entry point
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}
