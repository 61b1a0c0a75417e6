//! # womecare
//!
//! Leptos + WASM companion app for women's safety and health: SOS alerts
//! with location fan-out, emergency contacts, period and maternity tracking,
//! live location sharing and a community forum, all backed by the Womecare
//! REST API.
//!
//! The `csr` feature selects the browser build; without it the crate
//! compiles natively so the pure logic can be tested off-wasm.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Mount the application into the current document. Browser-only.
#[cfg(feature = "csr")]
pub fn run() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(app::App);
}

#[cfg(not(feature = "csr"))]
pub fn run() {
    log::error!("this application only runs in a browser");
}
