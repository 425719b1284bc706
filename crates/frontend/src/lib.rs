//! Browser client of the sales and budget tracking dashboard.

pub mod app;
pub mod dashboards;
pub mod domain;
pub mod layout;
pub mod routes;
pub mod shared;
pub mod system;

use wasm_bindgen::prelude::wasm_bindgen;

#[cfg(debug_assertions)]
const LOG_LEVEL: log::Level = log::Level::Debug;
#[cfg(not(debug_assertions))]
const LOG_LEVEL: log::Level = log::Level::Info;

/// Entry point invoked once the wasm module is instantiated
#[wasm_bindgen(start)]
pub fn start() {
    // a second init (hot reload) is harmless
    _ = console_log::init_with_level(LOG_LEVEL);
    console_error_panic_hook::set_once();

    log::info!("Starting sales dashboard client");
    leptos::mount::mount_to_body(app::App);
}
