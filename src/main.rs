//! Northwind Catalog Frontend Entry Point

mod actions;
mod api;
mod app;
mod components;
mod config;
mod context;
mod models;
mod store;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_env();
    if let Err(e) = console_logger::init(config.log_level) {
        web_sys::console::error_1(&format!("Failed to init logger: {}", e).into());
    }
    log::info!("Catalog UI starting, backend at {}", config.api_base_url);

    mount_to_body(move || view! { <App config=config.clone() /> });
}
