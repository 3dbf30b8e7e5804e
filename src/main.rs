//! Extensions Manager Frontend Entry Point

mod app;
mod collection;
mod components;
mod config;
mod filter;
mod loader;
mod models;
mod store;
mod theme;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::default();
    wasm_logger::init(wasm_logger::Config::new(
        config.log_level.to_level().unwrap_or(log::Level::Info),
    ));
    log::info!("[APP] Starting, data from {}", config.data_url);

    mount_to_body(move || view! { <App config=config.clone() /> });
}
