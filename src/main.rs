//! Inventory Frontend Entry Point

mod app;
mod auth;
mod components;
mod config;
mod context;
mod debounce;
mod format;
mod inventory;
mod logging;
mod models;
mod pages;
mod seed;
mod session;
mod store;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    let config = AppConfig::default();
    logging::init(config.log_level);
    log::info!("starting inventory ui");
    mount_to_body(App);
}
