//! Comment Board Frontend Entry Point

mod app;
mod backend;
mod commands;
mod components;
mod config;
mod context;
mod logger;
mod prompt;
mod store;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_window();
    logger::init(config.log_level());

    mount_to_body(move || view! { <App config=config /> });
}
