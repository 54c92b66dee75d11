//! Portfolio Interactions Entry Point

mod api;
mod app;
mod components;
mod config;
mod confirm;
mod context;
mod controllers;
mod counter;
mod dom;
mod models;
mod store;
mod urls;

use app::App;
use config::InteractionConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = InteractionConfig::load();
    console_logger::init(console_logger::parse_level(&config.log_level));

    mount_to_body(move || view! { <App config=config /> });
}
