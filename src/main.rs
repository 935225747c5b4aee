mod commands;
mod components;
mod config;
mod logging;
mod model;
mod request;
mod scheduler;
mod state;
mod util;

use components::app::{App, AppProps};

fn main() {
    console_error_panic_hook::set_once();
    let (config, config_err) = config::load_config();
    logging::init(&config.log_filter);
    if let Some(e) = config_err {
        tracing::warn!(error = %e, "falling back to default viewer config");
    }
    tracing::info!(api_base = %config.api_base, format = ?config.format, "viewer starting");
    yew::Renderer::<App>::with_props(AppProps { config }).render();
}
