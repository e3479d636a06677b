mod app;
mod auth;
mod components;
mod config;
mod logging;
mod navigation_gate;
mod pages;
mod routes;

use app::{App, AppProps};

fn main() {
    console_error_panic_hook::set_once();

    let (config, config_error) = config::load();
    logging::init_logging(&config.log_level);
    if let Some(err) = config_error {
        tracing::error!(error = %err, "Invalid navigation config, using defaults");
    }

    tracing::info!(login_path = %config.login_path, "Starting quiz frontend");
    yew::Renderer::<App>::with_props(AppProps { config }).render();
}
