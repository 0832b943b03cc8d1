use leptos::*;

use iptracker_frontend::{App, Config};

fn main() {
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();
    log::info!("Start web application");
    let config = match Config::load_default() {
        Ok(config) => config,
        Err(err) => {
            log::error!("Invalid configuration: {err}");
            return;
        }
    };
    mount_to_body(move || view! { <App config /> });
}
