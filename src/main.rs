mod app;
mod config;
mod logger;
mod plotly_bindings;
mod signal_view;
mod socket;

use app::*;
use leptos::*;

fn main() {
    logger::init(log::LevelFilter::Info);
    let config = config::load_or_default();
    log::set_max_level(config.log_level());

    mount_to_body(move || {
        view! { <App config=config/> }
    })
}
