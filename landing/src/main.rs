// Project Ara landing page, Leptos 0.8 edition
// Project Ara Web Team (c)2025

use ara_landing::{App, LandingConfig, telemetry};
use leptos::prelude::*;
use tracing::{info, warn};

fn main() {
    console_error_panic_hook::set_once();
    telemetry::init();

    let config = LandingConfig::from_host_page().unwrap_or_else(|err| {
        warn!(%err, "ignoring host page config, using defaults");
        LandingConfig::default()
    });
    info!(?config, "mounting landing page");

    leptos::mount::mount_to_body(move || view! { <App config=config /> });
}
