// flightsearch browser form, Leptos 0.8 CSR

mod components;
mod logging;
mod styles;

use components::FlightSearch;
use flightsearch::SearchConfig;
use leptos::prelude::*;
use styles::APP_CSS;

const CONFIG_TOML: &str = include_str!("../flightsearch.toml");

fn main() {
    console_error_panic_hook::set_once();

    let config = SearchConfig::from_toml_str_or_default(CONFIG_TOML);
    logging::init(&config.log_level);
    tracing::info!("Starting flightsearch-web v{}", env!("CARGO_PKG_VERSION"));

    leptos::mount::mount_to_body(move || view! { <App config=config /> });
}

#[component]
fn App(config: SearchConfig) -> impl IntoView {
    view! {
        <style>{APP_CSS}</style>
        <main>
            <FlightSearch config=config />
        </main>
    }
}
