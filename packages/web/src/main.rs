use api::ClientConfig;
use dioxus::prelude::*;

use views::{Home, PageNotFound};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
    #[route("/:..segments")]
    PageNotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Client configuration baked into the bundle.
const CONFIG_TOML: &str = include_str!("../activities.toml");

/// Used when there is no page origin to talk to (native builds).
const FALLBACK_BASE_URL: &str = "http://127.0.0.1:8000";

fn main() {
    dioxus::logger::init(tracing::Level::INFO).expect("failed to initialize logger");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(|| load_config(CONFIG_TOML));

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}

/// Parse the embedded config, falling back to defaults, and resolve an empty
/// base URL to the page origin.
fn load_config(text: &str) -> ClientConfig {
    let mut config = ClientConfig::from_toml(text).unwrap_or_else(|e| {
        tracing::warn!("Invalid {}, using defaults: {}", ClientConfig::filename(), e);
        ClientConfig::default()
    });
    if config.api.base_url.is_empty() {
        config.api.base_url = page_origin();
    }
    tracing::info!("Activities server: {}", config.api.base_url);
    config
}

#[cfg(target_arch = "wasm32")]
fn page_origin() -> String {
    web_sys::window()
        .and_then(|window| window.location().origin().ok())
        .unwrap_or_else(|| FALLBACK_BASE_URL.to_string())
}

#[cfg(not(target_arch = "wasm32"))]
fn page_origin() -> String {
    FALLBACK_BASE_URL.to_string()
}
