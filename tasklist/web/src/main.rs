use dioxus::prelude::*;

mod components;
mod settings;
mod state;
mod storage;
mod views;

use settings::AppConfig;
use views::{Home, NotFound};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");
const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

fn main() {
    let loaded = AppConfig::load();
    let config = loaded.as_ref().cloned().unwrap_or_default();
    dioxus::logger::init(config.log_level()).expect("failed to init logger");
    if let Err(e) = &loaded {
        tracing::warn!(error = %e, "using default configuration");
    }
    tracing::info!(motion = config.motion.enabled, "starting tasklist");

    dioxus::LaunchBuilder::new().with_context(config).launch(App);
}

/// Root component: opens the task store and applies the display mode to the
/// whole page.
#[component]
fn App() -> Element {
    let config = state::use_app_config();
    let store = state::use_task_store_provider(&config);
    let theme_class = if store.display_mode().is_dark() { "dark" } else { "" };

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }

        div { class: "{theme_class}",
            Router::<Route> {}
        }
    }
}
