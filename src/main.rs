use dioxus::prelude::*;

use transactivate::{Site, SiteConfig};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
    #[route("/:..segments")]
    Fallback { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    if let Err(err) = dioxus::logger::init(tracing::Level::INFO) {
        eprintln!("Failed to initialize logger: {}", err);
    }
    tracing::info!("Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_context_provider(SiteConfig::load_or_default);
    let theme_css = config.theme.css_variables();

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        style { {theme_css} }

        Router::<Route> {}
    }
}

#[component]
fn Home() -> Element {
    rsx! {
        Site {}
    }
}

/// Unknown paths still get the site; panel switching never touches the URL.
#[component]
fn Fallback(segments: Vec<String>) -> Element {
    tracing::debug!("Unknown path /{}, rendering site", segments.join("/"));
    rsx! {
        Site {}
    }
}
