use dioxus::prelude::*;

use crate::components::layout::{Footer, PanelHost};
use crate::components::navigation::NavBar;
use crate::hooks::use_navigation_provider;

/// Site root: owns the navigation state for the lifetime of the page.
#[component]
pub fn Site() -> Element {
    use_navigation_provider();

    rsx! {
        SiteLayout {}
    }
}

#[component]
pub fn SiteLayout() -> Element {
    rsx! {
        div { class: "site",
            div { class: "site-backdrop" }
            NavBar {}
            PanelHost {}
            Footer {}
        }
    }
}
