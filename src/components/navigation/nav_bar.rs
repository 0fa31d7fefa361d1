use dioxus::prelude::*;

use crate::components::navigation::Brand;
use crate::hooks::{use_navigation, use_site_config};
use crate::types::Section;

#[component]
pub fn NavBar() -> Element {
    let config = use_site_config();

    rsx! {
        nav { class: "site-nav",
            Brand { label: config.brand }
            div { class: "nav-links",
                for target in Section::NAV {
                    NavLink { key: "{target}", section: target }
                }
            }
        }
    }
}

/// One nav bar button. The highlight is derived from the active section, not stored.
#[component]
pub fn NavLink(section: Section) -> Element {
    let mut navigation = use_navigation();
    let is_active = navigation.is_active(section);
    let label = section.nav_label().unwrap_or_default();

    rsx! {
        button {
            r#type: "button",
            class: if is_active { "nav-link nav-link-active" } else { "nav-link" },
            "aria-current": if is_active { "page" } else { "false" },
            "data-section": section.slug(),
            onclick: move |_| navigation.navigate(section),
            "{label}"
        }
    }
}
