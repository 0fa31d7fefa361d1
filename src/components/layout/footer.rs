use dioxus::prelude::*;

use crate::hooks::use_site_config;

#[component]
pub fn Footer() -> Element {
    let config = use_site_config();

    rsx! {
        footer { class: "site-footer",
            {config.copyright}
        }
    }
}
