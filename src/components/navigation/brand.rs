use dioxus::prelude::*;

use crate::hooks::use_navigation;
use crate::types::Section;

/// Wordmark in the top-left corner. Always returns to the landing panel.
#[component]
pub fn Brand(label: String) -> Element {
    let mut navigation = use_navigation();

    rsx! {
        button {
            r#type: "button",
            class: "brand",
            title: "Home",
            "data-target": Section::Landing.slug(),
            onclick: move |_| navigation.navigate(Section::Landing),
            "{label}"
        }
    }
}
