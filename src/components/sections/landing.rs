use dioxus::prelude::*;

use crate::components::icons::{Icon, IconName};
use crate::hooks::use_navigation;
use crate::types::Section;

#[component]
pub fn LandingPanel() -> Element {
    let mut navigation = use_navigation();

    rsx! {
        div { class: "landing",
            div { class: "eyebrow", "ESTABLISHED 2026" }
            h1 { class: "landing-title",
                "The Marketplace for "
                br {}
                span { class: "accent glow-text", "Sole Source Authority." }
            }
            p { class: "landing-pitch",
                "We facilitate the secure transfer of SBIR Data Rights, unlocking speed to contract for Buyers and liquidity for Sellers through verified Successor-in-Interest transactions."
            }
            div { class: "landing-actions",
                button {
                    r#type: "button",
                    class: "btn-primary",
                    "data-target": Section::Buyers.slug(),
                    onclick: move |_| navigation.navigate(Section::Buyers),
                    "Enter Buy-Side Engine"
                    Icon { name: IconName::ChevronRight, size: 16 }
                }
                button {
                    r#type: "button",
                    class: "btn-ghost",
                    "data-target": Section::Sellers.slug(),
                    onclick: move |_| navigation.navigate(Section::Sellers),
                    "Explore Sell-Side"
                }
            }
        }
    }
}
