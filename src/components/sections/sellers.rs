use dioxus::prelude::*;

use crate::components::icons::{Icon, IconName};
use crate::components::sections::{FeatureCardView, SectionHeading};
use crate::content::{ASSET_RESCUE, LIQUIDITY_TYPES};

#[component]
pub fn SellersPanel() -> Element {
    let numbered: Vec<(String, &str)> = LIQUIDITY_TYPES
        .iter()
        .enumerate()
        .map(|(index, kind)| (format!("{:02}.", index + 1), *kind))
        .collect();

    rsx! {
        div { class: "panel-wide",
            SectionHeading { title: "Sell-Side Engine" }
            div { class: "card-grid card-grid-3",
                FeatureCardView { card: ASSET_RESCUE, class: "span-2" }
                div { class: "glass-card feature-card",
                    Icon { name: IconName::Briefcase, size: 32, class: "card-icon" }
                    h3 { class: "card-title", "Liquidity Types" }
                    ol { class: "liquidity-list",
                        for (number, kind) in numbered {
                            li {
                                span { class: "accent", "{number}" }
                                span { {kind} }
                            }
                        }
                    }
                }
            }
        }
    }
}
