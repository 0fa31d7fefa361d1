use dioxus::prelude::*;

use crate::components::sections::{FeatureCardView, SectionHeading};
use crate::content::BUYER_FEATURES;

#[component]
pub fn BuyersPanel() -> Element {
    rsx! {
        div { class: "panel-wide",
            SectionHeading { title: "Buy-Side Engine" }
            div { class: "card-grid card-grid-3",
                for card in BUYER_FEATURES {
                    FeatureCardView { card }
                }
            }
        }
    }
}
