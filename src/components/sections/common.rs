use dioxus::prelude::*;

use crate::components::icons::Icon;
use crate::content::FeatureCard;

/// Accent rule followed by the panel title
#[component]
pub fn SectionHeading(title: String) -> Element {
    rsx! {
        div { class: "section-heading",
            div { class: "section-rule" }
            h2 { class: "section-title", "{title}" }
        }
    }
}

#[component]
pub fn FeatureCardView(card: FeatureCard, #[props(default, into)] class: String) -> Element {
    rsx! {
        div { class: "glass-card feature-card {class}",
            Icon { name: card.icon, size: 32, class: "card-icon" }
            h3 { class: "card-title", {card.title} }
            p { class: "card-body", {card.body} }
            if !card.bullets.is_empty() {
                ul { class: "card-bullets",
                    for bullet in card.bullets.iter() {
                        li { {*bullet} }
                    }
                }
            }
            if !card.readout.is_empty() {
                div { class: "terminal-readout",
                    for line in card.readout.iter() {
                        div { {*line} }
                    }
                }
            }
        }
    }
}
