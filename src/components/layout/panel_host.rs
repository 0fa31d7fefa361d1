use dioxus::prelude::*;

use crate::components::sections::{BuyersPanel, ContactPanel, FaqPanel, LandingPanel, SellersPanel};
use crate::controllers::PanelSlot;
use crate::hooks::{use_navigation, use_site_config};
use crate::transition::{Phase, Transition};
use crate::types::Section;

/// Renders the active panel with its enter animation.
///
/// A panel that was just replaced stays mounted, inert, until its exit animation
/// ends. Entries are keyed by section and visit: the replaced panel keeps its
/// component state while it animates out, and a newly active one always mounts fresh.
#[component]
pub fn PanelHost() -> Element {
    let mut navigation = use_navigation();
    let timings = use_site_config().transitions;

    rsx! {
        main { class: "panel-host",
            for PanelSlot { section, phase, visit } in navigation.panels() {
                div {
                    key: "{section}-{visit}",
                    id: "panel-{section}",
                    class: match phase {
                        Phase::Enter => "panel panel-active",
                        Phase::Exit => "panel panel-leaving",
                    },
                    "aria-hidden": (phase == Phase::Exit).then_some("true"),
                    "inert": (phase == Phase::Exit).then_some("true"),
                    "data-section": section.slug(),
                    style: Transition::for_section(section).style(phase, &timings),
                    onanimationend: move |evt: AnimationEvent| {
                        // nested animations (FAQ answers) bubble up here too
                        let exit = Transition::for_section(section).keyframes(Phase::Exit);
                        if phase == Phase::Exit && evt.animation_name() == exit {
                            navigation.finish_exit(section);
                        }
                    },
                    SectionPanel { section }
                }
            }
        }
    }
}

#[component]
pub fn SectionPanel(section: Section) -> Element {
    match section {
        Section::Landing => rsx! { LandingPanel {} },
        Section::Buyers => rsx! { BuyersPanel {} },
        Section::Sellers => rsx! { SellersPanel {} },
        Section::Faq => rsx! { FaqPanel {} },
        Section::Contact => rsx! { ContactPanel {} },
    }
}
