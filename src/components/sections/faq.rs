use dioxus::prelude::*;

use crate::components::icons::{Icon, IconName};
use crate::components::sections::SectionHeading;
use crate::content::FAQ_ENTRIES;
use crate::hooks::{use_disclosure, use_site_config, DisclosureState};
use crate::transition::expand_style;
use crate::types::FaqEntry;

/// FAQ panel. Expansion state lives with the panel, so leaving and coming back
/// starts with every entry collapsed.
#[component]
pub fn FaqPanel() -> Element {
    let state = use_disclosure(FAQ_ENTRIES.len());

    rsx! {
        div { class: "panel-narrow",
            SectionHeading { title: "Frequently Asked Questions" }
            FaqList { state }
        }
    }
}

#[component]
pub fn FaqList(state: DisclosureState) -> Element {
    let mut disclosure = state;

    rsx! {
        div { class: "faq-list",
            for (index, entry) in FAQ_ENTRIES.iter().enumerate() {
                FaqItem {
                    key: "{index}",
                    index,
                    entry: *entry,
                    expanded: disclosure.is_expanded(index),
                    on_toggle: move |index: usize| disclosure.toggle(index),
                }
            }
        }
    }
}

/// A single question. The answer and citations are only mounted while expanded, and
/// the button only points at them (`aria-controls`) while they exist.
#[component]
pub fn FaqItem(index: usize, entry: FaqEntry, expanded: bool, on_toggle: EventHandler<usize>) -> Element {
    let timings = use_site_config().transitions;
    let question_id = format!("faq-question-{index}");
    let answer_id = format!("faq-answer-{index}");

    rsx! {
        div { class: if expanded { "glass-card faq-item faq-item-open" } else { "glass-card faq-item" },
            button {
                r#type: "button",
                id: "{question_id}",
                class: "faq-question",
                "aria-expanded": if expanded { "true" } else { "false" },
                "aria-controls": expanded.then(|| answer_id.clone()),
                onclick: move |_| on_toggle.call(index),
                Icon { name: IconName::HelpCircle, size: 20, class: "faq-icon" }
                span { class: "faq-question-text", {entry.question} }
                Icon {
                    name: IconName::ChevronDown,
                    size: 20,
                    class: if expanded { "faq-chevron faq-chevron-open" } else { "faq-chevron" },
                }
            }
            if expanded {
                div {
                    id: "{answer_id}",
                    class: "faq-answer",
                    role: "region",
                    "aria-labelledby": "{question_id}",
                    style: expand_style(&timings),
                    p { class: "faq-answer-text", {entry.answer} }
                    ul { class: "faq-citations",
                        for citation in entry.citations.iter() {
                            li { class: "faq-citation", {*citation} }
                        }
                    }
                }
            }
        }
    }
}
