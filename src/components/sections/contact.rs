use dioxus::prelude::*;

use crate::components::icons::{Icon, IconName};
use crate::hooks::use_site_config;
use crate::types::{ContactDraft, Intent};

/// Contact panel. The form keeps its fields while the panel is mounted but submitting
/// it does nothing: no request, no navigation, no confirmation.
#[component]
pub fn ContactPanel() -> Element {
    let config = use_site_config();
    let mut draft = use_signal(ContactDraft::default);
    let current = draft.read().clone();

    rsx! {
        div { class: "panel-narrow contact",
            div { class: "contact-header",
                h2 { class: "section-title", "Execute Transaction" }
                p { class: "contact-lede", "Ready to engage? Initiate a secure channel below." }
                a {
                    class: "contact-mailto",
                    href: config.mailto_href(),
                    Icon { name: IconName::Mail, size: 16 }
                    span { {config.contact_email.clone()} }
                }
            }
            form {
                class: "glass-card contact-form",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    let snapshot = draft.read();
                    tracing::debug!(
                        intent = snapshot.intent.value(),
                        blank = snapshot.is_blank(),
                        "contact submission suppressed"
                    );
                },
                div { class: "form-row",
                    div { class: "form-group",
                        label { class: "form-label", r#for: "contact-entity", "Entity Name" }
                        input {
                            id: "contact-entity",
                            class: "form-input",
                            r#type: "text",
                            name: "entity_name",
                            value: current.entity_name,
                            oninput: move |e| draft.write().entity_name = e.value(),
                        }
                    }
                    div { class: "form-group",
                        label { class: "form-label", r#for: "contact-email", "Contact Email" }
                        input {
                            id: "contact-email",
                            class: "form-input",
                            r#type: "email",
                            name: "email",
                            value: current.email,
                            oninput: move |e| draft.write().email = e.value(),
                        }
                    }
                }
                div { class: "form-group",
                    label { class: "form-label", r#for: "contact-intent", "Intent (Buy/Sell)" }
                    select {
                        id: "contact-intent",
                        class: "form-input",
                        name: "intent",
                        value: current.intent.value(),
                        onchange: move |e| draft.write().intent = Intent::from_value(&e.value()),
                        for intent in Intent::ALL {
                            option {
                                value: intent.value(),
                                selected: intent == current.intent,
                                {intent.label()}
                            }
                        }
                    }
                }
                div { class: "form-group",
                    label { class: "form-label", r#for: "contact-message", "Message / UEI Reference" }
                    textarea {
                        id: "contact-message",
                        class: "form-input",
                        name: "message",
                        rows: "4",
                        value: current.message,
                        oninput: move |e| draft.write().message = e.value(),
                    }
                }
                button {
                    r#type: "submit",
                    class: "btn-primary btn-block",
                    Icon { name: IconName::Mail, size: 16 }
                    "Transmit Inquiry"
                }
            }
        }
    }
}
