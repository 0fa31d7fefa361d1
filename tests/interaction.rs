//! Drives the mounted site through real DOM events: clicks, form submits and
//! animation ends go through the same handlers the browser would call.

use std::any::Any;
use std::collections::HashMap;
use std::rc::Rc;

use dioxus::dioxus_core::{AttributeValue, ElementId, Mutation, Mutations};
use dioxus::html::{
    set_event_converter, PlatformEventData, SerializedAnimationData, SerializedFormData,
    SerializedHtmlEventConverter, SerializedMouseData,
};
use dioxus::prelude::*;

use transactivate::{Section, Site};

/// Mounted site plus what the renderer has been told about each element: its
/// dynamic attributes and the events it listens for.
struct Page {
    dom: VirtualDom,
    attributes: HashMap<ElementId, HashMap<&'static str, String>>,
    listeners: Vec<(String, ElementId)>,
}

impl Page {
    fn open(app: fn() -> Element) -> Self {
        set_event_converter(Box::new(SerializedHtmlEventConverter));
        let mut dom = VirtualDom::new(app);
        let mutations = dom.rebuild_to_vec();
        let mut page = Self {
            dom,
            attributes: HashMap::new(),
            listeners: Vec::new(),
        };
        page.apply(mutations);
        page
    }

    fn apply(&mut self, mutations: Mutations) {
        for edit in mutations.edits {
            match edit {
                // ids are recycled, a new node starts clean
                Mutation::LoadTemplate { id, .. }
                | Mutation::AssignId { id, .. }
                | Mutation::CreatePlaceholder { id }
                | Mutation::CreateTextNode { id, .. }
                | Mutation::ReplaceWith { id, .. }
                | Mutation::Remove { id } => {
                    self.attributes.remove(&id);
                    self.listeners.retain(|(_, known)| *known != id);
                }
                Mutation::SetAttribute { name, value, id, .. } => {
                    let attributes = self.attributes.entry(id).or_default();
                    match value {
                        AttributeValue::Text(text) => {
                            attributes.insert(name, text);
                        }
                        _ => {
                            attributes.remove(name);
                        }
                    }
                }
                Mutation::NewEventListener { name, id } => self.listeners.push((name, id)),
                Mutation::RemoveEventListener { name, id } => {
                    self.listeners.retain(|(known, known_id)| *known != name || *known_id != id)
                }
                _ => {}
            }
        }
    }

    fn attribute(&self, id: ElementId, name: &str) -> Option<&str> {
        self.attributes.get(&id)?.get(name).map(String::as_str)
    }

    /// Most recently mounted element listening for `event` whose `name` attribute is `value`
    fn target(&self, event: &str, name: &str, value: &str) -> ElementId {
        self.listeners
            .iter()
            .rev()
            .filter(|(known, _)| known == event)
            .map(|(_, id)| *id)
            .find(|id| self.attribute(*id, name) == Some(value))
            .unwrap_or_else(|| panic!("no {event} listener on an element with {name}={value:?}"))
    }

    fn dispatch(&mut self, event: &str, data: Box<dyn Any>, target: ElementId) -> Event<dyn Any> {
        let event_data = Event::new(Rc::new(PlatformEventData::new(data)) as Rc<dyn Any>, true);
        self.dom.runtime().handle_event(event, event_data.clone(), target);
        let mutations = self.dom.render_immediate_to_vec();
        self.apply(mutations);
        event_data
    }

    fn click(&mut self, name: &str, value: &str) {
        let target = self.target("click", name, value);
        self.dispatch("click", Box::new(SerializedMouseData::default()), target);
    }

    fn click_nav(&mut self, section: Section) {
        self.click("data-section", section.slug());
    }

    fn submit_form(&mut self) -> Event<dyn Any> {
        let target = self
            .listeners
            .iter()
            .rev()
            .find(|(known, _)| known == "submit")
            .map(|(_, id)| *id)
            .expect("a mounted form");
        let data = SerializedFormData::new(String::new(), HashMap::new());
        self.dispatch("submit", Box::new(data), target)
    }

    /// Fire `animationend` for `keyframes` on the panel of `section`
    fn end_animation(&mut self, section: Section, keyframes: &str) {
        let target = self.target("animationend", "id", &format!("panel-{section}"));
        let data: SerializedAnimationData = serde_json::from_value(serde_json::json!({
            "animation_name": keyframes,
            "pseudo_element": "",
            "elapsed_time": 0.4,
        }))
        .unwrap();
        self.dispatch("animationend", Box::new(data), target);
    }

    /// Sections of the mounted panels, split into active and leaving
    fn panels(&self) -> (Vec<String>, Vec<String>) {
        let mut active = Vec::new();
        let mut leaving = Vec::new();
        for id in self.attributes.keys() {
            let Some(section) = self.attribute(*id, "data-section") else {
                continue;
            };
            match self.attribute(*id, "class") {
                Some("panel panel-active") => active.push(section.to_string()),
                Some("panel panel-leaving") => leaving.push(section.to_string()),
                _ => {}
            }
        }
        (active, leaving)
    }

    fn active(&self) -> String {
        let (active, _) = self.panels();
        assert_eq!(active.len(), 1, "exactly one active panel, got {active:?}");
        active[0].clone()
    }

    fn html(&self) -> String {
        dioxus::ssr::render(&self.dom)
    }
}

#[test]
fn test_nav_links_switch_panels() {
    let mut page = Page::open(Site);
    assert_eq!(page.active(), "landing");

    for section in Section::NAV {
        page.click_nav(section);
        assert_eq!(page.active(), section.slug());

        let html = page.html();
        assert_eq!(html.matches("nav-link-active").count(), 1);
        assert!(html.contains(&format!(r#"id="panel-{section}""#)));
    }
}

#[test]
fn test_brand_click_from_buyers_returns_to_landing() {
    let mut page = Page::open(Site);
    page.click_nav(Section::Buyers);
    page.end_animation(Section::Landing, "fade-rise-out");
    assert_eq!(page.active(), "buyers");

    page.click("data-target", "landing");

    assert_eq!(page.active(), "landing");
    let html = page.html();
    assert!(!html.contains("nav-link-active"));
    assert!(html.contains("The Marketplace for"));
}

#[test]
fn test_landing_buttons_open_engines() {
    let mut page = Page::open(Site);
    page.click("data-target", "buyers");
    assert_eq!(page.active(), "buyers");

    page.click("data-target", "landing");
    page.click("data-target", "sellers");
    assert_eq!(page.active(), "sellers");
}

#[test]
fn test_clicking_active_link_changes_nothing() {
    let mut page = Page::open(Site);
    page.click_nav(Section::Faq);
    page.end_animation(Section::Landing, "fade-rise-out");
    let before = page.html();

    page.click_nav(Section::Faq);

    assert_eq!(page.html(), before);
    assert!(!before.contains("panel-leaving"));
}

#[test]
fn test_faq_reentry_collapses_every_entry() {
    let mut page = Page::open(Site);
    page.click_nav(Section::Faq);
    page.click("id", "faq-question-0");

    let html = page.html();
    assert_eq!(html.matches(r#"aria-expanded="true""#).count(), 1);
    assert_eq!(html.matches(r#"aria-controls="faq-answer-0""#).count(), 1);

    page.click_nav(Section::Buyers);
    page.end_animation(Section::Faq, "slide-out");
    assert!(!page.html().contains("faq-item"));

    page.click_nav(Section::Faq);

    let html = page.html();
    assert_eq!(html.matches("glass-card faq-item").count(), 4);
    assert_eq!(html.matches(r#"aria-expanded="false""#).count(), 4);
    assert!(!html.contains(r#"aria-expanded="true""#));
    assert!(!html.contains("aria-controls"));
}

#[test]
fn test_faq_reentry_before_exit_finishes_still_resets() {
    let mut page = Page::open(Site);
    page.click_nav(Section::Faq);
    page.end_animation(Section::Landing, "fade-rise-out");
    page.click("id", "faq-question-0");

    page.click_nav(Section::Buyers);
    page.click_nav(Section::Faq);

    let (active, leaving) = page.panels();
    assert_eq!(active, ["faq"]);
    assert_eq!(leaving, ["buyers"]);
    let html = page.html();
    assert_eq!(html.matches("glass-card faq-item").count(), 4);
    assert!(!html.contains("faq-item-open"));
}

#[test]
fn test_faq_entries_toggle_independently() {
    let mut page = Page::open(Site);
    page.click_nav(Section::Faq);

    page.click("id", "faq-question-1");
    page.click("id", "faq-question-3");
    let html = page.html();
    assert_eq!(html.matches(r#"aria-expanded="true""#).count(), 2);
    assert!(html.contains(r#"id="faq-answer-1""#));
    assert!(html.contains(r#"id="faq-answer-3""#));

    page.click("id", "faq-question-1");
    let html = page.html();
    assert_eq!(html.matches(r#"aria-expanded="true""#).count(), 1);
    assert!(!html.contains(r#"id="faq-answer-1""#));
    assert!(html.contains(r#"id="faq-answer-3""#));
}

#[test]
fn test_leaving_panel_keeps_its_state() {
    let mut page = Page::open(Site);
    page.click_nav(Section::Faq);
    page.end_animation(Section::Landing, "fade-rise-out");
    page.click("id", "faq-question-2");

    page.click_nav(Section::Contact);

    let (active, leaving) = page.panels();
    assert_eq!(active, ["contact"]);
    assert_eq!(leaving, ["faq"]);
    let html = page.html();
    assert!(html.contains("faq-item-open"));
    assert!(html.contains(r#"id="faq-answer-2""#));
}

#[test]
fn test_only_the_exit_animation_unmounts_the_leaving_panel() {
    let mut page = Page::open(Site);
    page.click_nav(Section::Buyers);

    // an animation nested inside the panel bubbles up with its own name
    page.end_animation(Section::Landing, "expand-in");
    assert_eq!(page.panels().1, ["landing"]);

    page.end_animation(Section::Landing, "fade-rise-out");
    assert!(page.panels().1.is_empty());
    assert!(!page.html().contains("The Marketplace for"));
}

#[test]
fn test_contact_submit_stays_on_contact() {
    let mut page = Page::open(Site);
    page.click_nav(Section::Contact);
    page.end_animation(Section::Landing, "fade-rise-out");
    let before = page.html();

    let event = page.submit_form();

    assert!(!event.default_action_enabled());
    assert_eq!(page.active(), "contact");
    assert_eq!(page.html(), before);
}
