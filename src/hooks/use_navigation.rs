use dioxus::prelude::*;

use crate::controllers::{Navigator, PanelSlot};
use crate::types::Section;

/// Shared handle to the active section. Created once by the site root.
#[derive(Clone, Copy, PartialEq)]
pub struct NavigationState {
    pub navigator: Signal<Navigator>,
}

impl NavigationState {
    pub fn new(navigator: Navigator) -> Self {
        Self {
            navigator: Signal::new(navigator),
        }
    }

    pub fn is_active(&self, section: Section) -> bool {
        self.navigator.read().is_active(section)
    }

    pub fn panels(&self) -> Vec<PanelSlot> {
        self.navigator.read().panels().collect()
    }

    pub fn navigate(&mut self, target: Section) {
        let replaced = self.navigator.write().navigate(target);
        if let Some(from) = replaced {
            tracing::debug!(%from, to = %target, "navigate");
            scroll_to_top();
        }
    }

    pub fn finish_exit(&mut self, section: Section) {
        self.navigator.write().finish_exit(section);
    }
}

/// Create the navigation state at the site root and share it with descendants
pub fn use_navigation_provider() -> NavigationState {
    use_context_provider(|| NavigationState::new(Navigator::new()))
}

pub fn use_navigation() -> NavigationState {
    use_context::<NavigationState>()
}

#[cfg(target_arch = "wasm32")]
fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn scroll_to_top() {}
