use dioxus::prelude::*;

use crate::controllers::DisclosureList;

/// Expansion flags for one mounted FAQ list. Dropped with the panel, so every
/// visit starts collapsed.
#[derive(Clone, Copy, PartialEq)]
pub struct DisclosureState {
    pub list: Signal<DisclosureList>,
}

impl DisclosureState {
    pub fn is_expanded(&self, index: usize) -> bool {
        self.list.read().is_expanded(index)
    }

    pub fn toggle(&mut self, index: usize) {
        if let Some(open) = self.list.write().toggle(index) {
            tracing::debug!(index, open, "faq toggle");
        }
    }
}

pub fn use_disclosure(len: usize) -> DisclosureState {
    let list = use_signal(|| DisclosureList::collapsed(len));
    DisclosureState { list }
}
