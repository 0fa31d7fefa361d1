use crate::transition::Phase;
use crate::types::Section;

/// Which panel is shown, plus the panel still playing its exit animation.
///
/// The leaving section is cosmetic only: it is rendered inert and dropped as soon
/// as its exit finishes or another navigation replaces it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Navigator {
    active: Section,
    visit: u32,
    leaving: Option<(Section, u32)>,
}

/// One panel to mount. `visit` changes every time a section becomes active, so
/// coming back to a section always mounts a fresh instance while the same
/// instance is kept from active through its exit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PanelSlot {
    pub section: Section,
    pub phase: Phase,
    pub visit: u32,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Section {
        self.active
    }

    pub fn is_active(&self, section: Section) -> bool {
        self.active() == section
    }

    pub fn leaving(&self) -> Option<Section> {
        self.leaving.map(|(section, _)| section)
    }

    /// Panels to render, the leaving one first
    pub fn panels(&self) -> impl Iterator<Item = PanelSlot> {
        let leaving = self.leaving.map(|(section, visit)| PanelSlot {
            section,
            phase: Phase::Exit,
            visit,
        });
        let active = PanelSlot {
            section: self.active,
            phase: Phase::Enter,
            visit: self.visit,
        };
        leaving.into_iter().chain(std::iter::once(active))
    }

    /// Make `target` the active section. Returns the section that was replaced,
    /// or `None` when `target` was already active.
    ///
    /// Any exit animation still in flight is superseded, never queued.
    pub fn navigate(&mut self, target: Section) -> Option<Section> {
        if self.active == target {
            return None;
        }
        let previous = self.active;
        self.leaving = Some((previous, self.visit));
        self.active = target;
        self.visit = self.visit.wrapping_add(1);
        Some(previous)
    }

    /// Exit animation for `section` finished. Ignored if a later navigation already
    /// replaced the leaving section.
    pub fn finish_exit(&mut self, section: Section) {
        if self.leaving() == Some(section) {
            self.leaving = None;
        }
    }
}
