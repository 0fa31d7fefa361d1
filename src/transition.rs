//! Enter/exit animations for panels and disclosure bodies.
//!
//! Animations are CSS keyframes defined in `assets/main.css`; this module only picks
//! the keyframe pair and duration and produces the inline `animation` style.

use crate::config::TransitionTimings;
use crate::types::Section;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    /// Fade in while rising 20px
    FadeRise,
    /// Fade in from the right, leave to the left
    Slide,
    /// Fade in while growing from 95%
    Scale,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Enter,
    Exit,
}

impl Transition {
    pub fn for_section(section: Section) -> Self {
        match section {
            Section::Landing => Transition::FadeRise,
            Section::Buyers | Section::Sellers | Section::Faq => Transition::Slide,
            Section::Contact => Transition::Scale,
        }
    }

    pub fn duration_ms(self, timings: &TransitionTimings) -> u32 {
        match self {
            Transition::FadeRise => timings.fade_rise_ms,
            Transition::Slide => timings.slide_ms,
            Transition::Scale => timings.scale_ms,
        }
    }

    pub fn keyframes(self, phase: Phase) -> &'static str {
        match (self, phase) {
            (Transition::FadeRise, Phase::Enter) => "fade-rise-in",
            (Transition::FadeRise, Phase::Exit) => "fade-rise-out",
            (Transition::Slide, Phase::Enter) => "slide-in",
            (Transition::Slide, Phase::Exit) => "slide-out",
            (Transition::Scale, Phase::Enter) => "scale-in",
            (Transition::Scale, Phase::Exit) => "scale-out",
        }
    }

    /// Inline style for the element being animated
    pub fn style(self, phase: Phase, timings: &TransitionTimings) -> String {
        let easing = match phase {
            Phase::Enter => "ease-out",
            Phase::Exit => "ease-in",
        };
        format!(
            "animation: {} {}ms {} both;",
            self.keyframes(phase),
            self.duration_ms(timings),
            easing
        )
    }
}

/// Height-expand style for a disclosure body. Collapsing unmounts the body at once,
/// so there is no matching exit.
pub fn expand_style(timings: &TransitionTimings) -> String {
    format!("animation: expand-in {}ms ease-out both;", timings.disclosure_ms)
}
