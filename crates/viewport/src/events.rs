use foundation::{Ratio, SectionId};

use crate::reveal::RevealPlan;

/// Derived UI changes published by [`crate::ScrollObserver`].
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    /// New width for the progress indicator.
    ProgressChanged(Ratio),
    /// The scroll-to-top control should appear (`true`) or go away.
    ScrollTopVisibilityChanged(bool),
    /// A section crossed the reveal threshold for the first time.
    SectionRevealed {
        section: SectionId,
        plan: RevealPlan,
    },
    /// Move the viewport to this vertical offset (smooth scroll frame).
    ScrollTo { offset_y: f64 },
    ScrollToTopFinished,
}

impl UiEvent {
    pub fn kind(&self) -> &'static str {
        match self {
            UiEvent::ProgressChanged(_) => "progress",
            UiEvent::ScrollTopVisibilityChanged(_) => "scroll_top_visibility",
            UiEvent::SectionRevealed { .. } => "section_revealed",
            UiEvent::ScrollTo { .. } => "scroll_to",
            UiEvent::ScrollToTopFinished => "scroll_to_top_finished",
        }
    }
}
