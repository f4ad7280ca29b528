use std::collections::BTreeMap;

use foundation::SectionId;

/// Per-section entrance state. `Visible` is terminal for a page view.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum RevealState {
    #[default]
    Hidden,
    Visible,
}

/// One-shot visibility latches keyed by section.
///
/// Ordering contract: iteration follows `SectionId` order (page order).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionLatches {
    states: BTreeMap<SectionId, RevealState>,
}

impl Default for SectionLatches {
    fn default() -> Self {
        Self {
            states: SectionId::ALL
                .into_iter()
                .map(|id| (id, RevealState::Hidden))
                .collect(),
        }
    }
}

impl SectionLatches {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self, id: SectionId) -> RevealState {
        self.states.get(&id).copied().unwrap_or_default()
    }

    pub fn is_visible(&self, id: SectionId) -> bool {
        self.state(id) == RevealState::Visible
    }

    /// Feeds one intersection reading.
    ///
    /// Returns `true` only for the reading that moves the section from
    /// `Hidden` to `Visible`. Readings below `threshold` never change state.
    pub fn observe(&mut self, id: SectionId, ratio: f64, threshold: f64) -> bool {
        if ratio < threshold {
            return false;
        }
        let state = self.states.entry(id).or_default();
        if *state == RevealState::Visible {
            return false;
        }
        *state = RevealState::Visible;
        true
    }

    pub fn visible_count(&self) -> usize {
        self.states
            .values()
            .filter(|s| **s == RevealState::Visible)
            .count()
    }

    pub fn iter(&self) -> impl Iterator<Item = (SectionId, RevealState)> + '_ {
        self.states.iter().map(|(id, s)| (*id, *s))
    }
}

#[cfg(test)]
mod tests {
    use super::{RevealState, SectionLatches};
    use foundation::SectionId;

    #[test]
    fn every_section_starts_hidden() {
        let latches = SectionLatches::new();
        for id in SectionId::ALL {
            assert_eq!(latches.state(id), RevealState::Hidden);
        }
        assert_eq!(latches.visible_count(), 0);
    }

    #[test]
    fn latches_once_at_threshold() {
        let mut latches = SectionLatches::new();
        assert!(!latches.observe(SectionId::Skills, 0.15, 0.2));
        assert!(!latches.is_visible(SectionId::Skills));
        assert!(latches.observe(SectionId::Skills, 0.2, 0.2));
        assert!(latches.is_visible(SectionId::Skills));
        assert!(!latches.observe(SectionId::Skills, 0.9, 0.2));
    }

    #[test]
    fn never_reverts_when_ratio_drops() {
        let mut latches = SectionLatches::new();
        latches.observe(SectionId::About, 0.5, 0.2);
        latches.observe(SectionId::About, 0.0, 0.2);
        assert!(latches.is_visible(SectionId::About));
        assert!(!latches.is_visible(SectionId::Contact));
    }

    #[test]
    fn iterates_in_page_order() {
        let mut latches = SectionLatches::new();
        for id in SectionId::ALL {
            latches.observe(id, 1.0, 0.2);
        }
        assert_eq!(latches.visible_count(), SectionId::ALL.len());
        let order: Vec<_> = latches.iter().map(|(id, _)| id).collect();
        assert_eq!(order, SectionId::ALL.to_vec());
    }
}
