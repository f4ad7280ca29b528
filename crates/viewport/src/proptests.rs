use std::collections::BTreeMap;

use foundation::{SectionId, Time};
use proptest::prelude::*;
use runtime::Tick;

use crate::config::DEFAULT_REVEAL_THRESHOLD;
use crate::events::UiEvent;
use crate::observer::ScrollObserver;
use crate::scroll::ScrollSample;

fn section() -> impl Strategy<Value = SectionId> {
    prop::sample::select(SectionId::ALL.to_vec())
}

proptest! {
    #[test]
    fn scroll_top_flag_matches_offset(
        offset in -1.0e4f64..1.0e7,
        document in 0.0f64..1.0e7,
        viewport in 0.0f64..1.0e5,
    ) {
        let mut obs = ScrollObserver::default();
        obs.on_scroll(ScrollSample::new(offset, document, viewport));
        prop_assert_eq!(obs.show_scroll_top(), offset > 300.0);
    }

    #[test]
    fn progress_stays_in_unit_interval(
        offset in -1.0e4f64..1.0e7,
        document in 0.0f64..1.0e7,
        viewport in 0.0f64..1.0e5,
    ) {
        let mut obs = ScrollObserver::default();
        obs.on_scroll(ScrollSample::new(offset, document, viewport));
        let p = obs.progress().get();
        prop_assert!((0.0..=1.0).contains(&p), "progress {}", p);
    }

    #[test]
    fn progress_endpoints(viewport in 1.0f64..5.0e3, extra in 1.0f64..1.0e6) {
        let document = viewport + extra;
        let mut obs = ScrollObserver::default();
        obs.on_scroll(ScrollSample::new(document - viewport, document, viewport));
        prop_assert_eq!(obs.progress().get(), 1.0);
        obs.on_scroll(ScrollSample::new(0.0, document, viewport));
        prop_assert_eq!(obs.progress().get(), 0.0);
    }

    #[test]
    fn latches_follow_the_first_crossing_and_never_revert(
        readings in prop::collection::vec((section(), 0.0f64..=1.0), 0..64),
    ) {
        let mut obs = ScrollObserver::default();
        let mut crossed: BTreeMap<SectionId, bool> = BTreeMap::new();
        let mut reveals: BTreeMap<SectionId, usize> = BTreeMap::new();

        for (id, ratio) in readings {
            obs.on_section_intersect(id, ratio);
            *crossed.entry(id).or_default() |= ratio >= DEFAULT_REVEAL_THRESHOLD;

            for ev in obs.drain_events() {
                if let UiEvent::SectionRevealed { section, .. } = ev {
                    *reveals.entry(section).or_default() += 1;
                }
            }
            for s in SectionId::ALL {
                let expected = crossed.get(&s).copied().unwrap_or(false);
                prop_assert_eq!(obs.is_section_visible(s), expected);
            }
        }

        for s in SectionId::ALL {
            let expected = usize::from(crossed.get(&s).copied().unwrap_or(false));
            prop_assert_eq!(reveals.get(&s).copied().unwrap_or(0), expected);
        }
    }

    #[test]
    fn scroll_to_top_descends_to_exactly_zero(start in 1.0e-3f64..1.0e6, fps in 20.0f64..240.0) {
        let mut obs = ScrollObserver::default();
        obs.on_scroll(ScrollSample::new(start, start + 2000.0, 800.0));
        obs.scroll_to_top();
        prop_assert!(obs.is_scrolling_to_top());

        let mut tick = Tick::first(Time(0.0));
        let mut last = start;
        for _ in 0..10_000 {
            tick = tick.next(Time(tick.now.seconds() + 1.0 / fps));
            let more = obs.advance(tick);
            for ev in obs.drain_events() {
                if let UiEvent::ScrollTo { offset_y } = ev {
                    prop_assert!(offset_y <= last, "{} rose above {}", offset_y, last);
                    last = offset_y;
                }
            }
            if !more {
                break;
            }
        }
        prop_assert!(!obs.is_scrolling_to_top());
        prop_assert_eq!(last, 0.0);
    }
}
