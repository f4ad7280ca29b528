use std::collections::BTreeMap;

use foundation::{Ratio, SectionId};
use runtime::{EventBus, Metrics, MetricsSnapshot, Tick};
use tracing::{debug, trace};

use crate::config::ObserverConfig;
use crate::events::UiEvent;
use crate::latch::{RevealState, SectionLatches};
use crate::reveal::{Motion, RevealPlan};
use crate::scroll::ScrollSample;
use crate::smooth_scroll::SmoothScroll;

/// Scroll/viewport observer.
///
/// Owns the derived page state and is the only writer of it:
/// - `progress`: `offset / (document - viewport)`, clamped to `[0, 1]`.
/// - `show_scroll_top`: `offset > scroll_top_threshold_px`.
/// - per-section one-shot reveal latches.
///
/// Handlers never fail. Malformed input leaves state untouched and is only
/// counted in [`ScrollObserver::metrics`].
#[derive(Debug)]
pub struct ScrollObserver {
    config: ObserverConfig,
    offset_y: f64,
    progress: Ratio,
    show_scroll_top: bool,
    sections: SectionLatches,
    layouts: BTreeMap<SectionId, Vec<Motion>>,
    smooth: SmoothScroll,
    reduced_motion: bool,
    bus: EventBus<UiEvent>,
    metrics: Metrics,
}

impl Default for ScrollObserver {
    fn default() -> Self {
        Self::new(ObserverConfig::default())
    }
}

impl ScrollObserver {
    pub fn new(config: ObserverConfig) -> Self {
        Self {
            config,
            offset_y: 0.0,
            progress: Ratio::ZERO,
            show_scroll_top: false,
            sections: SectionLatches::new(),
            layouts: BTreeMap::new(),
            smooth: SmoothScroll::new(),
            reduced_motion: false,
            bus: EventBus::new(),
            metrics: Metrics::new(),
        }
    }

    pub fn config(&self) -> &ObserverConfig {
        &self.config
    }

    /// Drops all page-view state. Configuration and the reduced-motion
    /// preference survive.
    pub fn reset(&mut self) {
        *self = Self {
            reduced_motion: self.reduced_motion,
            ..Self::new(self.config)
        };
    }

    pub fn set_reduced_motion(&mut self, reduced: bool) {
        self.reduced_motion = reduced;
    }

    /// Registers the entrance motions of a section's staggered children, in
    /// document order.
    pub fn set_section_layout(&mut self, section: SectionId, motions: Vec<Motion>) {
        self.layouts.insert(section, motions);
    }

    pub fn offset_y(&self) -> f64 {
        self.offset_y
    }

    pub fn progress(&self) -> Ratio {
        self.progress
    }

    pub fn show_scroll_top(&self) -> bool {
        self.show_scroll_top
    }

    pub fn section_state(&self, section: SectionId) -> RevealState {
        self.sections.state(section)
    }

    pub fn is_section_visible(&self, section: SectionId) -> bool {
        self.sections.is_visible(section)
    }

    pub fn sections(&self) -> &SectionLatches {
        &self.sections
    }

    pub fn is_scrolling_to_top(&self) -> bool {
        self.smooth.is_active()
    }

    pub fn events(&self) -> &[UiEvent] {
        self.bus.events()
    }

    pub fn drain_events(&mut self) -> Vec<UiEvent> {
        self.bus.drain()
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    pub fn metrics_snapshot(&self) -> MetricsSnapshot {
        self.metrics.snapshot()
    }

    /// Handles one scroll event.
    pub fn on_scroll(&mut self, sample: ScrollSample) {
        if !sample.is_well_formed() {
            self.metrics.inc("scroll.ignored");
            trace!(?sample, "ignoring malformed scroll sample");
            return;
        }
        self.metrics.inc("scroll.samples");

        self.offset_y = sample.offset_y;

        let show = sample.offset_y > self.config.scroll_top_threshold_px;
        if show != self.show_scroll_top {
            self.show_scroll_top = show;
            self.bus.emit(UiEvent::ScrollTopVisibilityChanged(show));
        }

        let progress = sample.progress();
        if progress != self.progress {
            self.progress = progress;
            self.metrics.set_gauge("scroll.progress", progress.get());
            self.bus.emit(UiEvent::ProgressChanged(progress));
        }
    }

    /// Handles one intersection reading for `section`.
    ///
    /// Returns `true` when this reading revealed the section.
    pub fn on_section_intersect(&mut self, section: SectionId, intersection_ratio: f64) -> bool {
        if !intersection_ratio.is_finite() || !(0.0..=1.0).contains(&intersection_ratio) {
            self.metrics.inc("intersect.ignored");
            return false;
        }
        self.metrics.inc("intersect.samples");

        if !self
            .sections
            .observe(section, intersection_ratio, self.config.reveal_threshold)
        {
            return false;
        }

        let motions = self.layouts.get(&section).map(Vec::as_slice).unwrap_or(&[]);
        let plan = RevealPlan::staggered(motions, 0.0, self.config.stagger_s);
        debug!(
            %section,
            ratio = intersection_ratio,
            children = plan.len(),
            settles_s = plan.total_duration_s(),
            "section revealed"
        );
        self.metrics.inc("section.revealed");
        self.bus.emit(UiEvent::SectionRevealed { section, plan });
        true
    }

    /// Same as [`Self::on_section_intersect`], keyed by anchor or label.
    /// Unknown names are ignored.
    pub fn on_section_intersect_named(&mut self, name: &str, intersection_ratio: f64) -> bool {
        match SectionId::parse(name) {
            Some(section) => self.on_section_intersect(section, intersection_ratio),
            None => {
                self.metrics.inc("intersect.ignored");
                trace!(name, "ignoring intersection for unknown section");
                false
            }
        }
    }

    /// Starts animating the viewport back to offset 0.
    ///
    /// No-op when already at the top. Frames are produced by
    /// [`Self::advance`].
    pub fn scroll_to_top(&mut self) {
        let duration = if self.reduced_motion {
            0.0
        } else {
            self.config.smooth_scroll_duration_s
        };
        if self.smooth.start(self.offset_y.max(0.0), 0.0, duration) {
            self.metrics.inc("scroll_to_top.started");
            debug!(from = self.offset_y, duration, "scroll to top");
        }
    }

    /// Aborts an in-flight scroll to top, e.g. when the user scrolls manually.
    pub fn cancel_scroll_to_top(&mut self) {
        if self.smooth.cancel() {
            self.metrics.inc("scroll_to_top.cancelled");
            debug!(at = self.offset_y, "scroll to top cancelled");
        }
    }

    /// Advances animations by one frame. Returns `true` while more frames are
    /// needed.
    pub fn advance(&mut self, tick: Tick) -> bool {
        let Some(offset_y) = self.smooth.step(tick.dt_s) else {
            return false;
        };
        self.bus.emit(UiEvent::ScrollTo { offset_y });
        if self.smooth.is_active() {
            return true;
        }
        self.metrics.inc("scroll_to_top.finished");
        self.bus.emit(UiEvent::ScrollToTopFinished);
        false
    }
}
