use serde::{Deserialize, Serialize};

pub const DEFAULT_SCROLL_TOP_THRESHOLD_PX: f64 = 300.0;
pub const DEFAULT_REVEAL_THRESHOLD: f64 = 0.2;
pub const DEFAULT_STAGGER_S: f64 = 0.1;
pub const DEFAULT_SMOOTH_SCROLL_DURATION_S: f64 = 0.6;

/// Tunables for [`crate::ScrollObserver`].
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObserverConfig {
    /// The scroll-to-top control shows once the offset is strictly above this.
    pub scroll_top_threshold_px: f64,
    /// Minimum intersection ratio that latches a section visible.
    pub reveal_threshold: f64,
    /// Delay between consecutive children of a revealed section.
    pub stagger_s: f64,
    pub smooth_scroll_duration_s: f64,
}

impl Default for ObserverConfig {
    fn default() -> Self {
        Self {
            scroll_top_threshold_px: DEFAULT_SCROLL_TOP_THRESHOLD_PX,
            reveal_threshold: DEFAULT_REVEAL_THRESHOLD,
            stagger_s: DEFAULT_STAGGER_S,
            smooth_scroll_duration_s: DEFAULT_SMOOTH_SCROLL_DURATION_S,
        }
    }
}

impl ObserverConfig {
    /// Returns a description of the first out-of-range value, if any.
    pub fn validate(&self) -> Result<(), String> {
        if !self.scroll_top_threshold_px.is_finite() || self.scroll_top_threshold_px < 0.0 {
            return Err(format!(
                "scroll_top_threshold_px must be a non-negative number, got {}",
                self.scroll_top_threshold_px
            ));
        }
        if !(0.0..=1.0).contains(&self.reveal_threshold) {
            return Err(format!(
                "reveal_threshold must be within [0, 1], got {}",
                self.reveal_threshold
            ));
        }
        if !self.stagger_s.is_finite() || self.stagger_s < 0.0 {
            return Err(format!("stagger_s must be non-negative, got {}", self.stagger_s));
        }
        if !self.smooth_scroll_duration_s.is_finite() || self.smooth_scroll_duration_s < 0.0 {
            return Err(format!(
                "smooth_scroll_duration_s must be non-negative, got {}",
                self.smooth_scroll_duration_s
            ));
        }
        Ok(())
    }
}
