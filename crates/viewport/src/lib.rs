//! Scroll and viewport observation for the portfolio page.
//!
//! The observer turns raw scroll samples and per-section intersection ratios
//! into derived UI state (progress, scroll-to-top visibility, one-shot section
//! reveals) and publishes the resulting changes as [`UiEvent`]s.

pub mod config;
pub mod events;
pub mod latch;
pub mod observer;
pub mod reveal;
pub mod scroll;
pub mod smooth_scroll;

#[cfg(test)]
mod proptests;

pub use config::*;
pub use events::*;
pub use latch::*;
pub use observer::*;
pub use reveal::*;
pub use scroll::*;
pub use smooth_scroll::*;
