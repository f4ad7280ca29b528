use foundation::time::Time;

/// Animation frame metadata.
///
/// Built from successive `requestAnimationFrame` timestamps. `dt_s` is clamped
/// so a frame delivered after the tab was backgrounded advances animations by
/// at most [`Tick::MAX_DT_S`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Tick {
    /// 0-based frame index since the animation loop started.
    pub index: u64,
    /// Host timestamp of this frame.
    pub now: Time,
    /// Effective delta since the previous frame (seconds).
    pub dt_s: f64,
}

impl Tick {
    pub const MAX_DT_S: f64 = 0.1;

    pub fn first(now: Time) -> Self {
        Self {
            index: 0,
            now,
            dt_s: 0.0,
        }
    }

    pub fn next(self, now: Time) -> Self {
        let raw = now.since(self.now);
        let dt_s = if raw.is_finite() {
            raw.clamp(0.0, Self::MAX_DT_S)
        } else {
            0.0
        };
        Self {
            index: self.index.wrapping_add(1),
            now,
            dt_s,
        }
    }
}
