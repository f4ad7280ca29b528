use foundation::{Time, TimeSpan};

/// Ease-out cubic: fast start, gentle landing.
pub fn ease_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

#[derive(Debug, Copy, Clone, PartialEq)]
struct ActiveScroll {
    from_y: f64,
    to_y: f64,
    span: TimeSpan,
    elapsed_s: f64,
}

/// Frame-driven smooth scroll animation.
///
/// Time advances only through [`SmoothScroll::step`], so the animation is
/// deterministic for a given sequence of frame deltas.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SmoothScroll {
    active: Option<ActiveScroll>,
}

impl SmoothScroll {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts (or restarts) an animation from `from_y` to `to_y`.
    ///
    /// Returns `false` and stays idle when `from_y` is already at the target.
    pub fn start(&mut self, from_y: f64, to_y: f64, duration_s: f64) -> bool {
        if !from_y.is_finite() || !to_y.is_finite() || from_y == to_y {
            self.active = None;
            return false;
        }
        self.active = Some(ActiveScroll {
            from_y,
            to_y,
            span: TimeSpan::new(Time::ZERO, duration_s),
            elapsed_s: 0.0,
        });
        true
    }

    pub fn cancel(&mut self) -> bool {
        self.active.take().is_some()
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Advances by `dt_s` and returns the offset to scroll to this frame.
    ///
    /// The final frame returns exactly the target and leaves the animation
    /// idle. Returns `None` when idle.
    pub fn step(&mut self, dt_s: f64) -> Option<f64> {
        let active = self.active.as_mut()?;
        if dt_s.is_finite() && dt_s > 0.0 {
            active.elapsed_s += dt_s;
        }
        let now = Time(active.elapsed_s);
        if active.span.is_finished_at(now) {
            let to_y = active.to_y;
            self.active = None;
            return Some(to_y);
        }
        let eased = ease_out_cubic(active.span.fraction_at(now));
        Some(active.from_y + (active.to_y - active.from_y) * eased)
    }
}
