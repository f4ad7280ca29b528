/// Time primitives
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd, Default)]
pub struct Time(pub f64); // seconds

impl Time {
    pub const ZERO: Time = Time(0.0);

    pub fn from_millis(ms: f64) -> Self {
        Time(ms / 1000.0)
    }

    pub fn seconds(self) -> f64 {
        self.0
    }

    pub fn since(self, earlier: Time) -> f64 {
        self.0 - earlier.0
    }
}

/// A window of time: `start` plus a non-negative duration.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TimeSpan {
    pub start: Time,
    pub end: Time,
}

impl TimeSpan {
    pub fn new(start: Time, duration_s: f64) -> Self {
        Self {
            start,
            end: Time(start.0 + duration_s.max(0.0)),
        }
    }

    pub fn duration(&self) -> f64 {
        (self.end.0 - self.start.0).max(0.0)
    }

    /// Normalized position of `t` inside the span, clamped to `[0, 1]`.
    ///
    /// Zero-length spans are complete as soon as they start.
    pub fn fraction_at(&self, t: Time) -> f64 {
        let d = self.duration();
        if d <= 0.0 {
            return if t.0 >= self.start.0 { 1.0 } else { 0.0 };
        }
        ((t.0 - self.start.0) / d).clamp(0.0, 1.0)
    }

    pub fn is_finished_at(&self, t: Time) -> bool {
        t.0 >= self.end.0
    }
}

#[cfg(test)]
mod tests {
    use super::{Time, TimeSpan};

    #[test]
    fn span_duration_is_never_negative() {
        let s = TimeSpan::new(Time(1.0), -3.0);
        assert_eq!(s.duration(), 0.0);
        assert_eq!(s.end, Time(1.0));
    }

    #[test]
    fn fraction_is_clamped() {
        let s = TimeSpan::new(Time(2.0), 0.5);
        assert_eq!(s.fraction_at(Time(1.0)), 0.0);
        assert_eq!(s.fraction_at(Time(2.25)), 0.5);
        assert_eq!(s.fraction_at(Time(9.0)), 1.0);
        assert!(s.is_finished_at(Time(2.5)));
        assert!(!s.is_finished_at(Time(2.49)));
    }

    #[test]
    fn zero_length_span_completes_immediately() {
        let s = TimeSpan::new(Time(3.0), 0.0);
        assert_eq!(s.fraction_at(Time(3.0)), 1.0);
        assert_eq!(s.fraction_at(Time(2.0)), 0.0);
    }

    #[test]
    fn millis_convert_to_seconds() {
        assert_eq!(Time::from_millis(1500.0), Time(1.5));
        assert_eq!(Time(2.0).since(Time(0.5)), 1.5);
    }
}
