/// A ratio clamped to `[0, 1]`.
///
/// Construction never fails for finite input; NaN collapses to 0.
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd, Default)]
pub struct Ratio(f64);

impl Ratio {
    pub const ZERO: Ratio = Ratio(0.0);
    pub const ONE: Ratio = Ratio(1.0);

    pub fn new(v: f64) -> Self {
        if v.is_nan() {
            return Ratio::ZERO;
        }
        Ratio(v.clamp(0.0, 1.0))
    }

    /// `numerator / denominator`, clamped.
    ///
    /// A non-positive denominator has nothing to measure against and yields 0.
    pub fn of(numerator: f64, denominator: f64) -> Self {
        if denominator <= 0.0 {
            return Ratio::ZERO;
        }
        Ratio::new(numerator / denominator)
    }

    pub fn get(self) -> f64 {
        self.0
    }

    pub fn as_percent(self) -> f64 {
        self.0 * 100.0
    }
}
