use foundation::Ratio;

/// One reading of the page scroll position.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ScrollSample {
    /// Vertical scroll offset in CSS pixels. May be slightly negative during
    /// elastic overscroll.
    pub offset_y: f64,
    pub document_height: f64,
    pub viewport_height: f64,
}

impl ScrollSample {
    pub fn new(offset_y: f64, document_height: f64, viewport_height: f64) -> Self {
        Self {
            offset_y,
            document_height,
            viewport_height,
        }
    }

    /// Finite offset and finite, non-negative heights.
    pub fn is_well_formed(&self) -> bool {
        self.offset_y.is_finite()
            && self.document_height.is_finite()
            && self.viewport_height.is_finite()
            && self.document_height >= 0.0
            && self.viewport_height >= 0.0
    }

    /// Distance the page can scroll; zero when content fits the viewport.
    pub fn scrollable_height(&self) -> f64 {
        (self.document_height - self.viewport_height).max(0.0)
    }

    pub fn progress(&self) -> Ratio {
        Ratio::of(self.offset_y, self.scrollable_height())
    }
}
