use foundation::{Time, TimeSpan};

/// Entrance transition applied to one element.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum Motion {
    /// Blocks and cards: rise 20px while fading in.
    #[default]
    FadeUp,
    /// List items: slide in 10px from the left.
    SlideIn,
    /// Hero copy: rise 20px, slower.
    Hero,
    /// Portrait: grow from 80% scale.
    Pop,
}

impl Motion {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fade-up" | "fade_up" | "fade" => Some(Motion::FadeUp),
            "slide-in" | "slide_in" | "slide" => Some(Motion::SlideIn),
            "hero" => Some(Motion::Hero),
            "pop" | "scale" => Some(Motion::Pop),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Motion::FadeUp => "fade-up",
            Motion::SlideIn => "slide-in",
            Motion::Hero => "hero",
            Motion::Pop => "pop",
        }
    }

    /// Transition length; always within `[0.5, 0.7]` seconds.
    pub fn duration_s(self) -> f64 {
        match self {
            Motion::FadeUp => 0.6,
            Motion::SlideIn => 0.5,
            Motion::Hero | Motion::Pop => 0.7,
        }
    }

    /// Starting translation in CSS pixels, `[x, y]`.
    pub fn from_offset_px(self) -> [f64; 2] {
        match self {
            Motion::FadeUp | Motion::Hero => [0.0, 20.0],
            Motion::SlideIn => [-10.0, 0.0],
            Motion::Pop => [0.0, 0.0],
        }
    }

    pub fn from_scale(self) -> f64 {
        match self {
            Motion::Pop => 0.8,
            _ => 1.0,
        }
    }
}

/// Timing for one staggered child, relative to the moment the reveal starts.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ChildMotion {
    pub index: usize,
    pub motion: Motion,
    pub span: TimeSpan,
}

impl ChildMotion {
    pub fn delay_s(&self) -> f64 {
        self.span.start.seconds()
    }

    pub fn duration_s(&self) -> f64 {
        self.span.duration()
    }
}

/// Staggered entrance sequence for a group of children.
///
/// Child `i` starts at `base_delay + i * stagger` and runs for its motion's
/// duration. Children are stored in index order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RevealPlan {
    children: Vec<ChildMotion>,
}

impl RevealPlan {
    pub fn staggered(motions: &[Motion], base_delay_s: f64, stagger_s: f64) -> Self {
        let base = base_delay_s.max(0.0);
        let stagger = stagger_s.max(0.0);
        let children = motions
            .iter()
            .enumerate()
            .map(|(index, motion)| ChildMotion {
                index,
                motion: *motion,
                span: TimeSpan::new(Time(base + index as f64 * stagger), motion.duration_s()),
            })
            .collect();
        Self { children }
    }

    pub fn children(&self) -> &[ChildMotion] {
        &self.children
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ChildMotion> {
        self.children.get(index)
    }

    /// Time until the last child settles.
    pub fn total_duration_s(&self) -> f64 {
        self.children
            .iter()
            .map(|c| c.span.end.seconds())
            .fold(0.0, f64::max)
    }
}

#[cfg(test)]
mod tests {
    use super::{Motion, RevealPlan};

    #[test]
    fn children_are_staggered_by_a_fixed_step() {
        let plan = RevealPlan::staggered(
            &[Motion::FadeUp, Motion::FadeUp, Motion::SlideIn, Motion::FadeUp],
            0.0,
            0.1,
        );
        assert_eq!(plan.len(), 4);
        for (i, child) in plan.children().iter().enumerate() {
            assert_eq!(child.index, i);
            assert!((child.delay_s() - 0.1 * i as f64).abs() < 1e-9);
        }
        assert_eq!(plan.get(2).unwrap().motion, Motion::SlideIn);
    }

    #[test]
    fn durations_stay_in_range() {
        for m in [Motion::FadeUp, Motion::SlideIn, Motion::Hero, Motion::Pop] {
            let d = m.duration_s();
            assert!((0.5..=0.7).contains(&d), "{m:?} runs {d}s");
        }
    }

    #[test]
    fn total_duration_covers_last_child() {
        let plan = RevealPlan::staggered(&[Motion::Hero, Motion::SlideIn], 0.2, 0.1);
        // Hero: 0.2 + 0.7, SlideIn: 0.3 + 0.5
        assert!((plan.total_duration_s() - 0.9).abs() < 1e-9);
        assert_eq!(RevealPlan::default().total_duration_s(), 0.0);
    }

    #[test]
    fn parse_round_trips_names() {
        for m in [Motion::FadeUp, Motion::SlideIn, Motion::Hero, Motion::Pop] {
            assert_eq!(Motion::parse(m.as_str()), Some(m));
        }
        assert_eq!(Motion::parse("wobble"), None);
    }

    #[test]
    fn negative_inputs_are_clamped() {
        let plan = RevealPlan::staggered(&[Motion::FadeUp, Motion::FadeUp], -1.0, -0.1);
        assert_eq!(plan.get(1).unwrap().delay_s(), 0.0);
    }
}
