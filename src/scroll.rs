//! Scroll-driven presentation values for the hero section and the entrance
//! transitions of the other sections.

/// Progress range over which the hero overlay fades and shrinks.
const FADE_END: f64 = 0.2;
const MIN_SCALE: f64 = 0.8;

/// Fraction of the page scrolled, in `[0, 1]`.
pub fn scroll_progress(offset: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let scrollable = scroll_height - viewport_height;
    if scrollable <= 0.0 || !offset.is_finite() {
        return 0.0;
    }
    (offset / scrollable).clamp(0.0, 1.0)
}

/// Maps `value` from `[in_start, in_end]` onto `[out_start, out_end]`,
/// clamping outside the input range.
fn interpolate(value: f64, (in_start, in_end): (f64, f64), (out_start, out_end): (f64, f64)) -> f64 {
    let t = ((value - in_start) / (in_end - in_start)).clamp(0.0, 1.0);
    out_start + (out_end - out_start) * t
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeroOverlay {
    pub opacity: f64,
    pub scale: f64,
}

impl Default for HeroOverlay {
    fn default() -> Self {
        Self::from_progress(0.0)
    }
}

impl HeroOverlay {
    pub fn from_progress(progress: f64) -> Self {
        Self {
            opacity: interpolate(progress, (0.0, FADE_END), (1.0, 0.0)),
            scale: interpolate(progress, (0.0, FADE_END), (1.0, MIN_SCALE)),
        }
    }

    pub fn style(&self) -> String {
        format!(
            "opacity: {:.3}; transform: scale({:.3});",
            self.opacity, self.scale
        )
    }
}

/// One-way latch behind the entrance transitions: once a section has been
/// seen it stays revealed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Reveal {
    shown: bool,
}

impl Reveal {
    pub fn observe(&mut self, visible: bool) -> bool {
        self.shown |= visible;
        self.shown
    }

    pub fn is_shown(&self) -> bool {
        self.shown
    }

    pub fn class(&self) -> &'static str {
        if self.shown {
            "opacity-100 translate-y-0"
        } else {
            "opacity-0 translate-y-12"
        }
    }
}
