#![forbid(unsafe_code)]

//! Carousel tuning parameters.

use web_time::Duration;

/// Tuning knobs for carousel behavior.
///
/// Defaults reproduce the reference feel: 150px items on a 190px stride,
/// three catalog copies, snappy 1.5× drag gain, and a 5s auto-advance
/// cadence.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CarouselConfig {
    /// Catalog repetitions in the strip (slack for rewrapping).
    pub copies: usize,

    /// Rendered width of one instance, in pixels.
    pub item_width: f32,

    /// Gap between instances, in pixels. Stride = item width + gap.
    pub item_gap: f32,

    /// Multiplier from physical pointer travel to scroll distance.
    pub drag_gain: f32,

    /// Fraction of out-of-bounds overshoot honored while dragging
    /// (0.0 = hard wall, 1.0 = no resistance).
    pub rubber_resistance: f32,

    /// Multiplier from release velocity (px/ms) to momentum glide distance.
    pub momentum_gain: f32,

    /// Duration of the smooth snap onto an item boundary.
    pub snap_duration: Duration,

    /// Duration of the highlight pop replay.
    pub pop_duration: Duration,

    /// Interval between automatic advances while idle.
    pub auto_advance_period: Duration,

    /// Quiet period before auto-advance resumes after a drag release.
    pub resume_after_drag: Duration,

    /// Quiet period before auto-advance resumes after a manual slide.
    pub resume_after_slide: Duration,

    /// Fraction of the viewport excluded on each side of the focus band
    /// (0.2 keeps the central 60%).
    pub focus_margin: f32,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            copies: 3,
            item_width: 150.0,
            item_gap: 40.0,
            drag_gain: 1.5,
            rubber_resistance: 0.3,
            momentum_gain: 15.0,
            snap_duration: Duration::from_millis(300),
            pop_duration: Duration::from_millis(500),
            auto_advance_period: Duration::from_secs(5),
            resume_after_drag: Duration::from_secs(3),
            resume_after_slide: Duration::from_secs(5),
            focus_margin: 0.2,
        }
    }
}

impl CarouselConfig {
    /// Distance between successive instance starts.
    #[inline]
    #[must_use]
    pub fn stride(&self) -> f32 {
        self.item_width + self.item_gap
    }
}
