#![forbid(unsafe_code)]

//! Pointer drag tracking: gained offsets, velocity sampling, rubber-banding.
//!
//! A [`DragTracker`] is created at pointer-down and lives for one gesture.
//! It remembers the anchor position and the offset the strip had when the
//! gesture began; each pointer-move produces a candidate offset
//! (`start_offset - (x - anchor) * gain`) and refreshes a velocity estimate
//! in pixels per millisecond. The velocity seeds the momentum glide at
//! release.
//!
//! # Invariants
//!
//! 1. `candidate_offset` is a pure function of the anchor, start offset,
//!    gain, and the sampled x — repeated calls with the same x agree.
//! 2. A zero-interval sample keeps the previous velocity rather than
//!    dividing by zero.
//! 3. [`rubber_band`] is the identity inside `[0, max_offset]`.
//!
//! # Failure Modes
//!
//! - Pointer coordinates are trusted as finite; NaN input propagates.

use web_time::Instant;

// ---------------------------------------------------------------------------
// Rubber-banding
// ---------------------------------------------------------------------------

/// Apply damped resistance to an out-of-bounds candidate offset.
///
/// Below zero only `resistance` of the overshoot is honored
/// (`candidate * resistance`); past `max_offset` the same damping applies to
/// the excess (`max_offset + (candidate - max_offset) * resistance`).
/// In-range candidates pass through unchanged.
#[must_use]
pub fn rubber_band(candidate: f32, max_offset: f32, resistance: f32) -> f32 {
    if candidate < 0.0 {
        candidate * resistance
    } else if candidate > max_offset {
        max_offset + (candidate - max_offset) * resistance
    } else {
        candidate
    }
}

// ---------------------------------------------------------------------------
// DragTracker
// ---------------------------------------------------------------------------

/// State of one pointer-drag gesture, from pointer-down to release.
#[derive(Debug, Clone, Copy)]
pub struct DragTracker {
    anchor_x: f32,
    start_offset: f32,
    last_x: f32,
    last_sample: Instant,
    /// Pixels per millisecond, signed in pointer direction.
    velocity: f32,
    gain: f32,
    momentum_gain: f32,
}

impl DragTracker {
    /// Begin a gesture at pointer position `x` with the strip at
    /// `start_offset`.
    ///
    /// `gain` amplifies physical pointer travel into scroll distance;
    /// `momentum_gain` converts release velocity into glide distance.
    #[must_use]
    pub fn begin(x: f32, start_offset: f32, now: Instant, gain: f32, momentum_gain: f32) -> Self {
        Self {
            anchor_x: x,
            start_offset,
            last_x: x,
            last_sample: now,
            velocity: 0.0,
            gain,
            momentum_gain,
        }
    }

    /// The strip offset recorded at pointer-down.
    #[inline]
    #[must_use]
    pub fn start_offset(&self) -> f32 {
        self.start_offset
    }

    /// Candidate strip offset for the pointer at `x`, before rubber-banding.
    ///
    /// Dragging right (x past the anchor) pulls the offset down.
    #[inline]
    #[must_use]
    pub fn candidate_offset(&self, x: f32) -> f32 {
        self.start_offset - (x - self.anchor_x) * self.gain
    }

    /// Record a pointer sample and refresh the velocity estimate.
    ///
    /// Velocity is `(x - last_x) / dt` in px/ms. Samples closer together
    /// than the clock can resolve keep the previous estimate.
    pub fn sample(&mut self, x: f32, now: Instant) {
        let dt_ms = now.duration_since(self.last_sample).as_secs_f64() * 1000.0;
        if dt_ms > 0.0 {
            self.velocity = ((f64::from(x - self.last_x)) / dt_ms) as f32;
        }
        self.last_x = x;
        self.last_sample = now;
    }

    /// Latest velocity estimate in px/ms.
    #[inline]
    #[must_use]
    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    /// Unclamped momentum landing point for a release at `current` offset:
    /// `current + velocity * momentum_gain`.
    #[inline]
    #[must_use]
    pub fn momentum_target(&self, current: f32) -> f32 {
        current + self.velocity * self.momentum_gain
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use web_time::Duration;

    const GAIN: f32 = 1.5;
    const MOMENTUM_GAIN: f32 = 15.0;

    fn tracker_at(x: f32, offset: f32) -> (DragTracker, Instant) {
        let t0 = Instant::now();
        (DragTracker::begin(x, offset, t0, GAIN, MOMENTUM_GAIN), t0)
    }

    // -- rubber_band --

    #[test]
    fn rubber_band_identity_in_range() {
        assert_eq!(rubber_band(150.0, 3000.0, 0.3), 150.0);
        assert_eq!(rubber_band(0.0, 3000.0, 0.3), 0.0);
        assert_eq!(rubber_band(3000.0, 3000.0, 0.3), 3000.0);
    }

    #[test]
    fn rubber_band_below_zero_damps_overshoot() {
        // candidate < 0 → candidate * 0.3 exactly.
        assert!((rubber_band(-100.0, 3000.0, 0.3) - (-30.0)).abs() < 1e-4);
    }

    #[test]
    fn rubber_band_past_max_damps_excess() {
        // candidate > max → max + (candidate - max) * 0.3 exactly.
        let got = rubber_band(3100.0, 3000.0, 0.3);
        assert!((got - 3030.0).abs() < 1e-3);
    }

    // -- candidate_offset --

    #[test]
    fn drag_left_increases_offset() {
        let (tracker, _) = tracker_at(400.0, 0.0);
        // Pointer moves 100px left → walk = -150 with gain 1.5 → offset 150.
        assert!((tracker.candidate_offset(300.0) - 150.0).abs() < 1e-4);
    }

    #[test]
    fn drag_right_decreases_offset() {
        let (tracker, _) = tracker_at(400.0, 500.0);
        assert!((tracker.candidate_offset(500.0) - 350.0).abs() < 1e-4);
    }

    #[test]
    fn candidate_is_pure() {
        let (tracker, _) = tracker_at(400.0, 190.0);
        assert_eq!(tracker.candidate_offset(350.0), tracker.candidate_offset(350.0));
    }

    // -- velocity sampling --

    #[test]
    fn velocity_from_samples() {
        let (mut tracker, t0) = tracker_at(0.0, 0.0);
        // 50px over 10ms → 5 px/ms.
        tracker.sample(50.0, t0 + Duration::from_millis(10));
        assert!((tracker.velocity() - 5.0).abs() < 1e-3);
    }

    #[test]
    fn zero_interval_sample_keeps_previous_velocity() {
        let (mut tracker, t0) = tracker_at(0.0, 0.0);
        tracker.sample(50.0, t0 + Duration::from_millis(10));
        let v = tracker.velocity();
        tracker.sample(90.0, t0 + Duration::from_millis(10));
        assert_eq!(tracker.velocity(), v);
    }

    #[test]
    fn velocity_sign_follows_pointer() {
        let (mut tracker, t0) = tracker_at(100.0, 0.0);
        tracker.sample(60.0, t0 + Duration::from_millis(8));
        assert!(tracker.velocity() < 0.0);
    }

    // -- momentum_target --

    #[test]
    fn momentum_target_scales_velocity() {
        let (mut tracker, t0) = tracker_at(0.0, 0.0);
        tracker.sample(80.0, t0 + Duration::from_millis(10));
        // 8 px/ms * 15 = 120px of glide.
        assert!((tracker.momentum_target(500.0) - 620.0).abs() < 1e-2);
    }

    #[test]
    fn momentum_target_at_rest_is_current() {
        let (tracker, _) = tracker_at(0.0, 0.0);
        assert_eq!(tracker.momentum_target(190.0), 190.0);
    }
}
