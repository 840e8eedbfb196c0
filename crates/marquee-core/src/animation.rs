#![forbid(unsafe_code)]

//! Time-boxed animation primitives.
//!
//! [`Tween`] animates a scalar between two values over a fixed duration with
//! an easing curve; it drives both the momentum glide after a drag release
//! and the smooth snap onto an item boundary. [`Pop`] is a one-shot 0→1
//! clock used to replay the highlight pop when an item enters the focus
//! band.
//!
//! Everything here is advanced by [`Animation::tick`] with an explicit
//! `Duration`, never by reading a clock, so tests can step time
//! deterministically.
//!
//! # Invariants
//!
//! 1. `value()` is always in [0.0, 1.0].
//! 2. A completed [`Tween`] reports `position() == target()` exactly (no
//!    easing residue at the endpoint).
//! 3. `tick()` past completion accumulates [`Animation::overshoot`] and
//!    nothing else.
//!
//! # Failure Modes
//!
//! - Zero duration: clamped to 1ns to avoid division by zero; the animation
//!   completes on its first tick.
//! - Non-finite scalar endpoints are the caller's bug; they propagate.

use web_time::Duration;

// ---------------------------------------------------------------------------
// Easing
// ---------------------------------------------------------------------------

/// An easing curve: maps linear progress in [0, 1] to eased progress.
pub type EasingFn = fn(f32) -> f32;

/// Identity easing.
#[inline]
#[must_use]
pub fn linear(t: f32) -> f32 {
    t
}

/// Cubic ease-out: fast start, gentle settle. `1 - (1 - t)^3`.
///
/// The reference curve for momentum glides.
#[inline]
#[must_use]
pub fn ease_out_cubic(t: f32) -> f32 {
    let u = 1.0 - t;
    1.0 - u * u * u
}

/// Cubic ease-in: gentle start, fast finish. `t^3`.
#[inline]
#[must_use]
pub fn ease_in_cubic(t: f32) -> f32 {
    t * t * t
}

/// Cubic ease-in-out: slow at both ends.
#[inline]
#[must_use]
pub fn ease_in_out_cubic(t: f32) -> f32 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        let u = -2.0 * t + 2.0;
        1.0 - u * u * u / 2.0
    }
}

/// Duration of a momentum glide covering `distance` pixels.
///
/// One millisecond per 5px of travel, capped at one second.
#[must_use]
pub fn momentum_duration(distance: f32) -> Duration {
    let ms = (distance.abs() / 5.0).min(1000.0);
    Duration::from_secs_f64(f64::from(ms) / 1000.0)
}

// ---------------------------------------------------------------------------
// Animation trait
// ---------------------------------------------------------------------------

/// A time-driven animation advanced by explicit deltas.
pub trait Animation {
    /// Advance by `dt`.
    fn tick(&mut self, dt: Duration);

    /// Current eased progress in [0.0, 1.0].
    fn value(&self) -> f32;

    /// Whether the animation has run its full duration.
    fn is_complete(&self) -> bool;

    /// Return to the initial (un-ticked) state.
    fn reset(&mut self);

    /// Time accumulated past completion.
    fn overshoot(&self) -> Duration {
        Duration::ZERO
    }
}

// ---------------------------------------------------------------------------
// Tween
// ---------------------------------------------------------------------------

/// Eased scalar motion from one value to another over a fixed duration.
#[derive(Debug, Clone, Copy)]
pub struct Tween {
    from: f32,
    to: f32,
    elapsed: Duration,
    duration: Duration,
    easing: EasingFn,
}

impl Tween {
    /// Create a tween from `from` to `to` with cubic ease-out.
    ///
    /// A zero duration is clamped to 1ns.
    #[must_use]
    pub fn new(from: f32, to: f32, duration: Duration) -> Self {
        Self {
            from,
            to,
            elapsed: Duration::ZERO,
            duration: clamp_duration(duration),
            easing: ease_out_cubic,
        }
    }

    /// Replace the easing curve (builder pattern).
    #[must_use]
    pub fn easing(mut self, easing: EasingFn) -> Self {
        self.easing = easing;
        self
    }

    /// The scalar this tween started from.
    #[inline]
    #[must_use]
    pub fn start(&self) -> f32 {
        self.from
    }

    /// The scalar this tween lands on when complete.
    #[inline]
    #[must_use]
    pub fn target(&self) -> f32 {
        self.to
    }

    /// Total duration.
    #[inline]
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Current interpolated scalar.
    ///
    /// Exactly `target()` once complete.
    #[must_use]
    pub fn position(&self) -> f32 {
        if self.is_complete() {
            return self.to;
        }
        self.from + (self.to - self.from) * self.value()
    }
}

impl Animation for Tween {
    fn tick(&mut self, dt: Duration) {
        self.elapsed = self.elapsed.saturating_add(dt);
    }

    fn value(&self) -> f32 {
        let t = (self.elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0) as f32;
        (self.easing)(t).clamp(0.0, 1.0)
    }

    fn is_complete(&self) -> bool {
        self.elapsed >= self.duration
    }

    fn reset(&mut self) {
        self.elapsed = Duration::ZERO;
    }

    fn overshoot(&self) -> Duration {
        self.elapsed.saturating_sub(self.duration)
    }
}

// ---------------------------------------------------------------------------
// Pop
// ---------------------------------------------------------------------------

/// One-shot highlight clock: linear 0→1 over its duration, then complete.
///
/// The host maps the progress onto its own pop keyframes; the clock only
/// tracks where in the replay we are.
#[derive(Debug, Clone, Copy)]
pub struct Pop {
    elapsed: Duration,
    duration: Duration,
}

impl Pop {
    /// Create a pop clock. A zero duration is clamped to 1ns.
    #[must_use]
    pub fn new(duration: Duration) -> Self {
        Self {
            elapsed: Duration::ZERO,
            duration: clamp_duration(duration),
        }
    }
}

impl Animation for Pop {
    fn tick(&mut self, dt: Duration) {
        self.elapsed = self.elapsed.saturating_add(dt);
    }

    fn value(&self) -> f32 {
        (self.elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0) as f32
    }

    fn is_complete(&self) -> bool {
        self.elapsed >= self.duration
    }

    fn reset(&mut self) {
        self.elapsed = Duration::ZERO;
    }

    fn overshoot(&self) -> Duration {
        self.elapsed.saturating_sub(self.duration)
    }
}

#[inline]
fn clamp_duration(d: Duration) -> Duration {
    if d.is_zero() { Duration::from_nanos(1) } else { d }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
