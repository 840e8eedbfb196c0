#![forbid(unsafe_code)]

//! The carousel controller state machine.
//!
//! [`Carousel`] owns the strip offset and everything that moves it: pointer
//! drags with rubber-band resistance, the momentum glide after release, the
//! smooth snap onto an item boundary, periodic auto-advance, and the silent
//! rewrap that fakes infinite scroll. The host feeds it pointer events and
//! one [`frame`](Carousel::frame) call per animation tick, and renders the
//! returned [`FrameSnapshot`].
//!
//! # State Machine
//!
//! ```text
//! Idle (auto-advance running)
//!   └─ pointer_down ──▶ Drag
//!        └─ pointer_up ──▶ Momentum (ease-out glide)
//!             └─ tween complete ──▶ Snap (settle on boundary)
//!                  └─ tween complete ──▶ Idle (auto-advance scheduled)
//! ```
//!
//! `Drag` is the only state entered by external input; every other
//! transition is internally driven (tween completion, deadline elapsed).
//! Starting a new drag cancels any in-flight tween and any pending
//! auto-advance resume.
//!
//! # Invariants
//!
//! 1. Exactly one driver mutates the offset per frame; the [`Driver`] tag is
//!    consulted before every mutation.
//! 2. After any settle, the offset is a stride multiple within floating
//!    tolerance.
//! 3. Rubber-banded offsets outside `[0, max_offset]` exist only during an
//!    active drag and are pulled back in bounds at release.
//! 4. A rewrap changes the offset by exactly one catalog width, without
//!    animation, and leaves the visible catalog sequence unchanged.
//!
//! # Failure Modes
//!
//! - Empty catalog or zero-width viewport: every operation degrades to
//!   no visible motion; nothing panics and nothing errors.

use marquee_core::{
    Animation, DragTracker, Item, Span, Strip, Tween, momentum_duration, rubber_band,
};
use web_time::{Duration, Instant};

use crate::auto::AutoAdvance;
use crate::config::CarouselConfig;
use crate::driver::Driver;
use crate::focus::FocusTracker;
use crate::host::Surface;
use crate::snapshot::FrameSnapshot;

/// Offsets closer than this to a boundary settle directly instead of
/// animating.
const SETTLE_TOLERANCE: f32 = 0.5;

/// Headless carousel controller.
#[derive(Debug, Clone)]
pub struct Carousel {
    config: CarouselConfig,
    strip: Strip,
    offset: f32,
    driver: Driver,
    drag: Option<DragTracker>,
    tween: Option<Tween>,
    snap_index: usize,
    auto: AutoAdvance,
    focus: FocusTracker,
    last_frame: Option<Instant>,
}

impl Carousel {
    /// Build a carousel over `copies` repetitions of `catalog`, with the
    /// auto-advance cadence starting at `now`.
    ///
    /// Construction cannot fail: an empty catalog yields an inert carousel
    /// whose operations all no-op.
    #[must_use]
    pub fn new(catalog: Vec<Item>, config: CarouselConfig, now: Instant) -> Self {
        let strip = Strip::new(catalog, config.copies, config.item_width, config.stride());
        let focus = FocusTracker::new(strip.instance_count(), config.pop_duration);
        let auto = AutoAdvance::start(config.auto_advance_period, now);
        Self {
            config,
            strip,
            offset: 0.0,
            driver: Driver::Idle,
            drag: None,
            tween: None,
            snap_index: 0,
            auto,
            focus,
            last_frame: None,
        }
    }

    // -- Accessors --

    /// Current strip offset in pixels.
    #[inline]
    #[must_use]
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Who owns the offset right now.
    #[inline]
    #[must_use]
    pub fn driver(&self) -> Driver {
        self.driver
    }

    /// Snap index over the whole strip (`0..instance_count`).
    #[inline]
    #[must_use]
    pub fn snap_index(&self) -> usize {
        self.snap_index
    }

    /// Logical catalog index of the current snap position.
    #[inline]
    #[must_use]
    pub fn catalog_snap_index(&self) -> usize {
        self.strip.catalog_index(self.snap_index)
    }

    /// The strip layout.
    #[inline]
    #[must_use]
    pub fn strip(&self) -> &Strip {
        &self.strip
    }

    /// The active configuration.
    #[inline]
    #[must_use]
    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    /// Whether auto-advance will fire again without intervention.
    #[inline]
    #[must_use]
    pub fn auto_advance_pending(&self) -> bool {
        self.auto.is_pending()
    }

    // -- Pointer input --

    /// Begin a drag at pointer position `x`.
    ///
    /// Cancels any in-flight momentum/snap tween and any pending
    /// auto-advance. The only external entry into the `Drag` state.
    pub fn pointer_down(&mut self, x: f32, now: Instant) {
        if self.strip.catalog_len() == 0 {
            return;
        }
        self.tween = None;
        self.auto.cancel();
        self.drag = Some(DragTracker::begin(
            x,
            self.offset,
            now,
            self.config.drag_gain,
            self.config.momentum_gain,
        ));
        self.driver = Driver::Drag;
        #[cfg(feature = "tracing")]
        tracing::debug!(x, offset = self.offset, "drag started");
    }

    /// Track a pointer move during a drag.
    ///
    /// Writes the gained, rubber-banded candidate offset and refreshes the
    /// velocity sample. No-op unless a drag is in progress.
    pub fn pointer_move(&mut self, x: f32, now: Instant, viewport_width: f32) {
        if self.driver != Driver::Drag {
            return;
        }
        let Some(mut drag) = self.drag else {
            return;
        };
        let max = self.strip.max_offset(viewport_width);
        self.offset = rubber_band(
            drag.candidate_offset(x),
            max,
            self.config.rubber_resistance,
        );
        drag.sample(x, now);
        self.drag = Some(drag);
    }

    /// Hover colorization: the pointer passed over instance `index` while
    /// dragging. Pops the instance regardless of the focus-band test.
    pub fn pointer_over(&mut self, index: usize) {
        if self.driver.is_dragging() {
            self.focus.hover(index);
        }
    }

    /// End the drag: hand off to the momentum glide, then the snap.
    ///
    /// The momentum target is clamped to `[0, max_offset]`, which also pulls
    /// back any rubber-banded overshoot. Auto-advance resumes after the
    /// configured quiet period unless a new drag starts first.
    pub fn pointer_up(&mut self, now: Instant, viewport_width: f32) {
        if self.driver != Driver::Drag {
            return;
        }
        let Some(drag) = self.drag.take() else {
            self.driver = Driver::Idle;
            return;
        };
        self.focus.clear_hover();

        let max = self.strip.max_offset(viewport_width);
        let target = drag.momentum_target(self.offset).clamp(0.0, max);
        let duration = momentum_duration(target - self.offset);
        #[cfg(feature = "tracing")]
        tracing::debug!(
            velocity = drag.velocity(),
            target,
            "drag released, momentum begins"
        );
        if duration.is_zero() {
            self.offset = target;
            self.begin_snap();
        } else {
            self.tween = Some(Tween::new(self.offset, target, duration));
            self.driver = Driver::Momentum;
        }
        self.auto.resume_after(now, self.config.resume_after_drag);
    }

    // -- Programmatic navigation --

    /// Move one item forward (`+1`) or back (`-1`), clamped to the strip.
    ///
    /// Pauses auto-advance and schedules its resume after the configured
    /// quiet period. No-op while a drag is in progress or for an empty
    /// catalog.
    pub fn slide(&mut self, direction: i32, now: Instant, viewport_width: f32) {
        if self.strip.catalog_len() == 0 || self.driver.is_dragging() {
            return;
        }
        self.auto.pause();
        self.auto.resume_after(now, self.config.resume_after_slide);
        self.advance(direction, viewport_width);
    }

    /// Move the snap index and start the snap tween, without touching the
    /// auto-advance scheduler. Shared by manual slides and auto-advance.
    fn advance(&mut self, direction: i32, viewport_width: f32) {
        let max_index = self.strip.max_snap_index(viewport_width);
        let index = self
            .snap_index
            .saturating_add_signed(direction as isize)
            .min(max_index);
        self.snap_index = index;

        let target = self.strip.boundary(index);
        if (target - self.offset).abs() < SETTLE_TOLERANCE {
            self.offset = target;
            self.tween = None;
            self.driver = Driver::Idle;
        } else {
            self.tween = Some(Tween::new(self.offset, target, self.config.snap_duration));
            self.driver = Driver::Snap;
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(direction, index, target, "advance");
    }

    /// Suspend auto-advance (host hover affordance).
    ///
    /// An explicit pause also discards any pending scheduled resume.
    pub fn pause(&mut self) {
        self.auto.pause();
    }

    /// Restart the auto-advance cadence. No-op during a drag.
    pub fn resume(&mut self, now: Instant) {
        if !self.driver.is_dragging() {
            self.auto.resume(now);
        }
    }

    /// Return the carousel to inert: no tween, no drag, no deadlines, no
    /// highlight state. Idempotent.
    pub fn teardown(&mut self) {
        self.tween = None;
        self.drag = None;
        self.driver = Driver::Idle;
        self.auto.cancel();
        self.focus.reset();
        self.last_frame = None;
        #[cfg(feature = "tracing")]
        tracing::debug!("carousel torn down");
    }

    // -- Per-frame update --

    /// Advance one animation frame and report what to render.
    ///
    /// Order per frame: advance the active tween (with `Momentum → Snap →
    /// Idle` hand-offs), poll auto-advance, run the rewrap check, then
    /// recompute the focus set. The idle paths never touch the offset while
    /// a drag or tween owns it.
    pub fn frame<S: Surface + ?Sized>(&mut self, now: Instant, surface: &S) -> FrameSnapshot {
        let dt = self
            .last_frame
            .map_or(Duration::ZERO, |t| now.duration_since(t));
        self.last_frame = Some(now);
        self.focus.tick(dt);

        let viewport_width = surface.viewport_width();

        if self.driver.is_animating()
            && let Some(mut tween) = self.tween
        {
            tween.tick(dt);
            self.offset = tween.position();
            if tween.is_complete() {
                match self.driver {
                    Driver::Momentum => self.begin_snap(),
                    Driver::Snap => {
                        self.snap_index = self.strip.nearest_index(self.offset);
                        self.tween = None;
                        self.driver = Driver::Idle;
                    }
                    Driver::Idle | Driver::Drag => unreachable!("tween without animating driver"),
                }
            } else {
                self.tween = Some(tween);
            }
        }

        if self.driver.is_idle() && self.auto.poll(now) {
            self.advance(1, viewport_width);
        }
        if self.driver.is_idle() {
            self.rewrap_check(viewport_width);
        }

        self.refresh_focus(surface, viewport_width);
        debug_assert!(
            self.tween.is_none() || self.driver.is_animating(),
            "tween alive outside momentum/snap"
        );
        self.build_snapshot()
    }

    // -- Internals --

    /// Settle toward the nearest stride boundary.
    fn begin_snap(&mut self) {
        let target = self.strip.nearest_boundary(self.offset);
        self.snap_index = self.strip.nearest_index(self.offset);
        if (target - self.offset).abs() < SETTLE_TOLERANCE {
            self.offset = target;
            self.tween = None;
            self.driver = Driver::Idle;
        } else {
            self.tween = Some(Tween::new(self.offset, target, self.config.snap_duration));
            self.driver = Driver::Snap;
        }
    }

    /// Jump the offset by exactly one catalog width when it nears either
    /// physical end of the strip. Content repeats every catalog, so the jump
    /// is invisible.
    fn rewrap_check(&mut self, viewport_width: f32) {
        let n = self.strip.catalog_len();
        if n == 0 {
            return;
        }
        let max = self.strip.max_offset(viewport_width);
        if max <= 0.0 {
            return;
        }
        let stride = self.strip.stride();
        let wrap = self.strip.catalog_width();

        if self.offset >= max - stride {
            let target = self.offset - wrap;
            if target >= 0.0 {
                self.offset = target;
                self.snap_index = self.snap_index.saturating_sub(n);
                #[cfg(feature = "tracing")]
                tracing::debug!(offset = self.offset, "rewrapped toward start");
            }
        } else if self.offset <= stride {
            let target = self.offset + wrap;
            if target <= max {
                self.offset = target;
                self.snap_index += n;
                #[cfg(feature = "tracing")]
                tracing::debug!(offset = self.offset, "rewrapped toward end");
            }
        }
    }

    /// Recompute which instances sit fully inside the central focus band.
    fn refresh_focus<S: Surface + ?Sized>(&mut self, surface: &S, viewport_width: f32) {
        let band = Span::new(0.0, viewport_width).inner_fraction(self.config.focus_margin);
        let count = self.strip.instance_count();
        let mut in_focus = Vec::with_capacity(count);
        for index in 0..count {
            let span = surface.instance_span(&self.strip, index, self.offset);
            in_focus.push(band.contains(&span));
        }
        self.focus.refresh(&in_focus);
    }

    fn build_snapshot(&self) -> FrameSnapshot {
        let settled = self.driver.is_idle()
            && (self.offset - self.strip.nearest_boundary(self.offset)).abs() < SETTLE_TOLERANCE;
        let instances = (0..self.strip.instance_count())
            .map(|index| self.focus.visual(index, self.strip.catalog_index(index)))
            .collect();
        FrameSnapshot {
            offset: self.offset,
            driver: self.driver,
            animating: self.driver.is_animating(),
            settled,
            instances,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::FixedSurface;
    use marquee_core::default_catalog;

    const VIEWPORT: f32 = 1000.0;
    const STRIDE: f32 = 190.0;
    const FRAME: Duration = Duration::from_millis(16);

    fn carousel(t0: Instant) -> Carousel {
        Carousel::new(default_catalog(), CarouselConfig::default(), t0)
    }

    /// Run frames until the carousel goes idle, returning the elapsed time.
    fn settle(c: &mut Carousel, surface: &FixedSurface, mut t: Instant) -> Instant {
        // Prime the frame clock so subsequent ticks have a dt.
        c.frame(t, surface);
        for _ in 0..1000 {
            t += FRAME;
            c.frame(t, surface);
            if c.driver().is_idle() {
                return t;
            }
        }
        panic!("carousel did not settle");
    }

    #[test]
    fn starts_idle_at_zero() {
        let c = carousel(Instant::now());
        assert_eq!(c.offset(), 0.0);
        assert!(c.driver().is_idle());
        assert_eq!(c.snap_index(), 0);
    }

    #[test]
    fn pointer_down_enters_drag_and_cancels_auto() {
        let t0 = Instant::now();
        let mut c = carousel(t0);
        c.pointer_down(400.0, t0);
        assert!(c.driver().is_dragging());
        assert!(!c.auto_advance_pending());
    }

    #[test]
    fn drag_moves_offset_with_gain() {
        let t0 = Instant::now();
        let mut c = carousel(t0);
        c.pointer_down(400.0, t0);
        // 100px left of the anchor, gain 1.5 → offset 150.
        c.pointer_move(300.0, t0 + Duration::from_millis(10), VIEWPORT);
        assert!((c.offset() - 150.0).abs() < 1e-3);
    }

    #[test]
    fn drag_past_start_rubber_bands() {
        let t0 = Instant::now();
        let mut c = carousel(t0);
        c.pointer_down(400.0, t0);
        // 100px right → candidate -150 → damped to -45.
        c.pointer_move(500.0, t0 + Duration::from_millis(10), VIEWPORT);
        assert!((c.offset() - (-45.0)).abs() < 1e-3);
    }

    #[test]
    fn release_pulls_overshoot_back_in_bounds_and_settles() {
        let t0 = Instant::now();
        let mut c = carousel(t0);
        let surface = FixedSurface::new(VIEWPORT);
        c.pointer_down(400.0, t0);
        c.pointer_move(500.0, t0 + Duration::from_millis(10), VIEWPORT);
        assert!(c.offset() < 0.0);
        c.pointer_up(t0 + Duration::from_millis(20), VIEWPORT);
        settle(&mut c, &surface, t0 + Duration::from_millis(20));
        assert!(c.offset() >= 0.0);
        assert!((c.offset() % STRIDE).abs() < SETTLE_TOLERANCE);
    }

    #[test]
    fn pointer_move_without_drag_is_noop() {
        let t0 = Instant::now();
        let mut c = carousel(t0);
        c.pointer_move(300.0, t0, VIEWPORT);
        assert_eq!(c.offset(), 0.0);
    }

    #[test]
    fn new_drag_cancels_momentum() {
        let t0 = Instant::now();
        let mut c = carousel(t0);
        c.pointer_down(400.0, t0);
        c.pointer_move(200.0, t0 + Duration::from_millis(10), VIEWPORT);
        c.pointer_up(t0 + Duration::from_millis(12), VIEWPORT);
        assert!(c.driver().is_animating());

        c.pointer_down(350.0, t0 + Duration::from_millis(30));
        assert!(c.driver().is_dragging());
    }

    #[test]
    fn slide_forward_and_back_round_trips() {
        let t0 = Instant::now();
        let mut c = carousel(t0);
        let surface = FixedSurface::new(VIEWPORT);
        let t = settle(&mut c, &surface, t0);

        let before = c.offset();
        c.slide(1, t, VIEWPORT);
        let t = settle(&mut c, &surface, t);
        assert!((c.offset() - (before + STRIDE)).abs() < SETTLE_TOLERANCE);

        c.slide(-1, t, VIEWPORT);
        settle(&mut c, &surface, t);
        assert!((c.offset() - before).abs() < f32::EPSILON);
    }

    #[test]
    fn slide_clamps_at_start() {
        let t0 = Instant::now();
        let mut c = carousel(t0);
        c.slide(-1, t0, VIEWPORT);
        assert_eq!(c.snap_index(), 0);
        assert!(c.driver().is_idle());
    }

    #[test]
    fn slide_during_drag_is_noop() {
        let t0 = Instant::now();
        let mut c = carousel(t0);
        c.pointer_down(400.0, t0);
        c.slide(1, t0, VIEWPORT);
        assert!(c.driver().is_dragging());
        assert_eq!(c.snap_index(), 0);
    }

    #[test]
    fn auto_advance_slides_after_period() {
        let t0 = Instant::now();
        let mut c = carousel(t0);
        let surface = FixedSurface::new(VIEWPORT);
        c.frame(t0, &surface);
        let before = c.snap_index();
        let t = t0 + c.config().auto_advance_period + FRAME;
        c.frame(t, &surface);
        assert!(c.driver().is_animating());
        assert_eq!(c.snap_index(), before + 1);
    }

    #[test]
    fn pause_blocks_auto_advance() {
        let t0 = Instant::now();
        let mut c = carousel(t0);
        let surface = FixedSurface::new(VIEWPORT);
        c.pause();
        let t = t0 + Duration::from_secs(60);
        c.frame(t, &surface);
        assert!(c.driver().is_idle());
        assert!(!c.auto_advance_pending());
    }

    #[test]
    fn resume_restarts_cadence() {
        let t0 = Instant::now();
        let mut c = carousel(t0);
        c.pause();
        c.resume(t0);
        assert!(c.auto_advance_pending());
    }

    #[test]
    fn resume_during_drag_is_noop() {
        let t0 = Instant::now();
        let mut c = carousel(t0);
        c.pointer_down(400.0, t0);
        c.resume(t0);
        assert!(!c.auto_advance_pending());
    }

    #[test]
    fn hover_pops_only_while_dragging() {
        let t0 = Instant::now();
        let mut c = carousel(t0);
        let surface = FixedSurface::new(VIEWPORT);

        c.pointer_over(3);
        let snap = c.frame(t0, &surface);
        assert!(snap.instances[3].pop_progress.is_none() || snap.instances[3].flags.is_empty());

        c.pointer_down(400.0, t0);
        c.pointer_over(3);
        let snap = c.frame(t0 + FRAME, &surface);
        assert!(snap.instances[3].pop_progress.is_some());
    }

    #[test]
    fn teardown_makes_carousel_inert() {
        let t0 = Instant::now();
        let mut c = carousel(t0);
        c.pointer_down(400.0, t0);
        c.teardown();
        assert!(c.driver().is_idle());
        assert!(!c.auto_advance_pending());
        // Teardown twice is fine.
        c.teardown();
    }

    #[test]
    fn empty_catalog_is_inert() {
        let t0 = Instant::now();
        let mut c = Carousel::new(Vec::new(), CarouselConfig::default(), t0);
        let surface = FixedSurface::new(VIEWPORT);
        c.pointer_down(400.0, t0);
        assert!(c.driver().is_idle());
        c.slide(1, t0, VIEWPORT);
        assert_eq!(c.offset(), 0.0);
        let snap = c.frame(t0, &surface);
        assert!(snap.instances.is_empty());
    }

    #[test]
    fn zero_width_viewport_produces_no_motion() {
        let t0 = Instant::now();
        let mut c = carousel(t0);
        let surface = FixedSurface::new(0.0);
        let snap = c.frame(t0, &surface);
        // No focus band, nothing active, and the offset rests on a boundary.
        assert_eq!(snap.active_count(), 0);
        assert!(snap.settled);
        assert!(c.driver().is_idle());
    }

    #[test]
    fn focus_band_highlights_central_instances() {
        let t0 = Instant::now();
        let mut c = carousel(t0);
        let surface = FixedSurface::new(VIEWPORT);
        // The first idle frame rewraps from offset 0 into the middle
        // catalog copy, landing on instance boundary 8.
        let snap = c.frame(t0, &surface);
        assert_eq!(c.snap_index(), 8);
        // Band is [200, 800]; instance 10 spans [380, 530] → inside.
        assert!(snap.instances[10].flags.contains(crate::VisualFlags::ACTIVE));
        // Instance 8 spans [0, 150] → outside.
        assert!(!snap.instances[8].flags.contains(crate::VisualFlags::ACTIVE));
    }
}
