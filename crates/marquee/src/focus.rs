#![forbid(unsafe_code)]

//! Focus-band highlighting and pop replay bookkeeping.
//!
//! An instance is "in focus" when its span lies fully inside the central
//! band of the viewport. The tracker diffs the focus set between frames and
//! replays the pop animation only for instances that *entered* focus, so a
//! per-frame refresh with unchanged geometry is idempotent — no retrigger
//! storm. Hover pops (pointer passing over an instance mid-drag) restart
//! the replay unconditionally, matching the tactile layer of the reference
//! behavior.
//!
//! # Invariants
//!
//! 1. Refreshing with an unchanged focus set starts no new pops.
//! 2. A pop clock is dropped once complete; `pop_progress` is `None` after.
//! 3. Hover flags only accumulate during a drag and are cleared at release.

use marquee_core::{Animation, Pop};
use web_time::Duration;

use crate::snapshot::{InstanceVisual, VisualFlags};

/// Tracks the focus set, hover set, and running pop replays per instance.
#[derive(Debug, Clone)]
pub(crate) struct FocusTracker {
    active: Vec<bool>,
    hover: Vec<bool>,
    pops: Vec<Option<Pop>>,
    pop_duration: Duration,
}

impl FocusTracker {
    pub(crate) fn new(instance_count: usize, pop_duration: Duration) -> Self {
        Self {
            active: vec![false; instance_count],
            hover: vec![false; instance_count],
            pops: vec![None; instance_count],
            pop_duration,
        }
    }

    /// Advance running pop clocks; completed replays are dropped.
    pub(crate) fn tick(&mut self, dt: Duration) {
        for slot in &mut self.pops {
            if let Some(pop) = slot {
                pop.tick(dt);
                if pop.is_complete() {
                    *slot = None;
                }
            }
        }
    }

    /// Replace the focus set, replaying the pop for newly focused instances.
    pub(crate) fn refresh(&mut self, in_focus: &[bool]) {
        debug_assert_eq!(in_focus.len(), self.active.len());
        for (i, &focused) in in_focus.iter().enumerate() {
            if focused && !self.active[i] {
                self.pops[i] = Some(Pop::new(self.pop_duration));
            }
            self.active[i] = focused;
        }
    }

    /// Hover colorization: restart the pop and flag the instance.
    pub(crate) fn hover(&mut self, index: usize) {
        if let Some(flag) = self.hover.get_mut(index) {
            *flag = true;
            self.pops[index] = Some(Pop::new(self.pop_duration));
        }
    }

    /// Drop all hover flags (drag ended).
    pub(crate) fn clear_hover(&mut self) {
        self.hover.fill(false);
    }

    /// Drop all state (teardown).
    pub(crate) fn reset(&mut self) {
        self.active.fill(false);
        self.hover.fill(false);
        self.pops.fill(None);
    }

    pub(crate) fn is_active(&self, index: usize) -> bool {
        self.active.get(index).copied().unwrap_or(false)
    }

    /// Visual state of one instance for the current frame.
    pub(crate) fn visual(&self, index: usize, catalog_index: usize) -> InstanceVisual {
        let mut flags = VisualFlags::empty();
        if self.active.get(index).copied().unwrap_or(false) {
            flags |= VisualFlags::ACTIVE;
        }
        if self.hover.get(index).copied().unwrap_or(false) {
            flags |= VisualFlags::HOVER;
        }
        let pop_progress = self
            .pops
            .get(index)
            .and_then(|slot| slot.as_ref().map(Pop::value));
        if pop_progress.is_some() {
            flags |= VisualFlags::POP;
        }
        InstanceVisual {
            index,
            catalog_index,
            flags,
            pop_progress,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
