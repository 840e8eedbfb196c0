#![forbid(unsafe_code)]

//! Per-frame output: what the host should render right now.
//!
//! The controller never touches the host's scene graph. Each call to
//! [`Carousel::frame`](crate::Carousel::frame) returns a [`FrameSnapshot`]
//! describing the current offset and the visual state of every instance;
//! the host applies it however it renders. [`FrameStats`] is the compact
//! form of a snapshot for structured frame logs.

use bitflags::bitflags;

use crate::driver::Driver;

bitflags! {
    /// Visual state of one rendered instance.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct VisualFlags: u8 {
        /// Inside the focus band: full color and opacity.
        const ACTIVE = 1 << 0;
        /// The pop animation is replaying.
        const POP = 1 << 1;
        /// The pointer passed over this instance during the current drag.
        const HOVER = 1 << 2;
    }
}

/// Visual state of one instance for this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InstanceVisual {
    /// Stable instance index in `0..R*N`.
    pub index: usize,
    /// Logical catalog entry (`index mod N`).
    pub catalog_index: usize,
    /// Highlight flags.
    pub flags: VisualFlags,
    /// Progress of the pop replay in [0.0, 1.0], while one is running.
    pub pop_progress: Option<f32>,
}

/// Everything the host needs to render one frame.
#[derive(Debug, Clone)]
pub struct FrameSnapshot {
    /// Current strip offset in pixels.
    pub offset: f32,
    /// Who owns the offset this frame.
    pub driver: Driver,
    /// Whether a momentum or snap tween is still running (the host should
    /// keep requesting frames).
    pub animating: bool,
    /// Whether the offset rests on an item boundary.
    pub settled: bool,
    /// Per-instance visual state, in instance order.
    pub instances: Vec<InstanceVisual>,
}

impl FrameSnapshot {
    /// Catalog indices of the in-focus instances, in strip order.
    ///
    /// Two offsets one catalog-width apart must produce the same sequence
    /// here — that is what makes a rewrap invisible.
    #[must_use]
    pub fn focused_catalog_indices(&self) -> Vec<usize> {
        self.instances
            .iter()
            .filter(|v| v.flags.contains(VisualFlags::ACTIVE))
            .map(|v| v.catalog_index)
            .collect()
    }

    /// Number of in-focus instances.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.instances
            .iter()
            .filter(|v| v.flags.contains(VisualFlags::ACTIVE))
            .count()
    }
}

/// Per-frame carousel metrics for JSONL event logs.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameStats {
    /// Current strip offset in pixels.
    pub offset: f32,
    /// Whether a drag is in progress.
    pub dragging: bool,
    /// Whether a momentum/snap tween is running.
    pub animating: bool,
    /// Whether the offset rests on an item boundary.
    pub settled: bool,
    /// In-focus instances this frame.
    pub active_instances: usize,
    /// Pop replays running this frame.
    pub pops_running: usize,
}

impl FrameStats {
    /// Build stats from a frame snapshot.
    #[must_use]
    pub fn from_snapshot(snap: &FrameSnapshot) -> Self {
        Self {
            offset: snap.offset,
            dragging: snap.driver.is_dragging(),
            animating: snap.animating,
            settled: snap.settled,
            active_instances: snap.active_count(),
            pops_running: snap
                .instances
                .iter()
                .filter(|v| v.pop_progress.is_some())
                .count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn visual(index: usize, flags: VisualFlags) -> InstanceVisual {
        InstanceVisual {
            index,
            catalog_index: index % 8,
            flags,
            pop_progress: flags.contains(VisualFlags::POP).then_some(0.5),
        }
    }

    fn snapshot() -> FrameSnapshot {
        FrameSnapshot {
            offset: 190.0,
            driver: Driver::Idle,
            animating: false,
            settled: true,
            instances: vec![
                visual(8, VisualFlags::empty()),
                visual(9, VisualFlags::ACTIVE | VisualFlags::POP),
                visual(10, VisualFlags::ACTIVE),
                visual(11, VisualFlags::empty()),
            ],
        }
    }

    #[test]
    fn focused_catalog_indices_in_strip_order() {
        assert_eq!(snapshot().focused_catalog_indices(), vec![1, 2]);
    }

    #[test]
    fn active_count() {
        assert_eq!(snapshot().active_count(), 2);
    }

    #[test]
    fn stats_from_snapshot() {
        let stats = FrameStats::from_snapshot(&snapshot());
        assert_eq!(stats.offset, 190.0);
        assert!(!stats.dragging);
        assert!(stats.settled);
        assert_eq!(stats.active_instances, 2);
        assert_eq!(stats.pops_running, 1);
    }

    #[test]
    fn flags_compose() {
        let f = VisualFlags::ACTIVE | VisualFlags::HOVER;
        assert!(f.contains(VisualFlags::ACTIVE));
        assert!(!f.contains(VisualFlags::POP));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn stats_serialize_to_json() {
        let stats = FrameStats::from_snapshot(&snapshot());
        let json = serde_json::to_string(&stats).unwrap();
        assert!(json.contains("\"active_instances\":2"));
    }
}
