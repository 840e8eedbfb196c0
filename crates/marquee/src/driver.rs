#![forbid(unsafe_code)]

//! The single-owner driver tag.
//!
//! Exactly one driver may mutate the strip offset at any instant; the tag is
//! consulted before every mutation instead of relying on incidental
//! scheduling order. Hand-offs are `Drag → Momentum → Snap → Idle`; only
//! pointer-down enters `Drag` from outside.

/// Which subsystem currently owns the strip offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Driver {
    /// Nothing is animating; auto-advance and the rewrap check run here.
    #[default]
    Idle,
    /// A pointer drag is writing the offset directly.
    Drag,
    /// The post-release momentum glide owns the offset.
    Momentum,
    /// The smooth settle onto an item boundary owns the offset.
    Snap,
}

impl Driver {
    /// Whether a drag gesture is in progress.
    #[inline]
    #[must_use]
    pub fn is_dragging(self) -> bool {
        self == Driver::Drag
    }

    /// Whether an internally driven animation (momentum or snap) is running.
    #[inline]
    #[must_use]
    pub fn is_animating(self) -> bool {
        matches!(self, Driver::Momentum | Driver::Snap)
    }

    /// Whether the idle loop (auto-advance, rewrap) may run.
    #[inline]
    #[must_use]
    pub fn is_idle(self) -> bool {
        self == Driver::Idle
    }
}
