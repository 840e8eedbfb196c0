#![forbid(unsafe_code)]

//! Geometric primitives.

/// A 1-D horizontal interval in viewport pixels.
///
/// The carousel only ever reasons about horizontal extents, so spans carry a
/// left edge and a width rather than a full rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Span {
    /// Left edge (inclusive).
    pub left: f32,
    /// Width in pixels.
    pub width: f32,
}

impl Span {
    /// Create a new span.
    #[inline]
    #[must_use]
    pub fn new(left: f32, width: f32) -> Self {
        Self { left, width }
    }

    /// Right edge (exclusive).
    #[inline]
    #[must_use]
    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    /// Whether the span has no extent.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0
    }

    /// Whether `other` lies fully inside this span.
    ///
    /// Empty spans contain nothing and are contained by nothing.
    #[inline]
    #[must_use]
    pub fn contains(&self, other: &Span) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && other.left >= self.left
            && other.right() <= self.right()
    }

    /// The central band of this span with `margin` excluded on each side.
    ///
    /// `margin` is a fraction of the width, clamped to [0.0, 0.5]. A margin
    /// of 0.2 yields the central 60%.
    #[must_use]
    pub fn inner_fraction(&self, margin: f32) -> Span {
        let m = margin.clamp(0.0, 0.5);
        Span {
            left: self.left + self.width * m,
            width: self.width * (1.0 - 2.0 * m),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
