#![forbid(unsafe_code)]

//! The item catalog and the repeated strip built from it.
//!
//! A [`Strip`] holds `R` consecutive copies of an immutable [`Item`] catalog
//! (R = 3 by default) so the controller has slack to rewrap the offset and
//! fake infinite scroll. Instances are addressed by a stable index in
//! `0..R*N`; `catalog_index = index % N` recovers the logical item.
//!
//! All layout questions — stride boundaries, the maximum offset for a given
//! viewport, the viewport-space span of an instance — are answered here so
//! the controller never does raw pixel math.
//!
//! # Invariants
//!
//! 1. The catalog is immutable after construction.
//! 2. `stride > 0` even for degenerate configuration (non-positive strides
//!    clamp to 1px).
//! 3. An empty catalog yields zero widths and every query degrades to a
//!    no-motion answer rather than panicking.

use crate::geometry::Span;

// ---------------------------------------------------------------------------
// Item
// ---------------------------------------------------------------------------

/// One logical catalog entry: display name, icon identifier, style tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    /// Display name shown under the icon.
    pub name: String,
    /// Icon identifier the host resolves to a glyph or image.
    pub icon: String,
    /// Style tag applied when the item is highlighted.
    pub accent: String,
}

impl Item {
    /// Create a catalog item.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        icon: impl Into<String>,
        accent: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            icon: icon.into(),
            accent: accent.into(),
        }
    }
}

/// The reference catalog of eight technology logos.
///
/// Used by tests and demo hosts; real hosts pass their own.
#[must_use]
pub fn default_catalog() -> Vec<Item> {
    vec![
        Item::new("JavaScript", "js-square", "js-accent"),
        Item::new("HTML5", "html5", "html-accent"),
        Item::new("CSS3", "css3-alt", "css-accent"),
        Item::new("Node.js", "node-js", "node-accent"),
        Item::new("Python", "python", "python-accent"),
        Item::new("React", "react", "react-accent"),
        Item::new("PHP", "php", "php-accent"),
        Item::new("Git", "git-alt", "git-accent"),
    ]
}

// ---------------------------------------------------------------------------
// Strip
// ---------------------------------------------------------------------------

/// `R` repeated copies of a catalog laid out horizontally.
#[derive(Debug, Clone)]
pub struct Strip {
    items: Vec<Item>,
    copies: usize,
    item_width: f32,
    stride: f32,
}

impl Strip {
    /// Build a strip of `copies` repetitions of `items`.
    ///
    /// `item_width` is the rendered width of one instance; `stride` is the
    /// distance between successive instance starts (item width plus gap).
    /// Non-positive strides clamp to 1px.
    #[must_use]
    pub fn new(items: Vec<Item>, copies: usize, item_width: f32, stride: f32) -> Self {
        Self {
            items,
            copies,
            item_width: item_width.max(0.0),
            stride: if stride > 0.0 { stride } else { 1.0 },
        }
    }

    /// Number of logical catalog entries (N).
    #[inline]
    #[must_use]
    pub fn catalog_len(&self) -> usize {
        self.items.len()
    }

    /// Number of catalog repetitions (R).
    #[inline]
    #[must_use]
    pub fn copies(&self) -> usize {
        self.copies
    }

    /// Total rendered instances (R·N).
    #[inline]
    #[must_use]
    pub fn instance_count(&self) -> usize {
        self.copies * self.items.len()
    }

    /// Distance between successive instance starts.
    #[inline]
    #[must_use]
    pub fn stride(&self) -> f32 {
        self.stride
    }

    /// Rendered width of one instance.
    #[inline]
    #[must_use]
    pub fn item_width(&self) -> f32 {
        self.item_width
    }

    /// The logical item behind instance `index`, if in range.
    #[must_use]
    pub fn item(&self, index: usize) -> Option<&Item> {
        if self.items.is_empty() {
            return None;
        }
        if index >= self.instance_count() {
            return None;
        }
        self.items.get(index % self.items.len())
    }

    /// Catalog index of instance `index` (`index mod N`; 0 when empty).
    #[inline]
    #[must_use]
    pub fn catalog_index(&self, index: usize) -> usize {
        if self.items.is_empty() {
            0
        } else {
            index % self.items.len()
        }
    }

    /// Total strip width in pixels.
    #[inline]
    #[must_use]
    pub fn width(&self) -> f32 {
        self.stride * self.instance_count() as f32
    }

    /// Width of one full catalog repetition (the rewrap jump distance).
    #[inline]
    #[must_use]
    pub fn catalog_width(&self) -> f32 {
        self.stride * self.items.len() as f32
    }

    /// Largest legal offset for a viewport of the given width.
    #[inline]
    #[must_use]
    pub fn max_offset(&self, viewport_width: f32) -> f32 {
        (self.width() - viewport_width).max(0.0)
    }

    /// Offset of the snap boundary at `index`.
    #[inline]
    #[must_use]
    pub fn boundary(&self, index: usize) -> f32 {
        self.stride * index as f32
    }

    /// Largest snap index whose boundary is still a legal offset.
    #[must_use]
    pub fn max_snap_index(&self, viewport_width: f32) -> usize {
        if self.items.is_empty() {
            return 0;
        }
        (self.max_offset(viewport_width) / self.stride).floor() as usize
    }

    /// The snap boundary nearest to `offset`, as a stride multiple.
    ///
    /// Clamped to the boundaries of existing instances. Zero for an empty
    /// strip.
    #[must_use]
    pub fn nearest_boundary(&self, offset: f32) -> f32 {
        if self.items.is_empty() {
            return 0.0;
        }
        let max_index = (self.instance_count() - 1) as f32;
        let index = (offset / self.stride).round().clamp(0.0, max_index);
        index * self.stride
    }

    /// Snap index of the boundary nearest to `offset`.
    #[must_use]
    pub fn nearest_index(&self, offset: f32) -> usize {
        if self.items.is_empty() {
            return 0;
        }
        let max_index = (self.instance_count() - 1) as f32;
        (offset / self.stride).round().clamp(0.0, max_index) as usize
    }

    /// Viewport-space span of instance `index` when the strip is scrolled to
    /// `offset`.
    #[inline]
    #[must_use]
    pub fn instance_span(&self, index: usize, offset: f32) -> Span {
        Span::new(self.boundary(index) - offset, self.item_width)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
