#![forbid(unsafe_code)]

//! The host environment surface.
//!
//! The controller is host-agnostic: it never queries a DOM, a scene graph,
//! or a layout engine directly. A [`Surface`] answers the two geometry
//! questions the per-frame pass needs — how wide is the viewport, and where
//! is instance `i` right now. Hosts without measured geometry get spans
//! derived from the strip's own layout math for free; hosts that can
//! measure real bounding boxes override [`Surface::instance_span`].
//!
//! [`HostHandle`] is the cancellation side of the contract: every listener,
//! timer, or frame-callback registration the host creates on behalf of the
//! carousel is wrapped in a handle and surrendered to the session, which
//! guarantees release at teardown.

use marquee_core::{Span, Strip};

/// Geometry queries the controller makes once per frame.
pub trait Surface {
    /// Width of the visible container, in pixels. Zero is legal and simply
    /// produces no visible motion.
    fn viewport_width(&self) -> f32;

    /// Bounding span of instance `index` in viewport coordinates.
    ///
    /// The default derives the span from the strip layout and the current
    /// offset. Hosts with measured geometry (sub-pixel layout, transforms)
    /// should override.
    fn instance_span(&self, strip: &Strip, index: usize, offset: f32) -> Span {
        strip.instance_span(index, offset)
    }
}

/// A fixed-width surface using the engine's own layout math.
///
/// Sufficient for headless hosts and tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedSurface {
    /// Viewport width in pixels.
    pub width: f32,
}

impl FixedSurface {
    /// Create a surface with the given viewport width.
    #[must_use]
    pub fn new(width: f32) -> Self {
        Self { width }
    }
}

impl Surface for FixedSurface {
    fn viewport_width(&self) -> f32 {
        self.width
    }
}

/// A cancelable host-side registration (event listener, interval timer,
/// animation-frame request).
///
/// `cancel` must be idempotent; the session may call it explicitly and the
/// handle may also be dropped afterwards.
pub trait HostHandle {
    /// Release the underlying registration.
    fn cancel(&mut self);
}

impl<F: FnMut()> HostHandle for F {
    fn cancel(&mut self) {
        self();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use marquee_core::default_catalog;

    #[test]
    fn fixed_surface_reports_width() {
        let surface = FixedSurface::new(1000.0);
        assert_eq!(surface.viewport_width(), 1000.0);
    }

    #[test]
    fn default_span_derivation_matches_strip() {
        let strip = Strip::new(default_catalog(), 3, 150.0, 190.0);
        let surface = FixedSurface::new(1000.0);
        let span = surface.instance_span(&strip, 4, 200.0);
        assert_eq!(span, strip.instance_span(4, 200.0));
    }

    #[test]
    fn closures_are_handles() {
        let mut fired = 0u32;
        {
            let mut handle = || fired += 1;
            HostHandle::cancel(&mut handle);
        }
        assert_eq!(fired, 1);
    }
}
