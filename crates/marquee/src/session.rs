#![forbid(unsafe_code)]

//! Lifecycle guard tying a [`Carousel`] to its host registrations.
//!
//! Hosts wire a carousel up with listeners, timers, and frame callbacks;
//! each of those registrations leaks if the carousel goes away without
//! releasing them. [`CarouselSession`] owns the controller together with
//! every [`HostHandle`] the host surrendered, and guarantees release:
//!
//! 1. [`teardown`](CarouselSession::teardown) cancels every handle and
//!    resets the controller, explicitly and idempotently.
//! 2. `Drop` performs the same teardown, so a session that falls out of
//!    scope (including on an unwind) cannot strand registrations.
//!
//! The session derefs to the carousel, so hosts call controller methods on
//! it directly.

use std::fmt;
use std::ops::{Deref, DerefMut};

use crate::carousel::Carousel;
use crate::host::HostHandle;

/// RAII owner of a carousel and its host-side registrations.
pub struct CarouselSession {
    carousel: Carousel,
    handles: Vec<Box<dyn HostHandle>>,
    torn_down: bool,
}

impl CarouselSession {
    /// Wrap a carousel. Registrations are surrendered afterwards via
    /// [`register`](Self::register).
    #[must_use]
    pub fn new(carousel: Carousel) -> Self {
        Self {
            carousel,
            handles: Vec::new(),
            torn_down: false,
        }
    }

    /// Surrender a host registration to the session. It will be cancelled
    /// exactly once, at teardown or drop, whichever comes first.
    pub fn register(&mut self, handle: Box<dyn HostHandle>) {
        self.handles.push(handle);
    }

    /// Number of live registrations the session holds.
    #[must_use]
    pub fn handle_count(&self) -> usize {
        self.handles.len()
    }

    /// Cancel every registration and reset the controller. Idempotent;
    /// calling it again after the first time is a no-op.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.torn_down = true;
        for mut handle in self.handles.drain(..) {
            handle.cancel();
        }
        self.carousel.teardown();
        #[cfg(feature = "tracing")]
        tracing::debug!("carousel session torn down");
    }
}

impl Deref for CarouselSession {
    type Target = Carousel;

    fn deref(&self) -> &Carousel {
        &self.carousel
    }
}

impl DerefMut for CarouselSession {
    fn deref_mut(&mut self) -> &mut Carousel {
        &mut self.carousel
    }
}

impl Drop for CarouselSession {
    fn drop(&mut self) {
        self.teardown();
    }
}

impl fmt::Debug for CarouselSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CarouselSession")
            .field("carousel", &self.carousel)
            .field("handles", &self.handles.len())
            .field("torn_down", &self.torn_down)
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
