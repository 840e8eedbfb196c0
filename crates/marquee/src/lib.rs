#![cfg_attr(not(test), forbid(unsafe_code))]
#![cfg_attr(test, deny(unsafe_code))]

//! Marquee: a headless, host-agnostic logo-carousel controller.
//!
//! # Role in Marquee
//! This crate is the controller layer. It composes the motion and layout
//! primitives from `marquee-core` into the full carousel behavior: pointer
//! drags with rubber-band resistance, the momentum glide and boundary snap
//! after release, periodic auto-advance with quiet-period resumes, silent
//! rewrap for infinite scroll, and focus-band highlighting with pop replays.
//!
//! # Primary responsibilities
//! - **State machine**: [`Carousel`] owns the strip offset; the [`Driver`]
//!   tag records which subsystem may mutate it each frame.
//! - **Host contract**: [`Surface`] answers geometry queries;
//!   [`FrameSnapshot`] tells the host what to render; [`HostHandle`] and
//!   [`CarouselSession`] guarantee registration cleanup.
//! - **Configuration**: [`CarouselConfig`] collects every tunable with the
//!   reference defaults.
//!
//! # Driving the controller
//! The host forwards pointer events (`pointer_down`, `pointer_move`,
//! `pointer_up`, `pointer_over`) and calls [`Carousel::frame`] once per
//! animation tick with the current instant; it then renders the returned
//! snapshot. Time never flows through a hidden clock, so tests drive the
//! controller with synthetic instants.
//!
//! ```
//! use marquee::{Carousel, CarouselConfig, FixedSurface};
//! use marquee_core::default_catalog;
//! use web_time::{Duration, Instant};
//!
//! let t0 = Instant::now();
//! let mut carousel = Carousel::new(default_catalog(), CarouselConfig::default(), t0);
//! let surface = FixedSurface::new(1000.0);
//!
//! carousel.pointer_down(400.0, t0);
//! carousel.pointer_move(300.0, t0 + Duration::from_millis(16), surface.width);
//! carousel.pointer_up(t0 + Duration::from_millis(32), surface.width);
//!
//! let snapshot = carousel.frame(t0 + Duration::from_millis(48), &surface);
//! assert!(snapshot.animating);
//! ```
//!
//! # Feature flags
//! - `tracing`: emit `tracing` debug events at state transitions.
//! - `serde`: serialize [`CarouselConfig`] and [`FrameStats`].

pub mod carousel;
pub mod config;
pub mod driver;
pub mod host;
pub mod session;
pub mod snapshot;

mod auto;
mod focus;

pub use carousel::Carousel;
pub use config::CarouselConfig;
pub use driver::Driver;
pub use host::{FixedSurface, HostHandle, Surface};
pub use session::CarouselSession;
pub use snapshot::{FrameSnapshot, FrameStats, InstanceVisual, VisualFlags};
