#![cfg_attr(not(test), forbid(unsafe_code))]
#![cfg_attr(test, deny(unsafe_code))]

//! Core: deterministic motion and layout primitives for the marquee carousel.
//!
//! # Role in Marquee
//! `marquee-core` is the math layer. It owns easing curves, time-boxed
//! tweens, drag/velocity tracking, and the repeated-strip layout model that
//! the controller (`marquee`) drives. Nothing in this crate touches a host
//! environment; every type is a pure function of its inputs and the
//! timestamps it is fed.
//!
//! # Primary responsibilities
//! - **Animation**: the [`Animation`](animation::Animation) trait plus
//!   [`Tween`](animation::Tween) (eased scalar motion) and
//!   [`Pop`](animation::Pop) (one-shot highlight clock).
//! - **Drag tracking**: [`DragTracker`](drag::DragTracker) converts pointer
//!   samples into gained offsets and a momentum velocity, with rubber-band
//!   resistance at the strip bounds.
//! - **Strip layout**: [`Strip`](catalog::Strip) models `R` repeated copies
//!   of an item catalog and answers every stride/boundary/offset question.
//! - **Geometry**: [`Span`](geometry::Span), the 1-D interval used for
//!   focus-band containment tests.
//!
//! # How it fits in the system
//! The controller crate (`marquee`) composes these primitives into the
//! drag → momentum → snap state machine and the per-frame focus pass. Hosts
//! never depend on this crate directly.

pub mod animation;
pub mod catalog;
pub mod drag;
pub mod geometry;

pub use animation::{Animation, EasingFn, Pop, Tween, momentum_duration};
pub use catalog::{Item, Strip, default_catalog};
pub use drag::{DragTracker, rubber_band};
pub use geometry::Span;
