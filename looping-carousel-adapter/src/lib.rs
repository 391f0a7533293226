//! Adapter utilities for the `looping-carousel` crate.
//!
//! The `looping-carousel` crate is UI-agnostic and focuses on the looping state machine and
//! layout math. This crate provides the framework-neutral pieces an adapter needs around it:
//!
//! - Autoplay scheduling with cancel-on-hover / fresh re-arm on leave
//! - Swipe gesture routing
//! - Tween-based track animation (optional; hosts with native transitions can opt out)
//! - Mount/unmount lifecycle so no scheduled work outlives the view
//!
//! This crate is intentionally framework-agnostic (no DOM/egui/iced bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod autoplay;
mod controller;
mod event;
mod frame;
mod tween;


pub use autoplay::AutoplayTimer;
pub use controller::{AnimationDriver, Controller};
pub use event::Event;
pub use frame::Frame;
pub use tween::{Easing, Tween};
