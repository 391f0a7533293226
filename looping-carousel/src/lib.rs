//! A headless, infinitely looping, responsive carousel.
//!
//! For adapter-level utilities (autoplay scheduling, tweens, event dispatch), see the
//! `looping-carousel-adapter` crate.
//!
//! The carousel shows a sliding window of 1–3 items (depending on viewport width) over an
//! ordered item sequence and loops seamlessly in both directions. It does so by laying the items
//! out three times and snapping the cursor back into the middle copy, without animation, after a
//! move crosses a loop boundary.
//!
//! It is UI-agnostic. A TUI/GUI/web layer is expected to provide:
//! - the viewport width
//! - advance/retreat requests (buttons, swipes, timers)
//! - a transition-finished signal once an offset change has been animated
//! - a clock (`now_ms`) for re-enabling transitions after a snap
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod carousel;
mod error;
mod gesture;
mod layout;
mod options;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use carousel::Carousel;
pub use error::OptionsError;
pub use gesture::SwipeTracker;
pub use layout::{Breakpoints, ItemsPerView};
pub use options::{CarouselOptions, OnChangeCallback};
pub use state::CarouselState;
pub use types::{Direction, Phase, Segment, Slot, Transition, TransitionEnd};
