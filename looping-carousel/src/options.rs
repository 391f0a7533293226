use alloc::string::String;
use alloc::sync::Arc;

use crate::carousel::Carousel;
use crate::{Breakpoints, OptionsError};

/// A callback fired when the carousel's render-relevant state changes.
pub type OnChangeCallback = Arc<dyn Fn(&Carousel) + Send + Sync>;

/// Configuration for [`crate::Carousel`].
///
/// Cheap to clone: the change callback is stored in an `Arc`.
pub struct CarouselOptions {
    /// Number of items in the caller's sequence (`L`). Fixed for the carousel's lifetime.
    pub count: usize,

    /// Whether autoplay should advance the carousel on a timer.
    pub auto_rotate: bool,
    pub auto_rotate_interval_ms: u64,

    /// Duration of the animated offset change. This is a styling hint for adapters; the state
    /// machine only cares about the transition-finished signal.
    pub transition_duration_ms: u64,

    /// Delay between snapping the cursor back into the real copy and re-enabling transitions.
    ///
    /// Must be long enough for the snap to be applied before transitions come back on; one
    /// rendering frame is typically enough.
    pub realign_delay_ms: u64,

    /// Minimum horizontal travel (px) for a touch gesture to count as a swipe.
    pub swipe_threshold: f32,

    pub breakpoints: Breakpoints,

    /// Viewport width to lay out with before the first resize event.
    ///
    /// When unset the carousel starts with one item per view.
    pub initial_width: Option<u32>,

    /// Opaque class/style token for the outer container.
    pub style_class: Option<String>,

    pub on_change: Option<OnChangeCallback>,
}

impl Clone for CarouselOptions {
    fn clone(&self) -> Self {
        Self {
            count: self.count,
            auto_rotate: self.auto_rotate,
            auto_rotate_interval_ms: self.auto_rotate_interval_ms,
            transition_duration_ms: self.transition_duration_ms,
            realign_delay_ms: self.realign_delay_ms,
            swipe_threshold: self.swipe_threshold,
            breakpoints: self.breakpoints,
            initial_width: self.initial_width,
            style_class: self.style_class.clone(),
            on_change: self.on_change.clone(),
        }
    }
}

impl CarouselOptions {
    pub const DEFAULT_AUTO_ROTATE_INTERVAL_MS: u64 = 4000;
    pub const DEFAULT_TRANSITION_DURATION_MS: u64 = 300;
    pub const DEFAULT_REALIGN_DELAY_MS: u64 = 50;
    pub const DEFAULT_SWIPE_THRESHOLD: f32 = 50.0;

    pub fn new(count: usize) -> Self {
        Self {
            count,
            auto_rotate: true,
            auto_rotate_interval_ms: Self::DEFAULT_AUTO_ROTATE_INTERVAL_MS,
            transition_duration_ms: Self::DEFAULT_TRANSITION_DURATION_MS,
            realign_delay_ms: Self::DEFAULT_REALIGN_DELAY_MS,
            swipe_threshold: Self::DEFAULT_SWIPE_THRESHOLD,
            breakpoints: Breakpoints::default(),
            initial_width: None,
            style_class: None,
            on_change: None,
        }
    }

    pub fn with_auto_rotate(mut self, auto_rotate: bool) -> Self {
        self.auto_rotate = auto_rotate;
        self
    }

    pub fn with_auto_rotate_interval_ms(mut self, interval_ms: u64) -> Self {
        self.auto_rotate_interval_ms = interval_ms;
        self
    }

    pub fn with_transition_duration_ms(mut self, duration_ms: u64) -> Self {
        self.transition_duration_ms = duration_ms;
        self
    }

    pub fn with_realign_delay_ms(mut self, delay_ms: u64) -> Self {
        self.realign_delay_ms = delay_ms;
        self
    }

    pub fn with_swipe_threshold(mut self, threshold: f32) -> Self {
        self.swipe_threshold = threshold;
        self
    }

    pub fn with_breakpoints(mut self, breakpoints: Breakpoints) -> Self {
        self.breakpoints = breakpoints;
        self
    }

    pub fn with_initial_width(mut self, width: Option<u32>) -> Self {
        self.initial_width = width;
        self
    }

    pub fn with_style_class(mut self, style_class: impl Into<String>) -> Self {
        self.style_class = Some(style_class.into());
        self
    }

    pub fn with_on_change(
        mut self,
        on_change: Option<impl Fn(&Carousel) + Send + Sync + 'static>,
    ) -> Self {
        self.on_change = on_change.map(|f| Arc::new(f) as _);
        self
    }

    /// Checks the options for values the state machine cannot work with.
    pub fn validate(&self) -> Result<(), OptionsError> {
        if self.auto_rotate_interval_ms == 0 {
            return Err(OptionsError::ZeroAutoRotateInterval);
        }
        if self.transition_duration_ms == 0 {
            return Err(OptionsError::ZeroTransitionDuration);
        }
        if !self.breakpoints.is_ordered() {
            return Err(OptionsError::InvertedBreakpoints {
                two_up_min_width: self.breakpoints.two_up_min_width,
                three_up_min_width: self.breakpoints.three_up_min_width,
            });
        }
        if !self.swipe_threshold.is_finite() || self.swipe_threshold < 0.0 {
            return Err(OptionsError::InvalidSwipeThreshold(self.swipe_threshold));
        }
        Ok(())
    }
}

impl Default for CarouselOptions {
    fn default() -> Self {
        Self::new(0)
    }
}

impl core::fmt::Debug for CarouselOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CarouselOptions")
            .field("count", &self.count)
            .field("auto_rotate", &self.auto_rotate)
            .field("auto_rotate_interval_ms", &self.auto_rotate_interval_ms)
            .field("transition_duration_ms", &self.transition_duration_ms)
            .field("realign_delay_ms", &self.realign_delay_ms)
            .field("swipe_threshold", &self.swipe_threshold)
            .field("breakpoints", &self.breakpoints)
            .field("initial_width", &self.initial_width)
            .field("style_class", &self.style_class)
            .finish_non_exhaustive()
    }
}
