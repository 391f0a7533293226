use thiserror::Error;

/// Rejected [`crate::CarouselOptions`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OptionsError {
    #[error("auto-rotate interval must be greater than zero")]
    ZeroAutoRotateInterval,
    #[error("transition duration must be greater than zero")]
    ZeroTransitionDuration,
    #[error(
        "three-up breakpoint ({three_up_min_width}px) is below the two-up breakpoint ({two_up_min_width}px)"
    )]
    InvertedBreakpoints {
        two_up_min_width: u32,
        three_up_min_width: u32,
    },
    #[error("swipe threshold must be a finite, non-negative distance (got {0})")]
    InvalidSwipeThreshold(f32),
}
