#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// Content moves left; the cursor increases.
    Forward,
    /// Content moves right; the cursor decreases.
    Backward,
}

impl Direction {
    pub fn delta(self) -> i64 {
        match self {
            Self::Forward => 1,
            Self::Backward => -1,
        }
    }
}

/// Looping state machine phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    #[default]
    Idle,
    /// A cursor change is being animated; waiting for the transition-finished signal.
    Animating,
    /// The cursor was snapped back into the real copy with transitions disabled.
    Realigning,
}

/// Which of the three copies of the item sequence an extended index falls into.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Segment {
    Before,
    Real,
    After,
}

/// One rendered position of the extended (tripled) sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Slot {
    /// Index into the extended sequence. Can leave `0..3 * count` briefly while requests
    /// overshoot a loop boundary ahead of realignment.
    pub extended_index: i64,
    /// Index into the caller's item sequence.
    pub item_index: usize,
    pub segment: Segment,
}

/// An accepted cursor move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transition {
    /// Monotonic id; only the latest transition's finished signal is honoured.
    pub id: u64,
    pub from: i64,
    pub to: i64,
    pub direction: Direction,
}

/// Result of delivering a transition-finished signal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransitionEnd {
    /// The signal did not belong to the in-flight transition and was ignored.
    Stale,
    /// The cursor stayed inside the loop bounds; the carousel is idle again.
    Settled,
    /// The cursor crossed a loop boundary and was snapped without animation.
    Realigned {
        from: i64,
        to: i64,
        /// When transitions get re-enabled (see [`crate::Carousel::tick`]).
        reenable_at_ms: u64,
    },
}
