/// UI events an adapter forwards to [`crate::Controller::handle`].
///
/// Coordinates and widths are in CSS/logical pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Event {
    Resize { width: u32 },
    PointerEnter,
    PointerLeave,
    TouchStart { x: f32 },
    TouchMove { x: f32 },
    TouchEnd,
    /// The "next" control was activated.
    Next,
    /// The "previous" control was activated.
    Previous,
    /// The host finished animating the track (e.g. a DOM `transitionend`).
    TransitionEnd,
}
