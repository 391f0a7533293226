use crate::{ItemsPerView, Phase};

/// A lightweight, serializable snapshot of the carousel's position.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
///
/// Useful for keeping the visible window stable when a UI layer rebuilds the carousel (e.g.
/// across page re-renders), without coupling the engine to any framework.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CarouselState {
    pub cursor: i64,
    pub items_per_view: ItemsPerView,
    pub transition_enabled: bool,
    pub phase: Phase,
}
