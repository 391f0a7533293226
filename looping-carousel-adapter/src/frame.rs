use looping_carousel::ItemsPerView;

use crate::Easing;

/// Everything a renderer needs to draw the carousel track for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame<'a> {
    /// Nothing to render at all.
    pub is_empty: bool,
    /// Track translation to the left, in percent of the viewport width.
    pub offset_percent: f32,
    /// When `false` the renderer must apply the offset without animation.
    pub transition_enabled: bool,
    pub transition_duration_ms: u64,
    /// Easing for host-driven transitions; `None` when the controller tweens the offset itself.
    pub easing: Option<Easing>,
    pub items_per_view: ItemsPerView,
    pub show_controls: bool,
    pub style_class: Option<&'a str>,
}

impl Frame<'_> {
    /// Width of one item, in percent of the viewport width.
    pub fn item_width_percent(&self) -> f32 {
        self.items_per_view.item_percent()
    }
}
