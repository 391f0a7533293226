//! Viewport-responsive layout.

/// How many items the carousel window shows at once.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemsPerView {
    #[default]
    One,
    Two,
    Three,
}

impl ItemsPerView {
    pub const fn get(self) -> usize {
        match self {
            Self::One => 1,
            Self::Two => 2,
            Self::Three => 3,
        }
    }

    /// Width of a single item as a percentage of the viewport.
    pub fn item_percent(self) -> f32 {
        100.0 / self.get() as f32
    }
}

/// Minimum viewport widths (in px) at which the carousel shows two and three items.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Breakpoints {
    pub two_up_min_width: u32,
    pub three_up_min_width: u32,
}

impl Breakpoints {
    pub const DEFAULT_TWO_UP: u32 = 768;
    pub const DEFAULT_THREE_UP: u32 = 1024;

    pub const fn new(two_up_min_width: u32, three_up_min_width: u32) -> Self {
        Self {
            two_up_min_width,
            three_up_min_width,
        }
    }

    /// Pure function of width; no hysteresis.
    pub fn items_per_view(&self, width: u32) -> ItemsPerView {
        if width >= self.three_up_min_width {
            ItemsPerView::Three
        } else if width >= self.two_up_min_width {
            ItemsPerView::Two
        } else {
            ItemsPerView::One
        }
    }

    pub fn is_ordered(&self) -> bool {
        self.three_up_min_width >= self.two_up_min_width
    }
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self::new(Self::DEFAULT_TWO_UP, Self::DEFAULT_THREE_UP)
    }
}
