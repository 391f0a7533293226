use crate::Direction;

/// Turns a touch-start / touch-move / touch-end sequence into at most one swipe.
///
/// Only horizontal coordinates are tracked. `distance = start - end`; a distance beyond
/// `threshold` to the left advances, beyond it to the right retreats. Anything within the
/// threshold is a tap or a vertical scroll and yields nothing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwipeTracker {
    threshold: f32,
    start_x: Option<f32>,
    end_x: Option<f32>,
}

impl SwipeTracker {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            start_x: None,
            end_x: None,
        }
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    pub fn is_tracking(&self) -> bool {
        self.start_x.is_some()
    }

    pub fn touch_start(&mut self, x: f32) {
        self.end_x = None;
        self.start_x = Some(x);
    }

    pub fn touch_move(&mut self, x: f32) {
        if self.start_x.is_none() {
            return;
        }
        self.end_x = Some(x);
    }

    /// Finishes the gesture. A touch without any movement never swipes.
    pub fn touch_end(&mut self) -> Option<Direction> {
        let start = self.start_x.take()?;
        let end = self.end_x.take()?;
        let distance = start - end;
        clog!(trace, start, end, distance, "SwipeTracker::touch_end");
        if distance > self.threshold {
            Some(Direction::Forward)
        } else if distance < -self.threshold {
            Some(Direction::Backward)
        } else {
            None
        }
    }

    pub fn reset(&mut self) {
        self.start_x = None;
        self.end_x = None;
    }
}

impl Default for SwipeTracker {
    fn default() -> Self {
        Self::new(crate::CarouselOptions::DEFAULT_SWIPE_THRESHOLD)
    }
}
