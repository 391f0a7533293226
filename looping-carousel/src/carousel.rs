use alloc::string::String;
use alloc::sync::Arc;
use core::cell::Cell;

use crate::{
    CarouselOptions, CarouselState, Direction, ItemsPerView, OptionsError, Phase, Segment, Slot,
    Transition, TransitionEnd,
};

/// A headless, infinitely looping carousel.
///
/// The carousel renders a window of `items_per_view` items over an *extended* sequence made of
/// three copies of the caller's items (`before`, `real`, `after`). The cursor starts at the
/// beginning of the real copy. Moving past either end keeps showing real neighbours (taken from
/// the adjacent copy); once the move has finished animating, the cursor is snapped back into the
/// real copy with transitions disabled, so the wrap is never visible.
///
/// This type holds no UI objects and no timers:
/// - Your adapter reports viewport width, advance/retreat requests and transition-finished
///   signals.
/// - Re-enabling transitions after a snap is driven by [`Carousel::tick`].
///
/// For autoplay scheduling, gestures and tween-driven animation, see the
/// `looping-carousel-adapter` crate.
#[derive(Clone, Debug)]
pub struct Carousel {
    options: CarouselOptions,
    items_per_view: ItemsPerView,
    cursor: i64,
    transition_enabled: bool,
    phase: Phase,
    in_flight: Option<Transition>,
    next_transition_id: u64,
    realign_deadline_ms: Option<u64>,

    notify_depth: Cell<usize>,
    notify_pending: Cell<bool>,
}

impl Carousel {
    /// Creates a carousel with the cursor at the start of the real copy.
    ///
    /// Invalid options are accepted (and logged with `feature = "tracing"`); use
    /// [`Carousel::try_new`] to reject them instead.
    pub fn new(options: CarouselOptions) -> Self {
        if let Err(_err) = options.validate() {
            clog!(warn, error = %_err, "Carousel::new: options failed validation");
        }

        let items_per_view = options
            .initial_width
            .map(|width| options.breakpoints.items_per_view(width))
            .unwrap_or_default();
        let cursor = options.count as i64;
        clog!(debug,
            count = options.count,
            auto_rotate = options.auto_rotate,
            items_per_view = items_per_view.get(),
            "Carousel::new"
        );
        Self {
            options,
            items_per_view,
            cursor,
            transition_enabled: true,
            phase: Phase::Idle,
            in_flight: None,
            next_transition_id: 0,
            realign_deadline_ms: None,
            notify_depth: Cell::new(0),
            notify_pending: Cell::new(false),
        }
    }

    pub fn try_new(options: CarouselOptions) -> Result<Self, OptionsError> {
        options.validate()?;
        Ok(Self::new(options))
    }

    pub fn options(&self) -> &CarouselOptions {
        &self.options
    }

    pub fn count(&self) -> usize {
        self.options.count
    }

    pub fn extended_count(&self) -> usize {
        self.options.count.saturating_mul(3)
    }

    pub fn is_empty(&self) -> bool {
        self.options.count == 0
    }

    fn len(&self) -> i64 {
        self.options.count as i64
    }

    pub fn cursor(&self) -> i64 {
        self.cursor
    }

    pub fn items_per_view(&self) -> ItemsPerView {
        self.items_per_view
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn transition_enabled(&self) -> bool {
        self.transition_enabled
    }

    /// The transition waiting for its finished signal, if any.
    pub fn in_flight(&self) -> Option<Transition> {
        self.in_flight
    }

    pub fn realign_deadline_ms(&self) -> Option<u64> {
        self.realign_deadline_ms
    }

    pub fn style_class(&self) -> Option<&str> {
        self.options.style_class.as_deref()
    }

    /// `true` when there are more items than fit in the window.
    pub fn can_rotate(&self) -> bool {
        self.options.count > self.items_per_view.get()
    }

    /// Whether previous/next controls should be rendered.
    pub fn show_controls(&self) -> bool {
        self.can_rotate()
    }

    /// Whether an autoplay timer should be armed (ignoring hover).
    pub fn autoplay_eligible(&self) -> bool {
        self.options.auto_rotate && self.can_rotate()
    }

    /// `true` when the window starting at `cursor` lies inside the extended sequence.
    fn window_fits_track(&self, cursor: i64) -> bool {
        let ipv = self.items_per_view.get() as i64;
        cursor >= 0 && cursor + ipv <= 3 * self.len()
    }

    fn notify_now(&self) {
        if let Some(cb) = &self.options.on_change {
            cb(self);
        }
    }

    fn notify(&self) {
        if self.notify_depth.get() > 0 {
            self.notify_pending.set(true);
            return;
        }
        self.notify_now();
    }

    /// Batches multiple updates into a single `on_change` notification.
    pub fn batch_update(&mut self, f: impl FnOnce(&mut Self)) {
        let depth = self.notify_depth.get();
        self.notify_depth.set(depth.saturating_add(1));

        f(self);

        let depth = self.notify_depth.get();
        debug_assert!(depth > 0, "notify_depth underflow");
        let next = depth.saturating_sub(1);
        self.notify_depth.set(next);

        if next == 0 && self.notify_pending.replace(false) {
            self.notify_now();
        }
    }

    pub fn set_on_change(
        &mut self,
        on_change: Option<impl Fn(&Carousel) + Send + Sync + 'static>,
    ) {
        self.options.on_change = on_change.map(|f| Arc::new(f) as _);
    }

    pub fn set_auto_rotate(&mut self, auto_rotate: bool) {
        if self.options.auto_rotate == auto_rotate {
            return;
        }
        self.options.auto_rotate = auto_rotate;
        self.notify();
    }

    /// Sets the autoplay interval; `0` is clamped to 1ms, as the timer does.
    pub fn set_auto_rotate_interval_ms(&mut self, interval_ms: u64) {
        let interval_ms = interval_ms.max(1);
        if self.options.auto_rotate_interval_ms == interval_ms {
            return;
        }
        self.options.auto_rotate_interval_ms = interval_ms;
        self.notify();
    }

    pub fn set_style_class(&mut self, style_class: Option<String>) {
        self.options.style_class = style_class;
        self.notify();
    }

    /// Recomputes items-per-view for a new viewport width.
    ///
    /// The cursor is left untouched. Returns `true` when items-per-view changed.
    pub fn set_viewport_width(&mut self, width: u32) -> bool {
        let next = self.options.breakpoints.items_per_view(width);
        self.set_items_per_view(next)
    }

    pub fn set_items_per_view(&mut self, items_per_view: ItemsPerView) -> bool {
        if self.items_per_view == items_per_view {
            return false;
        }
        clog!(trace,
            from = self.items_per_view.get(),
            to = items_per_view.get(),
            cursor = self.cursor,
            "Carousel::set_items_per_view"
        );
        self.items_per_view = items_per_view;
        self.notify();
        true
    }

    pub fn advance(&mut self) -> Option<Transition> {
        self.step(Direction::Forward)
    }

    pub fn retreat(&mut self) -> Option<Transition> {
        self.step(Direction::Backward)
    }

    /// Moves the cursor by one item in `direction` and starts an animated transition.
    ///
    /// Ignored (returns `None`) when there is nothing to rotate, while transitions are disabled
    /// by a realignment, or when the window starting at the new cursor would leave the three
    /// copies. A request while another transition is animating supersedes it.
    pub fn step(&mut self, direction: Direction) -> Option<Transition> {
        if !self.can_rotate() {
            clog!(trace,
                count = self.options.count,
                items_per_view = self.items_per_view.get(),
                "Carousel::step: nothing to rotate"
            );
            return None;
        }
        if !self.transition_enabled {
            clog!(debug, ?direction, "Carousel::step: ignored while realigning");
            return None;
        }

        let from = self.cursor;
        let to = from + direction.delta();
        if !self.window_fits_track(to) {
            clog!(debug, ?direction, from, to, "Carousel::step: window would leave the track");
            return None;
        }
        self.next_transition_id = self.next_transition_id.wrapping_add(1);
        let transition = Transition {
            id: self.next_transition_id,
            from,
            to,
            direction,
        };
        self.cursor = to;
        self.phase = Phase::Animating;
        self.in_flight = Some(transition);
        clog!(trace, id = transition.id, from, to, "Carousel::step");
        self.notify();
        Some(transition)
    }

    /// Delivers the transition-finished signal for transition `id`.
    ///
    /// Signals for superseded transitions are ignored. When the cursor has reached either loop
    /// boundary (`>= 2L` or `<= 0`) it is snapped into the real copy, transitions are disabled,
    /// and they are re-enabled by [`Carousel::tick`] once `realign_delay_ms` has elapsed.
    pub fn on_transition_end(&mut self, id: u64, now_ms: u64) -> TransitionEnd {
        match self.in_flight {
            Some(t) if t.id == id => {}
            _ => {
                clog!(trace, id, "Carousel::on_transition_end: stale signal");
                return TransitionEnd::Stale;
            }
        }
        self.in_flight = None;

        let len = self.len();
        if len > 0 && (self.cursor >= 2 * len || self.cursor <= 0) {
            return self.realign(now_ms);
        }

        self.phase = Phase::Idle;
        self.notify();
        TransitionEnd::Settled
    }

    /// Delivers the transition-finished signal for whatever transition is in flight.
    pub fn on_transition_end_current(&mut self, now_ms: u64) -> TransitionEnd {
        match self.in_flight {
            Some(t) => self.on_transition_end(t.id, now_ms),
            None => TransitionEnd::Stale,
        }
    }

    fn realign(&mut self, now_ms: u64) -> TransitionEnd {
        let len = self.len();
        let from = self.cursor;
        // Same content, real copy.
        let to = len + from.rem_euclid(len);
        let reenable_at_ms = now_ms.saturating_add(self.options.realign_delay_ms);

        self.cursor = to;
        self.transition_enabled = false;
        self.phase = Phase::Realigning;
        self.realign_deadline_ms = Some(reenable_at_ms);
        clog!(debug, from, to, reenable_at_ms, "Carousel: realigned");
        self.notify();

        TransitionEnd::Realigned {
            from,
            to,
            reenable_at_ms,
        }
    }

    /// Re-enables transitions once a pending realignment's delay has elapsed.
    ///
    /// Returns `true` when transitions were re-enabled by this call.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        let Some(deadline) = self.realign_deadline_ms else {
            return false;
        };
        if now_ms < deadline {
            return false;
        }
        self.complete_realignment()
    }

    /// Re-enables transitions immediately, regardless of the realign deadline.
    ///
    /// Adapters call this on teardown so the carousel is never left with transitions disabled.
    pub fn complete_realignment(&mut self) -> bool {
        if self.transition_enabled {
            return false;
        }
        self.realign_deadline_ms = None;
        self.transition_enabled = true;
        if self.phase == Phase::Realigning {
            self.phase = Phase::Idle;
        }
        clog!(trace, cursor = self.cursor, "Carousel: transitions re-enabled");
        self.notify();
        true
    }

    /// Track offset (percent of the viewport) for the current cursor: `cursor * 100 / ipv`.
    pub fn offset_percent(&self) -> f32 {
        if self.is_empty() {
            return 0.0;
        }
        self.cursor as f32 * self.items_per_view.item_percent()
    }

    /// Maps an extended index to the caller's item index.
    pub fn item_index_at(&self, extended_index: i64) -> Option<usize> {
        let len = self.len();
        if len == 0 {
            return None;
        }
        Some(extended_index.rem_euclid(len) as usize)
    }

    fn slot(&self, extended_index: i64) -> Slot {
        let len = self.len();
        let segment = if extended_index < len {
            Segment::Before
        } else if extended_index < 2 * len {
            Segment::Real
        } else {
            Segment::After
        };
        Slot {
            extended_index,
            item_index: extended_index.rem_euclid(len) as usize,
            segment,
        }
    }

    /// The slots currently inside the window, left to right.
    pub fn visible_slots(&self) -> impl Iterator<Item = Slot> + '_ {
        let n = if self.is_empty() {
            0
        } else {
            self.items_per_view.get() as i64
        };
        let start = self.cursor;
        (start..start + n).map(move |e| self.slot(e))
    }

    /// Every slot of the extended sequence, for adapters that render the whole track.
    pub fn extended_slots(&self) -> impl Iterator<Item = Slot> + '_ {
        (0..3 * self.len()).map(move |e| self.slot(e))
    }

    /// Returns a lightweight snapshot of the current position.
    pub fn state(&self) -> CarouselState {
        CarouselState {
            cursor: self.cursor,
            items_per_view: self.items_per_view,
            transition_enabled: self.transition_enabled,
            phase: self.phase,
        }
    }

    /// Restores a previously captured snapshot.
    ///
    /// The cursor is normalised into the real copy and the carousel comes back idle with
    /// transitions enabled; in-flight transitions and pending realignments are not restored.
    pub fn restore_state(&mut self, state: CarouselState) {
        let len = self.len();
        self.batch_update(|c| {
            c.set_items_per_view(state.items_per_view);
            c.cursor = if len == 0 {
                0
            } else {
                len + state.cursor.rem_euclid(len)
            };
            c.transition_enabled = true;
            c.phase = Phase::Idle;
            c.in_flight = None;
            c.realign_deadline_ms = None;
            c.notify();
        });
    }
}
