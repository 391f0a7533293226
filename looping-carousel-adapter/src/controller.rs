use alloc::string::String;

use looping_carousel::{
    Carousel, CarouselOptions, Direction, OptionsError, Slot, SwipeTracker, Transition,
    TransitionEnd,
};

use crate::{AutoplayTimer, Easing, Event, Frame, Tween};

/// Who animates the track between two offsets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AnimationDriver {
    /// The controller tweens the offset: `tick` reports the animated value and delivers the
    /// transition-finished signal itself when the tween completes.
    Tween(Easing),
    /// The host animates natively (e.g. CSS transitions) and reports completion through
    /// [`Controller::on_transition_end`].
    Host(Easing),
}

impl Default for AnimationDriver {
    fn default() -> Self {
        Self::Tween(Easing::default())
    }
}

#[derive(Clone, Copy, Debug)]
struct ActiveTween {
    tween: Tween,
    transition_id: u64,
}

/// A framework-neutral controller that wraps a [`Carousel`] and provides the adapter workflows
/// around it: autoplay scheduling, hover suspension, swipe gestures, tween-driven animation and
/// mount/unmount lifecycle.
///
/// This type does not hold any UI objects or real timers. Adapters drive it by calling:
/// - `mount` / `unmount` around the component's lifetime
/// - the `on_*` methods (or [`Controller::handle`]) when UI events occur
/// - `tick(now_ms)` each frame/timer tick; [`Controller::next_deadline_ms`] tells a host that
///   prefers sleeping when the next tick matters
///
/// Every entry point is a no-op while unmounted, so a callback that outlives the view cannot
/// move a carousel that is no longer displayed.
#[derive(Clone, Debug)]
pub struct Controller {
    carousel: Carousel,
    autoplay: AutoplayTimer,
    swipe: SwipeTracker,
    driver: AnimationDriver,
    tween: Option<ActiveTween>,
    offset_percent: f32,
    hovered: bool,
    mounted: bool,
}

impl Controller {
    pub fn new(options: CarouselOptions) -> Self {
        Self::from_carousel(Carousel::new(options))
    }

    pub fn try_new(options: CarouselOptions) -> Result<Self, OptionsError> {
        Carousel::try_new(options).map(Self::from_carousel)
    }

    pub fn from_carousel(carousel: Carousel) -> Self {
        let options = carousel.options();
        let autoplay = AutoplayTimer::new(options.auto_rotate_interval_ms);
        let swipe = SwipeTracker::new(options.swipe_threshold);
        let offset_percent = carousel.offset_percent();
        Self {
            carousel,
            autoplay,
            swipe,
            driver: AnimationDriver::default(),
            tween: None,
            offset_percent,
            hovered: false,
            mounted: false,
        }
    }

    pub fn with_animation_driver(mut self, driver: AnimationDriver) -> Self {
        self.driver = driver;
        self
    }

    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    pub fn into_carousel(self) -> Carousel {
        self.carousel
    }

    pub fn autoplay(&self) -> &AutoplayTimer {
        &self.autoplay
    }

    pub fn animation_driver(&self) -> AnimationDriver {
        self.driver
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    /// The offset to render right now (animated while a tween is running).
    pub fn offset_percent(&self) -> f32 {
        self.offset_percent
    }

    /// Starts the component's lifetime: lays out for `width` and arms autoplay if eligible.
    pub fn mount(&mut self, width: u32, now_ms: u64) {
        if self.mounted {
            alog!(warn, "Controller::mount: already mounted");
            return;
        }
        self.mounted = true;
        self.carousel.set_viewport_width(width);
        self.offset_percent = self.carousel.offset_percent();
        self.rearm_autoplay(now_ms);
        alog!(debug,
            width,
            count = self.carousel.count(),
            autoplay = self.autoplay.is_armed(),
            "Controller::mount"
        );
    }

    /// Ends the component's lifetime.
    ///
    /// Cancels autoplay, drops any running tween and gesture, and re-enables transitions if a
    /// realignment was pending. Safe to call on every teardown path, including empty carousels.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.mounted = false;
        self.hovered = false;
        self.autoplay.cancel();
        self.swipe.reset();
        self.tween = None;
        self.carousel.complete_realignment();
        self.offset_percent = self.carousel.offset_percent();
        alog!(debug, cursor = self.carousel.cursor(), "Controller::unmount");
    }

    fn rearm_autoplay(&mut self, now_ms: u64) {
        self.autoplay.cancel();
        if self.mounted && !self.hovered && self.carousel.autoplay_eligible() {
            self.autoplay.arm(now_ms);
        }
    }

    /// Applies a viewport resize. Returns `true` when items-per-view changed.
    ///
    /// The logical cursor is preserved; offsets (including a running tween) are rescaled to the
    /// new item width.
    pub fn on_resize(&mut self, width: u32, now_ms: u64) -> bool {
        if !self.mounted {
            return false;
        }
        let prev = self.carousel.items_per_view();
        if !self.carousel.set_viewport_width(width) {
            return false;
        }
        let next = self.carousel.items_per_view();
        let factor = prev.get() as f32 / next.get() as f32;
        self.offset_percent *= factor;
        if let Some(active) = &mut self.tween {
            active.tween.rescale(factor);
        }
        alog!(trace,
            width,
            items_per_view = next.get(),
            "Controller::on_resize"
        );
        self.rearm_autoplay(now_ms);
        true
    }

    /// Suspends autoplay: the pending tick is cancelled, not paused.
    pub fn on_pointer_enter(&mut self) {
        if !self.mounted {
            return;
        }
        self.hovered = true;
        self.autoplay.cancel();
    }

    /// Resumes autoplay with a full, fresh interval.
    pub fn on_pointer_leave(&mut self, now_ms: u64) {
        if !self.mounted {
            return;
        }
        self.hovered = false;
        self.rearm_autoplay(now_ms);
    }

    pub fn on_touch_start(&mut self, x: f32) {
        if !self.mounted {
            return;
        }
        self.swipe.touch_start(x);
    }

    pub fn on_touch_move(&mut self, x: f32) {
        if !self.mounted {
            return;
        }
        self.swipe.touch_move(x);
    }

    pub fn on_touch_end(&mut self, now_ms: u64) -> Option<Transition> {
        if !self.mounted {
            return None;
        }
        let direction = self.swipe.touch_end()?;
        self.step(direction, now_ms)
    }

    pub fn next(&mut self, now_ms: u64) -> Option<Transition> {
        self.step(Direction::Forward, now_ms)
    }

    pub fn previous(&mut self, now_ms: u64) -> Option<Transition> {
        self.step(Direction::Backward, now_ms)
    }

    /// The single entry point for controls, swipes and autoplay.
    pub fn step(&mut self, direction: Direction, now_ms: u64) -> Option<Transition> {
        if !self.mounted {
            return None;
        }
        let from = match &self.tween {
            Some(active) => active.tween.sample(now_ms),
            None => self.offset_percent,
        };
        let transition = self.carousel.step(direction)?;
        let to = self.carousel.offset_percent();

        match self.driver {
            AnimationDriver::Tween(easing) => {
                let duration_ms = self.carousel.options().transition_duration_ms;
                let tween = match self.tween {
                    Some(ActiveTween { mut tween, .. }) => {
                        tween.retarget(now_ms, to, duration_ms);
                        tween
                    }
                    None => Tween::new(from, to, now_ms, duration_ms, easing),
                };
                self.tween = Some(ActiveTween {
                    tween,
                    transition_id: transition.id,
                });
                self.offset_percent = from;
            }
            AnimationDriver::Host(_) => {
                self.offset_percent = to;
            }
        }
        Some(transition)
    }

    /// Delivers a host transition-finished signal for the in-flight transition.
    pub fn on_transition_end(&mut self, now_ms: u64) -> TransitionEnd {
        if !self.mounted {
            return TransitionEnd::Stale;
        }
        self.tween = None;
        let end = self.carousel.on_transition_end_current(now_ms);
        self.offset_percent = self.carousel.offset_percent();
        end
    }

    /// Advances time-driven state: realign re-enable, the running tween, then autoplay.
    ///
    /// Returns the offset to render when anything changed.
    pub fn tick(&mut self, now_ms: u64) -> Option<f32> {
        if !self.mounted {
            return None;
        }
        let mut changed = self.carousel.tick(now_ms);

        if let Some(active) = self.tween {
            self.offset_percent = active.tween.sample(now_ms);
            changed = true;
            if active.tween.is_done(now_ms) {
                self.tween = None;
                self.carousel.on_transition_end(active.transition_id, now_ms);
                self.offset_percent = self.carousel.offset_percent();
            }
        }

        if self.autoplay.poll(now_ms) {
            alog!(trace, now_ms, "Controller::tick: autoplay");
            if self.step(Direction::Forward, now_ms).is_some() {
                changed = true;
            }
        }

        changed.then_some(self.offset_percent)
    }

    /// The earliest time at which `tick` has something to do.
    pub fn next_deadline_ms(&self) -> Option<u64> {
        if !self.mounted {
            return None;
        }
        [
            self.autoplay.due_ms(),
            self.carousel.realign_deadline_ms(),
            self.tween.map(|active| active.tween.end_ms()),
        ]
        .into_iter()
        .flatten()
        .min()
    }

    pub fn set_auto_rotate(&mut self, auto_rotate: bool, now_ms: u64) {
        self.carousel.set_auto_rotate(auto_rotate);
        self.rearm_autoplay(now_ms);
    }

    pub fn set_auto_rotate_interval_ms(&mut self, interval_ms: u64, now_ms: u64) {
        self.carousel.set_auto_rotate_interval_ms(interval_ms);
        self.autoplay.set_interval_ms(interval_ms);
        self.rearm_autoplay(now_ms);
    }

    pub fn set_style_class(&mut self, style_class: Option<String>) {
        self.carousel.set_style_class(style_class);
    }

    /// Dispatches a UI event. Returns the transition it started, if any.
    pub fn handle(&mut self, event: Event, now_ms: u64) -> Option<Transition> {
        match event {
            Event::Resize { width } => {
                self.on_resize(width, now_ms);
                None
            }
            Event::PointerEnter => {
                self.on_pointer_enter();
                None
            }
            Event::PointerLeave => {
                self.on_pointer_leave(now_ms);
                None
            }
            Event::TouchStart { x } => {
                self.on_touch_start(x);
                None
            }
            Event::TouchMove { x } => {
                self.on_touch_move(x);
                None
            }
            Event::TouchEnd => self.on_touch_end(now_ms),
            Event::Next => self.next(now_ms),
            Event::Previous => self.previous(now_ms),
            Event::TransitionEnd => {
                self.on_transition_end(now_ms);
                None
            }
        }
    }

    pub fn frame(&self) -> Frame<'_> {
        let options = self.carousel.options();
        Frame {
            is_empty: self.carousel.is_empty(),
            offset_percent: self.offset_percent,
            transition_enabled: self.carousel.transition_enabled(),
            transition_duration_ms: options.transition_duration_ms,
            easing: match self.driver {
                AnimationDriver::Host(easing) => Some(easing),
                AnimationDriver::Tween(_) => None,
            },
            items_per_view: self.carousel.items_per_view(),
            show_controls: self.carousel.show_controls(),
            style_class: self.carousel.style_class(),
        }
    }

    pub fn visible_slots(&self) -> impl Iterator<Item = Slot> + '_ {
        self.carousel.visible_slots()
    }
}
