// Example: a host with native (CSS-like) transitions that reports `transitionend` itself.
use looping_carousel::{CarouselOptions, TransitionEnd};
use looping_carousel_adapter::{AnimationDriver, Controller, Easing, Event};

fn main() {
    let mut c = Controller::new(CarouselOptions::new(3).with_auto_rotate(false))
        .with_animation_driver(AnimationDriver::Host(Easing::EaseInOut));
    c.mount(600, 0);

    let mut now_ms = 0u64;
    for event in [Event::Next, Event::Next, Event::Next, Event::Previous] {
        c.handle(event, now_ms);
        let frame = c.frame();
        println!(
            "{event:?}: translateX(-{:.1}%) transition={}",
            frame.offset_percent,
            if frame.transition_enabled {
                "transform 0.3s ease-in-out"
            } else {
                "none"
            }
        );

        // The browser finishes the CSS transition.
        now_ms += frame.transition_duration_ms;
        if let TransitionEnd::Realigned { from, to, .. } = c.on_transition_end(now_ms) {
            println!("  snapped {from} -> {to}: translateX(-{:.1}%) transition=none", c.offset_percent());
        }
        if let Some(deadline) = c.next_deadline_ms() {
            now_ms = now_ms.max(deadline);
            c.tick(now_ms);
        }
    }

    c.unmount();
}
