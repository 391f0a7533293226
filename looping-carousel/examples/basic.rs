// Example: drive the looping state machine by hand (no timers, no tweens).
use looping_carousel::{Carousel, CarouselOptions, TransitionEnd};

fn main() {
    let cards = ["Consulting", "Web apps", "Automation", "Data", "Support"];
    let mut c = Carousel::new(CarouselOptions::new(cards.len()).with_initial_width(Some(1280)));

    let mut now_ms = 0u64;
    for _ in 0..7 {
        let Some(t) = c.advance() else {
            continue;
        };
        // A UI would animate from `t.from` to `t.to` and report when it is done.
        now_ms += 300;
        if let TransitionEnd::Realigned { from, to, .. } = c.on_transition_end(t.id, now_ms) {
            println!("realigned {from} -> {to} (no animation)");
        }
        now_ms += 50;
        c.tick(now_ms);

        let window: Vec<&str> = c.visible_slots().map(|s| cards[s.item_index]).collect();
        println!(
            "cursor={} offset={:.1}% window={window:?}",
            c.cursor(),
            c.offset_percent()
        );
    }
}
