// Example: simulate a page with three auto-rotating carousels driven by one host clock.
use looping_carousel::CarouselOptions;
use looping_carousel_adapter::{Controller, Event};

fn main() {
    let sections: [(&str, &[&str], u64); 3] = [
        (
            "services",
            &["AI consulting", "Web development", "Automation", "Data pipelines"],
            5_000,
        ),
        ("projects", &["Booking portal", "Inventory sync", "Analytics"], 5_000),
        (
            "products",
            &["Scheduler", "Invoice bot", "Lead tracker", "Chat widget", "Reports"],
            6_000,
        ),
    ];

    let mut carousels: Vec<(&str, &[&str], Controller)> = sections
        .iter()
        .map(|&(name, cards, interval)| {
            let options = CarouselOptions::new(cards.len())
                .with_auto_rotate_interval_ms(interval)
                .with_style_class("will-change-transform");
            (name, cards, Controller::new(options))
        })
        .collect();

    let width = 1280;
    for (_, _, c) in &mut carousels {
        c.mount(width, 0);
    }

    // Simulate a host ticking every 4ms for 20 seconds. At t=8s the user hovers the products carousel
    // for 5 seconds, and at t=12s the window shrinks to tablet width.
    let mut now_ms = 0u64;
    while now_ms <= 20_000 {
        for (name, cards, c) in &mut carousels {
            if *name == "products" {
                if now_ms == 8_000 {
                    c.handle(Event::PointerEnter, now_ms);
                } else if now_ms == 13_000 {
                    c.handle(Event::PointerLeave, now_ms);
                }
            }
            if now_ms == 12_000 {
                c.handle(Event::Resize { width: 900 }, now_ms);
            }

            let before = c.carousel().cursor();
            c.tick(now_ms);
            if c.carousel().cursor() != before {
                let window: Vec<&str> = c.visible_slots().map(|s| cards[s.item_index]).collect();
                let frame = c.frame();
                println!(
                    "t={now_ms:>5}ms {name:<8} cursor={:>2} offset={:>6.1}% animated={} {window:?}",
                    c.carousel().cursor(),
                    frame.offset_percent,
                    frame.transition_enabled,
                );
            }
        }
        now_ms += 4;
    }

    for (_, _, c) in &mut carousels {
        c.unmount();
    }
}
