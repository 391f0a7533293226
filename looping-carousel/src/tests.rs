use crate::*;

use alloc::sync::Arc;
use alloc::vec::Vec;
use core::sync::atomic::{AtomicUsize, Ordering};

#[derive(Clone, Copy, Debug)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        // Deterministic, dependency-free PRNG for tests.
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0
    }

    fn gen_bool(&mut self) -> bool {
        (self.next_u64() >> 33) & 1 == 1
    }
}

const ALL_VIEWS: [ItemsPerView; 3] = [ItemsPerView::One, ItemsPerView::Two, ItemsPerView::Three];

fn carousel(count: usize, items_per_view: ItemsPerView) -> Carousel {
    let mut c = Carousel::new(CarouselOptions::new(count));
    c.set_items_per_view(items_per_view);
    c
}

fn visible_items(c: &Carousel) -> Vec<usize> {
    c.visible_slots().map(|s| s.item_index).collect()
}

/// Steps once, finishes the animation at `now_ms`, and lets any realignment complete.
fn step_and_settle(c: &mut Carousel, direction: Direction, now_ms: u64) {
    let t = c.step(direction).expect("step accepted");
    c.on_transition_end(t.id, now_ms);
    c.tick(now_ms + c.options().realign_delay_ms);
}

#[test]
fn cursor_starts_at_the_real_copy() {
    let c = carousel(5, ItemsPerView::Three);
    assert_eq!(c.cursor(), 5);
    assert_eq!(c.phase(), Phase::Idle);
    assert!(c.transition_enabled());
    assert_eq!(visible_items(&c), vec![0, 1, 2]);
    assert!(c.visible_slots().all(|s| s.segment == Segment::Real));
}

#[test]
fn empty_carousel_is_a_terminal_no_op() {
    let mut c = carousel(0, ItemsPerView::One);
    assert!(c.is_empty());
    assert_eq!(c.cursor(), 0);
    assert_eq!(c.offset_percent(), 0.0);
    assert!(!c.show_controls());
    assert!(!c.autoplay_eligible());
    assert_eq!(c.visible_slots().count(), 0);
    assert_eq!(c.extended_slots().count(), 0);
    assert_eq!(c.item_index_at(4), None);

    assert_eq!(c.advance(), None);
    assert_eq!(c.retreat(), None);
    assert_eq!(c.on_transition_end_current(0), TransitionEnd::Stale);
    assert!(!c.tick(1_000));
    assert_eq!(c.cursor(), 0);
}

#[test]
fn breakpoints_map_width_to_items_per_view() {
    let bp = Breakpoints::default();
    assert_eq!(bp.items_per_view(1300), ItemsPerView::Three);
    assert_eq!(bp.items_per_view(1024), ItemsPerView::Three);
    assert_eq!(bp.items_per_view(1023), ItemsPerView::Two);
    assert_eq!(bp.items_per_view(768), ItemsPerView::Two);
    assert_eq!(bp.items_per_view(767), ItemsPerView::One);
    assert_eq!(bp.items_per_view(0), ItemsPerView::One);
}

#[test]
fn initial_width_sets_initial_layout() {
    let c = Carousel::new(CarouselOptions::new(6).with_initial_width(Some(900)));
    assert_eq!(c.items_per_view(), ItemsPerView::Two);

    let c = Carousel::new(CarouselOptions::new(6));
    assert_eq!(c.items_per_view(), ItemsPerView::One);
}

#[test]
fn resize_updates_layout_without_moving_the_cursor() {
    let mut c = Carousel::new(CarouselOptions::new(8));
    c.set_viewport_width(1300);
    step_and_settle(&mut c, Direction::Forward, 0);
    let cursor = c.cursor();
    assert_eq!(cursor, 9);

    assert_eq!(c.items_per_view(), ItemsPerView::Three);
    assert!(c.set_viewport_width(900));
    assert_eq!(c.items_per_view(), ItemsPerView::Two);
    assert_eq!(c.cursor(), cursor);
    assert!(c.set_viewport_width(500));
    assert_eq!(c.items_per_view(), ItemsPerView::One);
    assert_eq!(c.cursor(), cursor);

    // Same bucket: nothing changes.
    assert!(!c.set_viewport_width(400));
    assert_eq!(visible_items(&c), vec![1]);
}

#[test]
fn offset_is_cursor_times_item_width() {
    let mut c = carousel(5, ItemsPerView::One);
    assert_eq!(c.offset_percent(), 500.0);
    c.set_items_per_view(ItemsPerView::Two);
    assert_eq!(c.offset_percent(), 250.0);
    c.set_items_per_view(ItemsPerView::Three);
    assert!((c.offset_percent() - 5.0 * (100.0 / 3.0)).abs() < 1e-3);
}

#[test]
fn five_items_three_up_realigns_at_the_boundary() {
    let mut c = carousel(5, ItemsPerView::Three);
    assert_eq!(c.cursor(), 5);

    for expected in [6, 7] {
        let t = c.advance().unwrap();
        assert_eq!(c.phase(), Phase::Animating);
        assert_eq!(t.to, expected);
        assert_eq!(c.on_transition_end(t.id, 0), TransitionEnd::Settled);
        assert_eq!(c.phase(), Phase::Idle);
    }
    assert_eq!(c.cursor(), 7);
    assert!(c.transition_enabled());

    for _ in 0..2 {
        let t = c.advance().unwrap();
        assert_eq!(c.on_transition_end(t.id, 0), TransitionEnd::Settled);
    }
    let t = c.advance().unwrap();
    assert_eq!(c.cursor(), 10);

    let end = c.on_transition_end(t.id, 1_000);
    assert_eq!(
        end,
        TransitionEnd::Realigned {
            from: 10,
            to: 5,
            reenable_at_ms: 1_050,
        }
    );
    assert_eq!(c.cursor(), 5);
    assert_eq!(c.phase(), Phase::Realigning);
    assert!(!c.transition_enabled());
    assert_eq!(c.realign_deadline_ms(), Some(1_050));

    assert!(!c.tick(1_049));
    assert!(!c.transition_enabled());
    assert!(c.tick(1_050));
    assert!(c.transition_enabled());
    assert_eq!(c.phase(), Phase::Idle);
    assert_eq!(c.realign_deadline_ms(), None);
}

#[test]
fn retreating_to_zero_realigns_to_the_real_copy() {
    let mut c = carousel(4, ItemsPerView::One);
    for _ in 0..3 {
        step_and_settle(&mut c, Direction::Backward, 0);
    }
    assert_eq!(c.cursor(), 1);

    let t = c.retreat().unwrap();
    assert_eq!(c.cursor(), 0);
    let before = visible_items(&c);
    assert_eq!(
        c.on_transition_end(t.id, 10),
        TransitionEnd::Realigned {
            from: 0,
            to: 4,
            reenable_at_ms: 60,
        }
    );
    assert_eq!(visible_items(&c), before);
}

#[test]
fn requests_are_ignored_while_transitions_are_disabled() {
    let mut c = carousel(3, ItemsPerView::One);
    for _ in 0..2 {
        step_and_settle(&mut c, Direction::Forward, 0);
    }
    let t = c.advance().unwrap();
    assert!(matches!(
        c.on_transition_end(t.id, 0),
        TransitionEnd::Realigned { .. }
    ));

    assert_eq!(c.advance(), None);
    assert_eq!(c.retreat(), None);
    assert_eq!(c.cursor(), 3);

    c.tick(50);
    assert!(c.advance().is_some());
}

#[test]
fn superseded_transition_signals_are_stale() {
    let mut c = carousel(5, ItemsPerView::One);
    let first = c.advance().unwrap();
    let second = c.advance().unwrap();
    assert_ne!(first.id, second.id);
    assert_eq!(second.from, 6);

    assert_eq!(c.on_transition_end(first.id, 0), TransitionEnd::Stale);
    assert_eq!(c.phase(), Phase::Animating);
    assert_eq!(c.on_transition_end(second.id, 0), TransitionEnd::Settled);
    assert_eq!(c.on_transition_end(second.id, 0), TransitionEnd::Stale);
    assert_eq!(c.cursor(), 7);
}

#[test]
fn overshooting_the_boundary_keeps_the_visible_content() {
    let mut c = carousel(4, ItemsPerView::Two);
    // Rapid requests: none of the intermediate transitions finish.
    let mut last = None;
    for _ in 0..5 {
        last = c.advance();
    }
    assert_eq!(c.cursor(), 9);
    let before = visible_items(&c);

    let end = c.on_transition_end(last.unwrap().id, 0);
    assert!(matches!(end, TransitionEnd::Realigned { from: 9, to: 5, .. }));
    assert_eq!(visible_items(&c), before);

    let mut c = carousel(4, ItemsPerView::Two);
    for _ in 0..4 {
        last = c.retreat();
    }
    assert_eq!(c.cursor(), 0);
    // The track starts at extended index 0.
    assert_eq!(c.retreat(), None);
    assert_eq!(c.in_flight(), last);
    let before = visible_items(&c);
    let end = c.on_transition_end(last.unwrap().id, 0);
    assert!(matches!(end, TransitionEnd::Realigned { from: 0, to: 4, .. }));
    assert_eq!(visible_items(&c), before);
}

#[test]
fn rapid_requests_never_leave_the_extended_track() {
    let mut c = carousel(2, ItemsPerView::One);
    let accepted: Vec<_> = (0..4).filter_map(|_| c.advance()).collect();
    assert_eq!(accepted.len(), 3);
    assert_eq!(c.cursor(), 5);
    assert!(c.visible_slots().all(|s| s.extended_index < c.extended_count() as i64));
    assert_eq!(c.offset_percent(), 500.0);

    let before = visible_items(&c);
    let end = c.on_transition_end(accepted[2].id, 0);
    assert!(matches!(end, TransitionEnd::Realigned { from: 5, to: 3, .. }));
    assert_eq!(visible_items(&c), before);

    for count in 2..=7usize {
        for ipv in ALL_VIEWS {
            let c = carousel(count, ipv);
            if !c.can_rotate() {
                continue;
            }
            let ipv = ipv.get() as i64;
            let track = c.extended_count() as i64;
            for direction in [Direction::Forward, Direction::Backward] {
                let mut c = c.clone();
                while c.step(direction).is_some() {}
                assert!(c.cursor() >= 0 && c.cursor() + ipv <= track);
                assert!(c.cursor() == 0 || c.cursor() + ipv == track);
            }
        }
    }
}

#[test]
fn advancing_two_laps_closes_the_loop() {
    for count in 1..=12usize {
        for ipv in ALL_VIEWS {
            let mut c = carousel(count, ipv);
            let start = visible_items(&c);
            for i in 0..2 * count {
                if c.can_rotate() {
                    step_and_settle(&mut c, Direction::Forward, i as u64 * 1_000);
                } else {
                    assert_eq!(c.advance(), None);
                }
            }
            assert_eq!(visible_items(&c), start, "count={count} ipv={ipv:?}");
            assert!(c.transition_enabled());
        }
    }
}

#[test]
fn random_walks_stay_in_bounds_and_track_content() {
    let mut rng = Lcg::new(0x5eed);
    for count in 4..=9usize {
        for ipv in ALL_VIEWS {
            let mut c = carousel(count, ipv);
            let mut displacement = 0i64;
            for i in 0..200u64 {
                let direction = if rng.gen_bool() {
                    Direction::Forward
                } else {
                    Direction::Backward
                };
                step_and_settle(&mut c, direction, i * 100);
                displacement += direction.delta();

                let len = count as i64;
                assert!(c.cursor() > 0 && c.cursor() < 2 * len);
                let first = c.visible_slots().next().unwrap().item_index as i64;
                assert_eq!(first, displacement.rem_euclid(len));
            }
        }
    }
}

#[test]
fn no_rotation_when_items_fit_in_the_window() {
    for count in 1..=3usize {
        for ipv in ALL_VIEWS {
            if count > ipv.get() {
                continue;
            }
            let mut c = carousel(count, ipv);
            assert!(!c.show_controls());
            assert!(!c.autoplay_eligible());
            assert_eq!(c.advance(), None);
            assert_eq!(c.retreat(), None);
            assert_eq!(c.cursor(), count as i64);
        }
    }
}

#[test]
fn autoplay_eligibility_follows_auto_rotate_and_layout() {
    let mut c = carousel(3, ItemsPerView::One);
    assert!(c.autoplay_eligible());
    c.set_items_per_view(ItemsPerView::Three);
    assert!(!c.autoplay_eligible());
    c.set_items_per_view(ItemsPerView::Two);
    assert!(c.autoplay_eligible());
    c.set_auto_rotate(false);
    assert!(!c.autoplay_eligible());
    assert!(c.show_controls());
}

#[test]
fn slots_report_item_index_and_segment() {
    let mut c = carousel(3, ItemsPerView::Two);
    let all: Vec<Slot> = c.extended_slots().collect();
    assert_eq!(all.len(), 9);
    assert_eq!(all[0].segment, Segment::Before);
    assert_eq!(all[3].segment, Segment::Real);
    assert_eq!(all[8].segment, Segment::After);
    assert_eq!(all[7].item_index, 1);

    for _ in 0..2 {
        c.advance();
    }
    let visible: Vec<Slot> = c.visible_slots().collect();
    assert_eq!(visible[0].extended_index, 5);
    assert_eq!(visible[0].segment, Segment::Real);
    assert_eq!(visible[1].segment, Segment::After);
    assert_eq!(visible[1].item_index, 0);
    assert_eq!(c.item_index_at(-1), Some(2));
}

#[test]
fn unmount_style_completion_always_reenables_transitions() {
    let mut c = carousel(2, ItemsPerView::One);
    let t = c.advance().unwrap();
    c.on_transition_end(t.id, 0);
    let t = c.advance().unwrap();
    assert!(matches!(
        c.on_transition_end(t.id, 0),
        TransitionEnd::Realigned { .. }
    ));

    // Resizing mid-realignment does not cancel the re-enable.
    c.set_items_per_view(ItemsPerView::Two);
    c.set_items_per_view(ItemsPerView::One);
    assert_eq!(c.realign_deadline_ms(), Some(50));

    assert!(c.complete_realignment());
    assert!(c.transition_enabled());
    assert!(!c.complete_realignment());
    assert!(!c.tick(50));
}

#[test]
fn state_round_trip_normalises_the_cursor() {
    let mut c = carousel(5, ItemsPerView::Two);
    step_and_settle(&mut c, Direction::Forward, 0);
    let snapshot = c.state();
    assert_eq!(snapshot.cursor, 6);

    let mut restored = carousel(5, ItemsPerView::One);
    restored.restore_state(snapshot);
    assert_eq!(restored.cursor(), 6);
    assert_eq!(restored.items_per_view(), ItemsPerView::Two);

    // A snapshot taken mid-realignment comes back idle with transitions on.
    restored.restore_state(CarouselState {
        cursor: 10,
        items_per_view: ItemsPerView::Three,
        transition_enabled: false,
        phase: Phase::Realigning,
    });
    assert_eq!(restored.cursor(), 5);
    assert!(restored.transition_enabled());
    assert_eq!(restored.phase(), Phase::Idle);
    assert_eq!(restored.in_flight(), None);
}

#[test]
fn on_change_fires_once_per_batch() {
    let calls = Arc::new(AtomicUsize::new(0));
    let opts = CarouselOptions::new(6).with_on_change(Some({
        let calls = Arc::clone(&calls);
        move |_: &Carousel| {
            calls.fetch_add(1, Ordering::Relaxed);
        }
    }));
    let mut c = Carousel::new(opts);

    c.advance();
    assert_eq!(calls.load(Ordering::Relaxed), 1);

    c.batch_update(|c| {
        c.set_items_per_view(ItemsPerView::Two);
        c.on_transition_end_current(0);
        c.advance();
    });
    assert_eq!(calls.load(Ordering::Relaxed), 2);

    // No-op setters stay silent.
    c.set_items_per_view(ItemsPerView::Two);
    assert_eq!(calls.load(Ordering::Relaxed), 2);
}

#[test]
fn swipe_thresholds_are_strict() {
    let mut s = SwipeTracker::default();

    s.touch_start(200.0);
    s.touch_move(149.0);
    assert_eq!(s.touch_end(), Some(Direction::Forward));

    s.touch_start(200.0);
    s.touch_move(151.0);
    assert_eq!(s.touch_end(), None);

    s.touch_start(200.0);
    s.touch_move(150.0);
    assert_eq!(s.touch_end(), None);

    s.touch_start(200.0);
    s.touch_move(251.0);
    assert_eq!(s.touch_end(), Some(Direction::Backward));
}

#[test]
fn swipe_without_movement_is_a_tap() {
    let mut s = SwipeTracker::default();
    s.touch_start(300.0);
    assert_eq!(s.touch_end(), None);

    // A stale end from the previous gesture is cleared by touch_start.
    s.touch_start(300.0);
    s.touch_move(100.0);
    s.touch_start(300.0);
    assert_eq!(s.touch_end(), None);

    // Zero is a real coordinate.
    s.touch_start(0.0);
    s.touch_move(60.0);
    assert_eq!(s.touch_end(), Some(Direction::Backward));

    // Ending twice doesn't replay the swipe.
    s.touch_start(100.0);
    s.touch_move(0.0);
    assert_eq!(s.touch_end(), Some(Direction::Forward));
    assert_eq!(s.touch_end(), None);
    assert!(!s.is_tracking());
}

#[test]
fn options_validation_rejects_unusable_values() {
    assert_eq!(CarouselOptions::new(3).validate(), Ok(()));
    assert_eq!(
        CarouselOptions::new(3)
            .with_auto_rotate_interval_ms(0)
            .validate(),
        Err(OptionsError::ZeroAutoRotateInterval)
    );
    assert_eq!(
        CarouselOptions::new(3)
            .with_transition_duration_ms(0)
            .validate(),
        Err(OptionsError::ZeroTransitionDuration)
    );
    assert_eq!(
        CarouselOptions::new(3)
            .with_breakpoints(Breakpoints::new(1024, 768))
            .validate(),
        Err(OptionsError::InvertedBreakpoints {
            two_up_min_width: 1024,
            three_up_min_width: 768,
        })
    );
    assert!(matches!(
        CarouselOptions::new(3)
            .with_swipe_threshold(-1.0)
            .validate(),
        Err(OptionsError::InvalidSwipeThreshold(_))
    ));

    assert!(Carousel::try_new(CarouselOptions::new(3).with_auto_rotate_interval_ms(0)).is_err());
    assert!(Carousel::try_new(CarouselOptions::new(3)).is_ok());
}

#[test]
fn options_error_messages_name_the_problem() {
    let err = OptionsError::InvertedBreakpoints {
        two_up_min_width: 900,
        three_up_min_width: 800,
    };
    let msg = alloc::format!("{err}");
    assert!(msg.contains("800px"));
    assert!(msg.contains("900px"));
}
