//! End-to-end drag scenarios driven through the public slider API
//!
//! Each test replays a gesture sequence the way a host would deliver it:
//! timestamped drag updates followed by fixed-step frame ticks.

use ruler_slider::{
    CountingHaptics, DragPolarity, SlideDirection, Slider, SliderConfig, SliderPhase, SliderUpdate,
};
use std::sync::{Arc, Mutex};

const FRAME_MS: f64 = 16.0;

fn recording(config: SliderConfig) -> (Slider, Arc<Mutex<Vec<SliderUpdate>>>) {
    let updates = Arc::new(Mutex::new(Vec::new()));
    let sink = updates.clone();
    let slider = Slider::new(config)
        .unwrap()
        .on_change(move |update| sink.lock().unwrap().push(update));
    (slider, updates)
}

/// Run frames until the slider stops asking for more
fn settle(slider: &mut Slider) -> usize {
    let mut frames = 0;
    while slider.advance(FRAME_MS) {
        frames += 1;
        assert!(frames < 10_000, "slider never settled");
    }
    frames + 1
}

fn settled_count(updates: &[SliderUpdate]) -> usize {
    updates
        .iter()
        .filter(|u| u.direction == SlideDirection::None)
        .count()
}

/// Small deterministic generator for gesture fuzzing
struct XorShift(u64);

impl XorShift {
    fn next_f64(&mut self) -> f64 {
        self.0 ^= self.0 << 13;
        self.0 ^= self.0 >> 7;
        self.0 ^= self.0 << 17;
        (self.0 >> 11) as f64 / (1u64 << 53) as f64
    }
}

#[test]
fn test_bounded_drag_commits_each_mark() {
    let haptics = CountingHaptics::new();
    let config = SliderConfig::new(-100.0, 100.0, 0.0)
        .sensitivity(0.1)
        .tick_spacing(20.0)
        .polarity(DragPolarity::DragRightIncreases)
        .inertia(false);
    let (slider, updates) = recording(config);
    let mut slider = slider.with_haptics(haptics.clone());

    slider.on_drag_start(Some(0.0));
    for step in 1..=10 {
        slider.on_drag_update(20.0, step as f64 * FRAME_MS);
    }

    assert!((slider.value() - 1.0).abs() < 1e-9);
    assert_eq!(slider.direction(), SlideDirection::Right);
    assert_eq!(haptics.count(), 10);

    slider.on_drag_end();
    let updates = updates.lock().unwrap();
    assert_eq!(updates.len(), 11);
    assert!(updates[..10]
        .iter()
        .all(|u| u.direction == SlideDirection::Right));
    assert_eq!(updates[10].direction, SlideDirection::None);
    assert!((updates[10].value - 1.0).abs() < 1e-9);
    assert_eq!(slider.phase(), SliderPhase::Idle);
}

#[test]
fn test_unbounded_micro_moves_stay_sub_tick() {
    let haptics = CountingHaptics::new();
    let (slider, updates) = recording(SliderConfig::unbounded(3.0));
    let mut slider = slider.with_haptics(haptics.clone());

    slider.on_drag_start(Some(0.0));
    for step in 1..=50 {
        slider.on_drag_update(-0.3, step as f64 * 8.0);
    }

    assert_eq!(slider.value(), 3.0);
    assert!((slider.offset() - 15.0).abs() < 1e-9);
    assert!(updates.lock().unwrap().is_empty());
    assert_eq!(haptics.count(), 0);
}

#[test]
fn test_overscroll_release_snaps_back_to_bound() {
    let config = SliderConfig::new(0.0, 100.0, 90.0)
        .sensitivity(1.0)
        .tick_spacing(20.0);
    let (mut slider, updates) = recording(config);

    slider.on_drag_start(Some(0.0));
    // 60 marks in one move: proposed 150, rejected
    slider.on_drag_update(-1200.0, 100.0);
    assert_eq!(slider.value(), 90.0);
    let overscroll = slider.overscroll().unwrap();
    assert_eq!(overscroll.bound, 100.0);
    assert_eq!(overscroll.proposed, 150.0);

    // Bound sits 10 marks from the start; the 1000 px beyond it are compressed
    assert!((slider.offset() - (200.0 + 1000.0 / 51.0)).abs() < 1e-9);

    // Slow final segment: 50 px/s
    slider.on_drag_update(-1.0, 120.0);
    assert!((slider.velocity() - 50.0).abs() < 1e-6);

    slider.on_drag_end();
    assert_eq!(slider.value(), 100.0);
    assert_eq!(slider.phase(), SliderPhase::SnappingBack);
    assert_eq!(
        updates.lock().unwrap().as_slice(),
        &[SliderUpdate::settled(100.0)]
    );

    let frames = settle(&mut slider);
    assert!(frames > 1);
    assert!((slider.offset() - 200.0).abs() < 1e-9);
    assert_eq!(slider.phase(), SliderPhase::Idle);
    assert!(slider.overscroll().is_none());

    // Snap-back is cosmetic: nothing further is reported
    assert_eq!(updates.lock().unwrap().len(), 1);
}

#[test]
fn test_overscroll_damping_grows_with_distance() {
    let config = SliderConfig::new(-10.0, 1.0, 1.0)
        .sensitivity(0.1)
        .tick_spacing(20.0)
        .inertia(false);
    let mut slider = Slider::new(config).unwrap();

    slider.on_drag_start(None);
    let mut rendered = vec![slider.offset()];
    for step in 1..=8 {
        slider.on_drag_update(-20.0, step as f64 * FRAME_MS);
        rendered.push(slider.offset());
    }

    let gains: Vec<f64> = rendered.windows(2).map(|w| w[1] - w[0]).collect();
    assert!(gains.iter().all(|gain| *gain > 0.0));
    for pair in gains.windows(2) {
        assert!(pair[1] < pair[0], "damping must increase: {gains:?}");
    }
    assert_eq!(slider.value(), 1.0);
}

#[test]
fn test_pixel_drag_past_bound_never_reverses() {
    let config = SliderConfig::new(-10.0, 0.0, 0.0)
        .sensitivity(0.1)
        .tick_spacing(20.0);
    let (mut slider, updates) = recording(config);

    slider.on_drag_start(Some(0.0));
    let mut previous = slider.offset();
    let mut previous_gain = f64::INFINITY;
    for step in 1..=60 {
        slider.on_drag_update(-1.0, step as f64 * FRAME_MS);
        let gain = slider.offset() - previous;
        assert!(gain > 0.0, "ruler moved back at {step}px: {gain}");
        assert!(
            gain <= previous_gain + 1e-12,
            "resistance dropped at {step}px: {previous_gain} -> {gain}"
        );
        previous = slider.offset();
        previous_gain = gain;
    }

    // Mark boundaries match the per-crossing compression
    let overscroll = slider.overscroll().unwrap();
    assert!((overscroll.magnitude() - 0.3).abs() < 1e-9);
    assert!((slider.offset() - 60.0 / 1.3).abs() < 1e-9);
    assert_eq!(slider.value(), 0.0);

    slider.on_drag_end();
    settle(&mut slider);
    assert!(slider.offset().abs() < 1e-9);
    assert_eq!(
        updates.lock().unwrap().as_slice(),
        &[SliderUpdate::settled(0.0)]
    );
}

#[test]
fn test_fast_release_glides_for_minimum_duration() {
    let (mut slider, updates) = recording(SliderConfig::unbounded(0.0));

    slider.on_drag_start(Some(0.0));
    slider.on_drag_update(-3.0, 10.0);
    assert!((slider.velocity() - 300.0).abs() < 1e-6);

    slider.on_drag_end();
    assert_eq!(slider.phase(), SliderPhase::Gliding);
    assert_eq!(updates.lock().unwrap().as_slice(), &[SliderUpdate::settled(0.0)]);

    // 500 ms at 16 ms per frame
    assert_eq!(settle(&mut slider), 32);
    assert!((slider.raw_offset() - 303.0).abs() < 1e-6);
    assert_eq!(slider.phase(), SliderPhase::Idle);

    // Glide crossings commit like drag crossings, never past 15 marks
    let value = slider.value();
    assert!(value > 0.0 && value <= 1.5 + 1e-9);
    let updates = updates.lock().unwrap();
    assert_eq!(settled_count(&updates), 1);
    assert!(updates[1..]
        .iter()
        .all(|u| u.direction == SlideDirection::Right));
}

#[test]
fn test_glide_into_bound_commits_bound_then_snaps() {
    let config = SliderConfig::new(-10.0, 1.0, 0.0)
        .sensitivity(0.1)
        .tick_spacing(20.0);
    let (mut slider, updates) = recording(config);

    slider.on_drag_start(Some(0.0));
    slider.on_drag_update(-10.0, 10.0);
    slider.on_drag_end();
    assert_eq!(slider.phase(), SliderPhase::Gliding);

    let mut phases = Vec::new();
    while slider.advance(FRAME_MS) {
        phases.push(slider.phase());
    }

    assert!(phases.contains(&SliderPhase::SnappingBack));
    assert_eq!(slider.value(), 1.0);
    assert_eq!(slider.phase(), SliderPhase::Idle);
    assert_eq!(slider.offset(), slider.raw_offset());

    let updates = updates.lock().unwrap();
    assert_eq!(settled_count(&updates), 1);
    assert!(updates.iter().all(|u| u.value <= 1.0));
}

#[test]
fn test_drag_start_cancels_snap_back() {
    let config = SliderConfig::new(0.0, 10.0, 10.0)
        .sensitivity(1.0)
        .tick_spacing(10.0);
    let (mut slider, updates) = recording(config);

    slider.on_drag_start(Some(0.0));
    slider.on_drag_update(-50.0, 500.0);
    slider.on_drag_end();
    assert_eq!(slider.phase(), SliderPhase::SnappingBack);
    slider.advance(FRAME_MS);

    let offset = slider.offset();
    slider.on_drag_start(Some(1000.0));
    assert_eq!(slider.phase(), SliderPhase::Dragging);
    assert!(!slider.is_animating());
    assert!(!slider.advance(FRAME_MS));
    assert_eq!(slider.offset(), offset);
    assert_eq!(slider.value(), 10.0);

    // Dragging back from where the snap stopped commits normally
    slider.on_drag_update(15.0, 1016.0);
    assert_eq!(slider.value(), 9.0);
    assert_eq!(slider.direction(), SlideDirection::Left);

    slider.on_drag_end();
    assert_eq!(settled_count(&updates.lock().unwrap()), 2);
}

#[test]
fn test_every_drag_reports_exactly_one_settle() {
    let config = SliderConfig::new(-5.0, 5.0, 0.0)
        .sensitivity(0.5)
        .tick_spacing(10.0);
    let (mut slider, updates) = recording(config);
    let mut rng = XorShift(0x5eed_1234_abcd_0042);
    let drags = 40;
    let mut now = 0.0;

    for _ in 0..drags {
        slider.on_drag_start(Some(now));
        for _ in 0..(1 + (rng.next_f64() * 12.0) as usize) {
            now += 1.0 + rng.next_f64() * 30.0;
            slider.on_drag_update((rng.next_f64() - 0.5) * 160.0, now);
        }
        slider.on_drag_end();

        // Sometimes interrupt the glide or snap-back, sometimes let it finish
        let frames = (rng.next_f64() * 60.0) as usize;
        for _ in 0..frames {
            now += FRAME_MS;
            slider.advance(FRAME_MS);
        }
        now += 1.0;
    }
    settle(&mut slider);

    let updates = updates.lock().unwrap();
    assert_eq!(settled_count(&updates), drags);
}

#[test]
fn test_value_stays_in_bounds_and_quantized() {
    let config = SliderConfig::new(-3.0, 2.0, 0.5)
        .sensitivity(0.25)
        .tick_spacing(12.0);
    let (mut slider, updates) = recording(config);
    let mut rng = XorShift(0x00c0_ffee_0000_0001);
    let mut now = 0.0;

    for _ in 0..200 {
        slider.on_drag_start(Some(now));
        for _ in 0..8 {
            now += 4.0 + rng.next_f64() * 20.0;
            slider.on_drag_update((rng.next_f64() - 0.5) * 400.0, now);
            assert!((-3.0..=2.0).contains(&slider.value()));
        }
        slider.on_drag_end();
        for _ in 0..20 {
            slider.advance(FRAME_MS);
            assert!((-3.0..=2.0).contains(&slider.value()));
        }
    }

    for update in updates.lock().unwrap().iter() {
        assert!((-3.0..=2.0).contains(&update.value));
        let steps = (update.value - 0.5) / 0.25;
        assert_eq!(steps, steps.round(), "value {} off the grid", update.value);
    }
}

#[test]
fn test_disabled_inertia_never_glides() {
    let (mut slider, updates) = recording(SliderConfig::unbounded(0.0).inertia(false));

    slider.on_drag_start(Some(0.0));
    slider.on_drag_update(-100.0, 5.0);
    slider.on_drag_end();

    assert!(!slider.is_animating());
    assert_eq!(slider.phase(), SliderPhase::Idle);
    assert!(!slider.advance(FRAME_MS));
    assert_eq!(updates.lock().unwrap().len(), 2);
}

#[test]
fn test_layout_follows_drag() {
    let mut slider = Slider::new(SliderConfig::unbounded(0.0).inertia(false)).unwrap();
    slider.on_drag_start(None);
    slider.on_drag_update(-30.0, 0.0);

    let layout = slider.layout(200.0);
    assert_eq!(layout.center_x, 100.0);
    let origin = layout.marks.iter().find(|m| m.index == 0).unwrap();
    assert_eq!(origin.x, -30.0);
    assert!(origin.major);
}
