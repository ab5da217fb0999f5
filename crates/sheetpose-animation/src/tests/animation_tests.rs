use super::*;
use std::cell::RefCell;
use std::rc::Rc;

const FRAME_NANOS: u64 = 16_666_667;

fn run_frames(clock: &FrameClock, start_nanos: u64, frames: u64) -> u64 {
    let mut time = start_nanos;
    for _ in 0..frames {
        clock.drain_frame_callbacks(time);
        time += FRAME_NANOS;
    }
    time
}

fn run_until_idle(clock: &FrameClock, animatable: &Animatable<f32>) -> usize {
    let mut time = 0;
    let mut frames = 0;
    while animatable.is_running() && frames < 1_000 {
        clock.drain_frame_callbacks(time);
        time += FRAME_NANOS;
        frames += 1;
    }
    frames
}

#[test]
fn linear_easing_is_identity() {
    assert_eq!(Easing::Linear.transform(0.25), 0.25);
    assert_eq!(Easing::Linear.transform(1.5), 1.0);
}

#[test]
fn bezier_curves_hit_endpoints_and_stay_monotonic() {
    for easing in [
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::EaseInOut,
        Easing::FastOutSlowIn,
    ] {
        assert_eq!(easing.transform(0.0), 0.0);
        assert_eq!(easing.transform(1.0), 1.0);
        let mut previous = 0.0;
        for step in 1..=20 {
            let value = easing.transform(step as f32 / 20.0);
            assert!(value + 1e-4 >= previous, "{easing:?} not monotonic");
            previous = value;
        }
    }
}

#[test]
fn ease_out_leads_ease_in_at_midpoint() {
    assert!(Easing::EaseOut.transform(0.5) > 0.5);
    assert!(Easing::EaseIn.transform(0.5) < 0.5);
}

#[test]
fn tween_reaches_target_after_duration() {
    let clock = FrameClock::new();
    let animatable = Animatable::new(0.0f32, clock.clone());
    animatable.animate_to(100.0, AnimationType::Tween(AnimationSpec::linear(100)));
    assert!(animatable.is_running());

    // First frame anchors the start time.
    clock.drain_frame_callbacks(0);
    assert_eq!(animatable.value(), 0.0);

    clock.drain_frame_callbacks(50_000_000);
    assert!((animatable.value() - 50.0).abs() < 0.01);

    clock.drain_frame_callbacks(100_000_000);
    assert_eq!(animatable.value(), 100.0);
    assert!(!animatable.is_running());
    assert!(!clock.has_pending_callbacks());
}

#[test]
fn tween_delay_holds_start_value() {
    let clock = FrameClock::new();
    let animatable = Animatable::new(10.0f32, clock.clone());
    animatable.animate_to(
        20.0,
        AnimationType::Tween(AnimationSpec::linear(100).with_delay(50)),
    );
    clock.drain_frame_callbacks(0);
    clock.drain_frame_callbacks(40_000_000);
    assert_eq!(animatable.value(), 10.0);
    clock.drain_frame_callbacks(100_000_000);
    assert!((animatable.value() - 15.0).abs() < 0.01);
}

#[test]
fn critically_damped_spring_settles_without_overshoot() {
    let clock = FrameClock::new();
    let animatable = Animatable::new(0.0f32, clock.clone());
    let spec = SpringSpec {
        damping_ratio: 1.0,
        stiffness: 300.0,
        velocity_threshold: 0.05,
        position_threshold: 0.01,
    };
    animatable.animate_to(500.0, AnimationType::Spring(spec));

    let max_seen = Rc::new(RefCell::new(0.0f32));
    let _subscription = {
        let max_seen = max_seen.clone();
        animatable.state().subscribe(move |value| {
            let mut max = max_seen.borrow_mut();
            *max = max.max(*value);
        })
    };

    let frames = run_until_idle(&clock, &animatable);
    assert!(frames < 1_000, "spring never settled");
    assert_eq!(animatable.value(), 500.0);
    assert!(*max_seen.borrow() <= 500.0 + 0.01);
}

#[test]
fn bouncy_spring_overshoots_then_settles() {
    let clock = FrameClock::new();
    let animatable = Animatable::new(0.0f32, clock.clone());
    animatable.animate_to(100.0, AnimationType::Spring(SpringSpec::bouncy()));

    let mut overshoot = false;
    let mut time = 0;
    for _ in 0..600 {
        clock.drain_frame_callbacks(time);
        time += FRAME_NANOS;
        overshoot |= animatable.value() > 100.0;
        if !animatable.is_running() {
            break;
        }
    }
    assert!(overshoot);
    assert!(!animatable.is_running());
    assert_eq!(animatable.value(), 100.0);
}

#[test]
fn retargeting_starts_from_current_value() {
    let clock = FrameClock::new();
    let animatable = Animatable::new(0.0f32, clock.clone());
    animatable.animate_to(100.0, AnimationType::Tween(AnimationSpec::linear(100)));
    clock.drain_frame_callbacks(0);
    clock.drain_frame_callbacks(50_000_000);
    let midway = animatable.value();

    animatable.animate_to(0.0, AnimationType::Tween(AnimationSpec::linear(100)));
    assert_eq!(animatable.target(), 0.0);
    assert_eq!(clock.pending_callback_count(), 1);

    clock.drain_frame_callbacks(60_000_000);
    assert_eq!(animatable.value(), midway);
    clock.drain_frame_callbacks(110_000_000);
    assert!((animatable.value() - midway / 2.0).abs() < 0.01);
}

#[test]
fn snap_to_cancels_running_animation() {
    let clock = FrameClock::new();
    let animatable = Animatable::new(0.0f32, clock.clone());
    animatable.animate_to(100.0, AnimationType::default());
    run_frames(&clock, 0, 3);

    animatable.snap_to(42.0);
    assert!(!animatable.is_running());
    assert!(!clock.has_pending_callbacks());
    assert_eq!(animatable.value(), 42.0);
    assert_eq!(animatable.target(), 42.0);
    assert_eq!(animatable.state().get(), 42.0);
}

#[test]
fn stop_freezes_mid_flight() {
    let clock = FrameClock::new();
    let animatable = Animatable::new(0.0f32, clock.clone());
    animatable.animate_to(100.0, AnimationType::Tween(AnimationSpec::linear(100)));
    clock.drain_frame_callbacks(0);
    clock.drain_frame_callbacks(30_000_000);
    let frozen = animatable.value();

    animatable.stop();
    clock.drain_frame_callbacks(200_000_000);
    assert_eq!(animatable.value(), frozen);
    assert!(!animatable.is_running());
}

#[test]
fn animating_to_current_value_is_immediate() {
    let clock = FrameClock::new();
    let animatable = Animatable::new(7.0f32, clock.clone());
    animatable.animate_to(7.0, AnimationType::default());
    assert!(!animatable.is_running());
    assert!(!clock.has_pending_callbacks());
}

#[test]
fn dropping_animatable_leaves_clock_clean() {
    let clock = FrameClock::new();
    {
        let animatable = Animatable::new(0.0f32, clock.clone());
        animatable.animate_to(1.0, AnimationType::default());
        assert!(clock.has_pending_callbacks());
    }
    assert!(!clock.has_pending_callbacks());
}
