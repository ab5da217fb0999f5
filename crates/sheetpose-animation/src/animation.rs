//! Time-based animations with easing curves and spring physics.

use std::cell::RefCell;
use std::rc::Rc;

use sheetpose_core::{FrameCallbackRegistration, FrameClock, MutableState};

/// Trait for types that can be linearly interpolated.
pub trait Lerp {
    fn lerp(&self, target: &Self, fraction: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        self + (target - self) * fraction
    }
}

impl Lerp for f64 {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        self + (target - self) * fraction as f64
    }
}

/// Trait for values that can participate in spring animations.
pub trait SpringScalar: Lerp + Clone {
    /// Convert the value to `f32` for physics calculations.
    fn to_f32(&self) -> f32;

    /// Compute the current progress between the start and target values.
    fn spring_progress(start: &Self, target: &Self, current: &Self) -> f32 {
        let start_val = start.to_f32();
        let target_val = target.to_f32();
        let current_val = current.to_f32();

        if (target_val - start_val).abs() < f32::EPSILON {
            1.0
        } else {
            (current_val - start_val) / (target_val - start_val)
        }
    }

    /// Determine whether the current value is close enough to the target to
    /// consider the spring finished.
    fn is_near_target(current: &Self, target: &Self, threshold: f32) -> bool {
        (current.to_f32() - target.to_f32()).abs() < threshold
    }
}

impl SpringScalar for f32 {
    fn to_f32(&self) -> f32 {
        *self
    }
}

impl SpringScalar for f64 {
    fn to_f32(&self) -> f32 {
        *self as f32
    }
}

/// Easing curves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
    /// Material "standard" curve.
    FastOutSlowIn,
    /// Caller-supplied cubic bezier control points `(x1, y1, x2, y2)`.
    CubicBezier(f32, f32, f32, f32),
}

impl Easing {
    /// Apply the easing function to a linear fraction [0, 1].
    pub fn transform(&self, fraction: f32) -> f32 {
        match *self {
            Easing::Linear => fraction.clamp(0.0, 1.0),
            Easing::EaseIn => cubic_bezier(0.42, 0.0, 1.0, 1.0, fraction),
            Easing::EaseOut => cubic_bezier(0.0, 0.0, 0.58, 1.0, fraction),
            Easing::EaseInOut => cubic_bezier(0.42, 0.0, 0.58, 1.0, fraction),
            Easing::FastOutSlowIn => cubic_bezier(0.4, 0.0, 0.2, 1.0, fraction),
            Easing::CubicBezier(x1, y1, x2, y2) => cubic_bezier(x1, y1, x2, y2, fraction),
        }
    }
}

/// Solves the unit cubic bezier through (0,0), (x1,y1), (x2,y2), (1,1) for `fraction`.
fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, fraction: f32) -> f32 {
    if fraction <= 0.0 {
        return 0.0;
    }
    if fraction >= 1.0 {
        return 1.0;
    }

    let cx = 3.0 * x1;
    let bx = 3.0 * (x2 - x1) - cx;
    let ax = 1.0 - cx - bx;

    let cy = 3.0 * y1;
    let by = 3.0 * (y2 - y1) - cy;
    let ay = 1.0 - cy - by;

    let sample = |a: f32, b: f32, c: f32, t: f32| ((a * t + b) * t + c) * t;
    let slope = |a: f32, b: f32, c: f32, t: f32| (3.0 * a * t + 2.0 * b) * t + c;

    // Newton-Raphson first; it converges in a few steps for well-behaved curves.
    let mut t = fraction;
    for _ in 0..8 {
        let error = sample(ax, bx, cx, t) - fraction;
        if error.abs() < 1e-6 {
            return sample(ay, by, cy, t);
        }
        let derivative = slope(ax, bx, cx, t);
        if derivative.abs() < 1e-6 {
            break;
        }
        t = (t - error / derivative).clamp(0.0, 1.0);
    }

    // Bisection fallback for flat regions.
    let (mut low, mut high) = (0.0f32, 1.0f32);
    t = fraction;
    for _ in 0..20 {
        let error = sample(ax, bx, cx, t) - fraction;
        if error.abs() < 1e-6 {
            break;
        }
        if error > 0.0 {
            high = t;
        } else {
            low = t;
        }
        t = 0.5 * (low + high);
    }
    sample(ay, by, cy, t)
}

/// Tween specification combining duration and easing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationSpec {
    pub duration_millis: u64,
    pub easing: Easing,
    pub delay_millis: u64,
}

impl AnimationSpec {
    pub fn tween(duration_millis: u64, easing: Easing) -> Self {
        Self {
            duration_millis,
            easing,
            delay_millis: 0,
        }
    }

    pub fn linear(duration_millis: u64) -> Self {
        Self::tween(duration_millis, Easing::Linear)
    }

    pub fn with_delay(mut self, delay_millis: u64) -> Self {
        self.delay_millis = delay_millis;
        self
    }
}

impl Default for AnimationSpec {
    fn default() -> Self {
        Self::tween(300, Easing::FastOutSlowIn)
    }
}

/// Spring animation configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringSpec {
    /// 1.0 = critically damped, < 1.0 = under-damped (bouncy), > 1.0 = over-damped.
    pub damping_ratio: f32,
    /// Higher values settle faster.
    pub stiffness: f32,
    /// Velocity (in progress units per second) below which the spring may stop.
    pub velocity_threshold: f32,
    /// Distance from the target, in value units, below which the spring may stop.
    pub position_threshold: f32,
}

impl SpringSpec {
    pub fn default_spring() -> Self {
        Self {
            damping_ratio: 1.0,
            stiffness: 1500.0,
            velocity_threshold: 0.01,
            position_threshold: 0.001,
        }
    }

    pub fn bouncy() -> Self {
        Self {
            damping_ratio: 0.5,
            ..Self::default_spring()
        }
    }
}

impl Default for SpringSpec {
    fn default() -> Self {
        Self::default_spring()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimationType {
    Tween(AnimationSpec),
    Spring(SpringSpec),
}

impl Default for AnimationType {
    fn default() -> Self {
        AnimationType::Tween(AnimationSpec::default())
    }
}

/// Integration step for spring physics, roughly one 60 Hz frame.
const SPRING_TIMESTEP: f32 = 0.016;

/// A value that animates towards a target on frame-clock ticks.
///
/// The published value lives in a [`MutableState`] so observers see every
/// intermediate frame. Starting a new animation or snapping cancels whatever
/// was in flight.
pub struct Animatable<T: SpringScalar + PartialEq + 'static> {
    inner: Rc<RefCell<AnimatableInner<T>>>,
}

struct AnimatableInner<T: SpringScalar + PartialEq + 'static> {
    state: MutableState<T>,
    clock: FrameClock,
    current: T,
    /// Spring velocity in progress units per second.
    velocity: f32,
    start: T,
    target: T,
    animation_type: AnimationType,
    start_time_nanos: Option<u64>,
    last_frame_nanos: Option<u64>,
    registration: Option<FrameCallbackRegistration>,
}

impl<T: SpringScalar + PartialEq + 'static> AnimatableInner<T> {
    fn settle(&mut self) {
        self.current = self.target.clone();
        self.start = self.target.clone();
        self.start_time_nanos = None;
        self.last_frame_nanos = None;
        self.velocity = 0.0;
    }

    /// Advances the animation to `frame_time_nanos`; returns whether another frame is needed.
    fn step(&mut self, frame_time_nanos: u64) -> bool {
        match self.animation_type {
            AnimationType::Tween(spec) => {
                let start_time = *self.start_time_nanos.get_or_insert(frame_time_nanos);
                let elapsed_nanos = frame_time_nanos.saturating_sub(start_time);
                let delay_nanos = spec.delay_millis * 1_000_000;
                if elapsed_nanos < delay_nanos {
                    return true;
                }

                let duration_nanos = (spec.duration_millis * 1_000_000).max(1);
                let linear_progress =
                    ((elapsed_nanos - delay_nanos) as f32 / duration_nanos as f32).clamp(0.0, 1.0);
                if linear_progress >= 1.0 {
                    self.settle();
                    return false;
                }
                let progress = spec.easing.transform(linear_progress);
                self.current = self.start.lerp(&self.target, progress);
                true
            }
            AnimationType::Spring(spec) => {
                let previous = self.last_frame_nanos.replace(frame_time_nanos);
                let Some(previous) = previous else {
                    return true;
                };
                let dt = frame_time_nanos.saturating_sub(previous) as f32 / 1_000_000_000.0;
                if dt <= 0.0 {
                    return true;
                }

                let stiffness = spec.stiffness;
                let damping = 2.0 * spec.damping_ratio * stiffness.sqrt();
                let mut simulated = 0.0f32;
                while simulated < dt {
                    let step = SPRING_TIMESTEP.min(dt - simulated);
                    let progress =
                        <T as SpringScalar>::spring_progress(&self.start, &self.target, &self.current);
                    let displacement = progress - 1.0;
                    let force = -stiffness * displacement - damping * self.velocity;
                    // Semi-implicit Euler: velocity first, then position.
                    self.velocity += force * step;
                    let next_progress = (progress + self.velocity * step).clamp(0.0, 2.0);
                    self.current = self.start.lerp(&self.target, next_progress);
                    simulated += step;
                }

                let at_rest = self.velocity.abs() < spec.velocity_threshold;
                let near_target = <T as SpringScalar>::is_near_target(
                    &self.current,
                    &self.target,
                    spec.position_threshold,
                );
                if at_rest && near_target {
                    self.settle();
                    false
                } else {
                    true
                }
            }
        }
    }
}

impl<T: SpringScalar + PartialEq + 'static> Animatable<T> {
    pub fn new(initial: T, clock: FrameClock) -> Self {
        let inner = AnimatableInner {
            state: MutableState::new(initial.clone()),
            clock,
            current: initial.clone(),
            velocity: 0.0,
            start: initial.clone(),
            target: initial,
            animation_type: AnimationType::default(),
            start_time_nanos: None,
            last_frame_nanos: None,
            registration: None,
        };
        Self {
            inner: Rc::new(RefCell::new(inner)),
        }
    }

    /// Animate from the current value to `target`.
    pub fn animate_to(&self, target: T, animation: AnimationType) {
        let publish = {
            let mut inner = self.inner.borrow_mut();
            if let Some(registration) = inner.registration.take() {
                registration.cancel();
            }
            inner.start = inner.current.clone();
            inner.target = target;
            inner.animation_type = animation;
            inner.start_time_nanos = None;
            inner.last_frame_nanos = None;
            inner.velocity = 0.0;

            if inner.current == inner.target {
                inner.settle();
                Some((inner.state.clone(), inner.current.clone()))
            } else {
                None
            }
        };

        match publish {
            Some((state, value)) => state.set(value),
            None => Self::schedule_frame(&self.inner),
        }
    }

    /// Jump to `value` immediately, cancelling any running animation.
    pub fn snap_to(&self, value: T) {
        let state = {
            let mut inner = self.inner.borrow_mut();
            if let Some(registration) = inner.registration.take() {
                registration.cancel();
            }
            inner.target = value;
            inner.settle();
            inner.state.clone()
        };
        state.set(self.value());
    }

    /// Freeze at the current value, abandoning the target.
    pub fn stop(&self) {
        let current = self.value();
        self.snap_to(current);
    }

    pub fn value(&self) -> T {
        self.inner.borrow().current.clone()
    }

    pub fn target(&self) -> T {
        self.inner.borrow().target.clone()
    }

    pub fn animation_type(&self) -> AnimationType {
        self.inner.borrow().animation_type
    }

    pub fn is_running(&self) -> bool {
        self.inner.borrow().registration.is_some()
    }

    /// Observable state that receives every animated frame.
    pub fn state(&self) -> MutableState<T> {
        self.inner.borrow().state.clone()
    }

    fn schedule_frame(this: &Rc<RefCell<AnimatableInner<T>>>) {
        let clock = {
            let inner = this.borrow();
            if inner.registration.is_some() {
                return;
            }
            inner.clock.clone()
        };
        let weak = Rc::downgrade(this);
        let registration = clock.with_frame_nanos(move |time| {
            if let Some(strong) = weak.upgrade() {
                Self::on_frame(&strong, time);
            }
        });
        this.borrow_mut().registration = Some(registration);
    }

    fn on_frame(this: &Rc<RefCell<AnimatableInner<T>>>, frame_time_nanos: u64) {
        let (state, value, schedule_next) = {
            let mut inner = this.borrow_mut();
            inner.registration = None;
            let schedule_next = inner.step(frame_time_nanos);
            if !schedule_next {
                log::trace!("animation settled at frame {}ns", frame_time_nanos);
            }
            (inner.state.clone(), inner.current.clone(), schedule_next)
        };

        if schedule_next {
            Self::schedule_frame(this);
        }
        // Published last so observers see `is_running` in its final state.
        state.set(value);
    }
}

impl<T: SpringScalar + PartialEq + 'static> Clone for Animatable<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

#[cfg(test)]
#[path = "tests/animation_tests.rs"]
mod tests;
