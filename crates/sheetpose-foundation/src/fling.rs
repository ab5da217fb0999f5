//! Release-velocity projection.
//!
//! Uses the Android scroller deceleration model: the distance a fling would
//! cover before friction stops it is added to the release translation.

use crate::gesture_constants::MAX_FLING_VELOCITY;

const INFLECTION: f64 = 0.35;
const GRAVITY_EARTH: f64 = 9.80665;
const INCHES_PER_METER: f64 = 39.37;
/// `(ln(0.78) / ln(0.9)).abs()`
const DECELERATION_RATE: f64 = 2.358_201_6;

/// Predicts how far a released pointer would keep travelling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlingProjection {
    friction: f64,
    physical_coefficient: f64,
}

impl FlingProjection {
    /// Matches the platform scroll friction.
    pub const DEFAULT_FRICTION: f32 = 0.015;

    /// `density` is physical pixels per logical pixel (1.0 mdpi, 2.0 xhdpi, ...).
    pub fn new(friction: f32, density: f32) -> Self {
        Self {
            friction: friction as f64,
            physical_coefficient: GRAVITY_EARTH * INCHES_PER_METER * density as f64 * 160.0 * 0.84,
        }
    }

    pub fn with_density(density: f32) -> Self {
        Self::new(Self::DEFAULT_FRICTION, density)
    }

    /// Unsigned distance covered by a fling starting at `velocity` px/s.
    pub fn distance(&self, velocity: f32) -> f32 {
        let speed = velocity.abs().min(MAX_FLING_VELOCITY) as f64;
        let deceleration = self.friction * self.physical_coefficient;
        if speed <= 0.0 || deceleration <= 0.0 {
            return 0.0;
        }
        let l = (INFLECTION * speed / deceleration).ln();
        (deceleration * (DECELERATION_RATE / (DECELERATION_RATE - 1.0) * l).exp()) as f32
    }

    pub fn predicted_end_translation(&self, translation: f32, velocity: f32) -> f32 {
        translation + self.distance(velocity) * velocity.signum()
    }
}

impl Default for FlingProjection {
    fn default() -> Self {
        Self::with_density(1.0)
    }
}
