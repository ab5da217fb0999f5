//! Animation system for Sheetpose
//!
//! Provides frame-clock driven animations with easing curves and spring
//! physics, plus the named transition presets used by the modal sheet.

mod animation;
mod sheet_animation;

pub use animation::{
    Animatable, AnimationSpec, AnimationType, Easing, Lerp, SpringScalar, SpringSpec,
};
pub use sheet_animation::SheetAnimation;
