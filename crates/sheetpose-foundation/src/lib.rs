//! Positions, position sets and drag resolution for Sheetpose
//!
//! This crate is the pure, framework-independent heart of the modal sheet:
//! where a sheet may rest, which of those resting places a given sheet
//! allows, and how a drag gesture turns into a live offset and, on release,
//! into a committed position.

pub mod drag;
pub mod fling;
pub mod gesture_constants;
pub mod input;
pub mod position;
pub mod position_set;

pub use drag::{
    drag_percentage, scrim_alpha, DragPhase, DragResolver, DragSession, Sensitivity, SnapContext,
    SnapPolicy, SnapResolution,
};
pub use fling::FlingProjection;
pub use input::{DragGesture, TapTarget};
pub use position::{Position, ScreenMetrics};
pub use position_set::{PositionPreset, PositionSet};

pub mod prelude {
    pub use crate::drag::{DragResolver, SnapContext, SnapPolicy, SnapResolution};
    pub use crate::input::{DragGesture, TapTarget};
    pub use crate::position::{Position, ScreenMetrics};
    pub use crate::position_set::{PositionPreset, PositionSet};
}
