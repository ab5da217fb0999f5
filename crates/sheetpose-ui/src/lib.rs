//! Multi-position modal sheet for Sheetpose
//!
//! [`ModalSheet`] ties the position model and drag resolver from
//! `sheetpose-foundation` to an animated offset, turns gestures and taps into
//! committed positions, and describes what to draw as a [`SheetScene`].

mod config;
mod error;
mod event;
mod scene;
mod sheet;

pub use config::{
    HandleStyle, ScrimTap, SheetBackground, SheetConfig, DEFAULT_BACKGROUND_SHADOW,
    DEFAULT_CORNER_RADIUS, HANDLE_AREA_HEIGHT,
};
pub use error::SheetConfigError;
pub use event::{SheetEvent, SheetPhase};
pub use scene::{ContentSlot, HandleLayer, PanelLayer, ScrimLayer, SheetScene};
pub use sheet::{ContentScope, ModalSheet};

pub use sheetpose_animation::SheetAnimation;
pub use sheetpose_foundation::{
    DragGesture, Position, PositionPreset, PositionSet, ScreenMetrics, SnapPolicy, TapTarget,
};

pub mod prelude {
    pub use crate::config::{HandleStyle, ScrimTap, SheetBackground, SheetConfig};
    pub use crate::event::{SheetEvent, SheetPhase};
    pub use crate::sheet::{ContentScope, ModalSheet};
    pub use sheetpose_foundation::prelude::*;
}
