//! Pure math/data for drawing & units in Sheetpose
//!
//! This crate contains geometry primitives, color definitions, brushes,
//! materials and the draw-scope contract shared by every Sheetpose crate.

mod brush;
mod color;
mod geometry;

pub use brush::*;
pub use color::*;
pub use geometry::*;

pub mod prelude {
    pub use crate::brush::{Brush, Material};
    pub use crate::color::Color;
    pub use crate::geometry::{
        CornerRadii, DrawPrimitive, DrawScope, EdgeInsets, Point, Rect, RoundedCornerShape,
        Shadow, Size,
    };
}
