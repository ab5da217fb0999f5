//! Named resting positions and their screen-space geometry.

use std::cmp::Ordering;

use sheetpose_ui_graphics::{EdgeInsets, Size};

use crate::gesture_constants::{BOTTOM_HANDLE_MARGIN, TOP_MARGIN};

/// Screen geometry the sheet is laid out against.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenMetrics {
    pub width: f32,
    pub height: f32,
    pub safe_area: EdgeInsets,
}

impl ScreenMetrics {
    pub fn new(width: f32, height: f32, safe_area: EdgeInsets) -> Self {
        Self {
            width,
            height,
            safe_area,
        }
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

impl Default for ScreenMetrics {
    /// A portrait phone with a notch and a home indicator.
    fn default() -> Self {
        Self::new(390.0, 844.0, EdgeInsets::vertical(47.0, 34.0))
    }
}

/// A resting place for the sheet.
///
/// Positions have no intrinsic rank: which one is "higher" depends on the
/// screen they are resolved against, so comparisons always go through
/// [`Position::offset`] or [`Position::cmp_offset`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Position {
    /// Covers the whole screen, ignoring the safe area.
    Fill,
    /// Just below the top safe-area inset.
    Top,
    /// Half the screen height.
    Middle,
    /// Peeking above the bottom safe-area inset.
    Bottom,
    /// Entirely off screen.
    Hidden,
    /// Fraction of the screen covered: 0.0 is hidden, 1.0 is fully open.
    Custom(f32),
}

impl Position {
    /// Distance from the top of the screen to the top edge of the sheet.
    ///
    /// Always within `[0, metrics.height]`.
    pub fn offset(&self, metrics: &ScreenMetrics) -> f32 {
        let height = metrics.height.max(0.0);
        let raw = match self {
            Position::Fill => 0.0,
            Position::Top => metrics.safe_area.top + TOP_MARGIN,
            Position::Middle => height * 0.5,
            Position::Bottom => height - (metrics.safe_area.bottom + BOTTOM_HANDLE_MARGIN),
            Position::Hidden => height,
            Position::Custom(fraction) => height * (1.0 - clamp_fraction(*fraction)),
        };
        raw.clamp(0.0, height)
    }

    /// Orders two positions by their resolved offsets, smallest (most open) first.
    pub fn cmp_offset(&self, other: &Position, metrics: &ScreenMetrics) -> Ordering {
        self.offset(metrics).total_cmp(&other.offset(metrics))
    }

    pub fn is_hidden(&self) -> bool {
        matches!(self, Position::Hidden)
    }

    /// Same position with a custom fraction clamped the way [`Position::offset`] reads it.
    pub fn normalized(self) -> Position {
        match self {
            Position::Custom(fraction) => Position::Custom(clamp_fraction(fraction)),
            other => other,
        }
    }
}

fn clamp_fraction(fraction: f32) -> f32 {
    if fraction.is_nan() {
        0.0
    } else {
        fraction.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
#[path = "tests/position_tests.rs"]
mod tests;
