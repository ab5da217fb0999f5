//! Assertion utilities for robot testing
//!
//! Offsets come out of spring integration, so most checks are approximate.

use sheetpose_ui::{ModalSheet, Position, SheetPhase};
use sheetpose_ui_graphics::Rect;

/// Assert that a value is within an expected range.
pub fn assert_approx_eq(actual: f32, expected: f32, tolerance: f32, msg: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "{}: expected {} (±{}), got {} (diff: {})",
        msg,
        expected,
        tolerance,
        actual,
        diff
    );
}

/// Assert that a rectangle is approximately equal to another.
pub fn assert_rect_approx_eq(actual: Rect, expected: Rect, tolerance: f32, msg: &str) {
    assert_approx_eq(actual.x, expected.x, tolerance, &format!("{} - x", msg));
    assert_approx_eq(actual.y, expected.y, tolerance, &format!("{} - y", msg));
    assert_approx_eq(
        actual.width,
        expected.width,
        tolerance,
        &format!("{} - width", msg),
    );
    assert_approx_eq(
        actual.height,
        expected.height,
        tolerance,
        &format!("{} - height", msg),
    );
}

pub fn assert_rect_contains_point(rect: Rect, x: f32, y: f32, msg: &str) {
    assert!(
        rect.contains(x, y),
        "{}: point ({}, {}) not in rect {:?}",
        msg,
        x,
        y,
        rect
    );
}

/// Assert that the sheet is idle, committed to `position` and drawn at its offset.
pub fn assert_settled_at(sheet: &ModalSheet, position: Position, msg: &str) {
    assert_eq!(
        sheet.committed_position(),
        position,
        "{}: committed position",
        msg
    );
    assert_eq!(sheet.phase(), SheetPhase::Idle, "{}: phase", msg);
    assert_approx_eq(
        sheet.current_offset(),
        position.offset(sheet.metrics()),
        0.01,
        &format!("{} - offset", msg),
    );
}
