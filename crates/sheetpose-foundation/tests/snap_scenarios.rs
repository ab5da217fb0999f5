//! End-to-end gesture scenarios driven through the public resolver API.

use sheetpose_foundation::{
    drag_percentage, DragGesture, DragResolver, FlingProjection, Position, PositionPreset,
    PositionSet, ScreenMetrics, SnapContext,
};
use sheetpose_ui_graphics::EdgeInsets;

/// Replays `gestures` against a sheet committed at `start` and returns where it settles.
fn settle(
    positions: &PositionSet,
    metrics: &ScreenMetrics,
    start: Position,
    gestures: &[DragGesture],
) -> Position {
    let mut committed = start;
    let mut resolver = DragResolver::default();
    for gesture in gestures {
        let ctx = SnapContext::new(positions, metrics, committed);
        match *gesture {
            DragGesture::Changed { translation } => {
                resolver.drag_changed(translation, &ctx);
            }
            DragGesture::Ended {
                translation,
                predicted_end_translation,
            } => {
                committed = resolver
                    .drag_ended(translation, predicted_end_translation, &ctx)
                    .target;
            }
            DragGesture::Cancelled => {
                resolver.cancel();
            }
        }
    }
    committed
}

fn drag(steps: &[f32], predicted_end: f32) -> Vec<DragGesture> {
    let mut gestures: Vec<DragGesture> =
        steps.iter().map(|t| DragGesture::changed(*t)).collect();
    let last = steps.last().copied().unwrap_or(0.0);
    gestures.push(DragGesture::ended(last, predicted_end));
    gestures
}

#[test]
fn slow_drag_walks_down_one_point_at_a_time() {
    let metrics = ScreenMetrics::default();
    let positions = PositionPreset::Standard.resolve(false);

    let after_first = settle(
        &positions,
        &metrics,
        Position::Top,
        &drag(&[40.0, 120.0, 300.0], 300.0),
    );
    assert_eq!(after_first, Position::Middle);

    let after_second = settle(
        &positions,
        &metrics,
        after_first,
        &drag(&[60.0, 200.0], 200.0),
    );
    assert_eq!(after_second, Position::Bottom);
}

#[test]
fn two_stage_dismissal_needs_two_flicks() {
    let metrics = ScreenMetrics::default();
    let positions = PositionPreset::Dismissable.resolve(false);
    let flick = drag(&[30.0, 90.0], 1_400.0);

    let first = settle(&positions, &metrics, Position::Middle, &flick);
    assert_eq!(first, Position::Bottom);

    let second = settle(&positions, &metrics, first, &flick);
    assert_eq!(second, Position::Hidden);
}

#[test]
fn velocity_only_hosts_can_flick_open() {
    let metrics = ScreenMetrics::default();
    let positions = PositionPreset::Standard.resolve(false);
    let projection = FlingProjection::with_density(3.0);

    let gestures = [
        DragGesture::changed(-20.0),
        DragGesture::ended_with_velocity(-40.0, -6_000.0, &projection),
    ];

    assert_eq!(
        settle(&positions, &metrics, Position::Bottom, &gestures),
        Position::Top
    );
}

#[test]
fn cancelled_gesture_leaves_position_untouched() {
    let metrics = ScreenMetrics::default();
    let positions = PositionPreset::Standard.resolve(false);
    let gestures = [
        DragGesture::changed(200.0),
        DragGesture::Cancelled,
        DragGesture::ended(0.0, 0.0),
    ];

    assert_eq!(
        settle(&positions, &metrics, Position::Top, &gestures),
        Position::Top
    );
}

#[test]
fn rotation_changes_drag_percentage() {
    let positions = PositionSet::from([Position::Custom(0.3), Position::Middle, Position::Top]);
    let portrait = ScreenMetrics::default();
    let landscape = ScreenMetrics::new(844.0, 390.0, EdgeInsets::vertical(0.0, 21.0));

    let start = Position::Middle;
    let portrait_pct = drag_percentage(start.offset(&portrait), &positions, &portrait);
    let landscape_pct = drag_percentage(start.offset(&landscape), &positions, &landscape);

    assert!(portrait_pct > 0.0 && portrait_pct < 1.0);
    assert!(landscape_pct > 0.0 && landscape_pct < 1.0);
    assert_ne!(portrait_pct, landscape_pct);
}
