//! Sheets driven end to end through the robot: gestures in, frames pumped,
//! settled geometry out.

use sheetpose_foundation::{Sensitivity, SnapPolicy};
use sheetpose_testing::robot_assertions::{
    assert_approx_eq, assert_rect_approx_eq, assert_rect_contains_point, assert_settled_at,
};
use sheetpose_testing::SheetRobot;
use sheetpose_ui::{Position, ScreenMetrics, SheetConfig, SheetPhase, TapTarget};
use sheetpose_ui_graphics::{DrawPrimitive, EdgeInsets, Rect};

fn presented(config: SheetConfig) -> SheetRobot {
    let mut robot = SheetRobot::new(config, ScreenMetrics::default()).expect("valid config");
    robot.present();
    robot
}

#[test]
fn presenting_settles_at_highest_position() {
    let robot = presented(SheetConfig::standard());
    assert_settled_at(robot.sheet(), Position::Top, "after present");
    assert_approx_eq(robot.sheet().scrim_alpha(), 0.3, 1e-6, "scrim at top");
}

#[test]
fn slow_drags_walk_down_the_snap_points() {
    let mut robot = presented(SheetConfig::standard());

    robot.drag_by(400.0);
    robot.wait_for_idle();
    assert_settled_at(robot.sheet(), Position::Middle, "first drag");

    robot.drag_by(300.0);
    robot.wait_for_idle();
    assert_settled_at(robot.sheet(), Position::Bottom, "second drag");
    assert_approx_eq(robot.sheet().drag_percentage(), 0.0, 1e-6, "closed");
}

#[test]
fn upward_fling_from_bottom_opens_fully() {
    let mut robot = presented(SheetConfig::standard());
    robot.tap(TapTarget::Scrim);
    robot.wait_for_idle();
    assert_settled_at(robot.sheet(), Position::Bottom, "collapsed");

    robot.fling(-60.0, -3_000.0);
    robot.wait_for_idle();
    assert_settled_at(robot.sheet(), Position::Top, "after fling");
}

#[test]
fn only_a_decisive_fling_from_bottom_dismisses() {
    let mut robot = presented(SheetConfig::dismissable());
    robot.tap(TapTarget::Scrim);
    robot.wait_for_idle();

    robot.fling(20.0, 500.0);
    robot.wait_for_idle();
    assert_settled_at(robot.sheet(), Position::Bottom, "gentle fling");

    robot.fling(50.0, 3_000.0);
    robot.wait_for_idle();
    assert_settled_at(robot.sheet(), Position::Hidden, "decisive fling");
}

#[test]
fn fling_from_middle_cannot_skip_to_hidden() {
    let mut robot = presented(SheetConfig::dismissable());
    robot.sheet_mut().set_position(Position::Middle);
    robot.wait_for_idle();

    robot.fling(100.0, 8_000.0);
    robot.wait_for_idle();
    assert_settled_at(robot.sheet(), Position::Bottom, "guarded");
}

#[test]
fn dense_sets_amplify_flicks() {
    let mut robot = presented(SheetConfig::all());
    assert_settled_at(robot.sheet(), Position::Fill, "all preset opens to fill");

    robot.drag_with_prediction(100.0, 300.0);
    robot.wait_for_idle();
    assert_settled_at(robot.sheet(), Position::Custom(0.4), "count-scaled");

    let fixed = SheetConfig::all()
        .snap_policy(SnapPolicy::default().sensitivity(Sensitivity::Fixed(1.0)));
    let mut robot = presented(fixed);
    robot.drag_with_prediction(100.0, 300.0);
    robot.wait_for_idle();
    assert_settled_at(robot.sheet(), Position::Custom(0.6), "fixed");
}

#[test]
fn interrupted_animation_hands_over_to_the_drag() {
    let mut robot = presented(SheetConfig::standard());
    robot.tap(TapTarget::Scrim);
    robot.advance_time(50_000_000);
    assert_eq!(robot.sheet().phase(), SheetPhase::Settling);
    let on_screen = robot.sheet().current_offset();

    robot.drag_and_hold(20.0);
    assert_eq!(robot.sheet().phase(), SheetPhase::Dragging);
    assert_approx_eq(
        robot.sheet().current_offset(),
        on_screen + 20.0,
        1e-3,
        "drag continues from screen",
    );

    robot.cancel_drag();
    robot.wait_for_idle();
    assert_settled_at(robot.sheet(), Position::Bottom, "cancel returns to commit");
}

#[test]
fn tapping_the_handle_expands() {
    let mut robot = presented(SheetConfig::standard());
    robot.tap(TapTarget::Scrim);
    robot.wait_for_idle();

    let handle = robot.sheet().scene().handle.expect("medium handle");
    let (x, y) = (handle.rect.x + 1.0, handle.rect.y + 1.0);
    assert_rect_contains_point(robot.sheet().scene().panel.rect, x, y, "handle on panel");
    robot.tap_at(x, y);
    robot.wait_for_idle();
    assert_settled_at(robot.sheet(), Position::Top, "handle tap");
}

#[test]
fn rotation_keeps_committed_position() {
    let mut robot = presented(SheetConfig::standard());
    robot.drag_by(400.0);
    robot.wait_for_idle();

    let landscape = ScreenMetrics::new(844.0, 390.0, EdgeInsets::vertical(0.0, 21.0));
    robot.set_metrics(landscape).expect("valid metrics");
    assert_settled_at(robot.sheet(), Position::Middle, "landscape");
    assert_rect_approx_eq(
        robot.sheet().scene().panel.rect,
        Rect::new(0.0, 195.0, 844.0, 374.0),
        0.01,
        "landscape panel",
    );
}

#[test]
fn collapsed_sheet_renders_without_scrim() {
    let mut robot = presented(SheetConfig::standard());
    assert_eq!(robot.render().primitives().len(), 4);

    robot.tap(TapTarget::Scrim);
    robot.wait_for_idle();
    let scope = robot.render();
    assert_eq!(scope.primitives().len(), 3);
    assert!(matches!(
        scope.primitives()[0],
        DrawPrimitive::Shadow { .. }
    ));
}
