use super::*;
use sheetpose_foundation::{Position, TapTarget};
use sheetpose_ui_graphics::{DrawPrimitive, DrawScopeDefault};

use crate::config::HandleStyle;

fn standard_scene_at(position: Position) -> SheetScene {
    let config = SheetConfig::standard();
    let metrics = ScreenMetrics::default();
    let positions = config.position_set();
    SheetScene::layout(&config, &positions, &metrics, position.offset(&metrics))
}

#[test]
fn panel_spans_width_and_keeps_open_height() {
    let top = standard_scene_at(Position::Top);
    assert_eq!(top.panel.rect, Rect::new(0.0, 63.0, 390.0, 781.0));

    let bottom = standard_scene_at(Position::Bottom);
    assert_eq!(bottom.panel.rect.y, 682.0);
    assert_eq!(bottom.panel.rect.height, 781.0);
}

#[test]
fn resizable_panel_tracks_offset_down_to_min_size() {
    let metrics = ScreenMetrics::default();
    let config = SheetConfig::standard().resizable(true).min_size(500.0);
    let positions = config.position_set();

    let top = SheetScene::layout(&config, &positions, &metrics, 63.0);
    assert_eq!(top.panel.rect.height, 781.0);

    let middle = SheetScene::layout(&config, &positions, &metrics, 422.0);
    assert_eq!(middle.panel.rect.height, 500.0);
}

#[test]
fn only_top_corners_are_rounded() {
    let scene = standard_scene_at(Position::Top);
    assert_eq!(scene.panel.radii.top_left, 38.0);
    assert_eq!(scene.panel.radii.top_right, 38.0);
    assert_eq!(scene.panel.radii.bottom_left, 0.0);
    assert_eq!(scene.panel.radii.bottom_right, 0.0);
}

#[test]
fn handle_is_centered_in_grab_strip() {
    let scene = standard_scene_at(Position::Top);
    let handle = scene.handle.expect("medium handle");
    assert_eq!(handle.rect, Rect::new(175.0, 72.5, 40.0, 5.0));
    assert_eq!(scene.content.bounds.y, 63.0 + HANDLE_AREA_HEIGHT);
    assert_eq!(scene.content.bounds.height, 781.0 - HANDLE_AREA_HEIGHT);
}

#[test]
fn content_fills_panel_without_handle() {
    let metrics = ScreenMetrics::default();
    let config = SheetConfig::standard().handle_style(HandleStyle::None);
    let positions = config.position_set();
    let scene = SheetScene::layout(&config, &positions, &metrics, 63.0);
    assert!(scene.handle.is_none());
    assert_eq!(scene.content.bounds, scene.panel.rect);
}

#[test]
fn scrim_and_progress_follow_openness() {
    let top = standard_scene_at(Position::Top);
    assert!((top.scrim.alpha - 0.3).abs() < 1e-6);
    assert_eq!(top.content.progress, 1.0);

    let bottom = standard_scene_at(Position::Bottom);
    assert_eq!(bottom.scrim.alpha, 0.0);
    assert_eq!(bottom.content.progress, 0.0);
}

#[test]
fn draw_emits_layers_in_paint_order() {
    let scene = standard_scene_at(Position::Top);
    let mut scope = DrawScopeDefault::new(ScreenMetrics::default().size());
    scene.draw(&mut scope);

    let primitives = scope.into_primitives();
    assert_eq!(primitives.len(), 4);
    assert!(matches!(primitives[0], DrawPrimitive::Rect { .. }));
    assert!(matches!(primitives[1], DrawPrimitive::Shadow { .. }));
    assert!(matches!(
        primitives[2],
        DrawPrimitive::RoundRect {
            brush: Brush::Material(_),
            ..
        }
    ));
    assert!(matches!(
        primitives[3],
        DrawPrimitive::RoundRect {
            brush: Brush::Solid(_),
            ..
        }
    ));
}

#[test]
fn transparent_scrim_is_not_drawn() {
    let scene = standard_scene_at(Position::Bottom);
    let mut scope = DrawScopeDefault::new(ScreenMetrics::default().size());
    scene.draw(&mut scope);
    assert!(!scope
        .primitives()
        .iter()
        .any(|primitive| matches!(primitive, DrawPrimitive::Rect { .. })));
}

#[test]
fn hit_test_distinguishes_handle_panel_and_scrim() {
    let scene = standard_scene_at(Position::Top);
    assert_eq!(scene.hit_test(Point::new(195.0, 75.0)), TapTarget::Handle);
    assert_eq!(scene.hit_test(Point::new(20.0, 70.0)), TapTarget::Handle);
    assert_eq!(scene.hit_test(Point::new(195.0, 300.0)), TapTarget::Panel);
    assert_eq!(scene.hit_test(Point::new(195.0, 30.0)), TapTarget::Scrim);
}
