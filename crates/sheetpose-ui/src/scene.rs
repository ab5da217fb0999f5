//! Render description of a sheet at a given offset.

use sheetpose_foundation::{scrim_alpha, PositionSet, ScreenMetrics};
use sheetpose_ui_graphics::{
    Brush, Color, CornerRadii, DrawScope, Point, Rect, RoundedCornerShape, Shadow, Size,
};

use crate::config::{SheetConfig, HANDLE_AREA_HEIGHT};

/// Dimmed full-screen backdrop.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrimLayer {
    pub rect: Rect,
    pub alpha: f32,
}

impl ScrimLayer {
    pub fn color(&self) -> Color {
        Color::BLACK.with_alpha(self.alpha)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanelLayer {
    pub rect: Rect,
    pub radii: CornerRadii,
    pub brush: Brush,
    pub shadow: Shadow,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HandleLayer {
    pub rect: Rect,
    pub color: Color,
}

/// Area handed to the host's content, with the sheet's openness.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContentSlot {
    pub bounds: Rect,
    /// 0.0 at the lowest position, 1.0 at the highest.
    pub progress: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SheetScene {
    pub scrim: ScrimLayer,
    pub panel: PanelLayer,
    pub handle: Option<HandleLayer>,
    pub content: ContentSlot,
}

impl SheetScene {
    pub fn layout(
        config: &SheetConfig,
        positions: &PositionSet,
        metrics: &ScreenMetrics,
        offset: f32,
    ) -> Self {
        let screen = Rect::from_size(metrics.size());

        let panel_height = if config.resizable {
            metrics.height - offset
        } else {
            metrics.height - positions.highest(metrics).offset(metrics)
        }
        .max(config.min_size);
        let panel_rect = Rect::new(0.0, offset, metrics.width, panel_height);
        let radii = RoundedCornerShape::top(config.corner_radius)
            .resolve(panel_rect.width, panel_rect.height);

        let handle = config.handle_style.size().map(|size| HandleLayer {
            rect: Rect::from_origin_size(
                Point::new(
                    (metrics.width - size.width) / 2.0,
                    offset + (HANDLE_AREA_HEIGHT - size.height) / 2.0,
                ),
                size,
            ),
            color: Color::HANDLE_GREY,
        });

        let content_top = if handle.is_some() {
            HANDLE_AREA_HEIGHT
        } else {
            0.0
        };
        let content_bounds = Rect::from_origin_size(
            Point::new(0.0, offset + content_top),
            Size::new(metrics.width, (panel_height - content_top).max(0.0)),
        );

        let alpha = scrim_alpha(offset, positions, metrics, config.background_shadow);

        Self {
            scrim: ScrimLayer {
                rect: screen,
                alpha,
            },
            panel: PanelLayer {
                rect: panel_rect,
                radii,
                brush: config.background.brush(),
                shadow: config.shadow,
            },
            handle,
            content: ContentSlot {
                bounds: content_bounds,
                progress: sheetpose_foundation::drag_percentage(offset, positions, metrics),
            },
        }
    }

    /// Emits scrim, shadow, panel and handle in paint order.
    pub fn draw(&self, scope: &mut dyn DrawScope) {
        if self.scrim.alpha > 0.0 {
            scope.draw_rect_at(self.scrim.rect, Brush::solid(self.scrim.color()));
        }
        scope.draw_shadow(self.panel.rect, self.panel.radii, self.panel.shadow);
        scope.draw_round_rect_at(self.panel.rect, self.panel.brush, self.panel.radii);
        if let Some(handle) = &self.handle {
            let radius = handle.rect.height / 2.0;
            scope.draw_round_rect_at(
                handle.rect,
                Brush::solid(handle.color),
                CornerRadii::uniform(radius),
            );
        }
    }

    /// Which part of the sheet lies under `point`.
    pub fn hit_test(&self, point: Point) -> sheetpose_foundation::TapTarget {
        use sheetpose_foundation::TapTarget;

        if let Some(handle) = &self.handle {
            // The whole grab strip counts as the handle.
            let strip = Rect::new(
                self.panel.rect.x,
                self.panel.rect.y,
                self.panel.rect.width,
                HANDLE_AREA_HEIGHT,
            );
            if handle.rect.contains(point.x, point.y) || strip.contains(point.x, point.y) {
                return TapTarget::Handle;
            }
        }
        if self.panel.rect.contains(point.x, point.y) {
            TapTarget::Panel
        } else {
            TapTarget::Scrim
        }
    }
}

#[cfg(test)]
#[path = "tests/scene_tests.rs"]
mod tests;
