//! Robot-style driver for modal sheets
//!
//! [`SheetRobot`] owns a [`ModalSheet`] and a virtual clock, and turns
//! high-level interactions (drags, flings, taps, rotations) into the gesture
//! events and frame ticks a host would deliver.
//!
//! # Example
//!
//! ```
//! use sheetpose_testing::SheetRobot;
//! use sheetpose_ui::{Position, ScreenMetrics, SheetConfig};
//!
//! let mut robot = SheetRobot::new(SheetConfig::standard(), ScreenMetrics::default()).unwrap();
//! robot.present();
//!
//! robot.drag_by(400.0);
//! robot.wait_for_idle();
//! assert_eq!(robot.sheet().committed_position(), Position::Middle);
//! ```

use sheetpose_foundation::FlingProjection;
use sheetpose_ui::{
    DragGesture, ModalSheet, ScreenMetrics, SheetConfig, SheetConfigError, TapTarget,
};
use sheetpose_ui_graphics::{DrawScopeDefault, Point};

/// One 60 Hz frame.
pub const FRAME_NANOS: u64 = 16_666_667;

/// Upper bound on frames [`SheetRobot::wait_for_idle`] will pump.
pub const MAX_IDLE_FRAMES: usize = 1_000;

/// Pointer-move events delivered per simulated drag.
const DRAG_STEPS: usize = 10;

pub struct SheetRobot {
    sheet: ModalSheet,
    time_nanos: u64,
    projection: FlingProjection,
}

impl SheetRobot {
    pub fn new(config: SheetConfig, metrics: ScreenMetrics) -> Result<Self, SheetConfigError> {
        Ok(Self::from_sheet(ModalSheet::new(config, metrics)?))
    }

    /// Wrap an already-built sheet, e.g. one created with a binding.
    pub fn from_sheet(sheet: ModalSheet) -> Self {
        Self {
            sheet,
            time_nanos: 0,
            projection: FlingProjection::default(),
        }
    }

    pub fn sheet(&self) -> &ModalSheet {
        &self.sheet
    }

    pub fn sheet_mut(&mut self) -> &mut ModalSheet {
        &mut self.sheet
    }

    /// Show the sheet and let the entrance animation finish.
    pub fn present(&mut self) {
        self.sheet.appear();
        self.wait_for_idle();
    }

    /// Deliver a single frame at the current time, then step the clock.
    pub fn advance_frame(&mut self) {
        self.sheet.advance_frame(self.time_nanos);
        self.time_nanos += FRAME_NANOS;
    }

    /// Run frames until at least `nanos` of virtual time has passed.
    pub fn advance_time(&mut self, nanos: u64) {
        let deadline = self.time_nanos + nanos;
        while self.time_nanos < deadline {
            self.advance_frame();
        }
    }

    /// Pump frames until no animation is running; returns the number of frames.
    ///
    /// Panics if the sheet is still animating after [`MAX_IDLE_FRAMES`].
    pub fn wait_for_idle(&mut self) -> usize {
        let mut frames = 0;
        // Always run one frame so pending binding writes are picked up.
        loop {
            self.advance_frame();
            frames += 1;
            if !self.sheet.is_animating() {
                return frames;
            }
            assert!(
                frames < MAX_IDLE_FRAMES,
                "sheet still animating after {} frames (offset {})",
                frames,
                self.sheet.current_offset()
            );
        }
    }

    /// Move the pointer down by `distance` in even steps without releasing.
    pub fn drag_and_hold(&mut self, distance: f32) {
        for step in 1..=DRAG_STEPS {
            let translation = distance * step as f32 / DRAG_STEPS as f32;
            self.sheet.handle_drag(DragGesture::changed(translation));
            self.advance_frame();
        }
    }

    /// Drag by `distance` and release with no velocity.
    pub fn drag_by(&mut self, distance: f32) {
        self.drag_and_hold(distance);
        self.sheet
            .handle_drag(DragGesture::ended(distance, distance));
    }

    /// Drag by `distance` and release with `predicted_end_translation`.
    pub fn drag_with_prediction(&mut self, distance: f32, predicted_end_translation: f32) {
        self.drag_and_hold(distance);
        self.sheet
            .handle_drag(DragGesture::ended(distance, predicted_end_translation));
    }

    /// Drag by `distance` and release at `velocity` px/s.
    pub fn fling(&mut self, distance: f32, velocity: f32) {
        self.drag_and_hold(distance);
        self.sheet.handle_drag(DragGesture::ended_with_velocity(
            distance,
            velocity,
            &self.projection,
        ));
    }

    pub fn cancel_drag(&mut self) {
        self.sheet.handle_drag(DragGesture::Cancelled);
    }

    pub fn tap(&mut self, target: TapTarget) {
        self.sheet.tap(target);
    }

    pub fn tap_at(&mut self, x: f32, y: f32) {
        self.sheet.tap_at(Point::new(x, y));
    }

    /// Simulate a rotation or window resize.
    pub fn set_metrics(&mut self, metrics: ScreenMetrics) -> Result<(), SheetConfigError> {
        self.sheet.set_metrics(metrics)
    }

    /// Render into a fresh recording scope sized to the screen.
    pub fn render(&mut self) -> DrawScopeDefault {
        let mut scope = DrawScopeDefault::new(self.sheet.metrics().size());
        self.sheet.render(&mut scope);
        scope
    }
}
