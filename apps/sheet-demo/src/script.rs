//! Scripted interactions replayed against a sheet with a virtual frame loop.

use sheetpose_foundation::{DragGesture, FlingProjection, Position, TapTarget};
use sheetpose_ui::{ModalSheet, SheetPhase};
use sheetpose_ui_graphics::{DrawScopeDefault, Point};

const FRAME_NANOS: u64 = 16_666_667;
const MAX_SETTLE_FRAMES: usize = 600;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Step {
    Appear,
    /// Drag by `distance` and let go without velocity.
    Drag { distance: f32 },
    /// Drag by `distance` and let go at `velocity` px/s.
    Fling { distance: f32, velocity: f32 },
    Tap(TapTarget),
    TapAt(Point),
    SetPosition(Position),
}

/// State of the sheet after a step has settled.
#[derive(Clone, Debug, PartialEq)]
pub struct Snapshot {
    pub step: Step,
    pub position: Position,
    pub offset: f32,
    pub percentage: f32,
    pub frames: usize,
    pub primitives: usize,
}

pub struct Player {
    sheet: ModalSheet,
    time_nanos: u64,
    projection: FlingProjection,
}

impl Player {
    pub fn new(sheet: ModalSheet) -> Self {
        Self {
            sheet,
            time_nanos: 0,
            projection: FlingProjection::with_density(2.0),
        }
    }

    pub fn sheet(&self) -> &ModalSheet {
        &self.sheet
    }

    pub fn run(&mut self, steps: &[Step]) -> Vec<Snapshot> {
        steps.iter().map(|step| self.play(*step)).collect()
    }

    pub fn play(&mut self, step: Step) -> Snapshot {
        log::info!("step {:?}", step);
        match step {
            Step::Appear => self.sheet.appear(),
            Step::Drag { distance } => {
                self.drag_steps(distance);
                self.sheet
                    .handle_drag(DragGesture::ended(distance, distance));
            }
            Step::Fling { distance, velocity } => {
                self.drag_steps(distance);
                self.sheet.handle_drag(DragGesture::ended_with_velocity(
                    distance,
                    velocity,
                    &self.projection,
                ));
            }
            Step::Tap(target) => self.sheet.tap(target),
            Step::TapAt(point) => self.sheet.tap_at(point),
            Step::SetPosition(position) => self.sheet.set_position(position),
        }
        let frames = self.settle();

        let mut scope = DrawScopeDefault::new(self.sheet.metrics().size());
        self.sheet.render(&mut scope);

        Snapshot {
            step,
            position: self.sheet.committed_position(),
            offset: self.sheet.current_offset(),
            percentage: self.sheet.drag_percentage(),
            frames,
            primitives: scope.primitives().len(),
        }
    }

    fn drag_steps(&mut self, distance: f32) {
        const STEPS: usize = 8;
        for step in 1..=STEPS {
            let translation = distance * step as f32 / STEPS as f32;
            self.sheet.handle_drag(DragGesture::changed(translation));
            self.frame();
        }
    }

    fn frame(&mut self) {
        self.sheet.advance_frame(self.time_nanos);
        self.time_nanos += FRAME_NANOS;
    }

    fn settle(&mut self) -> usize {
        let mut frames = 0;
        while self.sheet.phase() != SheetPhase::Idle && frames < MAX_SETTLE_FRAMES {
            self.frame();
            frames += 1;
        }
        if frames == MAX_SETTLE_FRAMES {
            log::warn!("sheet did not settle after {} frames", frames);
        }
        frames
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sheetpose_foundation::ScreenMetrics;
    use sheetpose_ui::SheetConfig;

    fn player(config: SheetConfig) -> Player {
        Player::new(ModalSheet::new(config, ScreenMetrics::default()).expect("valid config"))
    }

    #[test]
    fn appear_then_drag_settles_on_middle() {
        let mut player = player(SheetConfig::standard());
        let snapshots = player.run(&[Step::Appear, Step::Drag { distance: 380.0 }]);

        assert_eq!(snapshots[0].position, Position::Top);
        assert_eq!(snapshots[0].offset, 63.0);
        assert!(snapshots[0].frames > 0);
        assert_eq!(snapshots[1].position, Position::Middle);
        assert_eq!(snapshots[1].offset, 422.0);
    }

    #[test]
    fn dismissable_script_ends_hidden() {
        let mut player = player(SheetConfig::dismissable());
        let snapshots = player.run(&[
            Step::Appear,
            Step::Tap(TapTarget::Scrim),
            Step::Fling {
                distance: 40.0,
                velocity: 4_000.0,
            },
        ]);
        assert_eq!(snapshots[1].position, Position::Bottom);
        assert_eq!(snapshots[2].position, Position::Hidden);
        assert_eq!(player.sheet().current_offset(), 844.0);
    }
}
