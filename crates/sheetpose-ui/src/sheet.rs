//! The modal sheet component: position state, drag handling and animation.

use sheetpose_animation::Animatable;
use sheetpose_core::{FrameClock, MutableState, StateCell, Subscription};
use sheetpose_foundation::{
    drag_percentage, scrim_alpha, DragGesture, DragPhase, DragResolver, Position, PositionSet,
    ScreenMetrics, SnapContext, TapTarget,
};
use sheetpose_ui_graphics::{DrawScope, Point, Rect};

use crate::config::{validate_metrics, ScrimTap, SheetConfig};
use crate::error::SheetConfigError;
use crate::event::{EventBus, SheetEvent, SheetPhase};
use crate::scene::SheetScene;

/// What the content callback gets to draw with.
pub struct ContentScope<'a> {
    /// Openness of the sheet, 0.0 at the lowest position and 1.0 at the highest.
    pub progress: f32,
    pub bounds: Rect,
    pub scope: &'a mut dyn DrawScope,
}

type ContentFn = Box<dyn FnMut(&mut ContentScope<'_>)>;

/// A bottom sheet that rests at one of several positions and can be dragged
/// between them.
///
/// The committed position lives either in state owned by the sheet
/// ([`ModalSheet::new`]) or in a caller-supplied cell
/// ([`ModalSheet::with_binding`]). The on-screen offset is animated separately
/// and driven by [`ModalSheet::advance_frame`].
pub struct ModalSheet {
    config: SheetConfig,
    metrics: ScreenMetrics,
    positions: PositionSet,
    position: Box<dyn StateCell<Position>>,
    bound: bool,
    /// Last committed value seen, used to detect writes to a bound cell.
    last_synced: Position,
    resolver: DragResolver,
    clock: FrameClock,
    offset: Animatable<f32>,
    phase: SheetPhase,
    events: EventBus,
    _offset_subscription: Subscription,
    content: Option<ContentFn>,
}

impl ModalSheet {
    /// Creates a sheet that owns its position state, starting off screen.
    ///
    /// Call [`ModalSheet::appear`] to bring it to its highest position.
    pub fn new(config: SheetConfig, metrics: ScreenMetrics) -> Result<Self, SheetConfigError> {
        let positions = config.position_set();
        let initial = positions.highest(&metrics);
        let state = MutableState::new(initial);
        Self::build(config, metrics, positions, Box::new(state), false)
    }

    /// Creates a sheet whose committed position is owned by the caller.
    pub fn with_binding(
        config: SheetConfig,
        metrics: ScreenMetrics,
        binding: impl StateCell<Position> + 'static,
    ) -> Result<Self, SheetConfigError> {
        let positions = config.position_set();
        Self::build(config, metrics, positions, Box::new(binding), true)
    }

    fn build(
        config: SheetConfig,
        metrics: ScreenMetrics,
        positions: PositionSet,
        position: Box<dyn StateCell<Position>>,
        bound: bool,
    ) -> Result<Self, SheetConfigError> {
        config.validate()?;
        validate_metrics(&metrics)?;

        let committed = position.get();
        let initial_offset = if bound {
            committed.offset(&metrics)
        } else {
            Position::Hidden.offset(&metrics)
        };

        let clock = FrameClock::new();
        let offset = Animatable::new(initial_offset, clock.clone());
        let events = EventBus::default();
        let offset_subscription = {
            let events = events.clone();
            offset
                .state()
                .subscribe(move |value| events.emit(SheetEvent::OffsetChanged(*value)))
        };

        log::debug!(
            "sheet created with {} position(s), committed {:?}{}",
            positions.len(),
            committed,
            if bound { " (bound)" } else { "" }
        );

        Ok(Self {
            resolver: DragResolver::new(config.snap_policy),
            config,
            metrics,
            positions,
            position,
            bound,
            last_synced: committed,
            clock,
            offset,
            phase: SheetPhase::Idle,
            events,
            _offset_subscription: offset_subscription,
            content: None,
        })
    }

    /// Presents the sheet.
    ///
    /// A self-owned sheet commits its highest position and slides in from off
    /// screen; a bound sheet jumps straight to the bound position.
    pub fn appear(&mut self) {
        if self.bound {
            let value = self.position.get();
            self.last_synced = value;
            self.offset.snap_to(value.offset(&self.metrics));
        } else {
            self.offset
                .snap_to(Position::Hidden.offset(&self.metrics));
            let highest = self.positions.highest(&self.metrics);
            self.commit(highest);
        }
        self.refresh_phase();
    }

    pub fn set_content(&mut self, content: impl FnMut(&mut ContentScope<'_>) + 'static) {
        self.content = Some(Box::new(content));
    }

    pub fn handle_drag(&mut self, gesture: DragGesture) {
        match gesture {
            DragGesture::Changed { translation } => {
                self.begin_drag_if_idle();
                let committed = self.position.get();
                let ctx = SnapContext::new(&self.positions, &self.metrics, committed);
                let live = self.resolver.drag_changed(translation, &ctx);
                self.offset.snap_to(live);
            }
            DragGesture::Ended {
                translation,
                predicted_end_translation,
            } => {
                self.begin_drag_if_idle();
                let committed = self.position.get();
                let ctx = SnapContext::new(&self.positions, &self.metrics, committed);
                let resolution =
                    self.resolver
                        .drag_ended(translation, predicted_end_translation, &ctx);
                self.offset.snap_to(resolution.from_offset);
                self.commit(resolution.target);
            }
            DragGesture::Cancelled => {
                if self.resolver.cancel().is_some() {
                    log::debug!("drag cancelled, returning to {:?}", self.position.get());
                    self.animate_to_committed();
                }
            }
        }
        self.refresh_phase();
    }

    /// A gesture that grabs the sheet mid-animation continues from where the
    /// panel is on screen, not from the committed offset.
    fn begin_drag_if_idle(&mut self) {
        if self.resolver.phase() == DragPhase::Idle {
            let committed_offset = self.position.get().offset(&self.metrics);
            self.resolver
                .begin_with_delta(self.offset.value() - committed_offset);
        }
    }

    pub fn tap(&mut self, target: TapTarget) {
        if self.resolver.phase() == DragPhase::Dragging {
            log::trace!("ignoring {:?} tap during drag", target);
            return;
        }
        let destination = match target {
            TapTarget::Scrim => self.scrim_tap_destination(),
            TapTarget::Panel | TapTarget::Handle => Some(self.positions.highest(&self.metrics)),
        };
        if let Some(destination) = destination {
            self.commit(destination);
        }
        self.refresh_phase();
    }

    /// Taps at a screen point, hit-testing the handle strip and panel.
    pub fn tap_at(&mut self, point: Point) {
        let target = self.scene().hit_test(point);
        self.tap(target);
    }

    fn scrim_tap_destination(&self) -> Option<Position> {
        if self.config.scrim_tap == ScrimTap::Dismiss && self.positions.contains(Position::Hidden)
        {
            return Some(Position::Hidden);
        }
        [Position::Bottom, Position::Middle]
            .into_iter()
            .find(|position| self.positions.contains(*position))
    }

    /// Commits `position` programmatically and animates to it.
    pub fn set_position(&mut self, position: Position) {
        if !self.positions.contains(position) {
            log::debug!("committing {:?}, which is not a snap point", position);
        }
        self.commit(position);
        self.refresh_phase();
    }

    /// Applies new screen metrics, e.g. after rotation.
    ///
    /// Any gesture in progress is dropped and the panel jumps to the committed
    /// position's offset under the new metrics.
    pub fn set_metrics(&mut self, metrics: ScreenMetrics) -> Result<(), SheetConfigError> {
        validate_metrics(&metrics)?;
        self.metrics = metrics;
        self.resolver.cancel();
        let offset = self.position.get().offset(&self.metrics);
        self.offset.snap_to(offset);
        self.refresh_phase();
        Ok(())
    }

    /// Runs one frame at `frame_time_nanos`.
    pub fn advance_frame(&mut self, frame_time_nanos: u64) {
        self.sync_binding();
        self.clock.drain_frame_callbacks(frame_time_nanos);
        self.refresh_phase();
    }

    /// Picks up writes made to a bound position cell from outside the sheet.
    fn sync_binding(&mut self) {
        if !self.bound {
            return;
        }
        let value = self.position.get();
        if value == self.last_synced {
            return;
        }
        let from = std::mem::replace(&mut self.last_synced, value);
        log::debug!("bound position changed externally: {:?} -> {:?}", from, value);
        self.resolver.cancel();
        self.events
            .emit(SheetEvent::PositionCommitted { from, to: value });
        self.animate_to_committed();
    }

    fn commit(&mut self, target: Position) {
        let from = self.position.get();
        if from != target {
            self.position.set(target);
        }
        // A bound cell may refuse or rewrite the value.
        let actual = self.position.get();
        if actual != from {
            log::debug!("committed {:?} -> {:?}", from, actual);
            self.events
                .emit(SheetEvent::PositionCommitted { from, to: actual });
        } else if actual != target {
            log::debug!("binding kept {:?}, refusing {:?}", actual, target);
        }
        self.last_synced = actual;
        self.animate_to_committed();
    }

    fn animate_to_committed(&mut self) {
        let target = self.position.get().offset(&self.metrics);
        self.offset
            .animate_to(target, self.config.animation.animation_type());
    }

    fn refresh_phase(&mut self) {
        let phase = if self.resolver.phase() == DragPhase::Dragging {
            SheetPhase::Dragging
        } else if self.offset.is_running() {
            SheetPhase::Settling
        } else {
            SheetPhase::Idle
        };
        if phase != self.phase {
            log::trace!("sheet phase {:?} -> {:?}", self.phase, phase);
            self.phase = phase;
            self.events.emit(SheetEvent::PhaseChanged(phase));
        }
    }

    pub fn committed_position(&self) -> Position {
        self.position.get()
    }

    pub fn current_offset(&self) -> f32 {
        self.offset.value()
    }

    pub fn drag_percentage(&self) -> f32 {
        drag_percentage(self.current_offset(), &self.positions, &self.metrics)
    }

    pub fn scrim_alpha(&self) -> f32 {
        scrim_alpha(
            self.current_offset(),
            &self.positions,
            &self.metrics,
            self.config.background_shadow,
        )
    }

    pub fn phase(&self) -> SheetPhase {
        self.phase
    }

    pub fn is_animating(&self) -> bool {
        self.offset.is_running()
    }

    pub fn positions(&self) -> &PositionSet {
        &self.positions
    }

    pub fn config(&self) -> &SheetConfig {
        &self.config
    }

    pub fn metrics(&self) -> &ScreenMetrics {
        &self.metrics
    }

    pub fn scene(&self) -> SheetScene {
        SheetScene::layout(
            &self.config,
            &self.positions,
            &self.metrics,
            self.current_offset(),
        )
    }

    /// Draws the sheet, then its content inside the content slot.
    pub fn render<S: DrawScope>(&mut self, scope: &mut S) {
        let scene = self.scene();
        scene.draw(&mut *scope);
        if let Some(content) = self.content.as_mut() {
            let mut content_scope = ContentScope {
                progress: scene.content.progress,
                bounds: scene.content.bounds,
                scope,
            };
            content(&mut content_scope);
        }
    }

    pub fn subscribe(&self, observer: impl FnMut(&SheetEvent) + 'static) -> Subscription {
        self.events.subscribe(observer)
    }

    pub fn observer_count(&self) -> usize {
        self.events.observer_count()
    }
}

#[cfg(test)]
#[path = "tests/sheet_tests.rs"]
mod tests;
