//! Drag-to-snap state machine.
//!
//! A gesture moves through `Idle -> Dragging -> Idle`. While dragging, each
//! reported translation (cumulative since the gesture began) is turned into
//! an increment and accumulated on top of the committed position's offset,
//! damped when it pulls past the highest or lowest visible position. On
//! release the remaining predicted travel is projected forward and the
//! nearest legal position wins, subject to the dismissal guard.

use crate::gesture_constants::{EDGE_DAMPING_DIVISOR, SENSITIVITY_POSITION_SCALE};
use crate::position::{Position, ScreenMetrics};
use crate::position_set::PositionSet;

/// How strongly the predicted throw counts when projecting a release.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Sensitivity {
    /// `max(1, positions / 6)`: more snap points make a flick travel further.
    CountScaled,
    /// Constant multiplier regardless of the number of snap points.
    Fixed(f32),
}

impl Sensitivity {
    pub fn factor(&self, position_count: usize) -> f32 {
        match self {
            Sensitivity::CountScaled => {
                (position_count as f32 / SENSITIVITY_POSITION_SCALE).max(1.0)
            }
            Sensitivity::Fixed(factor) => *factor,
        }
    }
}

/// Tuning for drag damping and release projection.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SnapPolicy {
    /// Divisor for drag increments past the highest or lowest visible position.
    pub edge_damping: f32,
    pub sensitivity: Sensitivity,
    /// Share of the distance from the lowest visible position to `Hidden`
    /// that a projected release must cover before the sheet may dismiss.
    pub dismiss_fraction: f32,
}

impl SnapPolicy {
    pub fn edge_damping(mut self, divisor: f32) -> Self {
        self.edge_damping = divisor;
        self
    }

    pub fn sensitivity(mut self, sensitivity: Sensitivity) -> Self {
        self.sensitivity = sensitivity;
        self
    }

    pub fn dismiss_fraction(mut self, fraction: f32) -> Self {
        self.dismiss_fraction = fraction;
        self
    }
}

impl Default for SnapPolicy {
    fn default() -> Self {
        Self {
            edge_damping: EDGE_DAMPING_DIVISOR,
            sensitivity: Sensitivity::CountScaled,
            dismiss_fraction: 1.0,
        }
    }
}

/// Everything the resolver needs to know about the sheet it is driving.
#[derive(Clone, Copy, Debug)]
pub struct SnapContext<'a> {
    pub positions: &'a PositionSet,
    pub metrics: &'a ScreenMetrics,
    pub committed: Position,
}

impl<'a> SnapContext<'a> {
    pub fn new(positions: &'a PositionSet, metrics: &'a ScreenMetrics, committed: Position) -> Self {
        Self {
            positions,
            metrics,
            committed,
        }
    }

    fn base_offset(&self) -> f32 {
        self.committed.offset(self.metrics)
    }

    fn edges(&self) -> (f32, f32) {
        (
            self.positions.highest(self.metrics).offset(self.metrics),
            self.positions.lowest(self.metrics).offset(self.metrics),
        )
    }
}

/// Per-gesture scratch state; discarded when the gesture ends.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DragSession {
    /// Free-form offset added to the committed position's offset.
    pub offset_delta: f32,
    /// Last cumulative translation reported by the input system.
    pub previous_translation: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragPhase {
    Idle,
    Dragging,
}

/// Outcome of releasing a drag.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SnapResolution {
    /// Position to commit.
    pub target: Position,
    /// On-screen offset at the moment of release; the commit animation starts here.
    pub from_offset: f32,
    /// Release offset pushed forward by the predicted throw.
    pub projected_offset: f32,
}

impl SnapResolution {
    pub fn dismissed(&self) -> bool {
        self.target.is_hidden()
    }
}

#[derive(Debug, Default)]
pub struct DragResolver {
    policy: SnapPolicy,
    session: Option<DragSession>,
}

impl DragResolver {
    pub fn new(policy: SnapPolicy) -> Self {
        Self {
            policy,
            session: None,
        }
    }

    pub fn policy(&self) -> &SnapPolicy {
        &self.policy
    }

    pub fn set_policy(&mut self, policy: SnapPolicy) {
        self.policy = policy;
    }

    pub fn phase(&self) -> DragPhase {
        if self.session.is_some() {
            DragPhase::Dragging
        } else {
            DragPhase::Idle
        }
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    /// Starts a gesture whose live offset is already `offset_delta` away from
    /// the committed position, e.g. when grabbing a sheet mid-animation.
    pub fn begin_with_delta(&mut self, offset_delta: f32) {
        self.session = Some(DragSession {
            offset_delta,
            previous_translation: 0.0,
        });
    }

    /// Committed offset plus whatever the current gesture has accumulated.
    pub fn live_offset(&self, ctx: &SnapContext<'_>) -> f32 {
        let delta = self.session.map_or(0.0, |session| session.offset_delta);
        ctx.base_offset() + delta
    }

    /// Feeds a pointer-move; `translation` is cumulative since the gesture began.
    ///
    /// Returns the new live offset.
    pub fn drag_changed(&mut self, translation: f32, ctx: &SnapContext<'_>) -> f32 {
        let base = ctx.base_offset();
        let (highest, lowest) = ctx.edges();
        let damping = self.policy.edge_damping.max(1.0);

        let session = self.session.get_or_insert_with(|| {
            log::trace!("drag started from {:?} at {}", ctx.committed, base);
            DragSession::default()
        });

        let incremental = translation - session.previous_translation;
        let prospective = base + session.offset_delta + incremental;
        let applied = if prospective > lowest || prospective < highest {
            incremental / damping
        } else {
            incremental
        };
        session.offset_delta += applied;
        session.previous_translation = translation;

        base + session.offset_delta
    }

    /// Finishes the gesture and picks the position to commit.
    ///
    /// `predicted_end_translation` is the input system's velocity-extrapolated
    /// cumulative translation; a release without velocity reports the same
    /// value as `translation`.
    pub fn drag_ended(
        &mut self,
        translation: f32,
        predicted_end_translation: f32,
        ctx: &SnapContext<'_>,
    ) -> SnapResolution {
        let live = self.drag_changed(translation, ctx);
        self.session = None;
        let resolution = self.resolve(live, predicted_end_translation - translation, ctx);
        log::debug!(
            "drag released at {:.1} (projected {:.1}): {:?} -> {:?}",
            resolution.from_offset,
            resolution.projected_offset,
            ctx.committed,
            resolution.target
        );
        resolution
    }

    /// Abandons the current gesture without committing anything.
    pub fn cancel(&mut self) -> Option<DragSession> {
        self.session.take()
    }

    /// Snaps a release at `live_offset` with `throw` units of predicted travel left.
    pub fn resolve(&self, live_offset: f32, throw: f32, ctx: &SnapContext<'_>) -> SnapResolution {
        let metrics = ctx.metrics;
        let sensitivity = self.policy.sensitivity.factor(ctx.positions.len());
        let projected_offset = live_offset + throw * sensitivity;

        let nearest = nearest_position(projected_offset, ctx.positions, metrics);
        let target = match nearest {
            None => ctx.committed,
            Some(Position::Hidden) => self.guard_dismissal(projected_offset, ctx),
            Some(position) => position,
        };

        SnapResolution {
            target,
            from_offset: live_offset,
            projected_offset,
        }
    }

    /// Only a decisive throw from the lowest visible position may dismiss.
    fn guard_dismissal(&self, projected_offset: f32, ctx: &SnapContext<'_>) -> Position {
        let metrics = ctx.metrics;
        let lowest = ctx.positions.lowest(metrics);
        if lowest.is_hidden() || ctx.committed.is_hidden() {
            return Position::Hidden;
        }
        if ctx.committed != lowest {
            log::debug!(
                "dismissal blocked: {:?} is not the lowest position {:?}",
                ctx.committed,
                lowest
            );
            return lowest;
        }
        let lowest_offset = lowest.offset(metrics);
        let threshold = lowest_offset
            + (Position::Hidden.offset(metrics) - lowest_offset) * self.policy.dismiss_fraction;
        if projected_offset >= threshold {
            Position::Hidden
        } else {
            lowest
        }
    }
}

/// Closest member to `offset`; ties go to the smaller offset, then to insertion order.
fn nearest_position(
    offset: f32,
    positions: &PositionSet,
    metrics: &ScreenMetrics,
) -> Option<Position> {
    let mut best: Option<(Position, f32)> = None;
    for position in positions.sorted(metrics) {
        let distance = (offset - position.offset(metrics)).abs();
        match best {
            Some((_, best_distance)) if distance >= best_distance => {}
            _ => best = Some((position, distance)),
        }
    }
    best.map(|(position, _)| position)
}

/// Openness of the sheet between its lowest (0.0) and highest (1.0) positions.
pub fn drag_percentage(offset: f32, positions: &PositionSet, metrics: &ScreenMetrics) -> f32 {
    let highest = positions.highest(metrics).offset(metrics);
    let lowest = positions.lowest(metrics).offset(metrics);
    let range = lowest - highest;
    if range.abs() <= f32::EPSILON {
        return 1.0;
    }
    let percentage = 1.0 - (offset - highest) / range;
    if percentage.is_nan() {
        0.0
    } else {
        percentage.clamp(0.0, 1.0)
    }
}

/// Opacity of the background scrim for a sheet at `offset`.
///
/// Single-position sheets have nothing to fade between and use `max_shadow` as is.
pub fn scrim_alpha(
    offset: f32,
    positions: &PositionSet,
    metrics: &ScreenMetrics,
    max_shadow: f32,
) -> f32 {
    if positions.is_single_position() {
        max_shadow
    } else {
        drag_percentage(offset, positions, metrics) * max_shadow
    }
}

#[cfg(test)]
#[path = "tests/drag_tests.rs"]
mod tests;
