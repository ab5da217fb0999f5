//! Sets of legal snap points and the named presets that build them.

use smallvec::SmallVec;

use crate::position::{Position, ScreenMetrics};

/// Unique positions a sheet may snap to, kept in insertion order.
///
/// Membership is unordered; screen order is derived on demand with
/// [`PositionSet::sorted`] because it depends on the live metrics.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PositionSet {
    positions: SmallVec<[Position; 8]>,
}

impl PositionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `position` unless an equal one is already present.
    ///
    /// Custom fractions are stored normalized, so `Custom(NaN)` and
    /// `Custom(0.0)` are the same member.
    pub fn insert(&mut self, position: Position) -> bool {
        let position = position.normalized();
        if self.contains(position) {
            return false;
        }
        self.positions.push(position);
        true
    }

    pub fn with(mut self, position: Position) -> Self {
        self.insert(position);
        self
    }

    pub fn contains(&self, position: Position) -> bool {
        self.positions.contains(&position.normalized())
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Position> + '_ {
        self.positions.iter().copied()
    }

    /// Members ordered by offset, most open first. Equal offsets keep insertion order.
    pub fn sorted(&self, metrics: &ScreenMetrics) -> Vec<Position> {
        let mut sorted: Vec<Position> = self.positions.to_vec();
        sorted.sort_by(|a, b| a.cmp_offset(b, metrics));
        sorted
    }

    /// The most open member, or [`Position::Top`] for an empty set.
    pub fn highest(&self, metrics: &ScreenMetrics) -> Position {
        self.sorted(metrics)
            .first()
            .copied()
            .unwrap_or(Position::Top)
    }

    /// The least open *visible* member, or [`Position::Bottom`] for an empty set.
    ///
    /// `Hidden` is skipped whenever anything else is available so that drags
    /// settle on the last visible resting place rather than dismissing.
    pub fn lowest(&self, metrics: &ScreenMetrics) -> Position {
        let sorted = self.sorted(metrics);
        sorted
            .iter()
            .rev()
            .find(|position| !position.is_hidden())
            .or_else(|| sorted.last())
            .copied()
            .unwrap_or(Position::Bottom)
    }

    /// True when there is nothing to drag between.
    ///
    /// `Hidden` does not count as a distinct resting state here.
    pub fn is_single_position(&self) -> bool {
        let limit = if self.contains(Position::Hidden) { 2 } else { 1 };
        self.len() <= limit
    }
}

impl FromIterator<Position> for PositionSet {
    fn from_iter<I: IntoIterator<Item = Position>>(iter: I) -> Self {
        let mut set = PositionSet::new();
        for position in iter {
            set.insert(position);
        }
        set
    }
}

impl<const N: usize> From<[Position; N]> for PositionSet {
    fn from(positions: [Position; N]) -> Self {
        positions.into_iter().collect()
    }
}

/// Named configurations of snap points.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum PositionPreset {
    /// Bottom, middle and top.
    #[default]
    Standard,
    /// Hidden, bottom, middle and top.
    Dismissable,
    /// Bottom and fill.
    Fill,
    /// Bottom and top.
    Simple,
    /// Bottom and middle.
    Low,
    /// Nine evenly spaced fractions plus bottom, top and fill.
    All,
    /// Caller-supplied set, used verbatim.
    Custom(PositionSet),
}

impl PositionPreset {
    /// Builds the concrete set.
    ///
    /// `dismissable` adds `Hidden` to the `Fill`, `Simple`, `Low` and `All`
    /// presets; `Standard` and `Dismissable` already fix their membership and
    /// `Custom` is never altered.
    pub fn resolve(&self, dismissable: bool) -> PositionSet {
        let hidden = dismissable.then_some(Position::Hidden);
        match self {
            PositionPreset::Standard => {
                PositionSet::from([Position::Bottom, Position::Middle, Position::Top])
            }
            PositionPreset::Dismissable => PositionSet::from([
                Position::Hidden,
                Position::Bottom,
                Position::Middle,
                Position::Top,
            ]),
            PositionPreset::Fill => hidden
                .into_iter()
                .chain([Position::Bottom, Position::Fill])
                .collect(),
            PositionPreset::Simple => hidden
                .into_iter()
                .chain([Position::Bottom, Position::Top])
                .collect(),
            PositionPreset::Low => hidden
                .into_iter()
                .chain([Position::Bottom, Position::Middle])
                .collect(),
            PositionPreset::All => (1..=9)
                .map(|step| Position::Custom(step as f32 / 10.0))
                .chain([Position::Bottom, Position::Top, Position::Fill])
                .chain(hidden)
                .collect(),
            PositionPreset::Custom(set) => set.clone(),
        }
    }
}

impl From<PositionSet> for PositionPreset {
    fn from(set: PositionSet) -> Self {
        PositionPreset::Custom(set)
    }
}

#[cfg(test)]
#[path = "tests/position_set_tests.rs"]
mod tests;
