//! Appearance and behavior options for [`ModalSheet`](crate::ModalSheet).

use sheetpose_animation::SheetAnimation;
use sheetpose_foundation::{PositionPreset, PositionSet, ScreenMetrics, Sensitivity, SnapPolicy};
use sheetpose_ui_graphics::{Brush, Color, Material, Shadow, Size};

use crate::error::SheetConfigError;

pub const DEFAULT_CORNER_RADIUS: f32 = 38.0;
pub const DEFAULT_BACKGROUND_SHADOW: f32 = 0.3;
/// Height of the strip at the top of the panel reserved for the handle.
pub const HANDLE_AREA_HEIGHT: f32 = 24.0;

/// Grabber drawn at the top of the panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum HandleStyle {
    None,
    Small,
    #[default]
    Medium,
    Large,
}

impl HandleStyle {
    /// Pill size, or `None` when no handle is drawn.
    pub fn size(&self) -> Option<Size> {
        match self {
            HandleStyle::None => None,
            HandleStyle::Small => Some(Size::new(32.0, 4.0)),
            HandleStyle::Medium => Some(Size::new(40.0, 5.0)),
            HandleStyle::Large => Some(Size::new(56.0, 6.0)),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SheetBackground {
    Solid(Color),
    /// Blurred backdrop material.
    Material(Material),
}

impl SheetBackground {
    pub fn brush(&self) -> Brush {
        match *self {
            SheetBackground::Solid(color) => Brush::solid(color),
            SheetBackground::Material(material) => Brush::material(material),
        }
    }
}

impl Default for SheetBackground {
    fn default() -> Self {
        SheetBackground::Material(Material::Regular)
    }
}

/// What a tap on the dimmed background does.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ScrimTap {
    /// Collapse to `Bottom`, or `Middle` when there is no bottom position.
    #[default]
    Collapse,
    /// Dismiss when the sheet can be hidden, otherwise collapse.
    Dismiss,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SheetConfig {
    pub positions: PositionPreset,
    pub dismissable: bool,
    pub corner_radius: f32,
    pub handle_style: HandleStyle,
    /// Maximum scrim opacity, reached at the highest position.
    pub background_shadow: f32,
    pub background: SheetBackground,
    pub shadow: Shadow,
    pub animation: SheetAnimation,
    /// Shrink the panel with the offset instead of keeping the open height.
    pub resizable: bool,
    pub min_size: f32,
    pub scrim_tap: ScrimTap,
    pub snap_policy: SnapPolicy,
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            positions: PositionPreset::Standard,
            dismissable: false,
            corner_radius: DEFAULT_CORNER_RADIUS,
            handle_style: HandleStyle::Medium,
            background_shadow: DEFAULT_BACKGROUND_SHADOW,
            background: SheetBackground::default(),
            shadow: Shadow::default(),
            animation: SheetAnimation::Standard,
            resizable: false,
            min_size: 0.0,
            scrim_tap: ScrimTap::Collapse,
            snap_policy: SnapPolicy::default(),
        }
    }
}

impl SheetConfig {
    pub fn standard() -> Self {
        Self::default()
    }

    pub fn dismissable() -> Self {
        Self::default()
            .positions(PositionPreset::Dismissable)
            .with_dismissable(true)
    }

    pub fn fill() -> Self {
        Self::default().positions(PositionPreset::Fill)
    }

    pub fn simple() -> Self {
        Self::default().positions(PositionPreset::Simple)
    }

    pub fn low() -> Self {
        Self::default().positions(PositionPreset::Low)
    }

    pub fn all() -> Self {
        Self::default().positions(PositionPreset::All)
    }

    pub fn positions(mut self, positions: impl Into<PositionPreset>) -> Self {
        self.positions = positions.into();
        self
    }

    pub fn with_dismissable(mut self, dismissable: bool) -> Self {
        self.dismissable = dismissable;
        self
    }

    pub fn corner_radius(mut self, radius: f32) -> Self {
        self.corner_radius = radius;
        self
    }

    pub fn handle_style(mut self, style: HandleStyle) -> Self {
        self.handle_style = style;
        self
    }

    pub fn background_shadow(mut self, alpha: f32) -> Self {
        self.background_shadow = alpha;
        self
    }

    pub fn background(mut self, background: SheetBackground) -> Self {
        self.background = background;
        self
    }

    pub fn shadow(mut self, shadow: Shadow) -> Self {
        self.shadow = shadow;
        self
    }

    pub fn animation(mut self, animation: impl Into<SheetAnimation>) -> Self {
        self.animation = animation.into();
        self
    }

    pub fn resizable(mut self, resizable: bool) -> Self {
        self.resizable = resizable;
        self
    }

    pub fn min_size(mut self, min_size: f32) -> Self {
        self.min_size = min_size;
        self
    }

    pub fn scrim_tap(mut self, behavior: ScrimTap) -> Self {
        self.scrim_tap = behavior;
        self
    }

    pub fn snap_policy(mut self, policy: SnapPolicy) -> Self {
        self.snap_policy = policy;
        self
    }

    /// The concrete snap points this configuration allows.
    pub fn position_set(&self) -> PositionSet {
        self.positions.resolve(self.dismissable)
    }

    pub fn validate(&self) -> Result<(), SheetConfigError> {
        if !(0.0..=1.0).contains(&self.background_shadow) {
            return Err(SheetConfigError::ShadowOutOfRange(self.background_shadow));
        }
        if self.corner_radius.is_nan() || self.corner_radius < 0.0 {
            return Err(SheetConfigError::NegativeCornerRadius(self.corner_radius));
        }
        if self.min_size.is_nan() || self.min_size < 0.0 {
            return Err(SheetConfigError::NegativeMinSize(self.min_size));
        }
        let damping = self.snap_policy.edge_damping;
        if !damping.is_finite() || damping < 1.0 {
            return Err(SheetConfigError::InvalidDamping(damping));
        }
        if let Sensitivity::Fixed(factor) = self.snap_policy.sensitivity {
            if !factor.is_finite() || factor < 0.0 {
                return Err(SheetConfigError::InvalidSensitivity(factor));
            }
        }
        let dismiss = self.snap_policy.dismiss_fraction;
        if !dismiss.is_finite() || dismiss < 0.0 {
            return Err(SheetConfigError::InvalidDismissFraction(dismiss));
        }
        Ok(())
    }
}

pub(crate) fn validate_metrics(metrics: &ScreenMetrics) -> Result<(), SheetConfigError> {
    let valid = |value: f32| value.is_finite() && value > 0.0;
    if valid(metrics.width) && valid(metrics.height) {
        Ok(())
    } else {
        Err(SheetConfigError::InvalidMetrics {
            width: metrics.width,
            height: metrics.height,
        })
    }
}
