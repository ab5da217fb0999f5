/// Rejected sheet configuration or screen metrics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SheetConfigError {
    /// `background_shadow` must lie in `0.0..=1.0`.
    ShadowOutOfRange(f32),
    NegativeCornerRadius(f32),
    NegativeMinSize(f32),
    /// Edge damping divisors below 1.0 would amplify overscroll.
    InvalidDamping(f32),
    /// A fixed throw sensitivity must be finite and non-negative.
    InvalidSensitivity(f32),
    InvalidDismissFraction(f32),
    InvalidMetrics { width: f32, height: f32 },
}

impl std::fmt::Display for SheetConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SheetConfigError::ShadowOutOfRange(value) => {
                write!(f, "background shadow {value} outside 0.0..=1.0")
            }
            SheetConfigError::NegativeCornerRadius(value) => {
                write!(f, "corner radius {value} is negative")
            }
            SheetConfigError::NegativeMinSize(value) => {
                write!(f, "minimum size {value} is negative")
            }
            SheetConfigError::InvalidDamping(value) => {
                write!(f, "edge damping {value} must be a finite value >= 1.0")
            }
            SheetConfigError::InvalidSensitivity(value) => {
                write!(f, "fixed sensitivity {value} must be finite and non-negative")
            }
            SheetConfigError::InvalidDismissFraction(value) => {
                write!(f, "dismiss fraction {value} must be finite and non-negative")
            }
            SheetConfigError::InvalidMetrics { width, height } => {
                write!(f, "invalid screen metrics {width}x{height}")
            }
        }
    }
}

impl std::error::Error for SheetConfigError {}
