//! Shared tuning constants for sheet geometry and gesture handling.
//!
//! All values are in logical pixels unless noted otherwise.

/// Gap between the top safe-area inset and the sheet in the `Top` position.
pub const TOP_MARGIN: f32 = 16.0;

/// Visible height reserved above the bottom safe-area inset in the `Bottom`
/// position: enough for the handle and a peek of the content.
pub const BOTTOM_HANDLE_MARGIN: f32 = 128.0;

/// Divisor applied to drag increments that pull the sheet past its highest
/// or lowest visible position (rubber-banding).
pub const EDGE_DAMPING_DIVISOR: f32 = 5.0;

/// Snap-point count that corresponds to a throw sensitivity of 1.0.
///
/// Sets larger than this scale the throw up so that a fast flick can skip
/// several adjacent points.
pub const SENSITIVITY_POSITION_SCALE: f32 = 6.0;

/// Maximum fling velocity in logical pixels per second.
///
/// Matches Android's default maximum fling velocity (ViewConfiguration) on a
/// baseline density.
pub const MAX_FLING_VELOCITY: f32 = 8_000.0;
