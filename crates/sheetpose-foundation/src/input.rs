//! Input events the sheet consumes from the host's gesture recognizers.

use crate::fling::FlingProjection;

/// Vertical drag reported by the host; translations are cumulative from the
/// start of the gesture, positive downwards.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragGesture {
    Changed {
        translation: f32,
    },
    Ended {
        translation: f32,
        /// Where the pointer would come to rest if it kept its release velocity.
        predicted_end_translation: f32,
    },
    Cancelled,
}

impl DragGesture {
    pub fn changed(translation: f32) -> Self {
        DragGesture::Changed { translation }
    }

    pub fn ended(translation: f32, predicted_end_translation: f32) -> Self {
        DragGesture::Ended {
            translation,
            predicted_end_translation,
        }
    }

    /// Release for hosts that report a velocity (px/s) instead of a prediction.
    pub fn ended_with_velocity(
        translation: f32,
        velocity: f32,
        projection: &FlingProjection,
    ) -> Self {
        Self::ended(
            translation,
            projection.predicted_end_translation(translation, velocity),
        )
    }
}

/// Which part of the sheet received a tap.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TapTarget {
    /// The dimmed background behind the panel.
    Scrim,
    Panel,
    Handle,
}
