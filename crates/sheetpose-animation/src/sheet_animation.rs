use crate::animation::{AnimationSpec, AnimationType, Easing, SpringSpec};

/// Transition used when the sheet moves to a newly committed position.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum SheetAnimation {
    /// Critically damped spring.
    #[default]
    Standard,
    /// Short ease-out tween for snappy UIs.
    Quick,
    /// Under-damped spring that overshoots slightly.
    Bounce,
    /// Plain ease-in-out tween.
    Simple,
    Custom(AnimationType),
}

impl SheetAnimation {
    pub fn animation_type(&self) -> AnimationType {
        match self {
            SheetAnimation::Standard => AnimationType::Spring(SpringSpec {
                damping_ratio: 1.0,
                stiffness: 300.0,
                velocity_threshold: 0.05,
                position_threshold: 0.01,
            }),
            SheetAnimation::Quick => {
                AnimationType::Tween(AnimationSpec::tween(180, Easing::EaseOut))
            }
            SheetAnimation::Bounce => AnimationType::Spring(SpringSpec {
                damping_ratio: 0.6,
                stiffness: 300.0,
                velocity_threshold: 0.05,
                position_threshold: 0.01,
            }),
            SheetAnimation::Simple => {
                AnimationType::Tween(AnimationSpec::tween(300, Easing::EaseInOut))
            }
            SheetAnimation::Custom(animation) => *animation,
        }
    }
}

impl From<AnimationType> for SheetAnimation {
    fn from(animation: AnimationType) -> Self {
        SheetAnimation::Custom(animation)
    }
}
