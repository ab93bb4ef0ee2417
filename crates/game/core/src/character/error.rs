use super::AnimationKey;
use crate::animation::AnimationError;
use crate::error::{ErrorSeverity, GameError};
use crate::input::InputToken;

/// A character table that cannot drive an actor.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum CharacterError {
    #[error("required animation {0:?} is missing")]
    MissingAnimation(AnimationKey),

    #[error("animation {key:?} is invalid: {source}")]
    InvalidAnimation {
        key: AnimationKey,
        #[source]
        source: AnimationError,
    },

    #[error("grounded and airborne body boxes must have an area")]
    MissingBody,

    #[error("attack binding uses direction token {0}")]
    NonButtonBinding(InputToken),

    #[error("motion #{index} has no tokens")]
    EmptyMotion { index: usize },

    #[error("motion #{index} has {len} tokens")]
    MotionTooLong { index: usize, len: usize },

    #[error("{0} must be positive")]
    NonPositive(&'static str),

    #[error("animation could not be built: {0}")]
    Animation(#[from] AnimationError),
}

impl GameError for CharacterError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingAnimation(_) => "CHARACTER_MISSING_ANIMATION",
            Self::InvalidAnimation { .. } => "CHARACTER_INVALID_ANIMATION",
            Self::MissingBody => "CHARACTER_MISSING_BODY",
            Self::NonButtonBinding(_) => "CHARACTER_NON_BUTTON_BINDING",
            Self::EmptyMotion { .. } => "CHARACTER_EMPTY_MOTION",
            Self::MotionTooLong { .. } => "CHARACTER_MOTION_TOO_LONG",
            Self::NonPositive(_) => "CHARACTER_NON_POSITIVE",
            Self::Animation(_) => "CHARACTER_ANIMATION",
        }
    }
}
