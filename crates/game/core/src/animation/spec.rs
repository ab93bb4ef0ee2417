use std::sync::Arc;

use bitflags::bitflags;

use super::Frame;
use crate::actor::ProjectileSpec;
use crate::error::{ErrorSeverity, GameError};

bitflags! {
    /// When an action playing this animation hands control back to Idle.
    ///
    /// Checked in declaration order; the first satisfied flag wins.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct StopPolicy: u8 {
        /// Exit once the hitstun counter reaches zero.
        const ON_HITSTUN = 1 << 0;
        /// Exit once a non-looping animation finishes.
        const ON_FINISH = 1 << 1;
        /// Exit once finished and grounded.
        const ON_LANDING = 1 << 2;
        /// Exit as soon as the actor is grounded, finished or not.
        const LANDING_BEFORE_FINISH = 1 << 3;
    }
}

/// A projectile launched when the owning animation reaches `frame`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProjectileSpawn {
    pub frame: usize,
    pub projectile: ProjectileSpec,
}

/// Immutable animation definition.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnimationSpec {
    frames: Vec<Frame>,
    #[cfg_attr(feature = "serde", serde(default = "default_ticks_per_frame"))]
    ticks_per_frame: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    looping: bool,
    #[cfg_attr(feature = "serde", serde(default = "default_stop"))]
    stop: StopPolicy,
    /// Played on the same actor when this animation's attack connects.
    #[cfg_attr(feature = "serde", serde(default))]
    secondary: Option<Arc<AnimationSpec>>,
    /// Forced onto the opponent when an action enters this animation.
    #[cfg_attr(feature = "serde", serde(default))]
    opponent: Option<Arc<AnimationSpec>>,
    #[cfg_attr(feature = "serde", serde(default))]
    projectile: Option<ProjectileSpawn>,
}

#[cfg(feature = "serde")]
fn default_ticks_per_frame() -> u32 {
    1
}

#[cfg(feature = "serde")]
fn default_stop() -> StopPolicy {
    StopPolicy::ON_FINISH
}

impl AnimationSpec {
    /// Builds a non-looping animation that stops when finished.
    pub fn new(frames: Vec<Frame>, ticks_per_frame: u32) -> Result<Self, AnimationError> {
        let spec = Self {
            frames,
            ticks_per_frame,
            looping: false,
            stop: StopPolicy::ON_FINISH,
            secondary: None,
            opponent: None,
            projectile: None,
        };
        spec.validate()?;
        Ok(spec)
    }

    /// Builds without validation, for exercising the validators.
    #[cfg(test)]
    pub(crate) fn unchecked(frames: Vec<Frame>, ticks_per_frame: u32) -> Self {
        Self {
            frames,
            ticks_per_frame,
            looping: false,
            stop: StopPolicy::ON_FINISH,
            secondary: None,
            opponent: None,
            projectile: None,
        }
    }

    #[must_use]
    pub fn looping(mut self) -> Self {
        self.looping = true;
        self
    }

    #[must_use]
    pub fn with_stop(mut self, stop: StopPolicy) -> Self {
        self.stop = stop;
        self
    }

    #[must_use]
    pub fn with_secondary(mut self, secondary: Arc<AnimationSpec>) -> Self {
        self.secondary = Some(secondary);
        self
    }

    #[must_use]
    pub fn with_opponent(mut self, opponent: Arc<AnimationSpec>) -> Self {
        self.opponent = Some(opponent);
        self
    }

    /// Attaches a projectile launch; fails if `spawn.frame` is out of range.
    pub fn with_projectile(mut self, spawn: ProjectileSpawn) -> Result<Self, AnimationError> {
        self.projectile = Some(spawn);
        self.validate()?;
        Ok(self)
    }

    /// Checks this animation and every nested one.
    pub fn validate(&self) -> Result<(), AnimationError> {
        if self.frames.is_empty() {
            return Err(AnimationError::Empty);
        }
        if self.ticks_per_frame == 0 {
            return Err(AnimationError::ZeroFrameRate);
        }
        if let Some(index) = self
            .frames
            .iter()
            .position(|frame| !frame.attack.is_none() && frame.attack.group_id == 0)
        {
            return Err(AnimationError::UngroupedAttack { frame: index });
        }
        if let Some(spawn) = &self.projectile {
            if spawn.frame >= self.frames.len() {
                return Err(AnimationError::ProjectileFrameOutOfRange {
                    frame: spawn.frame,
                    frames: self.frames.len(),
                });
            }
        }
        for nested in self.secondary.iter().chain(self.opponent.iter()) {
            nested.validate()?;
        }
        Ok(())
    }

    /// Returns the frame at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    pub fn frame(&self, index: usize) -> &Frame {
        &self.frames[index]
    }

    pub fn try_frame(&self, index: usize) -> Option<&Frame> {
        self.frames.get(index)
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn ticks_per_frame(&self) -> u32 {
        self.ticks_per_frame
    }

    pub fn is_looping(&self) -> bool {
        self.looping
    }

    pub fn stop(&self) -> StopPolicy {
        self.stop
    }

    pub fn secondary(&self) -> Option<&Arc<AnimationSpec>> {
        self.secondary.as_ref()
    }

    pub fn opponent(&self) -> Option<&Arc<AnimationSpec>> {
        self.opponent.as_ref()
    }

    pub fn projectile(&self) -> Option<&ProjectileSpawn> {
        self.projectile.as_ref()
    }
}

/// Animation data that cannot be played.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AnimationError {
    #[error("animation has no frames")]
    Empty,

    #[error("animation advances zero ticks per frame")]
    ZeroFrameRate,

    #[error("frame {frame} has an attack box without a group id")]
    UngroupedAttack { frame: usize },

    #[error("projectile spawns on frame {frame} but the animation has {frames} frames")]
    ProjectileFrameOutOfRange { frame: usize, frames: usize },
}

impl GameError for AnimationError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Empty => "ANIMATION_EMPTY",
            Self::ZeroFrameRate => "ANIMATION_ZERO_FRAME_RATE",
            Self::UngroupedAttack { .. } => "ANIMATION_UNGROUPED_ATTACK",
            Self::ProjectileFrameOutOfRange { .. } => "ANIMATION_PROJECTILE_FRAME",
        }
    }
}
