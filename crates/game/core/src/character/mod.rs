//! Per-character static data tables.
//!
//! A [`CharacterSpec`] is everything that distinguishes one fighter from
//! another: animations keyed by [`AnimationKey`], movement tuning, body boxes,
//! and the bindings from buttons and motions to actions. Specs are immutable
//! once validated and shared between matches through `Arc`.

mod error;

use std::collections::BTreeMap;
use std::sync::Arc;

pub use error::CharacterError;

use crate::actor::ActionKind;
use crate::animation::AnimationSpec;
use crate::config::FightConfig;
use crate::geometry::Rect;
use crate::input::InputToken;
use crate::motion::MotionSpec;

/// Lookup key into a character's animation table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AnimationKey {
    Idle,
    WalkForward,
    WalkBackward,
    TurnAround,
    Action(ActionKind),
}

impl AnimationKey {
    /// Keys every character must define.
    pub const REQUIRED: [AnimationKey; 4] = [
        AnimationKey::Idle,
        AnimationKey::WalkForward,
        AnimationKey::WalkBackward,
        AnimationKey::TurnAround,
    ];
}

/// Button → action binding. A `range` restricts the binding to a grounded
/// opponent whose horizontal distance is at most `range`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackBinding {
    pub button: InputToken,
    pub action: ActionKind,
    #[cfg_attr(feature = "serde", serde(default))]
    pub range: Option<f32>,
}

impl AttackBinding {
    pub const fn new(button: InputToken, action: ActionKind) -> Self {
        Self {
            button,
            action,
            range: None,
        }
    }

    #[must_use]
    pub const fn within(mut self, range: f32) -> Self {
        self.range = Some(range);
        self
    }
}

/// Static description of a fighter.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CharacterSpec {
    pub name: String,
    /// Width of the visual that animation data is authored against.
    pub reference_width: f32,
    pub reference_height: f32,
    pub scale: f32,
    /// World units per second travelled at unit velocity.
    pub move_speed: f32,
    pub jump_height: f32,
    /// Added to vertical velocity every airborne tick.
    pub gravity: f32,
    pub diagonal_jump_speed: f32,
    pub walk_forward_speed: f32,
    pub walk_backward_speed: f32,
    /// Horizontal velocity added per airborne tick while a direction is held.
    pub air_drift: f32,
    pub body_grounded: Rect,
    pub body_airborne: Rect,
    pub animations: BTreeMap<AnimationKey, Arc<AnimationSpec>>,
    pub attacks: Vec<AttackBinding>,
    pub air_attacks: Vec<AttackBinding>,
    pub motions: Vec<MotionSpec>,
}

impl CharacterSpec {
    pub const DEFAULT_REFERENCE_WIDTH: f32 = 70.0;
    pub const DEFAULT_REFERENCE_HEIGHT: f32 = 100.0;
    pub const DEFAULT_MOVE_SPEED: f32 = 240.0;
    pub const DEFAULT_JUMP_HEIGHT: f32 = 3.0;
    pub const DEFAULT_GRAVITY: f32 = 0.15;
    pub const DEFAULT_WALK_FORWARD_SPEED: f32 = 1.0;
    pub const DEFAULT_WALK_BACKWARD_SPEED: f32 = 0.8;
    pub const DEFAULT_AIR_DRIFT: f32 = 0.05;

    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            reference_width: Self::DEFAULT_REFERENCE_WIDTH,
            reference_height: Self::DEFAULT_REFERENCE_HEIGHT,
            scale: 1.0,
            move_speed: Self::DEFAULT_MOVE_SPEED,
            jump_height: Self::DEFAULT_JUMP_HEIGHT,
            gravity: Self::DEFAULT_GRAVITY,
            diagonal_jump_speed: Self::DEFAULT_WALK_FORWARD_SPEED,
            walk_forward_speed: Self::DEFAULT_WALK_FORWARD_SPEED,
            walk_backward_speed: Self::DEFAULT_WALK_BACKWARD_SPEED,
            air_drift: Self::DEFAULT_AIR_DRIFT,
            body_grounded: Rect::new(10.0, 0.0, 50, 100),
            body_airborne: Rect::new(10.0, 0.0, 50, 60),
            animations: BTreeMap::new(),
            attacks: Vec::new(),
            air_attacks: Vec::new(),
            motions: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_animation(mut self, key: AnimationKey, animation: AnimationSpec) -> Self {
        self.animations.insert(key, Arc::new(animation));
        self
    }

    #[must_use]
    pub fn with_attack(mut self, binding: AttackBinding) -> Self {
        self.attacks.push(binding);
        self
    }

    #[must_use]
    pub fn with_air_attack(mut self, binding: AttackBinding) -> Self {
        self.air_attacks.push(binding);
        self
    }

    #[must_use]
    pub fn with_motion(mut self, motion: MotionSpec) -> Self {
        self.motions.push(motion);
        self
    }

    pub fn animation(&self, key: AnimationKey) -> Option<&Arc<AnimationSpec>> {
        self.animations.get(&key)
    }

    /// Animation bound to an action, if the character has one.
    pub fn action_animation(&self, kind: ActionKind) -> Option<&Arc<AnimationSpec>> {
        self.animation(AnimationKey::Action(kind))
    }

    /// Resolves the animations every actor needs, failing if any is missing.
    pub fn core_animations(&self) -> Result<CoreAnimations, CharacterError> {
        let get = |key| {
            self.animation(key)
                .cloned()
                .ok_or(CharacterError::MissingAnimation(key))
        };
        Ok(CoreAnimations {
            idle: get(AnimationKey::Idle)?,
            walk_forward: get(AnimationKey::WalkForward)?,
            walk_backward: get(AnimationKey::WalkBackward)?,
            turn_around: get(AnimationKey::TurnAround)?,
        })
    }

    /// Checks the table is complete and playable.
    pub fn validate(&self) -> Result<(), CharacterError> {
        let tuning = [
            ("reference_width", self.reference_width),
            ("reference_height", self.reference_height),
            ("scale", self.scale),
            ("move_speed", self.move_speed),
        ];
        if let Some((name, _)) = tuning.iter().find(|(_, value)| !(*value > 0.0)) {
            return Err(CharacterError::NonPositive(*name));
        }
        if self.body_grounded.is_none() || self.body_airborne.is_none() {
            return Err(CharacterError::MissingBody);
        }
        self.core_animations()?;
        for (key, animation) in &self.animations {
            animation
                .validate()
                .map_err(|source| CharacterError::InvalidAnimation { key: *key, source })?;
        }
        if let Some(binding) = self
            .attacks
            .iter()
            .chain(&self.air_attacks)
            .find(|binding| !binding.button.is_button())
        {
            return Err(CharacterError::NonButtonBinding(binding.button));
        }
        for (index, motion) in self.motions.iter().enumerate() {
            if motion.tokens.is_empty() {
                return Err(CharacterError::EmptyMotion { index });
            }
            if motion.tokens.len() > FightConfig::MAX_MOTION_TOKENS {
                return Err(CharacterError::MotionTooLong {
                    index,
                    len: motion.tokens.len(),
                });
            }
        }
        Ok(())
    }
}

impl Default for CharacterSpec {
    fn default() -> Self {
        Self::new("unnamed")
    }
}

/// Animations resolved once per actor so neutral states never miss.
#[derive(Clone, Debug)]
pub struct CoreAnimations {
    pub idle: Arc<AnimationSpec>,
    pub walk_forward: Arc<AnimationSpec>,
    pub walk_backward: Arc<AnimationSpec>,
    pub turn_around: Arc<AnimationSpec>,
}
