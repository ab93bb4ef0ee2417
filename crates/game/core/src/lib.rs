//! Deterministic simulation core for a two-combatant 2D fighting game.
//!
//! `fight-core` owns the rules: clocks, collision geometry, frame-driven
//! animation, motion-input recognition, the actor state machine and the
//! round/set orchestrator. It renders nothing and reads no devices; callers
//! feed one normalized [`InputSet`] per side into [`Battlefield::tick`] and
//! read back a [`RenderSnapshot`].
//!
//! Character data lives in [`CharacterSpec`] tables, shared between actors via
//! `Arc`. With the `serde` feature those tables can be loaded from RON/TOML
//! and the whole match state can be fingerprinted with
//! [`Battlefield::state_digest`].
pub mod actor;
pub mod animation;
pub mod battlefield;
pub mod character;
pub mod clock;
pub mod config;
#[cfg(feature = "serde")]
pub mod digest;
pub mod error;
pub mod geometry;
pub mod input;
pub mod motion;
pub mod player;
pub mod presets;
pub mod side;
pub mod snapshot;

pub use actor::{ActionKind, Actor, ActorState, MoveId, Projectile, ProjectileSpec, StateId};
pub use animation::{
    Animation, AnimationError, AnimationSpec, Frame, ProjectileSpawn, StopPolicy, VisualRef,
};
pub use battlefield::{Battlefield, Camera, MatchPhase, RoundOutcome, SetupError};
pub use character::{AnimationKey, AttackBinding, CharacterError, CharacterSpec};
pub use clock::Clock;
pub use config::{ConfigError, FightConfig};
#[cfg(feature = "serde")]
pub use digest::snapshot_digest;
pub use error::{ErrorSeverity, GameError};
pub use geometry::{AttackBox, DefenseBox, Edges, Rect, Vec2, overlaps};
pub use input::{InputHistory, InputSet, InputToken, RawInput, RelativeSet, RelativeToken};
pub use motion::{MotionSpec, MoveRecognizer};
pub use player::{Player, PlayerStats};
pub use side::Side;
pub use snapshot::{ActorSnapshot, PlayerSnapshot, ProjectileSnapshot, RenderSnapshot};
