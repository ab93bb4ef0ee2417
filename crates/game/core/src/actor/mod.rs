//! Combatant: state machine, physics integrator and projectile list.
//!
//! An actor never holds its opponent. Every operation that needs the other
//! combatant takes it as `&mut Actor` from the two-slot registry owned by the
//! [`Battlefield`](crate::Battlefield).

mod dispatch;
mod physics;
mod projectile;
mod state;

use std::sync::Arc;

use arrayvec::ArrayVec;

pub use physics::{Step, Wall};
pub use projectile::{Projectile, ProjectileSpec};
pub use state::{ActionKind, ActionState, ActorState, MoveId, StateId};

use crate::animation::{Animation, AnimationSpec};
use crate::character::{CharacterError, CharacterSpec, CoreAnimations};
use crate::config::FightConfig;
use crate::geometry::{AttackBox, DefenseBox, Rect, Vec2};
use crate::input::{InputHistory, InputSet};
use crate::motion::MoveRecognizer;
use crate::side::Side;

/// Health and dizzy limits copied from the match configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Meters {
    max_health: i32,
    dizzy_max: f32,
    dizzy_per_damage: f32,
}

/// One combatant.
#[derive(Clone, Debug)]
pub struct Actor {
    side: Side,
    character: Arc<CharacterSpec>,
    core: CoreAnimations,
    meters: Meters,

    start: Vec2,
    start_facing_right: bool,
    position: Vec2,
    velocity: Vec2,
    facing_right: bool,
    airborne: bool,

    health: i32,
    dizzy: f32,
    hitstun: u32,

    state: ActorState,
    animation: Animation,
    /// Set when an animation is (re)entered during this update. Frame 0 was
    /// already entered, so the update skips its advance.
    animation_entered: bool,
    draw_offset: Vec2,
    attack: AttackBox,
    defense: DefenseBox,

    history: InputHistory,
    recognizers: Vec<MoveRecognizer>,
    projectiles: ArrayVec<Projectile, { FightConfig::MAX_PROJECTILES }>,
    last_step: Step,
}

impl Actor {
    /// Creates an idle actor at its configured start position, facing the
    /// other start position.
    pub fn new(
        side: Side,
        character: Arc<CharacterSpec>,
        config: &FightConfig,
    ) -> Result<Self, CharacterError> {
        character.validate()?;
        let core = character.core_animations()?;
        let start = config.start_positions[side.index()];
        let other = config.start_positions[side.opponent().index()];
        let start_facing_right = match side {
            Side::One => start.x <= other.x,
            Side::Two => start.x < other.x,
        };
        let recognizers = character
            .motions
            .iter()
            .map(|motion| MoveRecognizer::new(motion, config.motion_buffer_ticks))
            .collect();
        let mut actor = Self {
            side,
            animation: Animation::new(core.idle.clone()),
            animation_entered: false,
            character,
            core,
            meters: Meters {
                max_health: config.max_health,
                dizzy_max: config.dizzy_max,
                dizzy_per_damage: config.dizzy_per_damage,
            },
            start,
            start_facing_right,
            position: start,
            velocity: Vec2::ZERO,
            facing_right: start_facing_right,
            airborne: false,
            health: config.max_health,
            dizzy: 0.0,
            hitstun: 0,
            state: ActorState::Idle,
            draw_offset: Vec2::ZERO,
            attack: AttackBox::NONE,
            defense: DefenseBox::NONE,
            history: InputHistory::new(),
            recognizers,
            projectiles: ArrayVec::new(),
            last_step: Step::default(),
        };
        actor.enter_frame();
        Ok(actor)
    }

    /// Advances one tick: input bookkeeping, state machine, animation,
    /// physics and projectiles, in that order.
    pub fn update(
        &mut self,
        opponent: &mut Actor,
        inputs: InputSet,
        dt_ms: f32,
        config: &FightConfig,
    ) {
        self.history.push(inputs);
        let completed = self.feed_recognizers(inputs);
        self.hitstun = self.hitstun.saturating_sub(1);

        self.animation_entered = false;
        self.update_state(opponent, inputs, completed);
        if !self.animation_entered && self.animation.advance() {
            self.enter_frame();
        }

        self.apply_velocity_override();
        self.integrate(dt_ms, config);
        self.separate_from(opponent, config);
        self.decay_dizzy(dt_ms, config);
        self.update_projectiles(dt_ms, config);
    }

    /// Feeds every recognizer and returns the first completed action.
    fn feed_recognizers(&mut self, inputs: InputSet) -> Option<ActionKind> {
        let facing_right = self.facing_right;
        self.recognizers
            .iter_mut()
            .fold(None, |completed, recognizer| {
                let done = recognizer.feed(inputs, facing_right);
                completed.or(done.then(|| recognizer.action()))
            })
    }

    // ========================================================================
    // State transitions
    // ========================================================================

    /// Exits the current state and enters `id`. Action kinds the character
    /// has no animation for fall back to `Idle`. Returns the state entered.
    pub fn change_state(&mut self, id: StateId, opponent: &mut Actor) -> StateId {
        let target = match id {
            StateId::Action(kind) if self.character.action_animation(kind).is_none() => {
                tracing::debug!(side = %self.side, requested = %id, "no animation registered, falling back to idle");
                StateId::Idle
            }
            other => other,
        };
        self.exit_state();
        match target {
            StateId::Action(kind) => {
                if let Some(animation) = self.character.action_animation(kind).cloned() {
                    self.enter_action(kind, &animation, Some(opponent));
                }
            }
            neutral => self.enter_neutral(neutral),
        }
        tracing::debug!(side = %self.side, state = %target, "state change");
        target
    }

    /// Enters `kind` running an explicit animation instead of the table entry.
    pub fn play_action(
        &mut self,
        kind: ActionKind,
        animation: &Arc<AnimationSpec>,
        opponent: Option<&mut Actor>,
    ) {
        self.exit_state();
        self.enter_action(kind, animation, opponent);
        tracing::debug!(side = %self.side, action = %kind, "explicit action");
    }

    fn exit_state(&mut self) {
        if self.state == ActorState::TurningAround {
            let idle = self.core.idle.clone();
            self.change_animation(&idle, false);
        }
    }

    fn enter_neutral(&mut self, id: StateId) {
        match id {
            StateId::Idle => {
                self.state = ActorState::Idle;
                let idle = self.core.idle.clone();
                self.change_animation(&idle, false);
            }
            StateId::Walking => self.state = ActorState::Walking,
            StateId::TurningAround => {
                self.facing_right = !self.facing_right;
                self.state = ActorState::TurningAround;
                let turn = self.core.turn_around.clone();
                self.change_animation(&turn, true);
            }
            StateId::Action(_) => {}
        }
    }

    fn enter_action(
        &mut self,
        kind: ActionKind,
        animation: &Arc<AnimationSpec>,
        opponent: Option<&mut Actor>,
    ) {
        self.state = ActorState::Action(ActionState::new(kind));
        self.change_animation(animation, true);
        if let (Some(forced), Some(opponent)) = (animation.opponent(), opponent) {
            opponent.play_action(ActionKind::Grabbed, forced, None);
        }
    }

    /// Switches animation. The same animation only restarts when `reset`.
    fn change_animation(&mut self, spec: &Arc<AnimationSpec>, reset: bool) {
        if !self.animation.plays(spec) {
            self.animation = Animation::new(spec.clone());
        } else if reset {
            self.animation.reset();
        } else {
            return;
        }
        self.animation_entered = true;
        self.enter_frame();
    }

    /// Loads the current frame's mirrored geometry and one-shot effects.
    fn enter_frame(&mut self) {
        let frame = *self.animation.frame();
        let (width, scale) = (self.character.reference_width, self.character.scale);
        self.draw_offset = frame.draw_offset_facing(self.facing_right, width, scale);
        self.attack = frame.attack.facing(self.facing_right, width, scale);
        self.defense = frame.defense.facing(self.facing_right, width, scale);
        self.position += frame.position_delta.facing(self.facing_right);
        if frame.damage_taken != 0 {
            self.apply_damage(frame.damage_taken);
        }
    }

    // ========================================================================
    // Meters
    // ========================================================================

    /// Subtracts `damage` from health (floored at 0) and adds the scaled
    /// amount to dizzy (capped at the maximum).
    pub fn apply_damage(&mut self, damage: i32) {
        self.health = self.health.saturating_sub(damage).max(0);
        self.dizzy =
            (self.dizzy + damage as f32 * self.meters.dizzy_per_damage).min(self.meters.dizzy_max);
    }

    /// Overrides current health, clamped to `0..=max_health`.
    pub fn set_health(&mut self, health: i32) {
        self.health = health.clamp(0, self.meters.max_health);
    }

    pub(crate) fn set_hitstun(&mut self, ticks: u32) {
        self.hitstun = ticks;
    }

    pub(crate) fn set_velocity_x(&mut self, vx: f32) {
        self.velocity.x = vx;
    }

    pub(crate) fn shift_x(&mut self, dx: f32) {
        self.position.x += dx;
    }

    pub(crate) fn projectiles_mut(&mut self) -> &mut ArrayVec<Projectile, { FightConfig::MAX_PROJECTILES }> {
        &mut self.projectiles
    }

    /// Puts the actor back at its start for a new round with `health`.
    pub fn reset_for_round(&mut self, health: i32) {
        self.position = self.start;
        self.velocity = Vec2::ZERO;
        self.facing_right = self.start_facing_right;
        self.airborne = false;
        self.health = health.clamp(1, self.meters.max_health);
        self.dizzy = 0.0;
        self.hitstun = 0;
        self.state = ActorState::Idle;
        self.animation = Animation::new(self.core.idle.clone());
        self.animation_entered = false;
        self.history.clear();
        self.recognizers.iter_mut().for_each(MoveRecognizer::reset);
        self.projectiles.clear();
        self.last_step = Step::default();
        self.enter_frame();
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn side(&self) -> Side {
        self.side
    }

    /// Registry slot of the opposing actor.
    pub fn opponent(&self) -> Side {
        self.side.opponent()
    }

    pub fn character(&self) -> &Arc<CharacterSpec> {
        &self.character
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn facing_right(&self) -> bool {
        self.facing_right
    }

    pub fn is_airborne(&self) -> bool {
        self.airborne
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    pub fn max_health(&self) -> i32 {
        self.meters.max_health
    }

    pub fn dizzy(&self) -> f32 {
        self.dizzy
    }

    pub fn hitstun(&self) -> u32 {
        self.hitstun
    }

    pub fn state(&self) -> &ActorState {
        &self.state
    }

    pub fn state_id(&self) -> StateId {
        self.state.id()
    }

    pub fn animation(&self) -> &Animation {
        &self.animation
    }

    pub fn scale(&self) -> f32 {
        self.character.scale
    }

    /// Top-left of the visual: feet position minus half the scaled width and
    /// the full scaled height.
    pub fn draw_anchor(&self) -> Vec2 {
        let scale = self.character.scale;
        Vec2::new(
            self.position.x - self.character.reference_width * scale / 2.0,
            self.position.y - self.character.reference_height * scale,
        )
    }

    pub fn draw_offset(&self) -> Vec2 {
        self.draw_offset
    }

    /// Current attack box, already mirrored for facing.
    pub fn attack_box(&self) -> &AttackBox {
        &self.attack
    }

    /// Current defense box, already mirrored for facing.
    pub fn defense_box(&self) -> &DefenseBox {
        &self.defense
    }

    /// Body box for the current grounded/airborne stance, mirrored for facing.
    pub fn body_box(&self) -> Rect {
        let body = if self.airborne {
            self.character.body_airborne
        } else {
            self.character.body_grounded
        };
        body.facing(self.facing_right, self.character.reference_width, self.character.scale)
    }

    pub fn projectiles(&self) -> &[Projectile] {
        &self.projectiles
    }

    pub fn history(&self) -> &InputHistory {
        &self.history
    }

    /// Displacement and wall contact from the last physics step.
    pub fn last_step(&self) -> Step {
        self.last_step
    }
}
