//! Per-tick state machine update.

use super::{ActionKind, Actor, ActorState, Projectile, StateId};
use crate::animation::StopPolicy;
use crate::character::AttackBinding;
use crate::input::InputSet;

impl Actor {
    pub(super) fn update_state(
        &mut self,
        opponent: &mut Actor,
        inputs: InputSet,
        completed: Option<ActionKind>,
    ) {
        match self.state {
            ActorState::Idle | ActorState::Walking => self.neutral(opponent, inputs, completed),
            ActorState::TurningAround => {
                self.velocity.x = 0.0;
                if self.animation.is_finished() || !inputs.is_empty() {
                    self.change_state(StateId::Idle, opponent);
                }
            }
            ActorState::Action(action) => self.update_action(action.kind, opponent, inputs),
        }
    }

    /// Idle/Walking dispatch. First match wins.
    fn neutral(&mut self, opponent: &mut Actor, inputs: InputSet, completed: Option<ActionKind>) {
        if self.airborne {
            self.airborne_dispatch(opponent, inputs);
            return;
        }
        if let Some(kind) = completed {
            self.change_state(StateId::Action(kind), opponent);
            return;
        }
        if self.crossed_over(opponent) {
            self.change_state(StateId::TurningAround, opponent);
            return;
        }
        if inputs.has_upward() {
            let lean = f32::from(inputs.horizontal());
            self.velocity.x = lean * self.character.diagonal_jump_speed;
            self.velocity.y = -self.character.jump_height;
            self.change_state(StateId::Action(ActionKind::Jump), opponent);
            return;
        }
        if let Some(kind) = self.bound_attack(&self.character.attacks, inputs, opponent) {
            self.velocity.x = 0.0;
            self.change_state(StateId::Action(kind), opponent);
            return;
        }
        if inputs.has_downward() {
            self.velocity.x = 0.0;
            self.change_state(StateId::Action(ActionKind::Crouch), opponent);
            return;
        }
        match inputs.horizontal() {
            0 => {
                self.velocity.x = 0.0;
                let idle = self.core.idle.clone();
                self.change_animation(&idle, false);
                if self.state != ActorState::Idle {
                    self.change_state(StateId::Idle, opponent);
                }
            }
            direction => self.walk(direction, opponent),
        }
    }

    fn walk(&mut self, direction: i8, opponent: &mut Actor) {
        let forward = (direction > 0) == self.facing_right;
        let (speed, animation) = if forward {
            (self.character.walk_forward_speed, self.core.walk_forward.clone())
        } else {
            (self.character.walk_backward_speed, self.core.walk_backward.clone())
        };
        self.velocity.x = f32::from(direction) * speed;
        self.change_animation(&animation, false);
        if self.state != ActorState::Walking {
            self.change_state(StateId::Walking, opponent);
        }
    }

    /// Air attacks, else horizontal drift. Returns true on a transition.
    fn airborne_dispatch(&mut self, opponent: &mut Actor, inputs: InputSet) -> bool {
        if let Some(kind) = self.bound_attack(&self.character.air_attacks, inputs, opponent) {
            self.change_state(StateId::Action(kind), opponent);
            return true;
        }
        self.velocity.x += f32::from(inputs.horizontal()) * self.character.air_drift;
        false
    }

    fn bound_attack(
        &self,
        bindings: &[AttackBinding],
        inputs: InputSet,
        opponent: &Actor,
    ) -> Option<ActionKind> {
        bindings
            .iter()
            .find(|binding| {
                inputs.has(binding.button)
                    && binding.range.is_none_or(|range| {
                        !opponent.airborne
                            && (opponent.position.x - self.position.x).abs() <= range
                    })
            })
            .map(|binding| binding.action)
    }

    /// True once the opponent is behind the direction this actor faces.
    pub fn crossed_over(&self, opponent: &Actor) -> bool {
        if self.facing_right {
            self.position.x > opponent.position.x
        } else {
            self.position.x < opponent.position.x
        }
    }

    fn update_action(&mut self, kind: ActionKind, opponent: &mut Actor, inputs: InputSet) {
        match kind {
            ActionKind::Jump if self.airborne => {
                if self.airborne_dispatch(opponent, inputs) {
                    return;
                }
            }
            ActionKind::Crouch => {
                self.velocity.x = 0.0;
                if !inputs.has_downward() {
                    self.change_state(StateId::Idle, opponent);
                }
                return;
            }
            _ => {}
        }
        self.spawn_projectile();
        if self.action_complete() {
            self.change_state(StateId::Idle, opponent);
        }
    }

    /// Launches the animation's projectile once its frame is reached.
    fn spawn_projectile(&mut self) {
        let ActorState::Action(action) = self.state else {
            return;
        };
        let Some(spawn) = self.animation.spec().projectile().copied() else {
            return;
        };
        if action.projectile_spawned || self.animation.index() != spawn.frame {
            return;
        }
        if let ActorState::Action(action) = &mut self.state {
            action.projectile_spawned = true;
        }
        let projectile = Projectile::launch(
            self.side,
            self.draw_anchor(),
            self.facing_right,
            self.character.reference_width * self.scale(),
            &spawn.projectile,
        );
        if self.projectiles.try_push(projectile).is_err() {
            tracing::warn!(side = %self.side, "projectile limit reached, launch dropped");
        } else {
            tracing::debug!(side = %self.side, x = projectile.position().x, "projectile launched");
        }
    }

    /// Exit conditions of the running animation, in priority order.
    fn action_complete(&self) -> bool {
        let stop = self.animation.spec().stop();
        if stop.contains(StopPolicy::ON_HITSTUN) {
            return self.hitstun == 0;
        }
        let finished = self.animation.is_finished();
        let grounded = !self.airborne;
        (finished && stop.contains(StopPolicy::ON_FINISH))
            || (finished && stop.contains(StopPolicy::ON_LANDING) && grounded)
            || (stop.contains(StopPolicy::LANDING_BEFORE_FINISH) && grounded)
    }
}
