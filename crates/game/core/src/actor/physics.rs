//! Per-tick physics: velocity override, integration, floor and wall clamps,
//! body separation, dizzy decay and projectile upkeep.

use super::Actor;
use crate::config::FightConfig;
use crate::geometry::overlaps;

/// Arena wall an actor was clamped against.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Wall {
    Left,
    Right,
}

/// Outcome of the last integration step, read by the camera.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Step {
    /// Horizontal displacement before wall clamping.
    pub intended_dx: f32,
    pub wall: Option<Wall>,
}

impl Actor {
    pub(super) fn apply_velocity_override(&mut self) {
        if let Some(velocity) = self.animation.frame().velocity {
            self.velocity = velocity.facing(self.facing_right);
        }
    }

    pub(super) fn integrate(&mut self, dt_ms: f32, config: &FightConfig) {
        let step = self.character.move_speed * dt_ms / 1000.0;
        let before = self.position.x;
        self.position += self.velocity * step;

        if self.position.y < config.floor_y {
            self.airborne = true;
            self.velocity.y += self.character.gravity;
        } else {
            self.airborne = false;
            self.velocity.y = 0.0;
            self.position.y = config.floor_y;
        }

        let intended_dx = self.position.x - before;
        let wall = self.clamp_to_arena(config);
        self.last_step = Step { intended_dx, wall };
    }

    fn clamp_to_arena(&mut self, config: &FightConfig) -> Option<Wall> {
        let half = self.half_body_width();
        let min = config.left_bound + half;
        let max = config.right_bound - half;
        if self.position.x <= min {
            self.position.x = min;
            Some(Wall::Left)
        } else if self.position.x >= max {
            self.position.x = max;
            Some(Wall::Right)
        } else {
            None
        }
    }

    pub(crate) fn half_body_width(&self) -> f32 {
        self.body_box().width as f32 * self.character.scale / 2.0
    }

    /// Pushes this actor out of the opponent's body along X.
    pub(super) fn separate_from(&mut self, opponent: &Actor, config: &FightConfig) {
        if !config.separate_airborne_bodies && (self.airborne || opponent.airborne) {
            return;
        }
        let mine = self.body_box();
        let theirs = opponent.body_box();
        if !overlaps(
            &mine,
            self.draw_anchor(),
            self.scale(),
            &theirs,
            opponent.draw_anchor(),
            opponent.scale(),
        ) {
            return;
        }
        let width = mine.width as f32 * self.scale();
        self.position.x = if self.position.x <= opponent.position.x {
            opponent.position.x - width
        } else {
            opponent.position.x + width
        };
        self.clamp_to_arena(config);
    }

    pub(super) fn decay_dizzy(&mut self, dt_ms: f32, config: &FightConfig) {
        self.dizzy = (self.dizzy - config.dizzy_decay_per_sec * dt_ms / 1000.0).max(0.0);
    }

    pub(super) fn update_projectiles(&mut self, dt_ms: f32, config: &FightConfig) {
        for projectile in self.projectiles.iter_mut() {
            projectile.advance(dt_ms, config.left_bound, config.right_bound);
        }
        self.projectiles.retain(|projectile| projectile.is_active());
    }
}
