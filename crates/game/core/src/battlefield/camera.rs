use crate::actor::Wall;
use crate::config::FightConfig;
use crate::player::Player;
use crate::side::{Side, split_pair};

/// Horizontal scroll offset, bounded to `-limit..=limit` around center.
///
/// When an actor pushes into a screen wall the camera scrolls by the
/// actor's intended displacement and the opponent's screen position shifts
/// the same amount, so their world spacing is kept.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Camera {
    offset: f32,
    limit: f32,
}

impl Camera {
    pub fn new(limit: f32) -> Self {
        Self {
            offset: 0.0,
            limit: limit.max(0.0),
        }
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn limit(&self) -> f32 {
        self.limit
    }

    pub fn reset(&mut self) {
        self.offset = 0.0;
    }

    pub(super) fn follow(&mut self, players: &mut [Player; 2], config: &FightConfig) {
        for side in Side::BOTH {
            let (pusher, other) = split_pair(players, side);
            let step = pusher.actor().last_step();
            let other = other.actor_mut();
            let half = other.half_body_width();
            match step.wall {
                Some(Wall::Left) if step.intended_dx < 0.0 => {
                    let room = (config.right_bound - half - other.position().x).max(0.0);
                    let delta = (-step.intended_dx).min(self.offset + self.limit).min(room);
                    if delta > 0.0 {
                        self.offset -= delta;
                        other.shift_x(delta);
                    }
                }
                Some(Wall::Right) if step.intended_dx > 0.0 => {
                    let room = (other.position().x - (config.left_bound + half)).max(0.0);
                    let delta = step.intended_dx.min(self.limit - self.offset).min(room);
                    if delta > 0.0 {
                        self.offset += delta;
                        other.shift_x(-delta);
                    }
                }
                _ => {}
            }
        }
    }
}
