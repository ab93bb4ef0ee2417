//! Read-only per-tick view for renderers and replay tooling.
//!
//! Everything a presentation layer needs to draw a frame is copied out of the
//! simulation: no references back into [`Battlefield`] survive the call.

use crate::actor::{Actor, Projectile, StateId};
use crate::animation::VisualRef;
use crate::battlefield::{Battlefield, MatchPhase, RoundOutcome};
use crate::geometry::{Edges, Vec2};
use crate::player::{Player, PlayerStats};
use crate::side::Side;

/// Whole-match view at the end of a tick.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RenderSnapshot {
    pub phase: MatchPhase,
    pub round: u32,
    /// Round timer as displayed: whole seconds remaining.
    pub round_seconds: i32,
    /// Seconds since the round was decided; zero while fighting.
    pub ko_time: f32,
    pub camera_offset: f32,
    pub hitstop_active: bool,
    pub match_complete: bool,
    pub last_outcome: Option<RoundOutcome>,
    pub players: [PlayerSnapshot; 2],
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerSnapshot {
    pub side: Side,
    pub wins: u32,
    pub combo: u32,
    pub stats: PlayerStats,
    pub actor: ActorSnapshot,
}

/// Actor pose with collision boxes resolved to world edges.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActorSnapshot {
    pub state: StateId,
    pub position: Vec2,
    pub velocity: Vec2,
    pub facing_right: bool,
    pub airborne: bool,
    pub health: i32,
    pub max_health: i32,
    pub dizzy: f32,
    pub hitstun: u32,
    pub visual: VisualRef,
    pub frame_index: usize,
    /// Top-left of the visual after the frame's draw offset.
    pub draw_position: Vec2,
    /// `None` while the current frame has no attack box.
    pub attack: Option<Edges>,
    pub defense: Option<Edges>,
    pub blocking: bool,
    pub body: Edges,
    pub projectiles: Vec<ProjectileSnapshot>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProjectileSnapshot {
    pub owner: Side,
    pub position: Vec2,
    pub velocity: Vec2,
    pub visual: VisualRef,
    pub hitbox: Edges,
}

impl Battlefield {
    /// Copies out everything needed to draw the current tick.
    pub fn snapshot(&self) -> RenderSnapshot {
        RenderSnapshot {
            phase: self.phase(),
            round: self.round_number(),
            round_seconds: self.round_clock().whole_seconds(),
            ko_time: self.ko_clock().time(),
            camera_offset: self.camera().offset(),
            hitstop_active: self.is_hitstop_active(),
            match_complete: self.is_match_complete(),
            last_outcome: self.last_outcome(),
            players: Side::BOTH.map(|side| PlayerSnapshot::capture(self.player(side))),
        }
    }
}

impl PlayerSnapshot {
    pub fn capture(player: &Player) -> Self {
        Self {
            side: player.side(),
            wins: player.wins(),
            combo: player.combo(),
            stats: *player.stats(),
            actor: ActorSnapshot::capture(player.actor()),
        }
    }
}

impl ActorSnapshot {
    pub fn capture(actor: &Actor) -> Self {
        let anchor = actor.draw_anchor();
        let scale = actor.scale();
        let attack = actor.attack_box();
        let defense = actor.defense_box();
        Self {
            state: actor.state_id(),
            position: actor.position(),
            velocity: actor.velocity(),
            facing_right: actor.facing_right(),
            airborne: actor.is_airborne(),
            health: actor.health(),
            max_health: actor.max_health(),
            dizzy: actor.dizzy(),
            hitstun: actor.hitstun(),
            visual: actor.animation().frame().visual,
            frame_index: actor.animation().index(),
            draw_position: anchor + actor.draw_offset(),
            attack: (!attack.is_none()).then(|| attack.rect.edges(anchor, scale)),
            defense: (!defense.rect.is_none()).then(|| defense.rect.edges(anchor, scale)),
            blocking: defense.blocking,
            body: actor.body_box().edges(anchor, scale),
            projectiles: actor.projectiles().iter().map(ProjectileSnapshot::capture).collect(),
        }
    }
}

impl ProjectileSnapshot {
    pub fn capture(projectile: &Projectile) -> Self {
        Self {
            owner: projectile.owner(),
            position: projectile.position(),
            velocity: projectile.velocity(),
            visual: projectile.visual(),
            hitbox: projectile.attack().rect.edges(projectile.position(), 1.0),
        }
    }
}
