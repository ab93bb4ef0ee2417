//! Controller adapter: binds one normalized input stream to an actor and
//! keeps per-match bookkeeping.

use std::sync::Arc;

use crate::actor::Actor;
use crate::character::{CharacterError, CharacterSpec};
use crate::config::FightConfig;
use crate::input::InputSet;
use crate::side::Side;

/// Running totals for one player across the whole match.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerStats {
    pub hits_landed: u32,
    pub blocks_forced: u32,
    pub damage_dealt: i32,
    pub best_combo: u32,
}

/// One side of the match.
#[derive(Clone, Debug)]
pub struct Player {
    actor: Actor,
    wins: u32,
    combo: u32,
    /// Attack group id of the swing that last connected; 0 when clear.
    latched_group: u32,
    stats: PlayerStats,
}

impl Player {
    pub fn new(
        side: Side,
        character: Arc<CharacterSpec>,
        config: &FightConfig,
    ) -> Result<Self, CharacterError> {
        Ok(Self {
            actor: Actor::new(side, character, config)?,
            wins: 0,
            combo: 0,
            latched_group: 0,
            stats: PlayerStats::default(),
        })
    }

    /// Feeds this tick's inputs to the actor.
    pub fn update(&mut self, opponent: &mut Actor, inputs: InputSet, dt_ms: f32, config: &FightConfig) {
        self.actor.update(opponent, inputs, dt_ms, config);
    }

    pub fn actor(&self) -> &Actor {
        &self.actor
    }

    pub fn actor_mut(&mut self) -> &mut Actor {
        &mut self.actor
    }

    pub fn side(&self) -> Side {
        self.actor.side()
    }

    pub fn wins(&self) -> u32 {
        self.wins
    }

    pub fn combo(&self) -> u32 {
        self.combo
    }

    pub fn stats(&self) -> &PlayerStats {
        &self.stats
    }

    pub(crate) fn latched_group(&self) -> u32 {
        self.latched_group
    }

    pub(crate) fn latch(&mut self, group_id: u32) {
        self.latched_group = group_id;
    }

    pub(crate) fn add_win(&mut self) {
        self.wins += 1;
    }

    pub(crate) fn record_hit(&mut self, damage: i32) {
        self.combo += 1;
        self.stats.hits_landed += 1;
        self.stats.damage_dealt += damage;
        self.stats.best_combo = self.stats.best_combo.max(self.combo);
    }

    pub(crate) fn record_block(&mut self) {
        self.stats.blocks_forced += 1;
    }

    pub(crate) fn reset_combo(&mut self) {
        self.combo = 0;
    }

    /// Clears round-scoped bookkeeping. Wins and stats persist.
    pub(crate) fn reset_for_round(&mut self, health: i32) {
        self.actor.reset_for_round(health);
        self.combo = 0;
        self.latched_group = 0;
    }

    /// Clears everything for a fresh match.
    pub(crate) fn reset_for_match(&mut self) {
        self.reset_for_round(self.actor.max_health());
        self.wins = 0;
        self.stats = PlayerStats::default();
    }
}
