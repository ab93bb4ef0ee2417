//! Match orchestrator.
//!
//! The [`Battlefield`] owns both players and runs the round/set machine:
//!
//! - **Fight**: round clock, camera, win check, collision resolution
//! - **RoundEnd**: KO pause scaled by the loser's dizzy
//! - **SetEnd**: victory pose, then match completion
//!
//! Tick order is fixed: hitstop clock, both actors (side one first), combo
//! bookkeeping, then the phase logic above.

mod camera;
mod resolution;
mod round;

use std::sync::Arc;

pub use camera::Camera;
pub use round::RoundOutcome;

use crate::actor::ActionKind;
use crate::character::{CharacterError, CharacterSpec};
use crate::clock::Clock;
use crate::config::{ConfigError, FightConfig};
use crate::error::{ErrorSeverity, GameError};
use crate::input::InputSet;
use crate::player::Player;
use crate::side::{Side, split_pair};

/// Active part of the round/set machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MatchPhase {
    Fight,
    RoundEnd,
    SetEnd,
}

/// Two-combatant match.
#[derive(Clone, Debug)]
pub struct Battlefield {
    config: FightConfig,
    players: [Player; 2],
    phase: MatchPhase,
    round: u32,
    round_clock: Clock,
    ko_clock: Clock,
    set_clock: Clock,
    hitstop: Clock,
    camera: Camera,
    last_outcome: Option<RoundOutcome>,
    set_winner: Option<Side>,
    match_complete: bool,
}

impl Battlefield {
    /// Validates the configuration and both characters and starts round 1.
    pub fn new(config: FightConfig, characters: [Arc<CharacterSpec>; 2]) -> Result<Self, SetupError> {
        config.validate()?;
        let [one, two] = characters;
        let players = [
            Player::new(Side::One, one, &config).map_err(|source| SetupError::Character {
                side: Side::One,
                source,
            })?,
            Player::new(Side::Two, two, &config).map_err(|source| SetupError::Character {
                side: Side::Two,
                source,
            })?,
        ];
        Ok(Self {
            round_clock: Clock::countdown(config.round_time_secs),
            ko_clock: Clock::stopwatch(),
            set_clock: Clock::countdown(config.victory_pose_secs),
            hitstop: Clock::countdown(0.0),
            camera: Camera::new(config.camera_scroll_limit),
            config,
            players,
            phase: MatchPhase::Fight,
            round: 1,
            last_outcome: None,
            set_winner: None,
            match_complete: false,
        })
    }

    /// Advances the simulation by `dt_ms` milliseconds with one normalized
    /// input set per side. Does nothing once the match is complete.
    pub fn tick(&mut self, dt_ms: f32, inputs: [InputSet; 2]) {
        if self.match_complete {
            return;
        }
        self.hitstop.update(dt_ms);
        let frozen = !self.hitstop.is_finished();
        if !frozen {
            for side in Side::BOTH {
                let (player, opponent) = split_pair(&mut self.players, side);
                player.update(opponent.actor_mut(), inputs[side.index()], dt_ms, &self.config);
            }
        }
        self.track_combos();
        match self.phase {
            MatchPhase::Fight => self.fight(dt_ms, frozen),
            MatchPhase::RoundEnd => self.round_end(dt_ms),
            MatchPhase::SetEnd => self.set_end(dt_ms),
        }
    }

    fn fight(&mut self, dt_ms: f32, frozen: bool) {
        if !(frozen && self.config.hitstop_freezes_round_clock) {
            self.round_clock.update(dt_ms);
        }
        if !frozen {
            self.camera.follow(&mut self.players, &self.config);
        }
        if let Some(outcome) = round::judge(&self.players, &self.round_clock) {
            self.finish_round(outcome);
            return;
        }
        if !frozen {
            resolution::resolve_strikes(&mut self.players, &mut self.hitstop, &self.config);
            resolution::resolve_projectiles(&mut self.players, &self.config);
        }
    }

    /// Combos only count while the opponent stays in hitstun.
    fn track_combos(&mut self) {
        for side in Side::BOTH {
            let (player, opponent) = split_pair(&mut self.players, side);
            if !opponent.actor().state().is_action(ActionKind::Hitstun) {
                player.reset_combo();
            }
        }
    }

    /// Starts a new match with the same characters.
    pub fn rematch(&mut self) {
        for player in &mut self.players {
            player.reset_for_match();
        }
        self.round = 1;
        self.round_clock.reset();
        self.ko_clock.reset();
        self.hitstop = Clock::countdown(0.0);
        self.camera.reset();
        self.phase = MatchPhase::Fight;
        self.last_outcome = None;
        self.set_winner = None;
        self.match_complete = false;
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn config(&self) -> &FightConfig {
        &self.config
    }

    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    pub fn round_number(&self) -> u32 {
        self.round
    }

    pub fn is_match_complete(&self) -> bool {
        self.match_complete
    }

    pub fn last_outcome(&self) -> Option<RoundOutcome> {
        self.last_outcome
    }

    /// Side that reached the win goal, once the set is decided.
    pub fn set_winner(&self) -> Option<Side> {
        self.set_winner
    }

    pub fn player(&self, side: Side) -> &Player {
        &self.players[side.index()]
    }

    pub fn player_mut(&mut self, side: Side) -> &mut Player {
        &mut self.players[side.index()]
    }

    pub fn round_clock(&self) -> &Clock {
        &self.round_clock
    }

    pub fn ko_clock(&self) -> &Clock {
        &self.ko_clock
    }

    pub fn is_hitstop_active(&self) -> bool {
        !self.hitstop.is_finished()
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }
}

/// A match that cannot be constructed.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum SetupError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("character for side {side} is invalid: {source}")]
    Character {
        side: Side,
        #[source]
        source: CharacterError,
    },
}

impl GameError for SetupError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Config(err) => err.severity(),
            Self::Character { source, .. } => source.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(err) => err.error_code(),
            Self::Character { source, .. } => source.error_code(),
        }
    }
}

#[cfg(test)]
mod tests;
