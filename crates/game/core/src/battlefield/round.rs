//! Win check and the RoundEnd / SetEnd phases.

use core::cmp::Ordering;

use super::{Battlefield, MatchPhase};
use crate::actor::{ActionKind, StateId};
use crate::clock::Clock;
use crate::player::Player;
use crate::side::{Side, split_pair};

/// Result of a finished round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RoundOutcome {
    Winner(Side),
    Stalemate,
}

/// Decides the round, if it is over.
///
/// A double KO is a stalemate. At time-out the higher health wins and equal
/// health is a stalemate.
pub(super) fn judge(players: &[Player; 2], round_clock: &Clock) -> Option<RoundOutcome> {
    let one = players[0].actor().health();
    let two = players[1].actor().health();
    match (one <= 0, two <= 0) {
        (true, true) => Some(RoundOutcome::Stalemate),
        (true, false) => Some(RoundOutcome::Winner(Side::Two)),
        (false, true) => Some(RoundOutcome::Winner(Side::One)),
        (false, false) if round_clock.is_finished() => Some(match one.cmp(&two) {
            Ordering::Equal => RoundOutcome::Stalemate,
            Ordering::Greater => RoundOutcome::Winner(Side::One),
            Ordering::Less => RoundOutcome::Winner(Side::Two),
        }),
        (false, false) => None,
    }
}

impl Battlefield {
    pub(super) fn finish_round(&mut self, outcome: RoundOutcome) {
        for player in &mut self.players {
            player.actor_mut().set_velocity_x(0.0);
        }
        match outcome {
            RoundOutcome::Winner(side) => {
                let (winner, loser) = split_pair(&mut self.players, side);
                winner.add_win();
                winner
                    .actor_mut()
                    .change_state(StateId::Action(ActionKind::Victory), loser.actor_mut());
                loser
                    .actor_mut()
                    .change_state(StateId::Action(ActionKind::Defeat), winner.actor_mut());
            }
            RoundOutcome::Stalemate => {
                for side in Side::BOTH {
                    let (player, opponent) = split_pair(&mut self.players, side);
                    player
                        .actor_mut()
                        .change_state(StateId::Action(ActionKind::Defeat), opponent.actor_mut());
                }
            }
        }
        tracing::info!(
            round = self.round,
            ?outcome,
            wins_one = self.players[0].wins(),
            wins_two = self.players[1].wins(),
            "round finished"
        );
        self.last_outcome = Some(outcome);
        self.ko_clock.reset();
        self.phase = MatchPhase::RoundEnd;
    }

    /// Holds until the KO clock outlasts the loser's dizzy, or hits the cap.
    pub(super) fn round_end(&mut self, dt_ms: f32) {
        self.ko_clock.update(dt_ms);
        let loser_dizzy = match self.last_outcome {
            Some(RoundOutcome::Winner(side)) => self.players[side.opponent().index()].actor().dizzy(),
            _ => self.players[0]
                .actor()
                .dizzy()
                .max(self.players[1].actor().dizzy()),
        };
        let elapsed = self.ko_clock.time();
        if elapsed * self.config.ko_dizzy_factor > loser_dizzy || elapsed >= self.config.ko_cap_secs {
            self.close_round();
        }
    }

    fn close_round(&mut self) {
        let champion = Side::BOTH
            .into_iter()
            .find(|side| self.players[side.index()].wins() >= self.config.win_goal);
        match champion {
            Some(side) => {
                tracing::info!(winner = %side, "set decided");
                self.set_winner = Some(side);
                self.set_clock.restart(self.config.victory_pose_secs);
                self.phase = MatchPhase::SetEnd;
            }
            None => self.reset_round(),
        }
    }

    /// Victory pose, then completion.
    pub(super) fn set_end(&mut self, dt_ms: f32) {
        if let Some(side) = self.set_winner {
            let (winner, loser) = split_pair(&mut self.players, side);
            if !winner.actor().state().is_action(ActionKind::Victory) {
                winner
                    .actor_mut()
                    .change_state(StateId::Action(ActionKind::Victory), loser.actor_mut());
            }
        }
        self.set_clock.update(dt_ms);
        if self.set_clock.is_finished() {
            self.reset_round();
            self.match_complete = true;
            tracing::info!(winner = ?self.set_winner, "match complete");
        }
    }

    /// Puts both actors back at their starts. Carried dizzy costs health.
    pub(super) fn reset_round(&mut self) {
        let max_health = self.config.max_health;
        let penalty = self.config.dizzy_health_penalty;
        for player in &mut self.players {
            let lost = (player.actor().dizzy() * penalty).floor() as i32;
            player.reset_for_round(max_health - lost);
        }
        self.round += 1;
        self.round_clock.reset();
        self.ko_clock.reset();
        self.hitstop = Clock::countdown(0.0);
        self.camera.reset();
        self.phase = MatchPhase::Fight;
    }
}
