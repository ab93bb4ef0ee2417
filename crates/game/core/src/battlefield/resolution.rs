//! Collision resolution: melee strikes, blocks, projectile hits.

use arrayvec::ArrayVec;

use crate::actor::{ActionKind, Actor, ActorState, StateId};
use crate::clock::Clock;
use crate::config::FightConfig;
use crate::geometry::{AttackBox, overlaps};
use crate::player::Player;
use crate::side::{Side, split_pair};

/// How a connecting attack was absorbed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Impact {
    Hit,
    Blocked,
}

impl Impact {
    fn reaction(self) -> StateId {
        match self {
            Impact::Hit => StateId::Action(ActionKind::Hitstun),
            Impact::Blocked => StateId::Action(ActionKind::Block),
        }
    }
}

/// Side effects a connecting attack is allowed to cause.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Pressure {
    pub pushback: bool,
    pub hitstop: bool,
}

impl Pressure {
    pub const MELEE: Pressure = Pressure {
        pushback: true,
        hitstop: true,
    };
    pub const PROJECTILE: Pressure = Pressure {
        pushback: false,
        hitstop: false,
    };
}

/// Resolves both sides' melee attacks, then applies defender reactions.
pub(super) fn resolve_strikes(players: &mut [Player; 2], hitstop: &mut Clock, config: &FightConfig) {
    let mut impacts = [None; 2];
    for side in Side::BOTH {
        let (attacker, defender) = split_pair(players, side);
        impacts[side.opponent().index()] = strike(attacker, defender, hitstop, config);
    }
    for side in Side::BOTH {
        if let Some(impact) = impacts[side.index()] {
            let (defender, attacker) = split_pair(players, side);
            defender
                .actor_mut()
                .change_state(impact.reaction(), attacker.actor_mut());
        }
    }
}

/// One attacker against one defender. At most one hit per attack group
/// activation; the latch clears once the attack box returns to empty.
pub(crate) fn strike(
    attacker: &mut Player,
    defender: &mut Player,
    hitstop: &mut Clock,
    config: &FightConfig,
) -> Option<Impact> {
    let attack = *attacker.actor().attack_box();
    if attack == AttackBox::NONE {
        attacker.latch(0);
        return None;
    }
    let defense = *defender.actor().defense_box();
    let touching = overlaps(
        &attack.rect,
        attacker.actor().draw_anchor(),
        attacker.actor().scale(),
        &defense.rect,
        defender.actor().draw_anchor(),
        defender.actor().scale(),
    );
    if !touching || attacker.latched_group() == attack.group_id {
        return None;
    }
    attacker.latch(attack.group_id);

    if let Some(secondary) = attacker.actor().animation().spec().secondary().cloned() {
        let kind = match attacker.actor().state() {
            ActorState::Action(action) => action.kind,
            _ => ActionKind::Throw,
        };
        attacker
            .actor_mut()
            .play_action(kind, &secondary, Some(defender.actor_mut()));
        tracing::trace!(side = %attacker.side(), action = %kind, "secondary animation triggered");
        return None;
    }

    if defense.blocking {
        block(attacker, defender, Pressure::MELEE, hitstop, config);
        Some(Impact::Blocked)
    } else {
        take_damage(attacker, defender, &attack, Pressure::MELEE, hitstop, config);
        Some(Impact::Hit)
    }
}

/// Pushes the defender back along its facing and optionally the attacker.
pub(crate) fn block(
    attacker: &mut Player,
    defender: &mut Player,
    pressure: Pressure,
    hitstop: &mut Clock,
    config: &FightConfig,
) {
    let away = away_from_attacker(defender.actor());
    defender.actor_mut().set_velocity_x(away * config.block_push);
    if pressure.pushback && !attacker.actor().is_airborne() {
        attacker
            .actor_mut()
            .set_velocity_x(-away * config.attacker_pushback);
    }
    if pressure.hitstop {
        hitstop.restart(config.hitstop_block_secs);
    }
    attacker.record_block();
    tracing::trace!(attacker = %attacker.side(), "blocked");
}

/// Applies damage, dizzy, knockback, hitstun and the combo count.
pub(crate) fn take_damage(
    attacker: &mut Player,
    defender: &mut Player,
    attack: &AttackBox,
    pressure: Pressure,
    hitstop: &mut Clock,
    config: &FightConfig,
) {
    let away = away_from_attacker(defender.actor());
    let target = defender.actor_mut();
    target.apply_damage(attack.damage);
    target.set_velocity_x(away * config.knockback);
    target.set_hitstun(attack.stun_frames);
    if pressure.pushback && !attacker.actor().is_airborne() {
        attacker
            .actor_mut()
            .set_velocity_x(-away * config.attacker_pushback);
    }
    if pressure.hitstop {
        hitstop.restart(config.hitstop_hit_secs);
    }
    attacker.record_hit(attack.damage);
    tracing::trace!(
        attacker = %attacker.side(),
        damage = attack.damage,
        combo = attacker.combo(),
        "hit"
    );
}

/// Horizontal sign pointing behind a defender.
fn away_from_attacker(defender: &Actor) -> f32 {
    if defender.facing_right() { -1.0 } else { 1.0 }
}

/// Projectile clashes, then projectile hits on each defender.
pub(super) fn resolve_projectiles(players: &mut [Player; 2], config: &FightConfig) {
    cancel_clashing_projectiles(players);
    let mut idle_hitstop = Clock::countdown(0.0);
    for side in Side::BOTH {
        let (attacker, defender) = split_pair(players, side);
        let defense = *defender.actor().defense_box();
        let anchor = defender.actor().draw_anchor();
        let scale = defender.actor().scale();

        let mut landed: ArrayVec<AttackBox, { FightConfig::MAX_PROJECTILES }> = ArrayVec::new();
        for projectile in attacker.actor_mut().projectiles_mut().iter_mut() {
            if projectile.is_active()
                && overlaps(
                    &projectile.attack().rect,
                    projectile.position(),
                    1.0,
                    &defense.rect,
                    anchor,
                    scale,
                )
            {
                projectile.deactivate();
                landed.push(*projectile.attack());
            }
        }

        let mut impact = None;
        for attack in &landed {
            if defense.blocking {
                block(attacker, defender, Pressure::PROJECTILE, &mut idle_hitstop, config);
                impact = Some(Impact::Blocked);
            } else {
                take_damage(attacker, defender, attack, Pressure::PROJECTILE, &mut idle_hitstop, config);
                impact = Some(Impact::Hit);
            }
        }
        if let Some(impact) = impact {
            defender
                .actor_mut()
                .change_state(impact.reaction(), attacker.actor_mut());
        }
    }
    for player in players.iter_mut() {
        player
            .actor_mut()
            .projectiles_mut()
            .retain(|projectile| projectile.is_active());
    }
}

/// Opposing projectiles that touch destroy each other.
fn cancel_clashing_projectiles(players: &mut [Player; 2]) {
    let (one, two) = split_pair(players, Side::One);
    let theirs = two.actor_mut().projectiles_mut();
    for mine in one.actor_mut().projectiles_mut().iter_mut() {
        if !mine.is_active() {
            continue;
        }
        if let Some(other) = theirs.iter_mut().find(|other| {
            other.is_active()
                && overlaps(
                    &mine.attack().rect,
                    mine.position(),
                    1.0,
                    &other.attack().rect,
                    other.position(),
                    1.0,
                )
        }) {
            mine.deactivate();
            other.deactivate();
        }
    }
}
