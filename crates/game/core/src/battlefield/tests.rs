use std::sync::Arc;

use super::resolution;
use super::*;
use crate::actor::{ActionKind, StateId};
use crate::animation::{AnimationSpec, Frame, VisualRef};
use crate::character::AnimationKey;
use crate::geometry::{AttackBox, Rect, Vec2};
use crate::presets::{self, JAB, THROW_DAMAGE};

const DT: f32 = 1000.0 / 60.0;
const IDLE: [InputSet; 2] = [InputSet::empty(), InputSet::empty()];

fn field(config: FightConfig) -> Battlefield {
    let character = Arc::new(presets::sparring_partner().unwrap());
    Battlefield::new(config, [character.clone(), character]).unwrap()
}

/// Fighters standing just out of body contact, inside jab and throw range.
fn close_quarters() -> FightConfig {
    FightConfig::new().with_start_positions(Vec2::new(900.0, 900.0), Vec2::new(960.0, 900.0))
}

fn run(field: &mut Battlefield, ticks: usize, inputs: [InputSet; 2]) {
    for _ in 0..ticks {
        field.tick(DT, inputs);
    }
}

/// Side one jabs; returns once the jab has connected or whiffed.
fn jab(field: &mut Battlefield, defender: InputSet) {
    field.tick(DT, [InputSet::BUTTON1, defender]);
    run(field, 3, [InputSet::empty(), defender]);
}

fn state(field: &Battlefield, side: Side) -> StateId {
    field.player(side).actor().state_id()
}

#[test]
fn starts_in_fight_phase() {
    let field = field(FightConfig::new());
    assert_eq!(field.phase(), MatchPhase::Fight);
    assert_eq!(field.round_number(), 1);
    assert!(!field.is_match_complete());
    assert!(!field.is_hitstop_active());
    assert_eq!(field.last_outcome(), None);
}

#[test]
fn rejects_invalid_setup() {
    let character = Arc::new(presets::sparring_partner().unwrap());
    let err = Battlefield::new(
        FightConfig::new().with_win_goal(0),
        [character.clone(), character.clone()],
    )
    .unwrap_err();
    assert_eq!(err, SetupError::Config(ConfigError::ZeroWinGoal));
    assert_eq!(err.severity(), ErrorSeverity::Fatal);

    let mut broken = presets::sparring_partner().unwrap();
    broken.animations.clear();
    let err = Battlefield::new(FightConfig::new(), [character, Arc::new(broken)]).unwrap_err();
    assert!(matches!(err, SetupError::Character { side: Side::Two, .. }));
}

#[test]
fn jab_hits_once_per_activation() {
    let mut field = field(close_quarters());
    jab(&mut field, InputSet::empty());

    let max = field.config().max_health;
    assert_eq!(field.player(Side::Two).actor().health(), max - 10);
    assert_eq!(state(&field, Side::Two), StateId::Action(ActionKind::Hitstun));
    assert_eq!(field.player(Side::Two).actor().hitstun(), 9);
    assert!(field.is_hitstop_active());

    run(&mut field, 40, IDLE);
    assert_eq!(field.player(Side::Two).actor().health(), max - 10);
    assert_eq!(field.player(Side::One).stats().hits_landed, 1);
    assert_eq!(state(&field, Side::Two), StateId::Idle);
}

#[test]
fn latch_clears_once_attack_box_is_gone() {
    let mut field = field(close_quarters());
    jab(&mut field, InputSet::empty());
    run(&mut field, 40, IDLE);
    assert_eq!(field.players[0].latched_group(), 0);

    let gap = field.player(Side::Two).actor().position().x - field.player(Side::One).actor().position().x;
    field.players[1].actor_mut().shift_x(60.0 - gap);
    jab(&mut field, InputSet::empty());
    assert_eq!(
        field.player(Side::Two).actor().health(),
        field.config().max_health - 20
    );
}

#[test]
fn first_frame_lasts_a_full_frame_duration() {
    let mut field = field(FightConfig::new());
    let mut indices = Vec::new();
    field.tick(DT, [InputSet::BUTTON1, InputSet::empty()]);
    indices.push(field.snapshot().players[0].actor.frame_index);
    for _ in 0..8 {
        field.tick(DT, IDLE);
        indices.push(field.snapshot().players[0].actor.frame_index);
    }
    assert_eq!(indices, [0, 0, 0, 1, 1, 1, 2, 2, 2]);
    field.tick(DT, IDLE);
    assert_eq!(state(&field, Side::One), StateId::Idle);
}

#[test]
fn attack_on_first_frame_connects_at_rate_one() {
    let mut character = presets::sparring_partner().unwrap();
    let mut frames: Vec<Frame> = (0..3).map(|i| Frame::new(VisualRef::new(40 + i, 70))).collect();
    frames[0] = frames[0].with_attack(AttackBox::new(Rect::new(60.0, 17.0, 25, 25), 10, 9).with_group(1));
    character.animations.insert(
        AnimationKey::Action(ActionKind::Attack(JAB)),
        Arc::new(AnimationSpec::new(frames, 1).unwrap()),
    );
    let character = Arc::new(character);
    let mut field = Battlefield::new(close_quarters(), [character.clone(), character]).unwrap();

    field.tick(DT, [InputSet::BUTTON1, InputSet::empty()]);
    assert_eq!(field.player(Side::Two).actor().health(), 190);
    run(&mut field, 40, IDLE);
    assert_eq!(field.player(Side::Two).actor().health(), 190);
}

#[test]
fn strike_respects_latch_directly() {
    let mut field = field(close_quarters());
    field.tick(DT, [InputSet::BUTTON1, InputSet::empty()]);
    field.tick(DT, IDLE);
    field.tick(DT, IDLE);
    // Advance side one alone so the active frame is current but unresolved.
    let (one, two) = split_pair(&mut field.players, Side::One);
    one.update(two.actor_mut(), InputSet::empty(), DT, &field.config);
    assert!(!one.actor().attack_box().is_none());

    let mut hitstop = Clock::countdown(0.0);
    let first = resolution::strike(one, two, &mut hitstop, &field.config);
    let second = resolution::strike(one, two, &mut hitstop, &field.config);
    assert_eq!(first, Some(resolution::Impact::Hit));
    assert_eq!(second, None);
    assert_eq!(one.latched_group(), 1);
    assert!(!hitstop.is_finished());
}

#[test]
fn walking_back_blocks() {
    let mut field = field(close_quarters());
    jab(&mut field, InputSet::RIGHT);

    assert_eq!(field.player(Side::Two).actor().health(), field.config().max_health);
    assert_eq!(state(&field, Side::Two), StateId::Action(ActionKind::Block));
    assert_eq!(field.player(Side::One).stats().blocks_forced, 1);
    assert_eq!(field.player(Side::One).combo(), 0);
    assert!(field.is_hitstop_active());
}

#[test]
fn hitstop_freezes_actors_not_round_clock() {
    let mut field = field(close_quarters());
    jab(&mut field, InputSet::empty());
    assert!(field.is_hitstop_active());

    let one = field.player(Side::One).actor().position();
    let two = field.player(Side::Two).actor().position();
    let clock = field.round_clock().time();
    field.tick(DT, [InputSet::RIGHT, InputSet::RIGHT]);
    assert_eq!(field.player(Side::One).actor().position(), one);
    assert_eq!(field.player(Side::Two).actor().position(), two);
    assert!(field.round_clock().time() < clock);

    run(&mut field, 10, IDLE);
    assert!(!field.is_hitstop_active());
}

#[test]
fn combo_resets_when_hitstun_ends() {
    let mut field = field(close_quarters());
    jab(&mut field, InputSet::empty());
    assert_eq!(field.player(Side::One).combo(), 1);
    field.tick(DT, IDLE);
    assert_eq!(field.player(Side::One).combo(), 1);

    run(&mut field, 40, IDLE);
    assert_eq!(field.player(Side::One).combo(), 0);
    assert_eq!(field.player(Side::One).stats().best_combo, 1);
}

#[test]
fn throw_forces_opponent_animation() {
    let mut field = field(close_quarters());
    field.tick(DT, [InputSet::BUTTON3, InputSet::empty()]);
    assert_eq!(state(&field, Side::One), StateId::Action(ActionKind::Throw));
    run(&mut field, 3, IDLE);
    assert_eq!(state(&field, Side::Two), StateId::Action(ActionKind::Grabbed));
    assert!(!field.is_hitstop_active());

    run(&mut field, 30, IDLE);
    assert_eq!(
        field.player(Side::Two).actor().health(),
        field.config().max_health - THROW_DAMAGE
    );
    assert_eq!(state(&field, Side::Two), StateId::Idle);
    assert_eq!(state(&field, Side::One), StateId::Idle);
}

#[test]
fn timeout_with_equal_health_is_stalemate() {
    let mut field = field(FightConfig::new().with_round_time(1.0));
    let mut ticks = 0;
    while field.phase() == MatchPhase::Fight && ticks < 100 {
        field.tick(DT, IDLE);
        ticks += 1;
    }
    assert_eq!(field.phase(), MatchPhase::RoundEnd);
    assert_eq!(field.last_outcome(), Some(RoundOutcome::Stalemate));
    for side in Side::BOTH {
        assert_eq!(state(&field, side), StateId::Action(ActionKind::Defeat));
        assert_eq!(field.player(side).wins(), 0);
    }

    field.tick(DT, IDLE);
    assert_eq!(field.phase(), MatchPhase::Fight);
    assert_eq!(field.round_number(), 2);
    assert_eq!(field.round_clock().time(), 1.0);
}

#[test]
fn timeout_favours_higher_health() {
    let mut field = field(FightConfig::new().with_round_time(1.0));
    field.player_mut(Side::One).actor_mut().set_health(150);
    run(&mut field, 70, IDLE);
    assert_eq!(field.last_outcome(), Some(RoundOutcome::Winner(Side::Two)));
    assert_eq!(field.player(Side::Two).wins(), 1);
}

#[test]
fn knockout_awards_round_and_finishes_set() {
    let mut field = field(close_quarters().with_win_goal(1));
    field.player_mut(Side::Two).actor_mut().set_health(5);
    jab(&mut field, InputSet::empty());
    field.tick(DT, IDLE);

    assert_eq!(field.phase(), MatchPhase::RoundEnd);
    assert_eq!(field.last_outcome(), Some(RoundOutcome::Winner(Side::One)));
    assert_eq!(field.player(Side::One).wins(), 1);
    assert_eq!(state(&field, Side::One), StateId::Action(ActionKind::Victory));
    assert_eq!(state(&field, Side::Two), StateId::Action(ActionKind::Defeat));

    let mut ticks = 0;
    while field.phase() == MatchPhase::RoundEnd && ticks < 1000 {
        field.tick(DT, IDLE);
        ticks += 1;
    }
    assert_eq!(field.phase(), MatchPhase::SetEnd);
    assert_eq!(field.set_winner(), Some(Side::One));
    assert!(!field.is_match_complete());

    run(&mut field, 200, IDLE);
    assert!(field.is_match_complete());
    let round = field.round_number();
    run(&mut field, 10, [InputSet::RIGHT, InputSet::LEFT]);
    assert_eq!(field.round_number(), round);
    assert_eq!(field.player(Side::One).actor().position(), field.config().start_positions[0]);

    field.rematch();
    assert!(!field.is_match_complete());
    assert_eq!(field.round_number(), 1);
    assert_eq!(field.player(Side::One).wins(), 0);
    assert_eq!(field.set_winner(), None);
}

#[test]
fn ko_pause_is_capped() {
    let mut config = close_quarters();
    config.dizzy_decay_per_sec = 0.0;
    config.ko_cap_secs = 2.0;
    let mut field = field(config);
    field.player_mut(Side::Two).actor_mut().apply_damage(60);
    field.player_mut(Side::Two).actor_mut().set_health(5);
    jab(&mut field, InputSet::empty());
    field.tick(DT, IDLE);
    assert_eq!(field.phase(), MatchPhase::RoundEnd);

    run(&mut field, 100, IDLE);
    assert_eq!(field.phase(), MatchPhase::RoundEnd);
    run(&mut field, 30, IDLE);
    assert_eq!(field.phase(), MatchPhase::Fight);
    assert_eq!(field.round_number(), 2);
}

#[test]
fn carried_dizzy_costs_health_next_round() {
    let mut field = field(FightConfig::new());
    field.player_mut(Side::One).actor_mut().apply_damage(40);
    field.reset_round();
    assert_eq!(field.player(Side::One).actor().health(), 185);
    assert_eq!(field.player(Side::Two).actor().health(), 200);
    assert_eq!(field.player(Side::One).actor().dizzy(), 0.0);
}

fn fireball_inputs(forward: InputSet, down_forward: InputSet) -> [InputSet; 4] {
    [
        InputSet::DOWN,
        down_forward,
        forward,
        forward | InputSet::BUTTON1,
    ]
}

#[test]
fn fireball_hits_without_hitstop() {
    let mut field = field(FightConfig::new());
    for inputs in fireball_inputs(InputSet::RIGHT, InputSet::DOWN_RIGHT) {
        field.tick(DT, [inputs, InputSet::empty()]);
    }
    let mut ticks = 0;
    while field.player(Side::Two).actor().health() == field.config().max_health && ticks < 300 {
        field.tick(DT, IDLE);
        ticks += 1;
    }
    assert_eq!(field.player(Side::Two).actor().health(), field.config().max_health - 10);
    assert_eq!(state(&field, Side::Two), StateId::Action(ActionKind::Hitstun));
    assert!(!field.is_hitstop_active());
    assert!(field.player(Side::One).actor().projectiles().is_empty());
}

#[test]
fn opposing_fireballs_cancel() {
    let mut field = field(FightConfig::new());
    let one = fireball_inputs(InputSet::RIGHT, InputSet::DOWN_RIGHT);
    let two = fireball_inputs(InputSet::LEFT, InputSet::DOWN_LEFT);
    for (a, b) in one.into_iter().zip(two) {
        field.tick(DT, [a, b]);
    }
    let mut in_flight = 0;
    for _ in 0..150 {
        field.tick(DT, IDLE);
        in_flight = in_flight.max(
            field.player(Side::One).actor().projectiles().len()
                + field.player(Side::Two).actor().projectiles().len(),
        );
    }
    assert_eq!(in_flight, 2);
    for side in Side::BOTH {
        assert!(field.player(side).actor().projectiles().is_empty());
        assert_eq!(field.player(side).actor().health(), field.config().max_health);
    }
}

#[test]
fn camera_scrolls_when_pushing_a_wall() {
    let config = FightConfig::new().with_start_positions(Vec2::new(25.0, 900.0), Vec2::new(600.0, 900.0));
    let mut field = field(config);
    field.tick(DT, [InputSet::LEFT, InputSet::empty()]);

    let one = field.player(Side::One).actor();
    assert_eq!(one.position().x, 25.0);
    let pushed = -one.last_step().intended_dx;
    assert!(pushed > 0.0);
    assert!((field.camera().offset() + pushed).abs() < 1e-4);
    assert!((field.player(Side::Two).actor().position().x - (600.0 + pushed)).abs() < 1e-4);

    run(&mut field, 400, [InputSet::LEFT, InputSet::empty()]);
    assert!((field.camera().offset() + field.camera().limit()).abs() < 1e-3);
}
