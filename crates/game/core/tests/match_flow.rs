//! Full match played through the public API: approach, jab until KO, KO
//! pause, victory pose, completion, rematch.

use std::sync::Arc;

use fight_core::presets;
use fight_core::{
    ActionKind, Battlefield, FightConfig, InputSet, MatchPhase, RoundOutcome, Side, StateId, Vec2,
};

const DT: f32 = 1000.0 / 60.0;
const MAX_TICKS: usize = 20_000;

/// Walks side one toward side two and jabs whenever it is in reach.
fn aggressor(field: &Battlefield) -> InputSet {
    let one = field.player(Side::One).actor();
    let two = field.player(Side::Two).actor();
    let gap = (two.position().x - one.position().x).abs();
    let ready = matches!(one.state_id(), StateId::Idle | StateId::Walking);
    let toward = if one.position().x < two.position().x {
        InputSet::RIGHT
    } else {
        InputSet::LEFT
    };
    match (ready, gap <= 70.0) {
        (true, true) => InputSet::BUTTON1,
        (true, false) => toward,
        _ => InputSet::empty(),
    }
}

#[test]
fn jab_pressure_wins_the_set() {
    let config = FightConfig::new()
        .with_win_goal(1)
        .with_start_positions(Vec2::new(800.0, 900.0), Vec2::new(1100.0, 900.0));
    let character = Arc::new(presets::sparring_partner().expect("preset builds"));
    let mut field = Battlefield::new(config, [character.clone(), character]).expect("valid setup");

    // ================================================================
    // Fight until the set is decided
    // ================================================================
    let mut phases = vec![field.phase()];
    let mut ticks = 0;
    while !field.is_match_complete() && ticks < MAX_TICKS {
        let inputs = [aggressor(&field), InputSet::empty()];
        field.tick(DT, inputs);
        if phases.last() != Some(&field.phase()) {
            phases.push(field.phase());
        }
        ticks += 1;
    }

    assert!(field.is_match_complete(), "match did not finish in {MAX_TICKS} ticks");
    assert_eq!(
        phases,
        vec![MatchPhase::Fight, MatchPhase::RoundEnd, MatchPhase::SetEnd, MatchPhase::Fight]
    );
    assert_eq!(field.last_outcome(), Some(RoundOutcome::Winner(Side::One)));
    assert_eq!(field.set_winner(), Some(Side::One));
    assert_eq!(field.player(Side::One).wins(), 1);
    assert_eq!(field.player(Side::Two).wins(), 0);

    let stats = field.player(Side::One).stats();
    assert_eq!(stats.damage_dealt, 200);
    assert_eq!(stats.hits_landed, 20);

    // ================================================================
    // Completed matches ignore ticks until a rematch
    // ================================================================
    let frozen = field.snapshot();
    field.tick(DT, [InputSet::RIGHT, InputSet::LEFT]);
    assert_eq!(field.snapshot(), frozen);

    field.rematch();
    assert_eq!(field.phase(), MatchPhase::Fight);
    assert_eq!(field.round_number(), 1);
    assert_eq!(field.player(Side::One).stats().hits_landed, 0);
    field.tick(DT, [InputSet::RIGHT, InputSet::empty()]);
    assert_eq!(field.player(Side::One).actor().state_id(), StateId::Walking);
}

#[test]
fn two_round_set_needs_two_wins() {
    let config = FightConfig::new().with_round_time(2.0);
    let character = Arc::new(presets::sparring_partner().expect("preset builds"));
    let mut field = Battlefield::new(config, [character.clone(), character]).expect("valid setup");

    // Side two gives up health every round, so side one wins on time.
    let mut rounds_seen = 0;
    for _ in 0..2_000 {
        if field.is_match_complete() {
            break;
        }
        if field.phase() == MatchPhase::Fight && field.round_number() > rounds_seen {
            rounds_seen = field.round_number();
            field.player_mut(Side::Two).actor_mut().set_health(100);
        }
        field.tick(DT, [InputSet::empty(), InputSet::empty()]);
    }

    assert!(field.is_match_complete());
    assert_eq!(rounds_seen, 2);
    assert_eq!(field.player(Side::One).wins(), 2);
    assert_eq!(field.set_winner(), Some(Side::One));
    assert_eq!(
        field.player(Side::One).actor().state_id(),
        StateId::Idle,
        "completion resets actors to their starts"
    );
    assert_ne!(
        field.player(Side::Two).actor().state_id(),
        StateId::Action(ActionKind::Defeat)
    );
}
