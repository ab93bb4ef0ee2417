//! Motion inputs driven through the battlefield from raw device state.

use std::sync::Arc;

use fight_core::presets::{self, FIREBALL, JAB};
use fight_core::{ActionKind, Battlefield, FightConfig, InputSet, RawInput, Side, StateId};

const DT: f32 = 1000.0 / 60.0;

fn field() -> Battlefield {
    let character = Arc::new(presets::sparring_partner().expect("preset builds"));
    Battlefield::new(FightConfig::new(), [character.clone(), character]).expect("valid setup")
}

fn raw(down: bool, left: bool, right: bool, button1: bool) -> RawInput {
    RawInput {
        down,
        left,
        right,
        button1,
        ..RawInput::default()
    }
}

/// Down, down-toward, toward, toward + button one.
fn quarter_circle(toward_right: bool) -> Vec<InputSet> {
    let (left, right) = (!toward_right, toward_right);
    vec![
        raw(true, false, false, false).normalize(),
        raw(true, left, right, false).normalize(),
        raw(false, left, right, false).normalize(),
        raw(false, left, right, true).normalize(),
    ]
}

fn feed(field: &mut Battlefield, side: Side, sequence: &[InputSet], gap: usize) {
    for (i, inputs) in sequence.iter().enumerate() {
        if i > 0 {
            for _ in 0..gap {
                field.tick(DT, [InputSet::empty(), InputSet::empty()]);
            }
        }
        let mut pair = [InputSet::empty(), InputSet::empty()];
        pair[side.index()] = *inputs;
        field.tick(DT, pair);
    }
}

fn state(field: &Battlefield, side: Side) -> StateId {
    field.player(side).actor().state_id()
}

#[test]
fn raw_input_opposing_pair_clears_directions() {
    let both = RawInput {
        left: true,
        right: true,
        up: true,
        ..RawInput::default()
    };
    assert_eq!(both.normalize(), InputSet::empty());
    assert_eq!(raw(true, false, true, true).normalize(), InputSet::DOWN_RIGHT | InputSet::BUTTON1);
}

#[test]
fn motion_is_relative_to_facing() {
    let mut field = field();
    feed(&mut field, Side::Two, &quarter_circle(false), 0);
    assert_eq!(state(&field, Side::Two), StateId::Action(ActionKind::Attack(FIREBALL)));

    let mut field = self::field();
    feed(&mut field, Side::Two, &quarter_circle(true), 0);
    assert_eq!(state(&field, Side::Two), StateId::Action(ActionKind::Attack(JAB)));
}

#[test]
fn short_gaps_stay_inside_the_buffer() {
    let window = FightConfig::new().motion_buffer_ticks as usize;

    let mut field = field();
    feed(&mut field, Side::One, &quarter_circle(true), window - 5);
    assert_eq!(state(&field, Side::One), StateId::Action(ActionKind::Attack(FIREBALL)));

    let mut field = self::field();
    feed(&mut field, Side::One, &quarter_circle(true), window + 5);
    assert_eq!(state(&field, Side::One), StateId::Action(ActionKind::Attack(JAB)));
}

#[test]
fn fireball_crosses_the_arena() {
    let mut field = field();
    feed(&mut field, Side::One, &quarter_circle(true), 0);

    let mut seen = false;
    for _ in 0..300 {
        field.tick(DT, [InputSet::empty(), InputSet::empty()]);
        let snapshot = field.snapshot();
        if let Some(projectile) = snapshot.players[0].actor.projectiles.first() {
            seen = true;
            assert_eq!(projectile.owner, Side::One);
            assert!(projectile.velocity.x > 0.0);
        }
        if snapshot.players[1].actor.health < snapshot.players[1].actor.max_health {
            break;
        }
    }
    assert!(seen);
    assert_eq!(
        field.player(Side::Two).actor().health(),
        field.config().max_health - 10
    );
}
