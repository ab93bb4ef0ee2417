//! One hit per attack activation, keyed by attack group id.

use std::sync::Arc;

use fight_core::presets::{self, JAB};
use fight_core::{
    ActionKind, AnimationKey, AnimationSpec, AttackBox, Battlefield, CharacterSpec, DefenseBox,
    FightConfig, Frame, InputSet, Rect, Side, StateId, Vec2, VisualRef,
};

const DT: f32 = 1000.0 / 60.0;
const IDLE: [InputSet; 2] = [InputSet::empty(), InputSet::empty()];

fn close_config() -> FightConfig {
    FightConfig::new().with_start_positions(Vec2::new(900.0, 900.0), Vec2::new(960.0, 900.0))
}

fn battlefield(config: FightConfig, character: CharacterSpec) -> Battlefield {
    let character = Arc::new(character);
    Battlefield::new(config, [character.clone(), character]).expect("valid setup")
}

fn health(field: &Battlefield, side: Side) -> i32 {
    field.player(side).actor().health()
}

fn settle(field: &mut Battlefield) {
    for _ in 0..60 {
        field.tick(DT, IDLE);
    }
}

#[test]
fn jab_lands_once_then_again_on_next_swing() {
    let mut field = battlefield(close_config(), presets::sparring_partner().expect("preset"));
    let max = field.config().max_health;

    field.tick(DT, [InputSet::BUTTON1, InputSet::empty()]);
    settle(&mut field);
    assert_eq!(health(&field, Side::Two), max - 10);

    // Close the gap again, then swing.
    for _ in 0..200 {
        let gap = field.player(Side::Two).actor().position().x
            - field.player(Side::One).actor().position().x;
        if gap <= 70.0 {
            break;
        }
        field.tick(DT, [InputSet::RIGHT, InputSet::empty()]);
    }
    field.tick(DT, [InputSet::BUTTON1, InputSet::empty()]);
    assert_eq!(
        field.player(Side::One).actor().state_id(),
        StateId::Action(ActionKind::Attack(JAB))
    );
    settle(&mut field);

    assert_eq!(health(&field, Side::Two), max - 20);
    assert_eq!(field.player(Side::One).stats().hits_landed, 2);
}

#[test]
fn each_group_in_a_multi_hit_lands_once() {
    let standing = DefenseBox::new(Rect::new(5.0, 0.0, 60, 100));
    let reach = Rect::new(60.0, 17.0, 60, 25);
    let frame = |id| Frame::new(VisualRef::new(id, 70)).with_defense(standing);
    let flurry = AnimationSpec::new(
        vec![
            frame(200),
            frame(201).with_attack(AttackBox::new(reach, 5, 20).with_group(1)),
            frame(202).with_attack(AttackBox::new(reach, 5, 20).with_group(1)),
            frame(203).with_attack(AttackBox::new(reach, 5, 20).with_group(2)),
            frame(204),
        ],
        3,
    )
    .expect("valid animation");
    let character = presets::sparring_partner()
        .expect("preset")
        .with_animation(AnimationKey::Action(ActionKind::Attack(JAB)), flurry);

    let mut config = close_config();
    config.attacker_pushback = 0.0;
    let mut field = battlefield(config, character);

    field.tick(DT, [InputSet::BUTTON1, InputSet::empty()]);
    let mut best_combo = 0;
    for _ in 0..40 {
        field.tick(DT, IDLE);
        best_combo = best_combo.max(field.player(Side::One).combo());
    }

    assert_eq!(health(&field, Side::Two), field.config().max_health - 10);
    assert_eq!(field.player(Side::One).stats().hits_landed, 2);
    assert_eq!(best_combo, 2);
}
