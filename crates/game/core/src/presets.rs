//! Built-in sample characters.
//!
//! Useful for tests, tooling and as a template for authored tables.

use std::sync::Arc;

use crate::actor::{ActionKind, MoveId, ProjectileSpec};
use crate::animation::{AnimationError, AnimationSpec, Frame, ProjectileSpawn, StopPolicy, VisualRef};
use crate::character::{AnimationKey, AttackBinding, CharacterError, CharacterSpec};
use crate::geometry::{AttackBox, DefenseBox, Rect, Vec2};
use crate::input::{InputToken, RelativeToken};
use crate::motion::MotionSpec;

pub const JAB: MoveId = MoveId(1);
pub const LOW_KICK: MoveId = MoveId(2);
pub const JUMP_ATTACK: MoveId = MoveId(3);
pub const FIREBALL: MoveId = MoveId(4);

/// Horizontal reach of the throw binding.
pub const THROW_RANGE: f32 = 90.0;
/// Damage dealt by the thrown animation.
pub const THROW_DAMAGE: i32 = 15;

const STANDING: DefenseBox = DefenseBox::new(Rect::new(5.0, 0.0, 60, 100));
const CROUCHING: DefenseBox = DefenseBox::new(Rect::new(5.0, 40.0, 60, 60));
const AIRBORNE: DefenseBox = DefenseBox::new(Rect::new(5.0, 0.0, 60, 60));

fn frames(first_visual: u32, count: u32, defense: DefenseBox) -> Vec<Frame> {
    (0..count)
        .map(|i| Frame::new(VisualRef::new(first_visual + i, 70)).with_defense(defense))
        .collect()
}

fn build(frames: Vec<Frame>, ticks_per_frame: u32) -> Result<AnimationSpec, AnimationError> {
    AnimationSpec::new(frames, ticks_per_frame)
}

/// Startup, active and recovery frames around one attack box.
fn strike(
    first_visual: u32,
    attack: AttackBox,
    ticks_per_frame: u32,
) -> Result<AnimationSpec, AnimationError> {
    let mut frames = frames(first_visual, 3, STANDING);
    frames[1] = frames[1].with_attack(attack);
    build(frames, ticks_per_frame)
}

/// A general-purpose fighter with normals, a fireball motion and a throw.
pub fn sparring_partner() -> Result<CharacterSpec, CharacterError> {
    let jab = strike(
        40,
        AttackBox::new(Rect::new(60.0, 17.0, 25, 25), 10, 9).with_group(1),
        3,
    )?;
    let low_kick = strike(
        44,
        AttackBox::new(Rect::new(55.0, 70.0, 35, 20), 12, 12).with_group(2),
        4,
    )?;

    let mut air = frames(48, 3, AIRBORNE);
    air[1] = air[1].with_attack(AttackBox::new(Rect::new(45.0, 50.0, 30, 30), 14, 14).with_group(3));
    let jump_attack = build(air, 4)?.with_stop(StopPolicy::ON_LANDING | StopPolicy::LANDING_BEFORE_FINISH);

    let fireball = build(frames(52, 5, STANDING), 4)?.with_projectile(ProjectileSpawn {
        frame: 3,
        projectile: ProjectileSpec {
            offset: Vec2::new(60.0, 30.0),
            width: 40,
            speed: 420.0,
            attack: AttackBox::new(Rect::new(0.0, 0.0, 40, 40), 10, 12),
            visual: VisualRef::new(90, 40),
        },
    })?;

    let mut thrown = frames(60, 4, DefenseBox::NONE);
    thrown[2] = thrown[2]
        .with_damage_taken(THROW_DAMAGE)
        .with_position_delta(Vec2::new(-20.0, 0.0));
    let thrown = Arc::new(build(thrown, 5)?);
    let follow_through = Arc::new(build(frames(64, 4, STANDING), 5)?.with_opponent(thrown));
    let mut grab = frames(68, 3, STANDING);
    grab[1] = grab[1].with_attack(AttackBox::new(Rect::new(50.0, 20.0, 30, 40), 0, 0).with_group(5));
    let throw = build(grab, 3)?.with_secondary(follow_through);

    let walk_backward: Vec<Frame> = frames(12, 4, DefenseBox::blocking(STANDING.rect));

    Ok(CharacterSpec::new("sparring partner")
        .with_animation(AnimationKey::Idle, build(frames(0, 4, STANDING), 8)?.looping())
        .with_animation(AnimationKey::WalkForward, build(frames(4, 4, STANDING), 6)?.looping())
        .with_animation(AnimationKey::WalkBackward, build(walk_backward, 6)?.looping())
        .with_animation(AnimationKey::TurnAround, build(frames(16, 2, STANDING), 3)?)
        .with_animation(
            AnimationKey::Action(ActionKind::Jump),
            build(frames(20, 3, AIRBORNE), 10)?
                .with_stop(StopPolicy::ON_LANDING | StopPolicy::LANDING_BEFORE_FINISH),
        )
        .with_animation(
            AnimationKey::Action(ActionKind::Crouch),
            build(frames(24, 1, CROUCHING), 1)?.with_stop(StopPolicy::empty()),
        )
        .with_animation(
            AnimationKey::Action(ActionKind::Block),
            build(frames(26, 2, DefenseBox::blocking(STANDING.rect)), 4)?,
        )
        .with_animation(
            AnimationKey::Action(ActionKind::Hitstun),
            build(frames(28, 2, STANDING), 3)?
                .looping()
                .with_stop(StopPolicy::ON_HITSTUN),
        )
        .with_animation(
            AnimationKey::Action(ActionKind::Victory),
            build(frames(30, 2, STANDING), 10)?.with_stop(StopPolicy::empty()),
        )
        .with_animation(
            AnimationKey::Action(ActionKind::Defeat),
            build(frames(32, 2, STANDING), 10)?.with_stop(StopPolicy::empty()),
        )
        .with_animation(AnimationKey::Action(ActionKind::Throw), throw)
        .with_animation(AnimationKey::Action(ActionKind::Attack(JAB)), jab)
        .with_animation(AnimationKey::Action(ActionKind::Attack(LOW_KICK)), low_kick)
        .with_animation(AnimationKey::Action(ActionKind::Attack(JUMP_ATTACK)), jump_attack)
        .with_animation(AnimationKey::Action(ActionKind::Attack(FIREBALL)), fireball)
        .with_attack(AttackBinding::new(InputToken::Button3, ActionKind::Throw).within(THROW_RANGE))
        .with_attack(AttackBinding::new(InputToken::Button1, ActionKind::Attack(JAB)))
        .with_attack(AttackBinding::new(InputToken::Button2, ActionKind::Attack(LOW_KICK)))
        .with_air_attack(AttackBinding::new(InputToken::Button1, ActionKind::Attack(JUMP_ATTACK)))
        .with_air_attack(AttackBinding::new(InputToken::Button2, ActionKind::Attack(JUMP_ATTACK)))
        .with_motion(MotionSpec::new(
            vec![
                RelativeToken::Down,
                RelativeToken::DownForward,
                RelativeToken::Forward,
                RelativeToken::Button1,
            ],
            ActionKind::Attack(FIREBALL),
        )))
}
