use crate::animation::VisualRef;
use crate::geometry::{AttackBox, Vec2};
use crate::side::Side;

/// Authored projectile: where it appears relative to the owner's draw
/// anchor (facing right), how fast it flies and what it hits with.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProjectileSpec {
    pub offset: Vec2,
    pub width: i32,
    /// World units per second.
    pub speed: f32,
    /// Attack box relative to the projectile's own position.
    pub attack: AttackBox,
    pub visual: VisualRef,
}

/// A live projectile owned by the actor that launched it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projectile {
    owner: Side,
    position: Vec2,
    velocity: Vec2,
    attack: AttackBox,
    visual: VisualRef,
    active: bool,
}

impl Projectile {
    /// Launches from the owner's draw anchor, mirrored for a left-facing owner.
    pub fn launch(
        owner: Side,
        anchor: Vec2,
        facing_right: bool,
        reference_width: f32,
        spec: &ProjectileSpec,
    ) -> Self {
        let x = if facing_right {
            spec.offset.x
        } else {
            reference_width - spec.offset.x - spec.width as f32
        };
        let speed = if facing_right { spec.speed } else { -spec.speed };
        Self {
            owner,
            position: anchor + Vec2::new(x, spec.offset.y),
            velocity: Vec2::new(speed, 0.0),
            attack: spec.attack.facing(facing_right, spec.width as f32, 1.0),
            visual: spec.visual,
            active: true,
        }
    }

    /// Moves the projectile and deactivates it once it leaves `left..=right`.
    pub fn advance(&mut self, dt_ms: f32, left: f32, right: f32) {
        if !self.active {
            return;
        }
        self.position += self.velocity * (dt_ms / 1000.0);
        if self.position.x < left || self.position.x > right {
            self.active = false;
        }
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }

    pub fn owner(&self) -> Side {
        self.owner
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn attack(&self) -> &AttackBox {
        &self.attack
    }

    pub fn visual(&self) -> VisualRef {
        self.visual
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Rect;

    fn spec() -> ProjectileSpec {
        ProjectileSpec {
            offset: Vec2::new(60.0, 30.0),
            width: 40,
            speed: 600.0,
            attack: AttackBox::new(Rect::new(0.0, 0.0, 40, 40), 10, 12),
            visual: VisualRef::new(90, 40),
        }
    }

    #[test]
    fn launch_mirrors_for_left_facing_owner() {
        let anchor = Vec2::new(100.0, 800.0);
        let right = Projectile::launch(Side::One, anchor, true, 70.0, &spec());
        let left = Projectile::launch(Side::Two, anchor, false, 70.0, &spec());
        assert_eq!(right.position(), Vec2::new(160.0, 830.0));
        assert_eq!(left.position(), Vec2::new(70.0, 830.0));
        assert!(right.velocity().x > 0.0);
        assert!(left.velocity().x < 0.0);
        assert_eq!(left.owner(), Side::Two);
    }

    #[test]
    fn deactivates_outside_arena() {
        let mut projectile = Projectile::launch(Side::One, Vec2::new(1800.0, 800.0), true, 70.0, &spec());
        projectile.advance(100.0, 0.0, 1920.0);
        assert!(projectile.is_active());
        projectile.advance(1000.0, 0.0, 1920.0);
        assert!(!projectile.is_active());
        let stopped = projectile.position();
        projectile.advance(1000.0, 0.0, 1920.0);
        assert_eq!(projectile.position(), stopped);
    }
}
