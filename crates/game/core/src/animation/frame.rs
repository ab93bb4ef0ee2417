use crate::geometry::{AttackBox, DefenseBox, Vec2};

/// Renderer-side visual for a frame: an opaque id plus its width, which
/// mirroring needs to keep the draw offset attached to the body.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct VisualRef {
    pub id: u32,
    pub width: i32,
}

impl VisualRef {
    pub const fn new(id: u32, width: i32) -> Self {
        Self { id, width }
    }
}

/// One animation frame. All geometry assumes the actor faces right.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Frame {
    pub visual: VisualRef,
    pub defense: DefenseBox,
    pub attack: AttackBox,
    pub draw_offset: Vec2,
    /// Applied once to the actor's position when the frame is entered.
    pub position_delta: Vec2,
    /// Overrides the actor's velocity every tick while the frame is current.
    pub velocity: Option<Vec2>,
    /// Damage dealt to the actor playing this frame, applied on entry.
    pub damage_taken: i32,
}

impl Frame {
    pub fn new(visual: VisualRef) -> Self {
        Self {
            visual,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_defense(mut self, defense: DefenseBox) -> Self {
        self.defense = defense;
        self
    }

    #[must_use]
    pub fn with_attack(mut self, attack: AttackBox) -> Self {
        self.attack = attack;
        self
    }

    #[must_use]
    pub fn with_draw_offset(mut self, offset: Vec2) -> Self {
        self.draw_offset = offset;
        self
    }

    #[must_use]
    pub fn with_position_delta(mut self, delta: Vec2) -> Self {
        self.position_delta = delta;
        self
    }

    #[must_use]
    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = Some(velocity);
        self
    }

    #[must_use]
    pub fn with_damage_taken(mut self, damage: i32) -> Self {
        self.damage_taken = damage;
        self
    }

    /// Draw offset relocated for the given facing, with the visual drawn at
    /// `scale`.
    pub fn draw_offset_facing(&self, facing_right: bool, reference_width: f32, scale: f32) -> Vec2 {
        if facing_right {
            self.draw_offset
        } else {
            Vec2::new(
                -self.draw_offset.x + (reference_width - self.visual.width as f32) * scale,
                self.draw_offset.y,
            )
        }
    }
}
