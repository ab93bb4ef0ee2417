use super::Vec2;

/// Axis-aligned rectangle relative to an anchor.
///
/// A rectangle with zero width and height is the "no box" sentinel.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Rect {
    pub offset: Vec2,
    pub width: i32,
    pub height: i32,
}

/// Resolved world-space edges of a rectangle.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edges {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Rect {
    pub const NONE: Rect = Rect::new(0.0, 0.0, 0, 0);

    pub const fn new(x: f32, y: f32, width: i32, height: i32) -> Self {
        Self {
            offset: Vec2::new(x, y),
            width,
            height,
        }
    }

    pub const fn is_none(&self) -> bool {
        self.width == 0 && self.height == 0
    }

    /// Relocates the rectangle for a left-facing actor whose visual is
    /// `reference_width` wide, so it stays attached to the same landmark.
    ///
    /// Widths are mirrored at `scale`, matching how [`Rect::edges`] stretches
    /// them, so both facings are reflections of each other at any scale.
    #[must_use]
    pub fn mirrored(self, reference_width: f32, scale: f32) -> Self {
        Self {
            offset: Vec2::new(
                -self.offset.x + (reference_width - self.width as f32) * scale,
                self.offset.y,
            ),
            ..self
        }
    }

    /// Mirrors only when `facing_right` is false.
    #[must_use]
    pub fn facing(self, facing_right: bool, reference_width: f32, scale: f32) -> Self {
        if facing_right {
            self
        } else {
            self.mirrored(reference_width, scale)
        }
    }

    /// World edges at `anchor`. The offset is used as-is; `scale` only
    /// stretches width and height.
    pub fn edges(&self, anchor: Vec2, scale: f32) -> Edges {
        let left = anchor.x + self.offset.x;
        let top = anchor.y + self.offset.y;
        Edges {
            left,
            right: left + self.width as f32 * scale,
            top,
            bottom: top + self.height as f32 * scale,
        }
    }
}

/// Closed-interval AABB test between two anchored rectangles.
///
/// Returns false when either rectangle is the zero-area sentinel.
pub fn overlaps(a: &Rect, a_anchor: Vec2, a_scale: f32, b: &Rect, b_anchor: Vec2, b_scale: f32) -> bool {
    if a.is_none() || b.is_none() {
        return false;
    }
    let a = a.edges(a_anchor, a_scale);
    let b = b.edges(b_anchor, b_scale);
    a.right >= b.left && a.left <= b.right && a.bottom >= b.top && a.top <= b.bottom
}

/// Active attack geometry tagged with damage, stun and activation group.
///
/// Two attack boxes compare equal when width, height and damage match. The
/// offset is ignored because it moves with facing, and the group and stun
/// values do not change within a swing.
#[derive(Clone, Copy, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AttackBox {
    pub rect: Rect,
    pub damage: i32,
    /// Ticks of hitstun imposed on a defender that does not block.
    pub stun_frames: u32,
    /// Activation id; one activation lands at most one hit.
    pub group_id: u32,
}

impl AttackBox {
    pub const NONE: AttackBox = AttackBox {
        rect: Rect::NONE,
        damage: 0,
        stun_frames: 0,
        group_id: 0,
    };

    pub const fn new(rect: Rect, damage: i32, stun_frames: u32) -> Self {
        Self {
            rect,
            damage,
            stun_frames,
            group_id: 1,
        }
    }

    #[must_use]
    pub const fn with_group(mut self, group_id: u32) -> Self {
        self.group_id = group_id;
        self
    }

    pub const fn is_none(&self) -> bool {
        self.rect.is_none()
    }

    #[must_use]
    pub fn facing(self, facing_right: bool, reference_width: f32, scale: f32) -> Self {
        Self {
            rect: self.rect.facing(facing_right, reference_width, scale),
            ..self
        }
    }
}

impl PartialEq for AttackBox {
    fn eq(&self, other: &Self) -> bool {
        self.rect.width == other.rect.width
            && self.rect.height == other.rect.height
            && self.damage == other.damage
    }
}

/// Hittable geometry. A blocking box turns hits into blocks.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DefenseBox {
    pub rect: Rect,
    pub blocking: bool,
}

impl DefenseBox {
    pub const NONE: DefenseBox = DefenseBox {
        rect: Rect::NONE,
        blocking: false,
    };

    pub const fn new(rect: Rect) -> Self {
        Self {
            rect,
            blocking: false,
        }
    }

    pub const fn blocking(rect: Rect) -> Self {
        Self {
            rect,
            blocking: true,
        }
    }

    #[must_use]
    pub fn facing(self, facing_right: bool, reference_width: f32, scale: f32) -> Self {
        Self {
            rect: self.rect.facing(facing_right, reference_width, scale),
            ..self
        }
    }
}
