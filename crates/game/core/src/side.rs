//! Two-slot match registry handles.
//!
//! An actor never owns or points at its opponent. It records the opposing
//! [`Side`] and the [`Battlefield`](crate::Battlefield) hands out both slots
//! when a tick needs them.

/// One of the two fixed slots in a match.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    One,
    Two,
}

impl Side {
    /// Both slots in update order.
    pub const BOTH: [Side; 2] = [Side::One, Side::Two];

    pub const fn opponent(self) -> Side {
        match self {
            Side::One => Side::Two,
            Side::Two => Side::One,
        }
    }

    pub const fn index(self) -> usize {
        match self {
            Side::One => 0,
            Side::Two => 1,
        }
    }
}

/// Borrows the slot for `side` mutably together with its opponent's slot.
pub fn split_pair<T>(pair: &mut [T; 2], side: Side) -> (&mut T, &mut T) {
    let (first, second) = pair.split_at_mut(1);
    match side {
        Side::One => (&mut first[0], &mut second[0]),
        Side::Two => (&mut second[0], &mut first[0]),
    }
}
