//! Collision geometry: vectors, boxes and the overlap predicate.
//!
//! Boxes are authored relative to an actor's draw anchor (top-left of the
//! visual) assuming the actor faces right. [`Rect::mirrored`] relocates a box
//! for a left-facing actor.

mod boxes;
mod vector;

pub use boxes::{AttackBox, DefenseBox, Edges, Rect, overlaps};
pub use vector::Vec2;
