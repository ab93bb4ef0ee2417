//! Frame data and animation playback.
//!
//! - [`Frame`]: immutable per-tick visual/gameplay record, authored facing right
//! - [`AnimationSpec`]: validated, shareable frame sequence plus stop policy
//! - [`Animation`]: playback cursor over an `Arc<AnimationSpec>`

mod frame;
mod playback;
mod spec;

pub use frame::{Frame, VisualRef};
pub use playback::Animation;
pub use spec::{AnimationError, AnimationSpec, ProjectileSpawn, StopPolicy};
