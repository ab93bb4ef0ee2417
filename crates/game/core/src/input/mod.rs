//! Normalized input vocabulary.
//!
//! The core consumes one [`InputSet`] per actor per tick. [`RawInput`] is the
//! adapter-side helper that turns held keys into that normalized set.

mod history;
mod token;

pub use history::InputHistory;
pub use token::{InputSet, InputToken, RawInput, RelativeSet, RelativeToken};
