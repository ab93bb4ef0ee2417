//! Buffered motion-input recognition.

use arrayvec::ArrayVec;

use crate::actor::ActionKind;
use crate::config::FightConfig;
use crate::input::{InputSet, RelativeToken};

/// A motion input bound to an action, as authored in a character table.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MotionSpec {
    pub tokens: Vec<RelativeToken>,
    pub action: ActionKind,
}

impl MotionSpec {
    pub fn new(tokens: Vec<RelativeToken>, action: ActionKind) -> Self {
        Self { tokens, action }
    }
}

/// Sequence matcher over facing-relative tokens.
///
/// Matching advances the cursor and clears the miss counter. A run of
/// mismatched ticks longer than the buffer window rewinds the cursor.
#[derive(Clone, Debug, PartialEq)]
pub struct MoveRecognizer {
    tokens: ArrayVec<RelativeToken, { FightConfig::MAX_MOTION_TOKENS }>,
    action: ActionKind,
    cursor: usize,
    misses: u32,
    window: u32,
}

impl MoveRecognizer {
    /// Builds a recognizer. Tokens past `MAX_MOTION_TOKENS` are dropped;
    /// character validation rejects such motions earlier.
    pub fn new(spec: &MotionSpec, window: u32) -> Self {
        Self {
            tokens: spec.tokens.iter().copied().take(FightConfig::MAX_MOTION_TOKENS).collect(),
            action: spec.action,
            cursor: 0,
            misses: 0,
            window,
        }
    }

    /// Feeds one tick of input. Returns true when the whole motion completed.
    pub fn feed(&mut self, inputs: InputSet, facing_right: bool) -> bool {
        let Some(next) = self.tokens.get(self.cursor).copied() else {
            return false;
        };
        if inputs.relative(facing_right).has(next) {
            self.misses = 0;
            if self.cursor + 1 == self.tokens.len() {
                self.cursor = 0;
                return true;
            }
            self.cursor += 1;
        } else {
            self.misses += 1;
            if self.misses > self.window {
                self.cursor = 0;
                self.misses = 0;
            }
        }
        false
    }

    pub fn reset(&mut self) {
        self.cursor = 0;
        self.misses = 0;
    }

    pub fn action(&self) -> ActionKind {
        self.action
    }

    pub fn progress(&self) -> usize {
        self.cursor
    }
}
