use arrayvec::ArrayVec;

use super::InputSet;
use crate::config::FightConfig;

/// Most recent input sets, oldest first. Full history evicts the oldest.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InputHistory {
    entries: ArrayVec<InputSet, { FightConfig::MAX_INPUT_HISTORY }>,
}

impl InputHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, inputs: InputSet) {
        if self.entries.is_full() {
            self.entries.remove(0);
        }
        self.entries.push(inputs);
    }

    pub fn latest(&self) -> InputSet {
        self.entries.last().copied().unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = &InputSet> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
