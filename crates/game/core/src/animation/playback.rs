use std::sync::Arc;

use super::{AnimationSpec, Frame};

/// Playback state over a shared [`AnimationSpec`].
///
/// Each frame stays current for `ticks_per_frame` calls to [`advance`],
/// counting the tick on which it was entered.
///
/// [`advance`]: Animation::advance
#[derive(Clone, Debug)]
pub struct Animation {
    spec: Arc<AnimationSpec>,
    index: usize,
    ticks: u32,
    finished: bool,
}

impl Animation {
    pub fn new(spec: Arc<AnimationSpec>) -> Self {
        Self {
            spec,
            index: 0,
            ticks: 0,
            finished: false,
        }
    }

    /// Steps one tick. Returns true when a new frame became current.
    pub fn advance(&mut self) -> bool {
        if self.finished {
            return false;
        }
        self.ticks += 1;
        if self.ticks < self.spec.ticks_per_frame() {
            return false;
        }
        self.ticks = 0;
        if self.index + 1 < self.spec.len() {
            self.index += 1;
            true
        } else if self.spec.is_looping() {
            self.index = 0;
            true
        } else {
            self.finished = true;
            false
        }
    }

    /// Rewinds to the first frame.
    pub fn reset(&mut self) {
        self.index = 0;
        self.ticks = 0;
        self.finished = false;
    }

    pub fn frame(&self) -> &Frame {
        self.spec.frame(self.index)
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn spec(&self) -> &Arc<AnimationSpec> {
        &self.spec
    }

    /// True when this playback runs exactly `spec`.
    pub fn plays(&self, spec: &Arc<AnimationSpec>) -> bool {
        Arc::ptr_eq(&self.spec, spec)
    }
}
