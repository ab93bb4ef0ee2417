//! Countdown / count-up interval primitive.
//!
//! Ticks arrive in milliseconds; clocks store seconds.

/// A countdown or stopwatch driven by external ticks.
///
/// A countdown latches [`is_finished`](Self::is_finished) once it reaches zero
/// and ignores further updates until [`reset`](Self::reset). A stopwatch counts
/// up forever and never finishes.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Clock {
    value: f32,
    start: f32,
    countdown: bool,
    finished: bool,
}

impl Clock {
    /// A clock counting down from `seconds`.
    pub const fn countdown(seconds: f32) -> Self {
        Self {
            value: seconds,
            start: seconds,
            countdown: true,
            finished: false,
        }
    }

    /// A clock counting up from zero.
    pub const fn stopwatch() -> Self {
        Self {
            value: 0.0,
            start: 0.0,
            countdown: false,
            finished: false,
        }
    }

    /// Advances the clock by `dt_ms` milliseconds.
    pub fn update(&mut self, dt_ms: f32) {
        if self.countdown && self.finished {
            return;
        }
        let dt = dt_ms / 1000.0;
        if self.countdown {
            self.value -= dt;
            if self.value <= 0.0 {
                self.value = 0.0;
                self.finished = true;
            }
        } else {
            self.value += dt;
        }
    }

    /// Restores the starting value and clears the finished latch.
    pub fn reset(&mut self) {
        self.value = self.start;
        self.finished = false;
    }

    /// Turns this clock into a countdown from `seconds` and resets it.
    pub fn restart(&mut self, seconds: f32) {
        *self = Self::countdown(seconds);
    }

    /// Remaining (countdown) or elapsed (stopwatch) seconds.
    pub const fn time(&self) -> f32 {
        self.value
    }

    /// Whole seconds, truncated toward zero, as shown on a round timer.
    pub fn whole_seconds(&self) -> i32 {
        self.value as i32
    }

    pub const fn is_finished(&self) -> bool {
        self.finished
    }

    pub const fn is_countdown(&self) -> bool {
        self.countdown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn countdown_latches_and_holds_value() {
        let mut clock = Clock::countdown(3.0);
        for _ in 0..3 {
            assert!(!clock.is_finished());
            clock.update(1000.0);
        }
        assert!(clock.is_finished());
        let value = clock.time();
        clock.update(1000.0);
        clock.update(250.0);
        assert!(clock.is_finished());
        assert_eq!(clock.time(), value);
    }

    #[test]
    fn stopwatch_counts_up_and_never_finishes() {
        let mut clock = Clock::stopwatch();
        clock.update(500.0);
        clock.update(1500.0);
        assert_eq!(clock.time(), 2.0);
        assert_eq!(clock.whole_seconds(), 2);
        assert!(!clock.is_finished());
    }

    #[test]
    fn reset_restores_start_and_clears_latch() {
        let mut clock = Clock::countdown(1.0);
        clock.update(2000.0);
        assert!(clock.is_finished());
        clock.reset();
        assert_eq!(clock.time(), 1.0);
        assert!(!clock.is_finished());

        let mut watch = Clock::stopwatch();
        watch.update(750.0);
        watch.reset();
        assert_eq!(watch.time(), 0.0);
    }

    #[test]
    fn restart_switches_duration() {
        let mut clock = Clock::countdown(0.0);
        clock.update(16.0);
        assert!(clock.is_finished());
        clock.restart(0.1);
        assert!(!clock.is_finished());
        clock.update(50.0);
        assert!(!clock.is_finished());
        clock.update(50.0);
        assert!(clock.is_finished());
    }
}
