//! Press-and-hold translation into discrete life deltas.
//!
//! A quick tap yields a single step of one. Holding past [`HOLD_THRESHOLD`]
//! yields a step of five at the threshold and another every
//! [`REPEAT_INTERVAL`] until release; a release after the first repeat adds
//! nothing. The gesture never reads a clock itself: callers pass the instants
//! they observed, which keeps it deterministic under test.

use std::time::{Duration, Instant};

/// How long a press must last before repeats start.
pub const HOLD_THRESHOLD: Duration = Duration::from_secs(1);

/// Spacing between repeats once the threshold has passed.
pub const REPEAT_INTERVAL: Duration = Duration::from_secs(1);

pub const TAP_STEP: i32 = 1;
pub const REPEAT_STEP: i32 = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Increase,
    Decrease,
}

impl Direction {
    pub const fn sign(self) -> i32 {
        match self {
            Self::Increase => 1,
            Self::Decrease => -1,
        }
    }
}

/// A run of identical deltas produced by one poll or release.
///
/// Long holds yield large runs, so callers apply [`Steps::delta`] once rather
/// than one event per step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Steps {
    pub count: u32,
    pub step: i32,
}

impl Steps {
    pub const fn is_empty(self) -> bool {
        self.count == 0
    }

    /// Sum of the run, saturating at the `i32` bounds.
    pub fn delta(self) -> i32 {
        let total = i64::from(self.step) * i64::from(self.count);
        i32::try_from(total).unwrap_or(if total < 0 { i32::MIN } else { i32::MAX })
    }
}

/// One press target (the "+" or "-" half of a seat).
#[derive(Clone, Debug)]
pub struct HoldGesture {
    direction: Direction,
    pressed_at: Option<Instant>,
    repeats_emitted: u32,
}

impl HoldGesture {
    pub fn new(direction: Direction) -> Self {
        Self {
            direction,
            pressed_at: None,
            repeats_emitted: 0,
        }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn is_held(&self) -> bool {
        self.pressed_at.is_some()
    }

    /// Arms the gesture. A second press restarts the hold.
    pub fn press(&mut self, at: Instant) {
        self.pressed_at = Some(at);
        self.repeats_emitted = 0;
    }

    /// Repeat steps that fell due since the previous poll.
    pub fn poll(&mut self, now: Instant) -> Steps {
        let Some(pressed_at) = self.pressed_at else {
            return Steps::default();
        };
        let due = repeats_due(now.saturating_duration_since(pressed_at));
        let pending = due.saturating_sub(self.repeats_emitted);
        self.repeats_emitted = self.repeats_emitted.max(due);

        Steps {
            count: pending,
            step: REPEAT_STEP * self.direction.sign(),
        }
    }

    /// Disarms the gesture.
    ///
    /// Released before the threshold: a single tap step. Otherwise any
    /// repeats that fell due before `at` but were not polled yet, and no tap.
    /// Releasing an idle gesture yields nothing.
    pub fn release(&mut self, at: Instant) -> Steps {
        let Some(pressed_at) = self.pressed_at else {
            return Steps::default();
        };
        let steps = if at.saturating_duration_since(pressed_at) < HOLD_THRESHOLD
            && self.repeats_emitted == 0
        {
            Steps {
                count: 1,
                step: TAP_STEP * self.direction.sign(),
            }
        } else {
            self.poll(at)
        };

        self.pressed_at = None;
        self.repeats_emitted = 0;
        steps
    }
}

fn repeats_due(held: Duration) -> u32 {
    if held < HOLD_THRESHOLD {
        return 0;
    }
    let past_threshold = (held - HOLD_THRESHOLD).as_millis();
    let intervals = past_threshold / REPEAT_INTERVAL.as_millis().max(1);
    u32::try_from(intervals).unwrap_or(u32::MAX - 1) + 1
}
