//! Elapsed-time sources
//!
//! The game loop never reads a clock itself; a driver samples one of these
//! and feeds the delta to [`Game::update`](crate::game::Game::update).

use std::collections::VecDeque;
use std::time::Instant;

/// Supplies non-negative nanosecond deltas on demand
pub trait TimeSource {
    /// Time elapsed since the previous sample
    fn elapsed_ns(&mut self) -> u64;
}

/// Wall-clock source backed by [`Instant`]
#[derive(Debug, Clone)]
pub struct MonotonicTimer {
    last: Instant,
}

impl MonotonicTimer {
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
        }
    }

    /// Forget any time accumulated since the last sample
    pub fn reset(&mut self) {
        self.last = Instant::now();
    }
}

impl Default for MonotonicTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeSource for MonotonicTimer {
    fn elapsed_ns(&mut self) -> u64 {
        let now = Instant::now();
        let delta = now.duration_since(self.last);
        self.last = now;
        u64::try_from(delta.as_nanos()).unwrap_or(u64::MAX)
    }
}

/// Scripted source for tests: replays deltas, then reports zero
#[derive(Debug, Clone, Default)]
pub struct ManualTimer {
    deltas: VecDeque<u64>,
}

impl ManualTimer {
    pub fn new(deltas: impl IntoIterator<Item = u64>) -> Self {
        Self {
            deltas: deltas.into_iter().collect(),
        }
    }

    pub fn push(&mut self, delta_ns: u64) {
        self.deltas.push_back(delta_ns);
    }

    pub fn remaining(&self) -> usize {
        self.deltas.len()
    }
}

impl TimeSource for ManualTimer {
    fn elapsed_ns(&mut self) -> u64 {
        self.deltas.pop_front().unwrap_or(0)
    }
}
