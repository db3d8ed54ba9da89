//! Terminal win/lose flash sequences.
//!
//! The naive way to flash a strip is to stop the world: fill, sleep,
//! clear, sleep, repeat. This crate never sleeps, so a flourish is a
//! prebuilt sequence of fill phases that the game walks through on its
//! normal ticks; while one is running the game advances nothing else,
//! which preserves the stood-still feel without stalling input
//! sampling or the host loop.

use embassy_time::Duration;
use heapless::Vec;

use crate::{
    color::{Rgb, colors},
    frame,
};

/// Longest built-in sequence: five on/off cycles plus a trailing hold.
const MAX_PHASES: usize = 12;

#[derive(Debug, Clone, Copy)]
struct Phase {
    color: Rgb,
    duration: Duration,
}

/// A scheduled full-strip flash sequence.
#[derive(Debug, Clone)]
pub struct Flourish {
    phases: Vec<Phase, MAX_PHASES>,
    index: usize,
    elapsed: Duration,
}

impl Default for Flourish {
    fn default() -> Self {
        Self {
            phases: Vec::new(),
            index: 0,
            elapsed: Duration::from_millis(0),
        }
    }
}

impl Flourish {
    /// Alternating `color`/black cycles of equal phase length.
    pub fn flashes(color: Rgb, cycles: usize, phase: Duration) -> Self {
        let mut sequence = Self::default();
        for _ in 0..cycles {
            sequence.push(color, phase);
            sequence.push(colors::BLACK, phase);
        }
        sequence
    }

    /// A single solid fill, used for non-terminal hit feedback.
    pub fn single(color: Rgb, duration: Duration) -> Self {
        let mut sequence = Self::default();
        sequence.push(color, duration);
        sequence
    }

    /// Append a dark hold at the end of the sequence.
    #[must_use]
    pub fn with_hold(mut self, duration: Duration) -> Self {
        self.push(colors::BLACK, duration);
        self
    }

    fn push(&mut self, color: Rgb, duration: Duration) {
        debug_assert!(!self.phases.is_full());
        let _ = self.phases.push(Phase { color, duration });
    }

    pub fn is_finished(&self) -> bool {
        self.index >= self.phases.len()
    }

    /// Advance by one tick's worth of time.
    ///
    /// Returns true once the final phase has elapsed; the owner drops
    /// the flourish and restarts the game on that tick.
    pub fn advance(&mut self, delta: Duration) -> bool {
        if self.is_finished() {
            return true;
        }

        self.elapsed += delta;
        while self.elapsed >= self.phases[self.index].duration {
            self.elapsed -= self.phases[self.index].duration;
            self.index += 1;
            if self.is_finished() {
                return true;
            }
        }
        false
    }

    /// Fill the strip with the current phase color.
    pub fn render(&self, cells: &mut [Rgb]) {
        let color = if self.is_finished() {
            colors::BLACK
        } else {
            self.phases[self.index].color
        };
        frame::fill(cells, color);
    }
}
