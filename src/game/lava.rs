//! Shared lava field for the crossing games
//!
//! Every interior cell toggles between erupting and cool on its own
//! timer. End cells stay safe so the start and goal are always usable.

use libm::sinf;

use crate::color::Rgb;
use crate::rng::Rng;

const INITIAL_ERUPT_ODDS: u32 = 3;

/// Per-cell eruption state with independent toggle timers
#[derive(Debug, Clone)]
pub(super) struct LavaField<const N: usize> {
    active: [bool; N],
    timers: [u64; N],
    erupt_ms: u64,
    cool_ms: u64,
}

impl<const N: usize> LavaField<N> {
    pub(super) const fn new(erupt_ms: u64, cool_ms: u64) -> Self {
        Self {
            active: [false; N],
            timers: [0; N],
            erupt_ms,
            cool_ms,
        }
    }

    pub(super) fn reset(&mut self) {
        self.active = [false; N];
        self.timers = [0; N];
    }

    /// Advance every interior cell by one tick.
    ///
    /// A zeroed timer marks an unseeded cell; the first tick after a
    /// reset rolls its initial state.
    pub(super) fn advance(&mut self, tick_ms: u64, rng: &mut Rng) {
        for i in 1..N - 1 {
            if self.timers[i] > 0 {
                self.timers[i] = self.timers[i].saturating_sub(tick_ms);
                if self.timers[i] == 0 {
                    self.active[i] = !self.active[i];
                    self.timers[i] = if self.active[i] {
                        self.erupt_ms
                    } else {
                        self.cool_ms
                    };
                }
            } else if rng.one_in(INITIAL_ERUPT_ODDS) {
                self.active[i] = true;
                self.timers[i] = self.erupt_ms;
            } else {
                self.active[i] = false;
                self.timers[i] = self.cool_ms;
            }
        }
    }

    pub(super) const fn is_active(&self, index: usize) -> bool {
        self.active[index]
    }

    /// Draw every erupting cell with the shared pulse color
    pub(super) fn render(&self, cells: &mut [Rgb; N], age_ms: u64) {
        let color = pulse_color(age_ms);
        for (cell, active) in cells.iter_mut().zip(self.active.iter()) {
            if *active {
                *cell = color;
            }
        }
    }
}

/// Pulsing ember color derived from the game age
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss, clippy::cast_sign_loss)]
pub(super) fn pulse_color(age_ms: u64) -> Rgb {
    let wave = sinf(age_ms as f32 / 50.0);
    let intensity = (128.0 + wave * 127.0) as u8;
    Rgb::new(intensity, intensity / 4, 0)
}
