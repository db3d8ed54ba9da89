//! Fixed-timestep simulation clock and game timers.
//!
//! Real time arrives in irregular deltas (the outer loop jitters with
//! I/O and rendering work); simulation advances in fixed-size ticks.
//! [`TickClock`] converts one into the other with an accumulator.
//! [`Interval`] and [`Countdown`] are the per-game timer building blocks
//! driven by those ticks.

use embassy_time::Duration;

const ZERO: Duration = Duration::from_millis(0);

/// Default bound on ticks released by a single `advance` call.
///
/// Past this the clock assumes real time jumped (host stall, debugger)
/// and drops the backlog instead of replaying it.
pub const DEFAULT_MAX_TICKS: u32 = 8;

/// Accumulating fixed-timestep driver.
///
/// Adds each real-time delta to a pending pool and releases one tick per
/// full tick duration in the pool, so simulation speed is independent of
/// how often the caller gets around to calling [`advance`](Self::advance).
/// After draining, less than one tick duration remains pending.
#[derive(Debug, Clone)]
pub struct TickClock {
    tick: Duration,
    pending: Duration,
    max_ticks: u32,
}

impl TickClock {
    /// Create a clock with the given tick size and no burst bound.
    pub const fn new(tick: Duration) -> Self {
        Self {
            tick,
            pending: ZERO,
            max_ticks: u32::MAX,
        }
    }

    /// Bound the number of ticks a single `advance` call may release.
    ///
    /// When the bound is hit, the remaining backlog is discarded down to
    /// the sub-tick remainder rather than carried into the next call.
    #[must_use]
    pub const fn with_max_ticks(mut self, max_ticks: u32) -> Self {
        self.max_ticks = max_ticks;
        self
    }

    /// Fixed tick size of this clock.
    pub const fn tick_duration(&self) -> Duration {
        self.tick
    }

    /// Time accumulated but not yet released as ticks.
    pub const fn pending(&self) -> Duration {
        self.pending
    }

    /// Forget any accumulated time.
    pub fn reset(&mut self) {
        self.pending = ZERO;
    }

    /// Add elapsed real time and release the ticks it covers.
    ///
    /// Invokes `on_tick` once per released tick and returns the count.
    /// Zero ticks is normal when the delta is small; many ticks in one
    /// call is intentional catch-up after a stall, bounded by
    /// [`with_max_ticks`](Self::with_max_ticks).
    pub fn advance(&mut self, delta: Duration, mut on_tick: impl FnMut()) -> u32 {
        self.pending += delta;

        let mut released = 0;
        while self.pending >= self.tick {
            self.pending -= self.tick;
            on_tick();
            released += 1;

            if released >= self.max_ticks {
                // Too far behind: keep the sub-tick remainder, drop the rest.
                let tick_units = self.tick.as_ticks();
                self.pending = Duration::from_ticks(self.pending.as_ticks() % tick_units);
                break;
            }
        }

        released
    }
}

/// Repeating timer that fires once per elapsed period.
///
/// Matches the spawn-timer convention used by every game: accumulate
/// tick time, fire when the period is reached, restart from zero (any
/// overshoot is dropped, keeping cadence phase-locked to ticks).
#[derive(Debug, Clone)]
pub struct Interval {
    period: Duration,
    elapsed: Duration,
}

impl Interval {
    pub const fn new(period: Duration) -> Self {
        Self {
            period,
            elapsed: ZERO,
        }
    }

    /// Advance by one tick's worth of time; true when the period elapsed.
    pub fn advance(&mut self, delta: Duration) -> bool {
        self.elapsed += delta;
        if self.elapsed >= self.period {
            self.elapsed = ZERO;
            true
        } else {
            false
        }
    }

    /// Restart the current period from zero.
    pub fn reset(&mut self) {
        self.elapsed = ZERO;
    }
}

/// One-shot countdown with saturating subtraction.
///
/// Idle until started; [`advance`](Self::advance) reports the single
/// tick on which the countdown ran out.
#[derive(Debug, Clone)]
pub struct Countdown {
    remaining: Duration,
}

impl Countdown {
    pub const fn idle() -> Self {
        Self { remaining: ZERO }
    }

    pub fn start(&mut self, duration: Duration) {
        self.remaining = duration;
    }

    pub fn cancel(&mut self) {
        self.remaining = ZERO;
    }

    pub const fn is_running(&self) -> bool {
        self.remaining.as_ticks() > 0
    }

    pub const fn remaining(&self) -> Duration {
        self.remaining
    }

    /// Advance by one tick's worth of time; true exactly when the
    /// countdown expires on this call. An idle countdown stays idle.
    pub fn advance(&mut self, delta: Duration) -> bool {
        if !self.is_running() {
            return false;
        }
        if self.remaining > delta {
            self.remaining -= delta;
            false
        } else {
            self.remaining = ZERO;
            true
        }
    }
}
