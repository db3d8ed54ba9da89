//! Game status tracking for telemetry sinks.
//!
//! The monitor keeps the last published view of the running game and
//! flags when any monitored field moved, so a network exposer only
//! hears about actual changes. Publishing is fire-and-forget: the core
//! owns no retries and ignores sink failures entirely.

use embassy_time::Instant;
use log::debug;

use crate::{color::Rgb, input::InputSnapshot};

/// Lifecycle state of the active game as seen from outside.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum GameState {
    Playing = 0,
    GameOver = 1,
    Won = 2,
    Paused = 3,
}

impl GameState {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Playing => "playing",
            Self::GameOver => "game_over",
            Self::Won => "won",
            Self::Paused => "paused",
        }
    }
}

/// One published status view. Cells are borrowed from the monitor.
#[derive(Debug, Clone, Copy)]
pub struct StatusReport<'a> {
    pub game_name: &'static str,
    pub score: u32,
    pub state: GameState,
    pub input: InputSnapshot,
    pub cells: &'a [Rgb],
    pub timestamp: Instant,
}

/// Consumer of status reports (web server, message-bus client).
pub trait StatusSink {
    fn publish(&mut self, report: &StatusReport<'_>);
}

impl<T: StatusSink> StatusSink for &mut T {
    fn publish(&mut self, report: &StatusReport<'_>) {
        (**self).publish(report);
    }
}

/// Sink for hosts without telemetry.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullStatusSink;

impl StatusSink for NullStatusSink {
    fn publish(&mut self, _report: &StatusReport<'_>) {}
}

/// Change-tracked status state for an N-cell strip.
#[derive(Debug, Clone)]
pub struct StatusMonitor<const N: usize> {
    game_name: &'static str,
    score: u32,
    state: GameState,
    input: InputSnapshot,
    cells: [Rgb; N],
    primed: bool,
}

impl<const N: usize> Default for StatusMonitor<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> StatusMonitor<N> {
    pub fn new() -> Self {
        Self {
            game_name: "Unknown",
            score: 0,
            state: GameState::Playing,
            input: InputSnapshot::default(),
            cells: [Rgb { r: 0, g: 0, b: 0 }; N],
            primed: false,
        }
    }

    /// Fold in the current view; true when anything differed from the
    /// last stored view (always true on the very first call).
    pub fn update(
        &mut self,
        game_name: &'static str,
        score: u32,
        state: GameState,
        input: InputSnapshot,
        cells: &[Rgb; N],
    ) -> bool {
        let mut changed = !self.primed;
        self.primed = true;

        if self.game_name != game_name {
            self.game_name = game_name;
            changed = true;
        }
        if self.score != score {
            self.score = score;
            changed = true;
        }
        if self.state != state {
            if matches!(state, GameState::GameOver | GameState::Won) {
                debug!("{} ended {} at score {}", game_name, state.as_str(), score);
            }
            self.state = state;
            changed = true;
        }
        if self.input != input {
            self.input = input;
            changed = true;
        }
        if self.cells != *cells {
            self.cells = *cells;
            changed = true;
        }

        changed
    }

    /// Build a report of the stored view with the given timestamp.
    pub fn report(&self, timestamp: Instant) -> StatusReport<'_> {
        StatusReport {
            game_name: self.game_name,
            score: self.score,
            state: self.state,
            input: self.input,
            cells: &self.cells,
            timestamp,
        }
    }
}
