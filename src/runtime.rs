//! Fixed-cadence game runtime.
//!
//! One [`Runtime::tick`] per display frame: drain control intents,
//! sample input, release simulation ticks (each drawing over the
//! persistent canvas), flush the strip, publish status. The caller
//! owns the outer loop and sleeps for the returned duration, so the
//! same runtime works under an async executor or a bare busy loop.

use embassy_time::{Duration, Instant};
use log::warn;

use crate::{
    OutputDriver,
    color::{self, Rgb, colors},
    control::{ControlIntent, ControlReceiver},
    frame,
    input::{DEFAULT_DEBOUNCE_INTERVAL, InputDebouncer, InputSource, LatchedInput},
    selector::GameSelector,
    status::{GameState, StatusMonitor, StatusSink},
    store::SelectionStore,
    timestep::DEFAULT_MAX_TICKS,
};

/// Default display frames per second.
pub const DEFAULT_FPS: u32 = 90;

/// Default duration of one display frame.
pub const DEFAULT_FRAME_DURATION: Duration = Duration::from_millis(1000 / DEFAULT_FPS as u64);

/// Pacing outcome of one runtime iteration.
#[derive(Debug, Clone, Copy)]
pub struct FrameResult {
    /// When the next frame should start.
    pub next_deadline: Instant,
    /// How long the caller should sleep before it.
    pub sleep_duration: Duration,
}

/// Tunables for [`Runtime`]. `Default` matches the shipped console.
#[derive(Debug, Clone, Copy)]
pub struct RuntimeConfig {
    /// Display frame period. Simulation cadence is per-game and
    /// independent of this.
    pub frame_duration: Duration,
    /// Global brightness applied to the flushed copy only.
    pub brightness: u8,
    /// Minimum interval between accepted presses of one button.
    pub debounce_interval: Duration,
    /// Tick backlog clamp after a stall.
    pub max_catch_up_ticks: u32,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            frame_duration: DEFAULT_FRAME_DURATION,
            brightness: 255,
            debounce_interval: DEFAULT_DEBOUNCE_INTERVAL,
            max_catch_up_ticks: DEFAULT_MAX_TICKS,
        }
    }
}

/// Orchestrator tying input, games, display and status together.
///
/// Generic over the platform seams so hosts and tests plug in their
/// own drivers: `I` samples touch levels, `O` drives the strip, `S`
/// persists the game selection, `T` consumes status reports.
pub struct Runtime<'a, I, O, S, T, const N: usize, const INTENTS: usize> {
    input: I,
    output: O,
    sink: T,
    selector: GameSelector<S, N>,
    intents: ControlReceiver<'a, INTENTS>,
    debouncer: InputDebouncer,
    latched: LatchedInput,
    monitor: StatusMonitor<N>,
    cells: [Rgb; N],
    flush: [Rgb; N],
    brightness: u8,
    paused: bool,
    last_instant: Option<Instant>,
    next_frame: Instant,
    frame_duration: Duration,
}

impl<'a, I, O, S, T, const N: usize, const INTENTS: usize> Runtime<'a, I, O, S, T, N, INTENTS>
where
    I: InputSource,
    O: OutputDriver,
    S: SelectionStore,
    T: StatusSink,
{
    pub fn new(
        config: &RuntimeConfig,
        input: I,
        output: O,
        store: S,
        sink: T,
        intents: ControlReceiver<'a, INTENTS>,
        seed: u32,
    ) -> Self {
        Self {
            input,
            output,
            sink,
            selector: GameSelector::new(store, seed).with_max_ticks(config.max_catch_up_ticks),
            intents,
            debouncer: InputDebouncer::with_interval(config.debounce_interval),
            latched: LatchedInput::default(),
            monitor: StatusMonitor::new(),
            cells: [colors::BLACK; N],
            flush: [colors::BLACK; N],
            brightness: config.brightness,
            paused: false,
            last_instant: None,
            next_frame: Instant::from_millis(0),
            frame_duration: config.frame_duration,
        }
    }

    /// Run one frame at `now` and return the pacing for the next.
    ///
    /// The order inside a frame is fixed: control intents drain first,
    /// so a game switch never interleaves with ticks of the old game;
    /// input is sampled and debounced next; then the active game
    /// consumes the elapsed wall time as zero or more fixed ticks,
    /// drawing over the working buffer after each one; finally a
    /// brightness-scaled copy is flushed to the output driver and the
    /// status sink hears about changes. Frames that release no tick
    /// re-flush the buffer as-is.
    ///
    /// A stall longer than two frame periods resets the schedule to
    /// `now` instead of fast-forwarding through the lost frames.
    pub fn tick(&mut self, now: Instant) -> FrameResult {
        self.process_intents();
        self.sample_input(now);
        self.advance_simulation(now);
        self.flush_strip();
        self.publish_status(now);
        self.pace(now)
    }

    /// Read access to the selector for host control surfaces.
    pub const fn selector(&self) -> &GameSelector<S, N> {
        &self.selector
    }

    pub fn selector_mut(&mut self) -> &mut GameSelector<S, N> {
        &mut self.selector
    }

    pub const fn is_paused(&self) -> bool {
        self.paused
    }

    fn process_intents(&mut self) {
        while let Some(intent) = self.intents.try_receive() {
            match intent {
                ControlIntent::SelectGame(raw) => {
                    if !self.selector.set_active(raw) {
                        warn!("dropping select for unknown game id {}", raw);
                    }
                }
                ControlIntent::Pause => self.paused = true,
                ControlIntent::Resume => self.paused = false,
            }
        }
    }

    fn sample_input(&mut self, now: Instant) {
        let raw = self.input.sample_raw();
        self.debouncer.update(raw, now);
        self.latched.merge(self.debouncer.snapshot());
    }

    /// Feed elapsed wall time to the active game.
    ///
    /// Each released tick steps the game and lets it draw over the
    /// working buffer, so the per-tick fade the games open with runs
    /// at simulation rate, not frame rate. While paused the delta is
    /// discarded, so resuming never releases a burst of catch-up ticks
    /// covering the paused span. Latched edges are dropped when ticks
    /// consumed them or when pause made them stale.
    fn advance_simulation(&mut self, now: Instant) {
        let delta = self.step_delta(now);

        if self.selector.take_pending_clear() {
            frame::clear(&mut self.cells);
        }

        if self.paused {
            self.latched.clear_edges();
            return;
        }

        let input = self.latched.snapshot();
        if self.selector.advance(delta, &input, &mut self.cells) > 0 {
            self.latched.clear_edges();
        }
    }

    /// Wall time since the previous frame, zero on the first.
    fn step_delta(&mut self, now: Instant) -> Duration {
        let delta = match self.last_instant {
            Some(prev) if now.as_millis() > prev.as_millis() => {
                Duration::from_millis(now.as_millis() - prev.as_millis())
            }
            _ => Duration::from_millis(0),
        };
        self.last_instant = Some(now);
        delta
    }

    /// Flush a brightness-scaled copy of the working buffer.
    ///
    /// The working buffer is the persistent canvas games fade and draw
    /// over; scaling happens on the copy so trails decay from the true
    /// values rather than the dimmed ones.
    fn flush_strip(&mut self) {
        for (out, cell) in self.flush.iter_mut().zip(self.cells.iter()) {
            *out = color::scaled(*cell, self.brightness);
        }
        self.output.write(&self.flush);
    }

    fn publish_status(&mut self, now: Instant) {
        let state = if self.paused {
            GameState::Paused
        } else {
            self.selector.state()
        };
        let changed = self.monitor.update(
            self.selector.game_name(),
            self.selector.score(),
            state,
            self.debouncer.snapshot(),
            &self.cells,
        );
        if changed {
            self.sink.publish(&self.monitor.report(now));
        }
    }

    fn pace(&mut self, now: Instant) -> FrameResult {
        let max_drift_ms = self.frame_duration.as_millis() * 2;
        if now.as_millis() > self.next_frame.as_millis() + max_drift_ms {
            self.next_frame = now;
        }
        self.next_frame += self.frame_duration;

        let sleep_duration = if self.next_frame.as_millis() > now.as_millis() {
            Duration::from_millis(self.next_frame.as_millis() - now.as_millis())
        } else {
            Duration::from_millis(0)
        };

        FrameResult {
            next_deadline: self.next_frame,
            sleep_duration,
        }
    }
}
