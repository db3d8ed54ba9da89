//! Touch input debouncing and edge detection.
//!
//! Raw readings arrive as one boolean per logical button (threshold
//! comparison against the capacitive level is the platform driver's
//! job). The debouncer turns those into stable per-button state with
//! just-pressed/just-released edges, throttling how quickly *new*
//! presses are accepted without ever delaying a release.

use embassy_time::{Duration, Instant};

/// Default minimum interval between accepted presses of one button.
pub const DEFAULT_DEBOUNCE_INTERVAL: Duration = Duration::from_millis(50);

/// Source of raw button levels, sampled once per outer iteration.
pub trait InputSource {
    fn sample_raw(&mut self) -> RawInput;
}

impl<T: InputSource> InputSource for &mut T {
    fn sample_raw(&mut self) -> RawInput {
        (**self).sample_raw()
    }
}

/// One raw reading per logical button. True means touched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RawInput {
    pub left: bool,
    pub right: bool,
    pub action: bool,
    pub alt: bool,
}

/// Logical buttons of the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Left,
    Right,
    Action,
    Alt,
}

impl Button {
    pub const ALL: [Self; 4] = [Self::Left, Self::Right, Self::Action, Self::Alt];

    const fn index(self) -> usize {
        match self {
            Self::Left => 0,
            Self::Right => 1,
            Self::Action => 2,
            Self::Alt => 3,
        }
    }
}

/// Debounced state of one button for the current cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ButtonState {
    /// Level after debouncing; held for the whole accepted press.
    pub pressed: bool,
    /// True only on the cycle the press was accepted.
    pub just_pressed: bool,
    /// True only on the cycle the button was released.
    pub just_released: bool,
}

/// All button states at one instant.
///
/// Rebuilt from scratch every debounce cycle; games read it during a
/// tick and must not expect it to carry history.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputSnapshot {
    pub left: ButtonState,
    pub right: ButtonState,
    pub action: ButtonState,
    pub alt: ButtonState,
}

impl InputSnapshot {
    pub const fn get(&self, button: Button) -> ButtonState {
        match button {
            Button::Left => self.left,
            Button::Right => self.right,
            Button::Action => self.action,
            Button::Alt => self.alt,
        }
    }
}

/// Per-button debounce bookkeeping.
#[derive(Debug, Clone, Copy, Default)]
struct DebounceState {
    pressed: bool,
    last_accepted: Option<Instant>,
}

impl DebounceState {
    /// Feed one raw level; returns the button state for this cycle.
    ///
    /// A raw high while already pressed continues the accepted press and
    /// neither refreshes the acceptance timestamp nor re-fires the edge;
    /// a raw high while released is a new candidate press, gated by the
    /// interval since the last acceptance. Releases are never delayed.
    fn update(&mut self, raw: bool, now: Instant, interval: Duration) -> ButtonState {
        let prev = self.pressed;

        if raw {
            if !prev && self.gate_open(now, interval) {
                self.pressed = true;
                self.last_accepted = Some(now);
            }
        } else {
            self.pressed = false;
        }

        ButtonState {
            pressed: self.pressed,
            just_pressed: self.pressed && !prev,
            just_released: !self.pressed && prev,
        }
    }

    fn gate_open(&self, now: Instant, interval: Duration) -> bool {
        match self.last_accepted {
            // First press after construction is always accepted.
            None => true,
            Some(at) => now.as_millis() >= at.as_millis() + interval.as_millis(),
        }
    }
}

/// Debouncer for the four console buttons.
///
/// Buttons are fully independent: separate acceptance timers, separate
/// edge history, no cross-button interaction. Stuck-high input settles
/// into a persistently-pressed state with no edge re-triggering.
#[derive(Debug, Clone)]
pub struct InputDebouncer {
    interval: Duration,
    buttons: [DebounceState; 4],
    snapshot: InputSnapshot,
}

impl Default for InputDebouncer {
    fn default() -> Self {
        Self::new()
    }
}

impl InputDebouncer {
    /// Create a debouncer with [`DEFAULT_DEBOUNCE_INTERVAL`].
    pub fn new() -> Self {
        Self::with_interval(DEFAULT_DEBOUNCE_INTERVAL)
    }

    /// Create a debouncer with a custom acceptance interval.
    pub fn with_interval(interval: Duration) -> Self {
        Self {
            interval,
            buttons: [DebounceState::default(); 4],
            snapshot: InputSnapshot::default(),
        }
    }

    /// Process one raw sample set, replacing the stored snapshot.
    pub fn update(&mut self, raw: RawInput, now: Instant) {
        let raw_levels = [raw.left, raw.right, raw.action, raw.alt];
        let mut states = [ButtonState::default(); 4];
        for button in Button::ALL {
            let i = button.index();
            states[i] = self.buttons[i].update(raw_levels[i], now, self.interval);
        }
        self.snapshot = InputSnapshot {
            left: states[Button::Left.index()],
            right: states[Button::Right.index()],
            action: states[Button::Action.index()],
            alt: states[Button::Alt.index()],
        };
    }

    /// State produced by the most recent [`update`](Self::update).
    pub const fn snapshot(&self) -> InputSnapshot {
        self.snapshot
    }
}

/// Edge-preserving input view for slow simulations.
///
/// The outer loop samples input far more often than a 100ms-tick game
/// simulates, so a just-pressed edge usually lands on an iteration that
/// releases zero ticks. This latch ORs edges across iterations and is
/// cleared by the runtime after the first batch that actually ticked,
/// so every edge is seen by exactly one tick batch.
#[derive(Debug, Clone, Copy, Default)]
pub struct LatchedInput {
    snapshot: InputSnapshot,
}

impl LatchedInput {
    /// Fold a fresh snapshot in: levels are replaced, edges accumulate.
    pub fn merge(&mut self, fresh: InputSnapshot) {
        merge_button(&mut self.snapshot.left, fresh.left);
        merge_button(&mut self.snapshot.right, fresh.right);
        merge_button(&mut self.snapshot.action, fresh.action);
        merge_button(&mut self.snapshot.alt, fresh.alt);
    }

    /// Drop accumulated edges, keeping current levels.
    pub fn clear_edges(&mut self) {
        for button in [
            &mut self.snapshot.left,
            &mut self.snapshot.right,
            &mut self.snapshot.action,
            &mut self.snapshot.alt,
        ] {
            button.just_pressed = false;
            button.just_released = false;
        }
    }

    pub const fn snapshot(&self) -> InputSnapshot {
        self.snapshot
    }
}

fn merge_button(held: &mut ButtonState, fresh: ButtonState) {
    held.pressed = fresh.pressed;
    held.just_pressed |= fresh.just_pressed;
    held.just_released |= fresh.just_released;
}
