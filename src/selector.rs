//! Active game selection with a persisted choice
//!
//! Owns the game slot, its tick clock and the shared random source.
//! The stored id is validated on boot and corrected to the first game
//! when it is out of range; switches persist the new id before the
//! next tick can run.

use embassy_time::Duration;
use log::info;

use crate::color::Rgb;
use crate::game::{GameId, GameSlot};
use crate::input::InputSnapshot;
use crate::rng::Rng;
use crate::status::GameState;
use crate::store::SelectionStore;
use crate::timestep::{DEFAULT_MAX_TICKS, TickClock};

/// Game roster driver with persistent selection.
pub struct GameSelector<S, const N: usize> {
    store: S,
    slot: GameSlot<N>,
    clock: TickClock,
    rng: Rng,
    max_ticks: u32,
    pending_clear: bool,
}

impl<S: SelectionStore, const N: usize> GameSelector<S, N> {
    /// Load the persisted selection and activate it.
    ///
    /// An out-of-range stored id falls back to the first game and the
    /// correction is written back immediately.
    pub fn new(mut store: S, seed: u32) -> Self {
        let raw = store.read_selection();
        let id = match GameId::from_raw(raw) {
            Some(id) => id,
            None => {
                store.write_selection(GameId::Test as u8);
                GameId::Test
            }
        };

        let mut rng = Rng::new(seed);
        let mut slot: GameSlot<N> = id.to_slot();
        slot.reset(&mut rng);
        let clock = TickClock::new(slot.tick_duration()).with_max_ticks(DEFAULT_MAX_TICKS);
        info!("selector ready, active game {} ({})", id as u8, id.as_str());

        Self {
            store,
            slot,
            clock,
            rng,
            max_ticks: DEFAULT_MAX_TICKS,
            pending_clear: true,
        }
    }

    /// Limit how many catch-up ticks one advance may run.
    #[must_use]
    pub fn with_max_ticks(mut self, max_ticks: u32) -> Self {
        self.max_ticks = max_ticks;
        self.clock = TickClock::new(self.slot.tick_duration()).with_max_ticks(max_ticks);
        self
    }

    /// Switch the active game.
    ///
    /// Unknown ids are rejected without side effects. Re-selecting the
    /// active game is a no-op that still reports success; a real switch
    /// persists the id, resets the new game and rebuilds the clock at
    /// the game's own tick rate.
    pub fn set_active(&mut self, raw: u8) -> bool {
        let Some(id) = GameId::from_raw(raw) else {
            return false;
        };
        if id == self.slot.id() {
            return true;
        }

        self.store.write_selection(raw);
        self.activate(id);
        info!("switched to game {} ({})", raw, id.as_str());
        true
    }

    fn activate(&mut self, id: GameId) {
        self.slot = id.to_slot();
        self.slot.reset(&mut self.rng);
        self.clock = TickClock::new(self.slot.tick_duration()).with_max_ticks(self.max_ticks);
        self.pending_clear = true;
    }

    /// Feed elapsed real time into the active game's clock.
    ///
    /// Runs zero or more fixed-size ticks against the held input
    /// snapshot, drawing into `cells` after each one, and returns how
    /// many fired. A zero-tick advance leaves `cells` untouched, so
    /// trail decay stays tied to the game's tick rate no matter how
    /// often the caller comes around.
    pub fn advance(
        &mut self,
        delta: Duration,
        input: &InputSnapshot,
        cells: &mut [Rgb; N],
    ) -> u32 {
        let Self {
            slot, clock, rng, ..
        } = self;
        clock.advance(delta, || {
            slot.step(input, rng);
            slot.render(cells);
        })
    }

    /// Draw the active game into the cell buffer.
    pub fn render(&self, cells: &mut [Rgb; N]) {
        self.slot.render(cells);
    }

    /// Consume the activation clear request, if one is pending.
    ///
    /// Activation invalidates whatever the previous game left in the
    /// cell buffer; the buffer owner clears it before the next render.
    pub fn take_pending_clear(&mut self) -> bool {
        core::mem::take(&mut self.pending_clear)
    }

    pub fn active_id(&self) -> GameId {
        self.slot.id()
    }

    pub fn game_name(&self) -> &'static str {
        self.slot.id().as_str()
    }

    pub fn score(&self) -> u32 {
        self.slot.score()
    }

    pub fn state(&self) -> GameState {
        self.slot.state()
    }
}
