//! Crossing over erupting lava cells
//!
//! Move from the green start cell to the blue goal while the cells in
//! between erupt and cool on their own timers.

use embassy_time::Duration;

use super::Game;
use super::lava::LavaField;
use crate::color::{Rgb, colors};
use crate::flourish::Flourish;
use crate::frame;
use crate::input::InputSnapshot;
use crate::rng::Rng;
use crate::status::GameState;
use crate::timestep::Countdown;

const TICK_MS: u64 = 100;
const LAVA_ERUPT_MS: u64 = 800;
const LAVA_COOL_MS: u64 = 1200;
const MOVE_COOLDOWN_MS: u64 = 200;
const FLASH_PHASE_MS: u64 = 150;
const FLASH_HOLD_MS: u64 = 1000;
const FADE_AMOUNT: u8 = 150;

/// Lava crossing race to the far end of the strip
#[derive(Debug, Clone)]
pub struct LavaRun<const N: usize> {
    player: usize,
    lava: LavaField<N>,
    move_cooldown: Countdown,
    age_ms: u64,
    game_state: GameState,
    flourish: Option<Flourish>,
}

impl<const N: usize> LavaRun<N> {
    pub fn new() -> Self {
        Self {
            player: 0,
            lava: LavaField::new(LAVA_ERUPT_MS, LAVA_COOL_MS),
            move_cooldown: Countdown::idle(),
            age_ms: 0,
            game_state: GameState::Playing,
            flourish: None,
        }
    }

    fn restart(&mut self) {
        self.player = 0;
        self.lava.reset();
        self.move_cooldown.cancel();
        self.age_ms = 0;
        self.game_state = GameState::Playing;
    }

    fn handle_movement(&mut self, input: &InputSnapshot) {
        if self.move_cooldown.is_running() {
            return;
        }
        if input.left.just_pressed && self.player > 0 {
            self.player -= 1;
            self.move_cooldown.start(Duration::from_millis(MOVE_COOLDOWN_MS));
        } else if input.right.just_pressed && self.player < N - 1 {
            self.player += 1;
            self.move_cooldown.start(Duration::from_millis(MOVE_COOLDOWN_MS));
        }
    }

    fn check_outcome(&mut self) {
        if self.player == N - 1 {
            self.game_state = GameState::Won;
            self.flourish = Some(
                Flourish::flashes(colors::GREEN, 3, Duration::from_millis(FLASH_PHASE_MS))
                    .with_hold(Duration::from_millis(FLASH_HOLD_MS)),
            );
        } else if self.lava.is_active(self.player) {
            self.game_state = GameState::GameOver;
            self.flourish = Some(
                Flourish::flashes(colors::RED, 3, Duration::from_millis(FLASH_PHASE_MS))
                    .with_hold(Duration::from_millis(FLASH_HOLD_MS)),
            );
        }
    }
}

impl<const N: usize> Default for LavaRun<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Game<N> for LavaRun<N> {
    fn tick_duration(&self) -> Duration {
        Duration::from_millis(TICK_MS)
    }

    fn reset(&mut self, _rng: &mut Rng) {
        self.restart();
        self.flourish = None;
    }

    fn step(&mut self, input: &InputSnapshot, rng: &mut Rng) {
        if let Some(flourish) = &mut self.flourish {
            if flourish.advance(Duration::from_millis(TICK_MS)) {
                self.flourish = None;
                self.restart();
            }
            return;
        }

        self.age_ms += TICK_MS;
        self.lava.advance(TICK_MS, rng);
        self.move_cooldown.advance(self.tick_duration());
        self.handle_movement(input);
        self.check_outcome();
    }

    fn render(&self, cells: &mut [Rgb; N]) {
        if let Some(flourish) = &self.flourish {
            flourish.render(cells);
            return;
        }

        frame::fade_to_black(cells, FADE_AMOUNT);
        self.lava.render(cells, self.age_ms);
        cells[0] = colors::GREEN;
        cells[N - 1] = colors::BLUE;
        cells[self.player] = colors::WHITE;
    }

    fn state(&self) -> GameState {
        self.game_state
    }
}
