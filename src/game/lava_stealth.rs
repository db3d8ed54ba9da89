//! Lava crossing with a stealth phase
//!
//! Same crossing as lava run, but the action button grants a short
//! window of immunity gated behind a long recharge.

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
const LAVA_ERUPT_MS: u64 = 1000;
const LAVA_COOL_MS: u64 = 1500;
const MOVE_COOLDOWN_MS: u64 = 250;
const STEALTH_WINDOW_MS: u64 = 2000;
const STEALTH_RECHARGE_MS: u64 = 5000;
const FLASH_PHASE_MS: u64 = 150;
const FLASH_HOLD_MS: u64 = 1000;
const FADE_AMOUNT: u8 = 150;

/// Lava crossing with a rechargeable immunity window
#[derive(Debug, Clone)]
pub struct LavaStealth<const N: usize> {
    player: usize,
    lava: LavaField<N>,
    stealth: Countdown,
    recharge: Countdown,
    move_cooldown: Countdown,
    age_ms: u64,
    game_state: GameState,
    flourish: Option<Flourish>,
}

impl<const N: usize> LavaStealth<N> {
    pub fn new() -> Self {
        Self {
            player: 0,
            lava: LavaField::new(LAVA_ERUPT_MS, LAVA_COOL_MS),
            stealth: Countdown::idle(),
            recharge: Countdown::idle(),
            move_cooldown: Countdown::idle(),
            age_ms: 0,
            game_state: GameState::Playing,
            flourish: None,
        }
    }

    fn restart(&mut self) {
        self.player = 0;
        self.lava.reset();
        self.stealth.cancel();
        self.recharge.cancel();
        self.move_cooldown.cancel();
        self.age_ms = 0;
        self.game_state = GameState::Playing;
    }

    fn update_stealth(&mut self, input: &InputSnapshot) {
        let tick = Duration::from_millis(TICK_MS);
        if self.stealth.advance(tick) {
            self.recharge.start(Duration::from_millis(STEALTH_RECHARGE_MS));
        }
        self.recharge.advance(tick);

        if input.action.just_pressed && !self.stealth.is_running() && !self.recharge.is_running() {
            self.stealth.start(Duration::from_millis(STEALTH_WINDOW_MS));
        }
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
        } else if self.lava.is_active(self.player) && !self.stealth.is_running() {
            self.game_state = GameState::GameOver;
            self.flourish = Some(
                Flourish::flashes(colors::RED, 3, Duration::from_millis(FLASH_PHASE_MS))
                    .with_hold(Duration::from_millis(FLASH_HOLD_MS)),
            );
        }
    }
}

impl<const N: usize> Default for LavaStealth<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Game<N> for LavaStealth<N> {
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
        self.update_stealth(input);
        self.move_cooldown.advance(self.tick_duration());
        self.handle_movement(input);
        self.check_outcome();
    }

    #[allow(clippy::cast_possible_truncation)]
    fn render(&self, cells: &mut [Rgb; N]) {
        if let Some(flourish) = &self.flourish {
            flourish.render(cells);
            return;
        }

        frame::fade_to_black(cells, FADE_AMOUNT);
        self.lava.render(cells, self.age_ms);
        cells[0] = colors::GREEN;
        cells[N - 1] = colors::BLUE;
        cells[self.player] = if self.stealth.is_running() {
            colors::CYAN
        } else {
            colors::WHITE
        };

        let remaining_ms = self.recharge.remaining().as_millis();
        if remaining_ms > 0 {
            let charge = (remaining_ms * 255 / STEALTH_RECHARGE_MS) as u8;
            frame::add(cells, 0, Rgb::new(0, 0, charge));
        }
    }

    fn state(&self) -> GameState {
        self.game_state
    }
}
