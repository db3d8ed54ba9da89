//! Timed territory painting duel
//!
//! Player and AI opponent claim cells for a fixed match duration.
//! Whoever holds more cells when the clock runs out takes the match.

use embassy_time::Duration;

use super::Game;
use crate::color::{Rgb, colors};
use crate::flourish::Flourish;
use crate::frame;
use crate::input::InputSnapshot;
use crate::rng::Rng;
use crate::status::GameState;
use crate::timestep::Interval;

const TICK_MS: u64 = 100;
const PAINT_STEP_MS: u64 = 150;
const MATCH_MS: u64 = 30_000;
const FLASH_PHASE_MS: u64 = 200;
const FLASH_HOLD_MS: u64 = 1000;
const FLASH_CYCLES: usize = 5;
const FADE_AMOUNT: u8 = 50;

const PLAYER_PAINT: Rgb = Rgb::new(0, 128, 0);
const OPPONENT_PAINT: Rgb = Rgb::new(128, 0, 0);
const NEUTRAL_PAINT: Rgb = Rgb::new(10, 10, 10);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Owner {
    #[default]
    Neutral,
    Player,
    Opponent,
}

/// Territory painting match against a drifting AI
#[derive(Debug, Clone)]
pub struct Splatoon<const N: usize> {
    player: usize,
    opponent: usize,
    paint: [Owner; N],
    paint_step: Interval,
    elapsed_ms: u64,
    player_score: u32,
    opponent_score: u32,
    game_state: GameState,
    flourish: Option<Flourish>,
}

impl<const N: usize> Splatoon<N> {
    pub fn new() -> Self {
        Self {
            player: 0,
            opponent: N - 1,
            paint: [Owner::Neutral; N],
            paint_step: Interval::new(Duration::from_millis(PAINT_STEP_MS)),
            elapsed_ms: 0,
            player_score: 0,
            opponent_score: 0,
            game_state: GameState::Playing,
            flourish: None,
        }
    }

    /// Claimed cell counts as `(player, opponent)`
    pub const fn scores(&self) -> (u32, u32) {
        (self.player_score, self.opponent_score)
    }

    fn restart(&mut self) {
        self.player = 0;
        self.opponent = N - 1;
        self.paint = [Owner::Neutral; N];
        self.paint_step.reset();
        self.elapsed_ms = 0;
        self.player_score = 0;
        self.opponent_score = 0;
        self.game_state = GameState::Playing;
    }

    const fn rank(owner: Owner) -> u8 {
        match owner {
            Owner::Neutral => 0,
            Owner::Player => 1,
            Owner::Opponent => 2,
        }
    }

    #[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
    fn step_opponent(&mut self, rng: &mut Rng) {
        let mut best = self.opponent;
        let mut best_rank = Self::rank(self.paint[self.opponent]);
        for delta in -1i32..=1 {
            let candidate = self.opponent as i32 + delta;
            if candidate < 0 || candidate >= N as i32 {
                continue;
            }
            let candidate = candidate as usize;
            let rank = Self::rank(self.paint[candidate]);
            if rank < best_rank || (rank == best_rank && rng.one_in(2)) {
                best = candidate;
                best_rank = rank;
            }
        }
        self.opponent = best;
    }

    fn apply_paint(&mut self) {
        if self.paint[self.player] != Owner::Player {
            if self.paint[self.player] == Owner::Opponent {
                self.opponent_score -= 1;
            }
            self.paint[self.player] = Owner::Player;
            self.player_score += 1;
        }

        if self.paint[self.opponent] != Owner::Opponent {
            if self.paint[self.opponent] == Owner::Player {
                self.player_score -= 1;
            }
            self.paint[self.opponent] = Owner::Opponent;
            self.opponent_score += 1;
        }
    }

    fn finish_match(&mut self) {
        let (state, color) = if self.player_score > self.opponent_score {
            (GameState::Won, colors::GREEN)
        } else if self.opponent_score > self.player_score {
            (GameState::GameOver, colors::RED)
        } else {
            (GameState::GameOver, colors::YELLOW)
        };
        self.game_state = state;
        self.flourish = Some(
            Flourish::flashes(color, FLASH_CYCLES, Duration::from_millis(FLASH_PHASE_MS))
                .with_hold(Duration::from_millis(FLASH_HOLD_MS)),
        );
    }
}

impl<const N: usize> Default for Splatoon<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Game<N> for Splatoon<N> {
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

        self.elapsed_ms += TICK_MS;

        if input.left.just_pressed {
            self.player = (self.player + N - 1) % N;
        } else if input.right.just_pressed {
            self.player = (self.player + 1) % N;
        }

        if self.paint_step.advance(self.tick_duration()) {
            self.step_opponent(rng);
            self.apply_paint();
        }

        if self.elapsed_ms >= MATCH_MS {
            self.finish_match();
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    fn render(&self, cells: &mut [Rgb; N]) {
        if let Some(flourish) = &self.flourish {
            flourish.render(cells);
            return;
        }

        frame::fade_to_black(cells, FADE_AMOUNT);

        for (cell, owner) in cells.iter_mut().zip(self.paint.iter()) {
            *cell = match owner {
                Owner::Player => PLAYER_PAINT,
                Owner::Opponent => OPPONENT_PAINT,
                Owner::Neutral => NEUTRAL_PAINT,
            };
        }

        cells[self.player] = colors::GREEN;
        cells[self.opponent] = colors::RED;

        let player_level = (self.player_score * 255 / N as u32).min(255) as u8;
        let opponent_level = (self.opponent_score * 255 / N as u32).min(255) as u8;
        frame::add(cells, 0, Rgb::new(0, player_level, 0));
        frame::add(cells, N - 1, Rgb::new(opponent_level, 0, 0));
    }

    fn score(&self) -> u32 {
        self.player_score
    }

    fn state(&self) -> GameState {
        self.game_state
    }
}
