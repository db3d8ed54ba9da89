//! Paddle versus paddle with persistent round scores
//!
//! The ball bounces off whichever paddle occupies its cell. A ball
//! leaving the strip scores for the opposite side and starts a fresh
//! round without touching the tallies.

use embassy_time::Duration;

use super::Game;
use crate::color::{Rgb, colors};
use crate::frame;
use crate::input::InputSnapshot;
use crate::rng::Rng;
use crate::timestep::Interval;

const TICK_MS: u64 = 50;
const BALL_STEP_MS: u64 = 100;
const AI_STEP_MS: u64 = 150;
const FADE_AMOUNT: u8 = 200;

/// One-dimensional pong against a tracking AI paddle
#[derive(Debug, Clone)]
pub struct Pong<const N: usize> {
    player: usize,
    ai: usize,
    ball: i32,
    ball_dir: i32,
    ball_step: Interval,
    ai_step: Interval,
    player_score: u32,
    ai_score: u32,
}

impl<const N: usize> Pong<N> {
    #[allow(clippy::cast_possible_wrap)]
    pub fn new() -> Self {
        Self {
            player: 0,
            ai: N - 1,
            ball: N as i32 / 2,
            ball_dir: 1,
            ball_step: Interval::new(Duration::from_millis(BALL_STEP_MS)),
            ai_step: Interval::new(Duration::from_millis(AI_STEP_MS)),
            player_score: 0,
            ai_score: 0,
        }
    }

    /// Round scores as `(player, ai)`
    pub const fn scores(&self) -> (u32, u32) {
        (self.player_score, self.ai_score)
    }

    #[allow(clippy::cast_possible_wrap)]
    fn reset_round(&mut self, rng: &mut Rng) {
        self.player = 0;
        self.ai = N - 1;
        self.ball = N as i32 / 2;
        self.ball_dir = if rng.one_in(2) { 1 } else { -1 };
        self.ball_step.reset();
        self.ai_step.reset();
    }

    #[allow(clippy::cast_possible_wrap)]
    fn step_ball(&mut self, rng: &mut Rng) {
        self.ball += self.ball_dir;

        if self.ball == self.player as i32 && self.ball_dir < 0 {
            self.ball_dir = 1;
            self.ball = self.player as i32 + 1;
        }
        if self.ball == self.ai as i32 && self.ball_dir > 0 {
            self.ball_dir = -1;
            self.ball = self.ai as i32 - 1;
        }

        if self.ball < 0 {
            self.ai_score += 1;
            self.reset_round(rng);
        } else if self.ball >= N as i32 {
            self.player_score += 1;
            self.reset_round(rng);
        }
    }

    #[allow(clippy::cast_possible_wrap)]
    fn step_ai(&mut self) {
        if self.ball > self.ai as i32 && self.ai < N - 1 {
            self.ai += 1;
        } else if self.ball < self.ai as i32 && self.ai > 0 {
            self.ai -= 1;
        }
    }
}

impl<const N: usize> Default for Pong<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Game<N> for Pong<N> {
    fn tick_duration(&self) -> Duration {
        Duration::from_millis(TICK_MS)
    }

    fn reset(&mut self, rng: &mut Rng) {
        self.reset_round(rng);
        self.player_score = 0;
        self.ai_score = 0;
    }

    fn step(&mut self, input: &InputSnapshot, rng: &mut Rng) {
        if input.left.just_pressed && self.player > 0 {
            self.player -= 1;
        } else if input.right.just_pressed && self.player < N - 1 {
            self.player += 1;
        }

        let tick = self.tick_duration();
        if self.ball_step.advance(tick) {
            self.step_ball(rng);
        }
        if self.ai_step.advance(tick) {
            self.step_ai();
        }
    }

    #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
    fn render(&self, cells: &mut [Rgb; N]) {
        frame::fade_to_black(cells, FADE_AMOUNT);

        cells[self.player] = colors::GREEN;
        cells[self.ai] = colors::RED;
        cells[self.ball as usize] = colors::WHITE;

        if self.player_score > 0 {
            let level = (self.player_score * 30).min(255) as u8;
            frame::add(cells, 0, Rgb::new(0, level, 0));
        }
        if self.ai_score > 0 {
            let level = (self.ai_score * 30).min(255) as u8;
            frame::add(cells, N - 1, Rgb::new(level, 0, 0));
        }
    }

    fn score(&self) -> u32 {
        self.player_score
    }
}
