//! Gravity versus flap through obstacle gaps
//!
//! The strip doubles as the bird's height and the obstacle's approach
//! distance. When an obstacle reaches cell 0 the bird must sit inside
//! its gap.

use embassy_time::Duration;

use super::Game;
use crate::color::{Rgb, colors};
use crate::flourish::Flourish;
use crate::frame;
use crate::input::InputSnapshot;
use crate::rng::Rng;
use crate::status::GameState;
use crate::timestep::Interval;

const TICK_MS: u64 = 50;
const SPAWN_MS: u64 = 1500;
const OBSTACLE_STEP_MS: u64 = 200;
const GRAVITY_STEP_MS: u64 = 150;
const FLASH_PHASE_MS: u64 = 150;

const MAX_OBSTACLES: usize = 2;
const GAP_SIZE: usize = 2;
const FLAP_IMPULSE: i32 = 3;
const FADE_AMOUNT: u8 = 120;

#[derive(Debug, Clone, Copy, Default)]
struct Obstacle {
    active: bool,
    pos: i32,
    gap_top: usize,
}

/// One-dimensional flappy bird
#[derive(Debug, Clone)]
pub struct FlappyBird<const N: usize> {
    bird: i32,
    velocity: i32,
    flap_pending: bool,
    obstacles: [Obstacle; MAX_OBSTACLES],
    spawn: Interval,
    obstacle_step: Interval,
    gravity_step: Interval,
    score: u32,
    game_state: GameState,
    flourish: Option<Flourish>,
}

impl<const N: usize> FlappyBird<N> {
    #[allow(clippy::cast_possible_wrap)]
    pub fn new() -> Self {
        Self {
            bird: N as i32 / 2,
            velocity: 0,
            flap_pending: false,
            obstacles: [Obstacle::default(); MAX_OBSTACLES],
            spawn: Interval::new(Duration::from_millis(SPAWN_MS)),
            obstacle_step: Interval::new(Duration::from_millis(OBSTACLE_STEP_MS)),
            gravity_step: Interval::new(Duration::from_millis(GRAVITY_STEP_MS)),
            score: 0,
            game_state: GameState::Playing,
            flourish: None,
        }
    }

    #[allow(clippy::cast_possible_wrap)]
    fn restart(&mut self) {
        self.bird = N as i32 / 2;
        self.velocity = 0;
        self.flap_pending = false;
        self.obstacles = [Obstacle::default(); MAX_OBSTACLES];
        self.spawn.reset();
        self.obstacle_step.reset();
        self.gravity_step.reset();
        self.score = 0;
        self.game_state = GameState::Playing;
    }

    #[allow(clippy::cast_possible_wrap, clippy::cast_possible_truncation)]
    fn spawn_obstacle(&mut self, rng: &mut Rng) {
        for obstacle in &mut self.obstacles {
            if obstacle.active {
                continue;
            }
            obstacle.active = true;
            obstacle.pos = N as i32 - 1;
            obstacle.gap_top = 2 + rng.range((N - GAP_SIZE - 2) as u32) as usize;
            return;
        }
    }

    fn step_obstacles(&mut self) {
        for obstacle in &mut self.obstacles {
            if !obstacle.active {
                continue;
            }
            obstacle.pos -= 1;
            if obstacle.pos < 0 {
                obstacle.active = false;
                self.score += 1;
            }
        }
    }

    #[allow(clippy::cast_possible_wrap)]
    fn apply_gravity(&mut self) {
        self.velocity += 1;
        if self.flap_pending {
            self.velocity -= FLAP_IMPULSE;
            self.flap_pending = false;
        }
        self.bird += self.velocity;
        if self.bird < 0 {
            self.bird = 0;
            self.velocity = 0;
        }
        if self.bird > N as i32 - 1 {
            self.bird = N as i32 - 1;
            self.velocity = 0;
        }
    }

    #[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
    fn check_collisions(&mut self) {
        if self.bird <= 0 || self.bird >= N as i32 - 1 {
            self.lose();
            return;
        }
        let height = self.bird as usize;
        for obstacle in &self.obstacles {
            if !obstacle.active || obstacle.pos != 0 {
                continue;
            }
            let gap = obstacle.gap_top..obstacle.gap_top + GAP_SIZE;
            if !gap.contains(&height) {
                self.lose();
                return;
            }
        }
    }

    fn lose(&mut self) {
        self.game_state = GameState::GameOver;
        self.flourish = Some(Flourish::flashes(
            colors::RED,
            3,
            Duration::from_millis(FLASH_PHASE_MS),
        ));
    }
}

impl<const N: usize> Default for FlappyBird<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Game<N> for FlappyBird<N> {
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

        if input.action.just_pressed {
            self.flap_pending = true;
        }

        let tick = self.tick_duration();
        if self.spawn.advance(tick) {
            self.spawn_obstacle(rng);
        }
        if self.obstacle_step.advance(tick) {
            self.step_obstacles();
        }
        if self.gravity_step.advance(tick) {
            self.apply_gravity();
        }

        self.check_collisions();
    }

    #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
    fn render(&self, cells: &mut [Rgb; N]) {
        if let Some(flourish) = &self.flourish {
            flourish.render(cells);
            return;
        }

        frame::fade_to_black(cells, FADE_AMOUNT);

        for obstacle in &self.obstacles {
            if obstacle.active {
                cells[obstacle.pos as usize] = colors::RED;
            }
        }

        cells[self.bird as usize] = colors::YELLOW;

        let level = (self.score * 10).min(255) as u8;
        frame::add(cells, N - 1, Rgb::new(0, level, 0));
    }

    fn score(&self) -> u32 {
        self.score
    }

    fn state(&self) -> GameState {
        self.game_state
    }
}
