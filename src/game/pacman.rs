//! Pellet collecting with a chasing ghost
//!
//! The player wraps around the strip, eats pellets and flees the ghost.
//! Power pellets invert the chase for a short window.

use embassy_time::Duration;

use super::Game;
use crate::color::{Rgb, colors};
use crate::flourish::Flourish;
use crate::frame;
use crate::input::InputSnapshot;
use crate::rng::Rng;
use crate::status::GameState;
use crate::timestep::{Countdown, Interval};

const TICK_MS: u64 = 50;
const PELLET_SPAWN_MS: u64 = 2000;
const GHOST_SPAWN_MS: u64 = 3000;
const GHOST_STEP_MS: u64 = 400;
const POWER_WINDOW_MS: u64 = 5000;
const FLASH_PHASE_MS: u64 = 150;

const MAX_PELLETS: usize = 4;
const POWER_PELLET_ODDS: u32 = 10;
const GHOST_SCORE: u32 = 10;
const FADE_AMOUNT: u8 = 100;

const PELLET_COLOR: Rgb = Rgb::new(64, 64, 0);

#[derive(Debug, Clone, Copy, Default)]
struct Pellet {
    active: bool,
    pos: usize,
    power: bool,
}

/// Pacman on a wrapping strip
#[derive(Debug, Clone)]
pub struct Pacman<const N: usize> {
    player: usize,
    dir: i32,
    pellets: [Pellet; MAX_PELLETS],
    ghost_active: bool,
    ghost_pos: usize,
    power: Countdown,
    pellet_spawn: Interval,
    ghost_spawn: Interval,
    ghost_step: Interval,
    score: u32,
    game_state: GameState,
    flourish: Option<Flourish>,
}

impl<const N: usize> Pacman<N> {
    pub fn new() -> Self {
        Self {
            player: N / 2,
            dir: 0,
            pellets: [Pellet::default(); MAX_PELLETS],
            ghost_active: false,
            ghost_pos: 0,
            power: Countdown::idle(),
            pellet_spawn: Interval::new(Duration::from_millis(PELLET_SPAWN_MS)),
            ghost_spawn: Interval::new(Duration::from_millis(GHOST_SPAWN_MS)),
            ghost_step: Interval::new(Duration::from_millis(GHOST_STEP_MS)),
            score: 0,
            game_state: GameState::Playing,
            flourish: None,
        }
    }

    fn restart(&mut self) {
        self.player = N / 2;
        self.dir = 0;
        self.pellets = [Pellet::default(); MAX_PELLETS];
        self.ghost_active = false;
        self.ghost_pos = 0;
        self.power.cancel();
        self.pellet_spawn.reset();
        self.ghost_spawn.reset();
        self.ghost_step.reset();
        self.score = 0;
        self.game_state = GameState::Playing;
    }

    #[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss, clippy::cast_possible_truncation)]
    fn wrapped(pos: usize, dir: i32) -> usize {
        (pos as i32 + dir).rem_euclid(N as i32) as usize
    }

    #[allow(clippy::cast_possible_truncation)]
    fn spawn_pellet(&mut self, rng: &mut Rng) {
        for pellet in &mut self.pellets {
            if pellet.active {
                continue;
            }
            pellet.active = true;
            pellet.pos = rng.range(N as u32) as usize;
            pellet.power = rng.one_in(POWER_PELLET_ODDS);
            return;
        }
    }

    fn spawn_ghost(&mut self, rng: &mut Rng) {
        if self.ghost_active {
            return;
        }
        self.ghost_active = true;
        self.ghost_pos = if rng.one_in(2) { 0 } else { N - 1 };
    }

    fn step_ghost(&mut self, rng: &mut Rng) {
        if !self.ghost_active {
            return;
        }
        let fleeing = self.power.is_running();
        let toward = match self.ghost_pos.cmp(&self.player) {
            core::cmp::Ordering::Less => 1,
            core::cmp::Ordering::Greater => -1,
            core::cmp::Ordering::Equal => {
                if rng.one_in(2) {
                    1
                } else {
                    -1
                }
            }
        };
        let dir = if fleeing { -toward } else { toward };
        self.ghost_pos = Self::wrapped(self.ghost_pos, dir);
    }

    fn collect_pellets(&mut self) {
        for pellet in &mut self.pellets {
            if !pellet.active || pellet.pos != self.player {
                continue;
            }
            pellet.active = false;
            self.score += 1;
            if pellet.power {
                self.power.start(Duration::from_millis(POWER_WINDOW_MS));
            }
        }
    }

    fn resolve_ghost_contact(&mut self) {
        if !self.ghost_active || self.ghost_pos != self.player {
            return;
        }
        if self.power.is_running() {
            self.ghost_active = false;
            self.score += GHOST_SCORE;
        } else {
            self.game_state = GameState::GameOver;
            self.flourish = Some(Flourish::flashes(
                colors::RED,
                3,
                Duration::from_millis(FLASH_PHASE_MS),
            ));
        }
    }
}

impl<const N: usize> Default for Pacman<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Game<N> for Pacman<N> {
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

        if input.left.just_pressed {
            self.dir = -1;
        } else if input.right.just_pressed {
            self.dir = 1;
        }

        let tick = self.tick_duration();
        if self.pellet_spawn.advance(tick) {
            self.spawn_pellet(rng);
        }
        if self.ghost_spawn.advance(tick) {
            self.spawn_ghost(rng);
        }
        if self.ghost_step.advance(tick) {
            self.step_ghost(rng);
        }

        self.player = Self::wrapped(self.player, self.dir);
        self.power.advance(tick);

        self.collect_pellets();
        self.resolve_ghost_contact();
    }

    #[allow(clippy::cast_possible_truncation)]
    fn render(&self, cells: &mut [Rgb; N]) {
        if let Some(flourish) = &self.flourish {
            flourish.render(cells);
            return;
        }

        frame::fade_to_black(cells, FADE_AMOUNT);

        for pellet in &self.pellets {
            if !pellet.active {
                continue;
            }
            cells[pellet.pos] = if pellet.power {
                colors::WHITE
            } else {
                PELLET_COLOR
            };
        }

        if self.ghost_active {
            cells[self.ghost_pos] = if self.power.is_running() {
                colors::BLUE
            } else {
                colors::RED
            };
        }

        cells[self.player] = colors::YELLOW;

        let level = (self.score * 5).min(255) as u8;
        frame::add(cells, N - 1, Rgb::new(0, level, 0));
    }

    fn score(&self) -> u32 {
        self.score
    }

    fn state(&self) -> GameState {
        self.game_state
    }
}
