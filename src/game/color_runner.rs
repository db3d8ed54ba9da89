//! Color-matched zone runner
//!
//! Colored zones sweep toward the runner. Matching the zone's color
//! lets the runner pass through it; anything else ends the run. Reach
//! the far end to win.

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
const ZONE_SPAWN_MS: u64 = 1200;
const ZONE_STEP_MS: u64 = 200;
const FLASH_PHASE_MS: u64 = 150;
const FLASH_HOLD_MS: u64 = 1000;

const MAX_ZONES: usize = 3;
const PASS_SCORE: u32 = 5;
const FADE_AMOUNT: u8 = 120;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum ZoneColor {
    #[default]
    Red,
    Green,
    Blue,
}

impl ZoneColor {
    const fn color(self) -> Rgb {
        match self {
            Self::Red => colors::RED,
            Self::Green => colors::GREEN,
            Self::Blue => colors::BLUE,
        }
    }

    const fn next(self) -> Self {
        match self {
            Self::Red => Self::Green,
            Self::Green => Self::Blue,
            Self::Blue => Self::Red,
        }
    }

    fn random(rng: &mut Rng) -> Self {
        match rng.range(3) {
            0 => Self::Red,
            1 => Self::Green,
            _ => Self::Blue,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct Zone {
    active: bool,
    pos: i32,
    color: ZoneColor,
}

/// Runner passing through color-matched zones
#[derive(Debug, Clone)]
pub struct ColorRunner<const N: usize> {
    player: usize,
    player_color: ZoneColor,
    zones: [Zone; MAX_ZONES],
    spawn: Interval,
    zone_step: Interval,
    score: u32,
    game_state: GameState,
    flourish: Option<Flourish>,
}

impl<const N: usize> ColorRunner<N> {
    pub fn new() -> Self {
        Self {
            player: 0,
            player_color: ZoneColor::Red,
            zones: [Zone::default(); MAX_ZONES],
            spawn: Interval::new(Duration::from_millis(ZONE_SPAWN_MS)),
            zone_step: Interval::new(Duration::from_millis(ZONE_STEP_MS)),
            score: 0,
            game_state: GameState::Playing,
            flourish: None,
        }
    }

    fn restart(&mut self) {
        self.player = 0;
        self.player_color = ZoneColor::Red;
        self.zones = [Zone::default(); MAX_ZONES];
        self.spawn.reset();
        self.zone_step.reset();
        self.score = 0;
        self.game_state = GameState::Playing;
    }

    #[allow(clippy::cast_possible_wrap)]
    fn spawn_zone(&mut self, rng: &mut Rng) {
        for zone in &mut self.zones {
            if zone.active {
                continue;
            }
            zone.active = true;
            zone.pos = N as i32 - 1;
            zone.color = ZoneColor::random(rng);
            return;
        }
    }

    fn step_zones(&mut self) {
        for zone in &mut self.zones {
            if !zone.active {
                continue;
            }
            zone.pos -= 1;
            if zone.pos < 0 {
                zone.active = false;
                self.score += 1;
            }
        }
    }

    #[allow(clippy::cast_possible_wrap)]
    fn check_outcome(&mut self) {
        for zone in &mut self.zones {
            if !zone.active || zone.pos != self.player as i32 {
                continue;
            }
            if zone.color == self.player_color {
                zone.active = false;
                self.score += PASS_SCORE;
            } else {
                self.game_state = GameState::GameOver;
                self.flourish = Some(
                    Flourish::flashes(colors::RED, 3, Duration::from_millis(FLASH_PHASE_MS))
                        .with_hold(Duration::from_millis(FLASH_HOLD_MS)),
                );
                return;
            }
        }

        if self.player >= N - 1 {
            self.game_state = GameState::Won;
            self.flourish = Some(
                Flourish::flashes(colors::GREEN, 3, Duration::from_millis(FLASH_PHASE_MS))
                    .with_hold(Duration::from_millis(FLASH_HOLD_MS)),
            );
        }
    }
}

impl<const N: usize> Default for ColorRunner<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Game<N> for ColorRunner<N> {
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

        if input.left.just_pressed && self.player > 0 {
            self.player -= 1;
        } else if input.right.just_pressed && self.player < N - 1 {
            self.player += 1;
        }
        if input.action.just_pressed {
            self.player_color = self.player_color.next();
        }

        let tick = self.tick_duration();
        if self.spawn.advance(tick) {
            self.spawn_zone(rng);
        }
        if self.zone_step.advance(tick) {
            self.step_zones();
        }

        self.check_outcome();
    }

    #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
    fn render(&self, cells: &mut [Rgb; N]) {
        if let Some(flourish) = &self.flourish {
            flourish.render(cells);
            return;
        }

        frame::fade_to_black(cells, FADE_AMOUNT);

        for zone in &self.zones {
            if zone.active {
                cells[zone.pos as usize] = zone.color.color();
            }
        }

        cells[self.player] = self.player_color.color();

        let level = (self.score * 5).min(255) as u8;
        frame::add(cells, N - 1, Rgb::new(0, level, level));
    }

    fn score(&self) -> u32 {
        self.score
    }

    fn state(&self) -> GameState {
        self.game_state
    }
}
