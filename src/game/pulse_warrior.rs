//! Rhythm hits on a moving pulse
//!
//! A pulse races toward a random target cell and only lives for a short
//! window. Hitting action while the pulse sits on the target scores and
//! grows the combo; letting the window lapse resets it.

use embassy_time::Duration;

use super::Game;
use crate::color::{Rgb, colors};
use crate::flourish::Flourish;
use crate::frame;
use crate::input::InputSnapshot;
use crate::rng::Rng;
use crate::timestep::{Countdown, Interval};

const TICK_MS: u64 = 50;
const PULSE_INTERVAL_MS: u64 = 800;
const PULSE_WINDOW_MS: u64 = 200;
const HIT_FLASH_MS: u64 = 50;

const BASE_HIT_SCORE: u32 = 10;
const FADE_AMOUNT: u8 = 150;

const TARGET_COLOR: Rgb = Rgb::new(30, 30, 30);

/// Timing game around a short-lived travelling pulse
#[derive(Debug, Clone)]
pub struct PulseWarrior<const N: usize> {
    pulse_active: bool,
    pulse_pos: usize,
    target: usize,
    window: Countdown,
    spawn: Interval,
    score: u32,
    combo: u32,
    flourish: Option<Flourish>,
}

impl<const N: usize> PulseWarrior<N> {
    pub fn new() -> Self {
        Self {
            pulse_active: false,
            pulse_pos: 0,
            target: N / 2,
            window: Countdown::idle(),
            spawn: Interval::new(Duration::from_millis(PULSE_INTERVAL_MS)),
            score: 0,
            combo: 0,
            flourish: None,
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    fn spawn_pulse(&mut self, rng: &mut Rng) {
        self.pulse_active = true;
        self.pulse_pos = 0;
        self.window.start(Duration::from_millis(PULSE_WINDOW_MS));
        self.target = 2 + rng.range((N - 4) as u32) as usize;
    }

    fn update_pulse(&mut self) {
        if !self.pulse_active {
            return;
        }
        if self.window.advance(Duration::from_millis(TICK_MS)) {
            self.pulse_active = false;
            self.combo = 0;
            return;
        }
        if self.pulse_pos < self.target {
            self.pulse_pos += 1;
        } else if self.pulse_pos > self.target {
            self.pulse_pos -= 1;
        }
    }

    fn check_hit(&mut self, input: &InputSnapshot) {
        if !self.pulse_active {
            return;
        }
        if input.action.just_pressed && self.pulse_pos == self.target {
            self.score += BASE_HIT_SCORE + self.combo;
            self.combo += 1;
            self.pulse_active = false;
            self.window.cancel();
            self.flourish = Some(Flourish::single(
                colors::GREEN,
                Duration::from_millis(HIT_FLASH_MS),
            ));
        }
    }
}

impl<const N: usize> Default for PulseWarrior<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Game<N> for PulseWarrior<N> {
    fn tick_duration(&self) -> Duration {
        Duration::from_millis(TICK_MS)
    }

    fn reset(&mut self, _rng: &mut Rng) {
        self.pulse_active = false;
        self.pulse_pos = 0;
        self.target = N / 2;
        self.window.cancel();
        self.spawn.reset();
        self.score = 0;
        self.combo = 0;
        self.flourish = None;
    }

    fn step(&mut self, input: &InputSnapshot, rng: &mut Rng) {
        if let Some(flourish) = &mut self.flourish {
            if flourish.advance(Duration::from_millis(TICK_MS)) {
                self.flourish = None;
            }
            return;
        }

        if self.spawn.advance(self.tick_duration()) && !self.pulse_active {
            self.spawn_pulse(rng);
        }
        self.update_pulse();
        self.check_hit(input);
    }

    #[allow(clippy::cast_possible_wrap, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn render(&self, cells: &mut [Rgb; N]) {
        if let Some(flourish) = &self.flourish {
            flourish.render(cells);
            return;
        }

        frame::fade_to_black(cells, FADE_AMOUNT);
        cells[self.target] = TARGET_COLOR;

        if self.pulse_active {
            let dist = (self.pulse_pos as i32 - self.target as i32).abs();
            let intensity = (255 - dist * 40).clamp(0, 255) as u8;
            cells[self.pulse_pos] = Rgb::new(intensity, intensity / 2, 0);
            if dist <= 1 {
                cells[self.target] = colors::YELLOW;
            }
        }

        let level = (self.combo * 20).min(255) as u8;
        frame::add(cells, N - 1, Rgb::new(0, level, level));
    }

    fn score(&self) -> u32 {
        self.score
    }
}
