//! Color-matched shooting defense
//!
//! Enemies march toward the defender cell and only die to a bullet of
//! their own color. `RgbGuardian` is played with the touch buttons;
//! `RgbGuardian2` is the self-playing variant with two of everything.

use embassy_time::Duration;

use super::Game;
use crate::color::{Rgb, colors};
use crate::flourish::Flourish;
use crate::frame;
use crate::input::InputSnapshot;
use crate::rng::Rng;
use crate::status::GameState;
use crate::timestep::Interval;

const TICK_MS: u64 = 30;
const FLASH_PHASE_MS: u64 = 110;
const FADE_AMOUNT: u8 = 80;
const DEFENDER_POS: usize = 3;

const SPAWN_MS: u64 = 900;
const ENEMY_STEP_MS: u64 = 260;
const BULLET_STEP_MS: u64 = 130;

const AUTO_SPAWN_MS: u64 = 700;
const AUTO_ENEMY_STEP_MS: u64 = 220;
const AUTO_BULLET_STEP_MS: u64 = 120;
const AUTO_FIRE_MS: u64 = 240;
const AUTO_WEAPON_CYCLE_MS: u64 = 500;
const AUTO_SLOTS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum WeaponColor {
    #[default]
    Red,
    Green,
    Blue,
}

impl WeaponColor {
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

    const fn prev(self) -> Self {
        match self {
            Self::Red => Self::Blue,
            Self::Green => Self::Red,
            Self::Blue => Self::Green,
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
struct Enemy {
    active: bool,
    pos: i32,
    dir: i32,
    color: WeaponColor,
}

#[derive(Debug, Clone, Copy, Default)]
struct Bullet {
    active: bool,
    pos: i32,
    dir: i32,
    color: WeaponColor,
}

#[allow(clippy::cast_possible_wrap)]
fn spawn_enemy<const N: usize>(enemy: &mut Enemy, rng: &mut Rng) {
    let from_left = rng.one_in(2);
    enemy.active = true;
    enemy.dir = if from_left { 1 } else { -1 };
    enemy.pos = if from_left { 0 } else { N as i32 - 1 };
    enemy.color = WeaponColor::random(rng);
}

/// Steps one enemy and reports whether it reached the defender.
#[allow(clippy::cast_possible_wrap)]
fn step_enemy<const N: usize>(enemy: &mut Enemy) -> bool {
    if !enemy.active {
        return false;
    }
    enemy.pos += enemy.dir;
    if enemy.pos == DEFENDER_POS as i32 {
        return true;
    }
    if enemy.pos < 0 || enemy.pos >= N as i32 {
        enemy.active = false;
    }
    false
}

#[allow(clippy::cast_possible_wrap)]
fn step_bullet<const N: usize>(bullet: &mut Bullet) {
    if !bullet.active {
        return;
    }
    bullet.pos += bullet.dir;
    if bullet.pos < 0 || bullet.pos >= N as i32 {
        bullet.active = false;
    }
}

fn render_defender<const N: usize>(cells: &mut [Rgb; N], weapon: WeaponColor) {
    cells[DEFENDER_POS] = Rgb::new(25, 25, 25);
    let tint = weapon.color();
    frame::add(
        cells,
        DEFENDER_POS,
        Rgb::new(tint.r / 5, tint.g / 5, tint.b / 5),
    );
}

#[allow(clippy::cast_possible_truncation)]
fn render_score<const N: usize>(cells: &mut [Rgb; N], score: u32) {
    let level = (score * 20).min(120) as u8;
    frame::add(cells, N - 1, Rgb::new(0, 0, level));
}

fn lost_flourish() -> Flourish {
    Flourish::flashes(colors::RED, 3, Duration::from_millis(FLASH_PHASE_MS))
}

/// Manually aimed color-matching defense
#[derive(Debug, Clone)]
pub struct RgbGuardian<const N: usize> {
    weapon: WeaponColor,
    enemy: Enemy,
    bullet: Bullet,
    spawn: Interval,
    enemy_step: Interval,
    bullet_step: Interval,
    score: u32,
    game_state: GameState,
    flourish: Option<Flourish>,
}

impl<const N: usize> RgbGuardian<N> {
    pub fn new() -> Self {
        Self {
            weapon: WeaponColor::Red,
            enemy: Enemy::default(),
            bullet: Bullet::default(),
            spawn: Interval::new(Duration::from_millis(SPAWN_MS)),
            enemy_step: Interval::new(Duration::from_millis(ENEMY_STEP_MS)),
            bullet_step: Interval::new(Duration::from_millis(BULLET_STEP_MS)),
            score: 0,
            game_state: GameState::Playing,
            flourish: None,
        }
    }

    fn restart(&mut self) {
        self.weapon = WeaponColor::Red;
        self.enemy = Enemy::default();
        self.bullet = Bullet::default();
        self.spawn.reset();
        self.enemy_step.reset();
        self.bullet_step.reset();
        self.score = 0;
        self.game_state = GameState::Playing;
    }

    #[allow(clippy::cast_possible_wrap)]
    fn fire(&mut self) {
        if !self.enemy.active || self.bullet.active {
            return;
        }
        self.bullet.active = true;
        self.bullet.pos = DEFENDER_POS as i32;
        self.bullet.dir = if self.enemy.pos < DEFENDER_POS as i32 {
            -1
        } else {
            1
        };
        self.bullet.color = self.weapon;
    }

    fn resolve_collision(&mut self) {
        if !self.enemy.active || !self.bullet.active {
            return;
        }
        if self.enemy.pos != self.bullet.pos {
            return;
        }
        if self.enemy.color == self.bullet.color {
            self.enemy.active = false;
            self.score += 1;
        }
        self.bullet.active = false;
    }
}

impl<const N: usize> Default for RgbGuardian<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Game<N> for RgbGuardian<N> {
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
            self.weapon = self.weapon.prev();
        } else if input.right.just_pressed {
            self.weapon = self.weapon.next();
        }

        let tick = self.tick_duration();
        if self.spawn.advance(tick) && !self.enemy.active {
            spawn_enemy::<N>(&mut self.enemy, rng);
        }

        if input.action.just_pressed {
            self.fire();
        }

        if self.enemy_step.advance(tick) && step_enemy::<N>(&mut self.enemy) {
            self.game_state = GameState::GameOver;
            self.flourish = Some(lost_flourish());
            return;
        }
        if self.bullet_step.advance(tick) {
            step_bullet::<N>(&mut self.bullet);
        }

        self.resolve_collision();
    }

    #[allow(clippy::cast_sign_loss)]
    fn render(&self, cells: &mut [Rgb; N]) {
        if let Some(flourish) = &self.flourish {
            flourish.render(cells);
            return;
        }

        frame::fade_to_black(cells, FADE_AMOUNT);
        render_defender(cells, self.weapon);
        if self.enemy.active {
            cells[self.enemy.pos as usize] = self.enemy.color.color();
        }
        if self.bullet.active {
            frame::add(cells, self.bullet.pos as usize, self.bullet.color.color());
        }
        render_score(cells, self.score);
    }

    fn score(&self) -> u32 {
        self.score
    }

    fn state(&self) -> GameState {
        self.game_state
    }
}

/// Self-playing guardian with two enemies and two bullets
#[derive(Debug, Clone)]
pub struct RgbGuardian2<const N: usize> {
    weapon: WeaponColor,
    enemies: [Enemy; AUTO_SLOTS],
    bullets: [Bullet; AUTO_SLOTS],
    spawn: Interval,
    enemy_step: Interval,
    bullet_step: Interval,
    fire: Interval,
    weapon_cycle: Interval,
    score: u32,
    game_state: GameState,
    flourish: Option<Flourish>,
}

impl<const N: usize> RgbGuardian2<N> {
    pub fn new() -> Self {
        Self {
            weapon: WeaponColor::Red,
            enemies: [Enemy::default(); AUTO_SLOTS],
            bullets: [Bullet::default(); AUTO_SLOTS],
            spawn: Interval::new(Duration::from_millis(AUTO_SPAWN_MS)),
            enemy_step: Interval::new(Duration::from_millis(AUTO_ENEMY_STEP_MS)),
            bullet_step: Interval::new(Duration::from_millis(AUTO_BULLET_STEP_MS)),
            fire: Interval::new(Duration::from_millis(AUTO_FIRE_MS)),
            weapon_cycle: Interval::new(Duration::from_millis(AUTO_WEAPON_CYCLE_MS)),
            score: 0,
            game_state: GameState::Playing,
            flourish: None,
        }
    }

    fn restart(&mut self) {
        self.weapon = WeaponColor::Red;
        self.enemies = [Enemy::default(); AUTO_SLOTS];
        self.bullets = [Bullet::default(); AUTO_SLOTS];
        self.spawn.reset();
        self.enemy_step.reset();
        self.bullet_step.reset();
        self.fire.reset();
        self.weapon_cycle.reset();
        self.score = 0;
        self.game_state = GameState::Playing;
    }

    fn spawn_into_free_slot(&mut self, rng: &mut Rng) {
        for enemy in &mut self.enemies {
            if !enemy.active {
                spawn_enemy::<N>(enemy, rng);
                return;
            }
        }
    }

    #[allow(clippy::cast_possible_wrap)]
    fn fire_at_nearest(&mut self) {
        let defender = DEFENDER_POS as i32;
        let mut nearest: Option<i32> = None;
        let mut nearest_dist = N as i32;
        for enemy in &self.enemies {
            if !enemy.active {
                continue;
            }
            let dist = (enemy.pos - defender).abs();
            if dist < nearest_dist {
                nearest_dist = dist;
                nearest = Some(enemy.pos);
            }
        }
        let Some(target) = nearest else {
            return;
        };

        for bullet in &mut self.bullets {
            if bullet.active {
                continue;
            }
            bullet.active = true;
            bullet.pos = defender;
            bullet.dir = if target < defender { -1 } else { 1 };
            bullet.color = self.weapon;
            return;
        }
    }

    /// Steps all enemies, reporting whether any reached the defender.
    fn step_enemies(&mut self) -> bool {
        for enemy in &mut self.enemies {
            if step_enemy::<N>(enemy) {
                return true;
            }
        }
        false
    }

    fn resolve_collisions(&mut self) {
        for bullet in &mut self.bullets {
            if !bullet.active {
                continue;
            }
            for enemy in &mut self.enemies {
                if !enemy.active || enemy.pos != bullet.pos {
                    continue;
                }
                if enemy.color == bullet.color {
                    enemy.active = false;
                    self.score += 1;
                }
                bullet.active = false;
                break;
            }
        }
    }
}

impl<const N: usize> Default for RgbGuardian2<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Game<N> for RgbGuardian2<N> {
    fn tick_duration(&self) -> Duration {
        Duration::from_millis(TICK_MS)
    }

    fn reset(&mut self, _rng: &mut Rng) {
        self.restart();
        self.flourish = None;
    }

    fn step(&mut self, _input: &InputSnapshot, rng: &mut Rng) {
        if let Some(flourish) = &mut self.flourish {
            if flourish.advance(Duration::from_millis(TICK_MS)) {
                self.flourish = None;
                self.restart();
            }
            return;
        }

        let tick = self.tick_duration();
        if self.weapon_cycle.advance(tick) {
            self.weapon = self.weapon.next();
        }
        if self.spawn.advance(tick) {
            self.spawn_into_free_slot(rng);
        }
        if self.fire.advance(tick) {
            self.fire_at_nearest();
        }
        if self.enemy_step.advance(tick) && self.step_enemies() {
            self.game_state = GameState::GameOver;
            self.flourish = Some(lost_flourish());
            return;
        }
        if self.bullet_step.advance(tick) {
            for bullet in &mut self.bullets {
                step_bullet::<N>(bullet);
            }
        }

        self.resolve_collisions();
    }

    #[allow(clippy::cast_sign_loss)]
    fn render(&self, cells: &mut [Rgb; N]) {
        if let Some(flourish) = &self.flourish {
            flourish.render(cells);
            return;
        }

        frame::fade_to_black(cells, FADE_AMOUNT);
        render_defender(cells, self.weapon);
        for enemy in &self.enemies {
            if enemy.active {
                cells[enemy.pos as usize] = enemy.color.color();
            }
        }
        for bullet in &self.bullets {
            if bullet.active {
                frame::add(cells, bullet.pos as usize, bullet.color.color());
            }
        }
        render_score(cells, self.score);
    }

    fn score(&self) -> u32 {
        self.score
    }

    fn state(&self) -> GameState {
        self.game_state
    }
}
