//! Game roster with compile-time known variants
//!
//! All games are stored in an enum to avoid heap allocations.
//! Each game implements the [`Game`] trait over a strip of `N` cells.

mod color_runner;
mod flappy;
mod guardian;
mod lava;
mod lava_run;
mod lava_stealth;
mod pacman;
mod pong;
mod pulse_warrior;
mod splatoon;

use embassy_time::Duration;

pub use color_runner::ColorRunner;
pub use flappy::FlappyBird;
pub use guardian::{RgbGuardian, RgbGuardian2};
pub use lava_run::LavaRun;
pub use lava_stealth::LavaStealth;
pub use pacman::Pacman;
pub use pong::Pong;
pub use pulse_warrior::PulseWarrior;
pub use splatoon::Splatoon;
pub use test::TestGame;

use crate::color::Rgb;
use crate::input::InputSnapshot;
use crate::rng::Rng;
use crate::status::GameState;

const GAME_NAME_TEST: &str = "Test";
const GAME_NAME_PACMAN: &str = "Pacman";
const GAME_NAME_LAVA_RUN: &str = "Lava Run";
const GAME_NAME_LAVA_STEALTH: &str = "Lava Stealth";
const GAME_NAME_FLAPPY: &str = "FlappyBird";
const GAME_NAME_PONG: &str = "Pong";
const GAME_NAME_GUARDIAN: &str = "RGB Guardian";
const GAME_NAME_GUARDIAN_2: &str = "RGB Guardian 2";
const GAME_NAME_PULSE_WARRIOR: &str = "Pulse Warrior";
const GAME_NAME_COLOR_RUNNER: &str = "Color Runner X";
const GAME_NAME_SPLATOON: &str = "Splatoon";

const GAME_ID_TEST: u8 = 0;
const GAME_ID_PACMAN: u8 = 1;
const GAME_ID_LAVA_RUN: u8 = 2;
const GAME_ID_LAVA_STEALTH: u8 = 3;
const GAME_ID_FLAPPY: u8 = 4;
const GAME_ID_PONG: u8 = 5;
const GAME_ID_GUARDIAN: u8 = 6;
const GAME_ID_GUARDIAN_2: u8 = 7;
const GAME_ID_PULSE_WARRIOR: u8 = 8;
const GAME_ID_COLOR_RUNNER: u8 = 9;
const GAME_ID_SPLATOON: u8 = 10;

/// Number of games in the roster
pub const GAME_COUNT: u8 = 11;

/// Contract every game implements
///
/// A game owns its whole simulation state. The selector drives it with
/// fixed-size steps at the game's own tick rate and asks it to draw into
/// the shared cell buffer once per outer frame.
pub trait Game<const N: usize> {
    /// Fixed simulation step size for this game
    fn tick_duration(&self) -> Duration;

    /// Restore the initial state, discarding all progress
    fn reset(&mut self, rng: &mut Rng);

    /// Advance the simulation by exactly one tick
    fn step(&mut self, input: &InputSnapshot, rng: &mut Rng);

    /// Draw the current state into the cell buffer
    fn render(&self, cells: &mut [Rgb; N]);

    /// Current score for status reporting
    fn score(&self) -> u32 {
        0
    }

    /// Current lifecycle state for status reporting
    fn state(&self) -> GameState {
        GameState::Playing
    }
}

/// Game slot - enum containing all possible games
#[derive(Debug, Clone)]
pub enum GameSlot<const N: usize> {
    /// Touch control exerciser
    Test(TestGame<N>),
    /// Pellet collecting with a chasing ghost
    Pacman(Pacman<N>),
    /// Crossing over erupting lava cells
    LavaRun(LavaRun<N>),
    /// Lava crossing with a stealth phase
    LavaStealth(LavaStealth<N>),
    /// Gravity versus flap through obstacle gaps
    Flappy(FlappyBird<N>),
    /// Paddle versus paddle with persistent round scores
    Pong(Pong<N>),
    /// Color-matched shooting defense
    Guardian(RgbGuardian<N>),
    /// Auto-firing guardian variant
    Guardian2(RgbGuardian2<N>),
    /// Rhythm hits on a moving pulse
    PulseWarrior(PulseWarrior<N>),
    /// Color-matched zone runner
    ColorRunner(ColorRunner<N>),
    /// Timed territory painting duel
    Splatoon(Splatoon<N>),
}

/// Known game ids that can be requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum GameId {
    Test = GAME_ID_TEST,
    Pacman = GAME_ID_PACMAN,
    LavaRun = GAME_ID_LAVA_RUN,
    LavaStealth = GAME_ID_LAVA_STEALTH,
    Flappy = GAME_ID_FLAPPY,
    Pong = GAME_ID_PONG,
    Guardian = GAME_ID_GUARDIAN,
    Guardian2 = GAME_ID_GUARDIAN_2,
    PulseWarrior = GAME_ID_PULSE_WARRIOR,
    ColorRunner = GAME_ID_COLOR_RUNNER,
    Splatoon = GAME_ID_SPLATOON,
}

impl<const N: usize> Default for GameSlot<N> {
    fn default() -> Self {
        Self::Test(TestGame::new())
    }
}

impl GameId {
    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            GAME_ID_TEST => Self::Test,
            GAME_ID_PACMAN => Self::Pacman,
            GAME_ID_LAVA_RUN => Self::LavaRun,
            GAME_ID_LAVA_STEALTH => Self::LavaStealth,
            GAME_ID_FLAPPY => Self::Flappy,
            GAME_ID_PONG => Self::Pong,
            GAME_ID_GUARDIAN => Self::Guardian,
            GAME_ID_GUARDIAN_2 => Self::Guardian2,
            GAME_ID_PULSE_WARRIOR => Self::PulseWarrior,
            GAME_ID_COLOR_RUNNER => Self::ColorRunner,
            GAME_ID_SPLATOON => Self::Splatoon,
            _ => return None,
        })
    }

    pub fn to_slot<const N: usize>(self) -> GameSlot<N> {
        match self {
            Self::Test => GameSlot::Test(TestGame::new()),
            Self::Pacman => GameSlot::Pacman(Pacman::new()),
            Self::LavaRun => GameSlot::LavaRun(LavaRun::new()),
            Self::LavaStealth => GameSlot::LavaStealth(LavaStealth::new()),
            Self::Flappy => GameSlot::Flappy(FlappyBird::new()),
            Self::Pong => GameSlot::Pong(Pong::new()),
            Self::Guardian => GameSlot::Guardian(RgbGuardian::new()),
            Self::Guardian2 => GameSlot::Guardian2(RgbGuardian2::new()),
            Self::PulseWarrior => GameSlot::PulseWarrior(PulseWarrior::new()),
            Self::ColorRunner => GameSlot::ColorRunner(ColorRunner::new()),
            Self::Splatoon => GameSlot::Splatoon(Splatoon::new()),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Test => GAME_NAME_TEST,
            Self::Pacman => GAME_NAME_PACMAN,
            Self::LavaRun => GAME_NAME_LAVA_RUN,
            Self::LavaStealth => GAME_NAME_LAVA_STEALTH,
            Self::Flappy => GAME_NAME_FLAPPY,
            Self::Pong => GAME_NAME_PONG,
            Self::Guardian => GAME_NAME_GUARDIAN,
            Self::Guardian2 => GAME_NAME_GUARDIAN_2,
            Self::PulseWarrior => GAME_NAME_PULSE_WARRIOR,
            Self::ColorRunner => GAME_NAME_COLOR_RUNNER,
            Self::Splatoon => GAME_NAME_SPLATOON,
        }
    }
}

impl<const N: usize> GameSlot<N> {
    /// Get the game ID for external observation
    pub fn id(&self) -> GameId {
        match self {
            Self::Test(_) => GameId::Test,
            Self::Pacman(_) => GameId::Pacman,
            Self::LavaRun(_) => GameId::LavaRun,
            Self::LavaStealth(_) => GameId::LavaStealth,
            Self::Flappy(_) => GameId::Flappy,
            Self::Pong(_) => GameId::Pong,
            Self::Guardian(_) => GameId::Guardian,
            Self::Guardian2(_) => GameId::Guardian2,
            Self::PulseWarrior(_) => GameId::PulseWarrior,
            Self::ColorRunner(_) => GameId::ColorRunner,
            Self::Splatoon(_) => GameId::Splatoon,
        }
    }

    /// Fixed simulation step size of the contained game
    pub fn tick_duration(&self) -> Duration {
        match self {
            Self::Test(game) => game.tick_duration(),
            Self::Pacman(game) => game.tick_duration(),
            Self::LavaRun(game) => game.tick_duration(),
            Self::LavaStealth(game) => game.tick_duration(),
            Self::Flappy(game) => game.tick_duration(),
            Self::Pong(game) => game.tick_duration(),
            Self::Guardian(game) => game.tick_duration(),
            Self::Guardian2(game) => game.tick_duration(),
            Self::PulseWarrior(game) => game.tick_duration(),
            Self::ColorRunner(game) => game.tick_duration(),
            Self::Splatoon(game) => game.tick_duration(),
        }
    }

    /// Restore the initial state of the contained game
    pub fn reset(&mut self, rng: &mut Rng) {
        match self {
            Self::Test(game) => game.reset(rng),
            Self::Pacman(game) => game.reset(rng),
            Self::LavaRun(game) => game.reset(rng),
            Self::LavaStealth(game) => game.reset(rng),
            Self::Flappy(game) => game.reset(rng),
            Self::Pong(game) => game.reset(rng),
            Self::Guardian(game) => game.reset(rng),
            Self::Guardian2(game) => game.reset(rng),
            Self::PulseWarrior(game) => game.reset(rng),
            Self::ColorRunner(game) => game.reset(rng),
            Self::Splatoon(game) => game.reset(rng),
        }
    }

    /// Advance the contained game by one tick
    pub fn step(&mut self, input: &InputSnapshot, rng: &mut Rng) {
        match self {
            Self::Test(game) => game.step(input, rng),
            Self::Pacman(game) => game.step(input, rng),
            Self::LavaRun(game) => game.step(input, rng),
            Self::LavaStealth(game) => game.step(input, rng),
            Self::Flappy(game) => game.step(input, rng),
            Self::Pong(game) => game.step(input, rng),
            Self::Guardian(game) => game.step(input, rng),
            Self::Guardian2(game) => game.step(input, rng),
            Self::PulseWarrior(game) => game.step(input, rng),
            Self::ColorRunner(game) => game.step(input, rng),
            Self::Splatoon(game) => game.step(input, rng),
        }
    }

    /// Draw the contained game into the cell buffer
    pub fn render(&self, cells: &mut [Rgb; N]) {
        match self {
            Self::Test(game) => game.render(cells),
            Self::Pacman(game) => game.render(cells),
            Self::LavaRun(game) => game.render(cells),
            Self::LavaStealth(game) => game.render(cells),
            Self::Flappy(game) => game.render(cells),
            Self::Pong(game) => game.render(cells),
            Self::Guardian(game) => game.render(cells),
            Self::Guardian2(game) => game.render(cells),
            Self::PulseWarrior(game) => game.render(cells),
            Self::ColorRunner(game) => game.render(cells),
            Self::Splatoon(game) => game.render(cells),
        }
    }

    /// Current score of the contained game
    pub fn score(&self) -> u32 {
        match self {
            Self::Test(game) => game.score(),
            Self::Pacman(game) => game.score(),
            Self::LavaRun(game) => game.score(),
            Self::LavaStealth(game) => game.score(),
            Self::Flappy(game) => game.score(),
            Self::Pong(game) => game.score(),
            Self::Guardian(game) => game.score(),
            Self::Guardian2(game) => game.score(),
            Self::PulseWarrior(game) => game.score(),
            Self::ColorRunner(game) => game.score(),
            Self::Splatoon(game) => game.score(),
        }
    }

    /// Current lifecycle state of the contained game
    pub fn state(&self) -> GameState {
        match self {
            Self::Test(game) => game.state(),
            Self::Pacman(game) => game.state(),
            Self::LavaRun(game) => game.state(),
            Self::LavaStealth(game) => game.state(),
            Self::Flappy(game) => game.state(),
            Self::Pong(game) => game.state(),
            Self::Guardian(game) => game.state(),
            Self::Guardian2(game) => game.state(),
            Self::PulseWarrior(game) => game.state(),
            Self::ColorRunner(game) => game.state(),
            Self::Splatoon(game) => game.state(),
        }
    }
}
