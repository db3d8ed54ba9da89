#![no_std]

pub mod color;
pub mod control;
pub mod flourish;
pub mod frame;
pub mod game;
pub mod input;
pub mod math8;
pub mod rng;
pub mod runtime;
pub mod selector;
pub mod status;
pub mod store;
pub mod timestep;

pub use control::{
    ControlChannel, ControlIntent, ControlReceiver, ControlSender, TrySendError,
};
pub use game::{Game, GameId, GameSlot, GAME_COUNT};
pub use input::{Button, ButtonState, InputDebouncer, InputSnapshot, InputSource, RawInput};
pub use runtime::{FrameResult, Runtime, RuntimeConfig};
pub use selector::GameSelector;
pub use status::{GameState, NullStatusSink, StatusMonitor, StatusReport, StatusSink};
pub use store::{MemoryStore, SelectionStore};

pub use color::Rgb;
pub use rng::Rng;
pub use embassy_time::{Duration, Instant};

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// The game runtime is generic over this trait.
pub trait OutputDriver {
    /// Write colors to the LED strip
    fn write(&mut self, colors: &[Rgb]);
}

impl<T: OutputDriver> OutputDriver for &mut T {
    fn write(&mut self, colors: &[Rgb]) {
        (**self).write(colors);
    }
}
