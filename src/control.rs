//! Control intents from external surfaces.
//!
//! Web handlers, message-bus callbacks, and serial consoles never touch
//! the selector directly; they enqueue intents here and the runtime
//! drains the queue at the top of each iteration, strictly before any
//! game tick. That keeps plugin activation mutually exclusive with
//! ticking even when producers run in interrupt or network contexts.

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::Deque;
use log::warn;

/// A control request for the runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlIntent {
    /// Switch to the game with this raw id; invalid ids are dropped
    /// with a warning.
    SelectGame(u8),
    /// Freeze simulation time. Rendering and status keep running.
    Pause,
    /// Resume a paused simulation.
    Resume,
}

/// Error returned when enqueueing into a full queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrySendError(pub ControlIntent);

/// Bounded intent queue guarded by critical sections.
///
/// Suitable as a `static`: producers hold [`ControlSender`] handles
/// (`Copy`, interrupt-safe), the runtime holds the single
/// [`ControlReceiver`].
pub struct ControlChannel<const SIZE: usize> {
    inner: Mutex<RefCell<Deque<ControlIntent, SIZE>>>,
}

impl<const SIZE: usize> ControlChannel<SIZE> {
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    pub const fn sender(&self) -> ControlSender<'_, SIZE> {
        ControlSender { channel: self }
    }

    pub const fn receiver(&self) -> ControlReceiver<'_, SIZE> {
        ControlReceiver { channel: self }
    }

    fn try_send(&self, intent: ControlIntent) -> Result<(), TrySendError> {
        let result = critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.push_back(intent).map_err(TrySendError)
        });
        if result.is_err() {
            warn!("control queue full, dropping {:?}", intent);
        }
        result
    }

    fn try_receive(&self) -> Option<ControlIntent> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.pop_front()
        })
    }
}

impl<const SIZE: usize> Default for ControlChannel<SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

/// Producer handle for a [`ControlChannel`].
#[derive(Clone, Copy)]
pub struct ControlSender<'a, const SIZE: usize> {
    channel: &'a ControlChannel<SIZE>,
}

impl<const SIZE: usize> ControlSender<'_, SIZE> {
    /// Enqueue an intent; `Err` carries it back if the queue is full.
    pub fn try_send(&self, intent: ControlIntent) -> Result<(), TrySendError> {
        self.channel.try_send(intent)
    }
}

/// Consumer handle for a [`ControlChannel`].
#[derive(Clone, Copy)]
pub struct ControlReceiver<'a, const SIZE: usize> {
    channel: &'a ControlChannel<SIZE>,
}

impl<const SIZE: usize> ControlReceiver<'_, SIZE> {
    /// Dequeue the oldest pending intent, if any.
    pub fn try_receive(&self) -> Option<ControlIntent> {
        self.channel.try_receive()
    }
}
