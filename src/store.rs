//! Persisted game-selection storage.
//!
//! The selector keeps one byte of state across power cycles: the active
//! game id. Where it lives (EEPROM, flash page, NVS key) is the host's
//! business; the core only reads one byte at boot and writes one byte
//! on change, and never trusts what it reads without bounds-checking.

/// One-byte persisted store for the selected game id.
pub trait SelectionStore {
    /// Read the stored id. May be garbage on first boot.
    fn read_selection(&mut self) -> u8;

    /// Persist a new id.
    fn write_selection(&mut self, id: u8);
}

impl<T: SelectionStore> SelectionStore for &mut T {
    fn read_selection(&mut self) -> u8 {
        (**self).read_selection()
    }

    fn write_selection(&mut self, id: u8) {
        (**self).write_selection(id);
    }
}

/// Volatile store for simulators and tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct MemoryStore {
    value: u8,
}

impl MemoryStore {
    pub const fn new(value: u8) -> Self {
        Self { value }
    }

    pub const fn value(&self) -> u8 {
        self.value
    }
}

impl SelectionStore for MemoryStore {
    fn read_selection(&mut self) -> u8 {
        self.value
    }

    fn write_selection(&mut self, id: u8) {
        self.value = id;
    }
}
