//! Cell buffer primitives.
//!
//! The display is a flat `[Rgb]` slice owned by the runtime. Games draw
//! into it with these helpers plus plain indexed stores. Indexing is
//! deliberately unchecked beyond the slice bounds themselves: an
//! out-of-range cell index is a game logic bug and panics in every build
//! rather than being clamped into a wrong-but-visible pixel.

use crate::{
    color::{Rgb, colors, saturating_add},
    math8::fade8,
};

/// Fade every cell toward black by a proportional amount (0-255).
///
/// Each channel keeps `(256 - amount) / 256` of its value per call, the
/// exponential decay used for motion trails. Amount 0 is a no-op, 255
/// clears in one call.
pub fn fade_to_black(cells: &mut [Rgb], amount: u8) {
    for cell in cells {
        cell.r = fade8(cell.r, amount);
        cell.g = fade8(cell.g, amount);
        cell.b = fade8(cell.b, amount);
    }
}

/// Additively blend a color into one cell, saturating per channel.
pub fn add(cells: &mut [Rgb], index: usize, color: Rgb) {
    cells[index] = saturating_add(cells[index], color);
}

/// Overwrite every cell with one color.
pub fn fill(cells: &mut [Rgb], color: Rgb) {
    for cell in cells {
        *cell = color;
    }
}

/// Overwrite every cell with black.
pub fn clear(cells: &mut [Rgb]) {
    fill(cells, colors::BLACK);
}
