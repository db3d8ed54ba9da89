//! Color types and per-channel helpers for the cell buffer.

use smart_leds::RGB8;

pub use smart_leds::colors;

use crate::math8::scale8;

pub type Rgb = RGB8;

/// Add two RGB colors channel-wise, saturating at 255.
///
/// Used for overlay indicators (scores, charge meters) drawn on top of
/// game elements without losing the underlying color entirely.
#[inline]
pub const fn saturating_add(a: Rgb, b: Rgb) -> Rgb {
    Rgb {
        r: a.r.saturating_add(b.r),
        g: a.g.saturating_add(b.g),
        b: a.b.saturating_add(b.b),
    }
}

/// Scale an RGB color channel-wise by a factor (0-255 = 0.0-1.0)
#[inline]
pub const fn scaled(color: Rgb, scale: u8) -> Rgb {
    Rgb {
        r: scale8(color.r, scale),
        g: scale8(color.g, scale),
        b: scale8(color.b, scale),
    }
}

/// Create an RGB color from a u32 value (0xRRGGBB format)
pub const fn rgb_from_u32(color: u32) -> Rgb {
    Rgb {
        r: ((color >> 16) & 0xFF) as u8,
        g: ((color >> 8) & 0xFF) as u8,
        b: (color & 0xFF) as u8,
    }
}
