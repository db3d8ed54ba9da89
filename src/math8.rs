//! 8-bit fixed-point math helpers.

/// Scale an 8-bit value by a factor (0-255 = 0.0-1.0)
///
/// Uses integer math for efficiency on embedded systems. `scale8(v, 0)`
/// is zero and `scale8(v, 255)` is `v`.
#[inline]
#[allow(clippy::cast_lossless)]
pub const fn scale8(value: u8, scale: u8) -> u8 {
    ((value as u16 * (1 + scale as u16)) >> 8) as u8
}

/// Fade an 8-bit value toward zero by a proportional amount (0-255).
///
/// Fading by `amount` keeps `(256 - amount) / 256` of the value, so
/// repeated fades converge to exact zero and never increase the value.
#[inline]
pub const fn fade8(value: u8, amount: u8) -> u8 {
    scale8(value, 255 - amount)
}
