//! Small deterministic random number generator.
//!
//! Games only need cheap spawn placement, so a 32-bit xorshift stream
//! is plenty. The host seeds it once (hardware RNG, boot counter,
//! whatever is around); tests seed it with constants and get
//! reproducible runs.

/// Xorshift32 generator with a SplitMix-style seed scramble.
#[derive(Debug, Clone)]
pub struct Rng {
    state: u32,
}

impl Rng {
    /// Create a generator from any seed, including zero.
    pub const fn new(seed: u32) -> Self {
        // Scramble so nearby seeds do not produce nearby streams.
        let mut z = seed.wrapping_add(0x9E37_79B9);
        z = (z ^ (z >> 16)).wrapping_mul(0x21F0_AAAD);
        z = (z ^ (z >> 15)).wrapping_mul(0x735A_2D97);
        z ^= z >> 15;
        // Xorshift has a fixed point at zero.
        if z == 0 {
            z = 0x9E37_79B9;
        }
        Self { state: z }
    }

    pub fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }

    /// Uniform-ish value in `0..bound`. `bound` must be nonzero.
    ///
    /// Modulo bias is irrelevant at game-strip scales.
    pub fn range(&mut self, bound: u32) -> u32 {
        debug_assert!(bound > 0);
        self.next_u32() % bound
    }

    /// True once in `denominator` calls on average.
    pub fn one_in(&mut self, denominator: u32) -> bool {
        self.range(denominator) == 0
    }
}
