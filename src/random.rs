//! Randomness for color selection

/// Source of uniformly distributed random numbers
///
/// Implement this for a hardware RNG on the target; [`Xorshift32`] is enough
/// for picking colors.
pub trait RandomSource {
    /// Random value in `0.0..1.0`
    fn next_unit(&mut self) -> f32;
}

/// Simple xorshift32 PRNG suitable for visual effects.
#[derive(Debug, Clone)]
pub struct Xorshift32 {
    state: u32,
}

impl Xorshift32 {
    pub const fn new(seed: u32) -> Self {
        // Zero is a fixed point of the generator.
        Self {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    pub fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }
}

impl RandomSource for Xorshift32 {
    #[allow(clippy::cast_precision_loss)]
    fn next_unit(&mut self) -> f32 {
        // 24 bits fit the f32 mantissa exactly, keeping the result below 1.0
        (self.next_u32() >> 8) as f32 / (1u32 << 24) as f32
    }
}
