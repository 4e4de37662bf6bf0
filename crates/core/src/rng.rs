//! RNG module - injectable random source
//!
//! The session never touches process-wide randomness. It draws from a
//! [`RandomSource`] handed in by the caller, which makes every game
//! reproducible from its seed and lets tests script the exact piece sequence.

/// Source of random numbers for piece and color draws.
pub trait RandomSource {
    /// Next raw 32-bit value
    fn next_u32(&mut self) -> u32;

    /// Value in range [0, max). `max` must be non-zero.
    fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn next_u32(&mut self) -> u32 {
        (**self).next_u32()
    }

    fn next_range(&mut self, max: u32) -> u32 {
        (**self).next_range(max)
    }
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // A zero state is a fixed point of the multiply step for some constants; avoid it.
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Current internal state (feeding it back into `new` continues the sequence)
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl RandomSource for SimpleRng {
    fn next_u32(&mut self) -> u32 {
        // (a * state + c) mod 2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        // Low bits of a power-of-two LCG cycle quickly; hand out the high half.
        self.state >> 16
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(crate::types::DEFAULT_SEED)
    }
}

/// Replays a fixed list of values, cycling when exhausted.
///
/// Intended for tests and demos that need an exact piece/color sequence:
/// every spawn consumes two values, kind index first, then color index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptedRng {
    values: Vec<u32>,
    pos: usize,
}

impl ScriptedRng {
    pub fn new(values: impl Into<Vec<u32>>) -> Self {
        let mut values = values.into();
        if values.is_empty() {
            values.push(0);
        }
        Self { values, pos: 0 }
    }
}

impl RandomSource for ScriptedRng {
    fn next_u32(&mut self) -> u32 {
        let v = self.values[self.pos % self.values.len()];
        self.pos = self.pos.wrapping_add(1);
        v
    }
}
