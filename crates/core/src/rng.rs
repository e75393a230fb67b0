//! RNG module - deterministic card selection
//!
//! A small LCG is enough to pick a card uniformly from the remaining words,
//! and a fixed seed keeps sessions reproducible in tests and benchmarks.

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Pick an index in `[0, len)`.
    ///
    /// Uses the high bits of a widened product instead of `%`: the low bits of
    /// an LCG with a power-of-two modulus cycle with a short period.
    pub fn pick_index(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        let len = u32::try_from(len).unwrap_or(u32::MAX) as u64;
        let r = self.next_u32() as u64;
        Some(((r * len) >> 32) as usize)
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}
