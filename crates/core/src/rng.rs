//! RNG module - buffered random grid coordinates
//!
//! Provides a small LCG and the position generator the spawner samples from.
//! Runs are seeded from the wall clock; tests pass explicit seeds.

use std::time::{SystemTime, UNIX_EPOCH};

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

    /// Generate random value in range [0, max)
    ///
    /// Scales by the high bits; the low bits of an LCG cycle with short periods.
    pub fn next_range(&mut self, max: u32) -> u32 {
        if max == 0 {
            return 0;
        }
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Uniform coordinate in `[buffer, limit - buffer)`
    ///
    /// Purely a bounded sample: callers re-invoke until the coordinate satisfies
    /// their placement constraints. An empty span yields `buffer`.
    pub fn position(&mut self, buffer: i32, limit: i32) -> i32 {
        let span = (limit - 2 * buffer).max(0) as u32;
        buffer + self.next_range(span) as i32
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Wall-clock seed: seconds mixed with sub-second nanos.
pub fn clock_seed() -> u32 {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    (now.as_secs() as u32) ^ now.subsec_nanos().rotate_left(16)
}
