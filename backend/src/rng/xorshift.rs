//! xorshift64* random number generator
//!
//! A small, fast PRNG with 64-bit state. Output is multiplied by a constant
//! after the shift steps, which lets it pass BigCrush.
//!
//! The same seed yields the same sequence for a given build. Nothing beyond
//! that is promised about replay.

use super::RandomSource;
use serde::{Deserialize, Serialize};

/// Seeded random number generator using xorshift64*
///
/// # Example
/// ```
/// use last_player_core_rs::rng::{RandomSource, RngManager};
///
/// let mut rng = RngManager::new(12345);
/// let angle = rng.uniform(0.0, 360.0);
/// assert!((0.0..360.0).contains(&angle));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngManager {
    state: u64,
}

impl RngManager {
    /// Create a new RNG with given seed
    ///
    /// A zero seed is replaced by 1, since xorshift never leaves the zero state.
    pub fn new(seed: u64) -> Self {
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u64 value
    pub fn next(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545F4914F6CDD1D)
    }

    /// Current internal state
    pub fn get_state(&self) -> u64 {
        self.state
    }
}

impl RandomSource for RngManager {
    fn next_f64(&mut self) -> f64 {
        // Top 53 bits scaled by 2^-53
        (self.next() >> 11) as f64 * (1.0 / ((1u64 << 53) as f64))
    }
}
