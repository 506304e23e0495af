//! Random number generation
//!
//! Every probabilistic decision in a match (move direction, re-entry draw,
//! placement coordinates, engagement probability) is routed through the
//! [`RandomSource`] trait so that callers can swap in a scripted source.
//!
//! - [`RngManager`]: xorshift64* PRNG, the default source
//! - [`SequenceRng`]: replays a fixed list of values, for scenario tests

mod sequence;
mod xorshift;

pub use sequence::SequenceRng;
pub use xorshift::RngManager;

/// Source of uniformly distributed floating point samples
///
/// Implementors only provide [`RandomSource::next_f64`]; range sampling is
/// derived from it.
pub trait RandomSource {
    /// Next sample in `[0.0, 1.0)`
    fn next_f64(&mut self) -> f64;

    /// Sample uniformly in `[min, max)`
    ///
    /// When `min == max` this always returns `min`, which is how a board
    /// axis of width 1 samples its only coordinate.
    fn uniform(&mut self, min: f64, max: f64) -> f64 {
        min + self.next_f64() * (max - min)
    }
}
