//! Scripted random source

use super::RandomSource;

/// Replays a fixed list of `[0.0, 1.0)` samples, cycling when exhausted
///
/// Lets tests pin down exactly which direction, re-entry draw or placement a
/// player gets.
///
/// # Example
/// ```
/// use last_player_core_rs::rng::{RandomSource, SequenceRng};
///
/// let mut rng = SequenceRng::new(vec![0.0, 0.5]);
/// assert_eq!(rng.uniform(0.0, 360.0), 0.0);
/// assert_eq!(rng.uniform(0.0, 360.0), 180.0);
/// assert_eq!(rng.next_f64(), 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct SequenceRng {
    values: Vec<f64>,
    cursor: usize,
}

impl SequenceRng {
    /// # Panics
    /// Panics if `values` is empty or holds a value outside `[0.0, 1.0)`.
    pub fn new(values: Vec<f64>) -> Self {
        assert!(!values.is_empty(), "sequence must not be empty");
        assert!(
            values.iter().all(|v| (0.0..1.0).contains(v)),
            "sequence values must lie in [0.0, 1.0)"
        );
        Self { values, cursor: 0 }
    }

    /// A source that always returns the same sample
    pub fn constant(value: f64) -> Self {
        Self::new(vec![value])
    }

    /// Number of samples handed out so far
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for SequenceRng {
    fn next_f64(&mut self) -> f64 {
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}
