//! Turn counting for the match
//!
//! A match advances in discrete turns. The clock only ever moves forward,
//! one turn at a time, and answers cooldown questions relative to the
//! current turn.

use serde::{Deserialize, Serialize};

/// Counts completed turns
///
/// # Example
/// ```
/// use last_player_core_rs::TurnClock;
///
/// let mut clock = TurnClock::new();
/// assert_eq!(clock.current_turn(), 0);
///
/// clock.advance_turn();
/// assert_eq!(clock.current_turn(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnClock {
    current_turn: usize,
}

impl TurnClock {
    /// Create a clock at turn 0
    pub fn new() -> Self {
        Self { current_turn: 0 }
    }

    /// Advance time by exactly one turn
    pub fn advance_turn(&mut self) {
        self.current_turn += 1;
    }

    /// Index of the turn currently being played (completed turns so far)
    pub fn current_turn(&self) -> usize {
        self.current_turn
    }

    /// Whether at least `cooldown` turns have passed since `since_turn`
    ///
    /// # Example
    /// ```
    /// use last_player_core_rs::TurnClock;
    ///
    /// let mut clock = TurnClock::new();
    /// for _ in 0..14 {
    ///     clock.advance_turn();
    /// }
    /// assert!(!clock.has_elapsed(5, 10));
    ///
    /// clock.advance_turn();
    /// assert!(clock.has_elapsed(5, 10));
    /// ```
    pub fn has_elapsed(&self, since_turn: usize, cooldown: usize) -> bool {
        self.current_turn >= since_turn.saturating_add(cooldown)
    }

    /// Turns left before `has_elapsed(since_turn, cooldown)` becomes true
    pub fn turns_remaining(&self, since_turn: usize, cooldown: usize) -> usize {
        since_turn
            .saturating_add(cooldown)
            .saturating_sub(self.current_turn)
    }
}
