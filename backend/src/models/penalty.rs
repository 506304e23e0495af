//! Proximity penalty bookkeeping
//!
//! Each player carries one [`PenaltyRecord`], owned by the match. The record
//! is a small state machine:
//!
//! ```text
//! minor 0 --violation--> minor 1 --violation--> minor 0, major +1, ejected
//! ```
//!
//! A player whose `major_violations` exceeds [`MAX_MAJOR_VIOLATIONS`] is out
//! of contention for good.

use serde::{Deserialize, Serialize};

/// Minor violations that escalate into one major violation
pub const MINOR_VIOLATIONS_PER_MAJOR: u32 = 2;

/// Most major violations a player can carry and still be a contender
pub const MAX_MAJOR_VIOLATIONS: u32 = 1;

/// What a single proximity violation did to the record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationOutcome {
    /// First minor violation; the player stays on the board
    Warned { minor_violations: u32 },
    /// Escalated to a major violation; the player must leave the board
    Ejected { major_violations: u32 },
}

/// Per-player penalty counters
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PenaltyRecord {
    minor_violations: u32,
    major_violations: u32,
    ejected_at_turn: Option<usize>,
}

impl PenaltyRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a record from raw counters
    ///
    /// Used by tests and scenario setup. `minor_violations` is reduced
    /// modulo [`MINOR_VIOLATIONS_PER_MAJOR`] to keep the stored value valid.
    pub fn from_parts(
        minor_violations: u32,
        major_violations: u32,
        ejected_at_turn: Option<usize>,
    ) -> Self {
        Self {
            minor_violations: minor_violations % MINOR_VIOLATIONS_PER_MAJOR,
            major_violations,
            ejected_at_turn,
        }
    }

    pub fn minor_violations(&self) -> u32 {
        self.minor_violations
    }

    pub fn major_violations(&self) -> u32 {
        self.major_violations
    }

    pub fn ejected_at_turn(&self) -> Option<usize> {
        self.ejected_at_turn
    }

    /// Whether the player can still win
    pub fn is_contender(&self) -> bool {
        self.major_violations <= MAX_MAJOR_VIOLATIONS
    }

    /// Apply one proximity violation committed during `turn`
    ///
    /// # Example
    /// ```
    /// use last_player_core_rs::models::penalty::{PenaltyRecord, ViolationOutcome};
    ///
    /// let mut record = PenaltyRecord::new();
    /// assert_eq!(record.record_violation(3), ViolationOutcome::Warned { minor_violations: 1 });
    /// assert_eq!(record.record_violation(4), ViolationOutcome::Ejected { major_violations: 1 });
    /// assert_eq!(record.minor_violations(), 0);
    /// assert_eq!(record.ejected_at_turn(), Some(4));
    /// ```
    pub fn record_violation(&mut self, turn: usize) -> ViolationOutcome {
        self.minor_violations += 1;
        if self.minor_violations < MINOR_VIOLATIONS_PER_MAJOR {
            return ViolationOutcome::Warned {
                minor_violations: self.minor_violations,
            };
        }

        self.minor_violations = 0;
        self.major_violations += 1;
        self.ejected_at_turn = Some(turn);
        ViolationOutcome::Ejected {
            major_violations: self.major_violations,
        }
    }
}
