//! Last Player Standing - Rust Engine
//!
//! Turn-based elimination game on a rectangular board. Players wander at
//! random, get penalized for standing too close to each other, are ejected
//! after repeated violations, may come back after a cooldown, and are out
//! for good after a second ejection. The last contender wins.
//!
//! # Architecture
//!
//! - **core**: Turn counting
//! - **models**: Domain types (Board, Player, PenaltyRecord, Event)
//! - **orchestrator**: The match engine and its snapshots
//! - **rng**: Injectable random number generation
//!
//! # Critical Invariants
//!
//! 1. A player is fully on the board or fully off it
//! 2. Stored minor violations never exceed 1; major violations never decrease
//! 3. An ejected player stays off the board for at least 10 turns
//! 4. All randomness goes through a `RandomSource`
//!
//! The engine does no I/O. Rendering, config files and the main loop live
//! in the CLI crate.

// Module declarations
pub mod core;
pub mod models;
pub mod orchestrator;
pub mod rng;

// Re-exports for convenience
pub use crate::core::turn::TurnClock;
pub use models::{
    board::{BoardSize, Position},
    event::{Event, EventLog, RefusalReason},
    penalty::{PenaltyRecord, ViolationOutcome},
    player::{Player, PlayerError, ENGAGEMENT_RANGE},
};
pub use orchestrator::{
    Match, MatchConfig, MatchError, MatchSnapshot, MatchStatus, PlayerRecord, PlayerSnapshot,
    TurnResult, REENTRY_COOLDOWN_TURNS,
};
pub use rng::{RandomSource, RngManager, SequenceRng};
