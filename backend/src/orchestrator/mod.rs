//! Orchestrator - the match engine
//!
//! See `engine.rs` for the turn loop and `snapshot.rs` for the read-only
//! view handed to drivers.

pub mod engine;
pub mod snapshot;

// Re-export main types for convenience
pub use engine::{
    Match, MatchConfig, MatchError, MatchStatus, PlayerRecord, TurnResult,
    REENTRY_COOLDOWN_TURNS,
};
pub use snapshot::{MatchSnapshot, PlayerSnapshot};
