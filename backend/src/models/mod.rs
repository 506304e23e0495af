//! Domain models for the match

pub mod board;
pub mod event;
pub mod penalty;
pub mod player;

// Re-exports
pub use board::{BoardSize, Position};
pub use event::{Event, EventLog, RefusalReason};
pub use penalty::{PenaltyRecord, ViolationOutcome};
pub use player::{Player, PlayerError};
