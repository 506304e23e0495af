//! Snapshot - read-only view of a match
//!
//! Captures everything a driver needs to report on a match (board, turn,
//! every player's position and penalties, status) as plain serializable
//! data. Snapshots are taken, never restored.

use crate::models::board::Position;
use crate::orchestrator::engine::{Match, MatchStatus, PlayerRecord};
use serde::{Deserialize, Serialize};

/// Complete match state at one point in time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchSnapshot {
    /// Completed turns
    pub turn_number: usize,

    pub board_width: u32,
    pub board_height: u32,
    pub safety_distance: f64,

    /// Players in roster order
    pub players: Vec<PlayerSnapshot>,

    pub status: MatchStatus,

    /// Id of the winner, if the match is won
    pub winner: Option<String>,
}

/// Player state snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    pub id: String,
    pub position: Option<Position>,
    pub engagement_probability: f64,
    pub minor_violations: u32,
    pub major_violations: u32,
    pub ejected_at_turn: Option<usize>,
    pub contender: bool,
}

impl From<&PlayerRecord> for PlayerSnapshot {
    fn from(record: &PlayerRecord) -> Self {
        let player = record.player();
        let penalty = record.penalty();
        PlayerSnapshot {
            id: player.id().to_string(),
            position: player.position(),
            engagement_probability: player.engagement_probability(),
            minor_violations: penalty.minor_violations(),
            major_violations: penalty.major_violations(),
            ejected_at_turn: penalty.ejected_at_turn(),
            contender: record.is_contender(),
        }
    }
}

impl From<&Match> for MatchSnapshot {
    fn from(game: &Match) -> Self {
        let board = game.board();
        MatchSnapshot {
            turn_number: game.turn_number(),
            board_width: board.width,
            board_height: board.height,
            safety_distance: game.safety_distance(),
            players: game.roster().iter().map(PlayerSnapshot::from).collect(),
            status: game.status(),
            winner: game.winner().map(|p| p.id().to_string()),
        }
    }
}

impl Match {
    /// Take a snapshot of the current state
    pub fn snapshot(&self) -> MatchSnapshot {
        MatchSnapshot::from(self)
    }
}
