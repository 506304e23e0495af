//! Match Engine
//!
//! Owns the board, the roster and the penalty bookkeeping, and runs the
//! match one turn at a time.
//!
//! # Turn loop
//!
//! ```text
//! For each roster entry, in roster order:
//!   on board:
//!     1. player walks one step (committed by the player)
//!     2. count players within safety distance of the new spot (mover included)
//!     3. count > 1 → minor violation; second minor → major, ejected
//!   off board:
//!     1. player may propose a re-entry spot
//!     2. commit it if the player is a contender and its cooldown has elapsed
//! Then advance the turn counter.
//! ```
//!
//! Proximity is evaluated incrementally: a player sees earlier roster entries
//! at the positions they took this turn (or off the board, if they were just
//! ejected) and later entries where they stood at the start of the turn.
//!
//! # Example
//!
//! ```rust
//! use last_player_core_rs::{Match, MatchConfig};
//!
//! let config = MatchConfig {
//!     board_width: 30,
//!     board_height: 30,
//!     num_players: 4,
//!     ..MatchConfig::default()
//! };
//!
//! let mut game = Match::new(config).unwrap();
//! game.place_all_randomly().unwrap();
//!
//! for _ in 0..10 {
//!     let result = game.advance_turn().unwrap();
//!     if result.status.is_decided() {
//!         break;
//!     }
//! }
//! ```

use crate::core::turn::TurnClock;
use crate::models::board::{BoardSize, Position};
use crate::models::event::{Event, EventLog, RefusalReason};
use crate::models::penalty::{PenaltyRecord, ViolationOutcome};
use crate::models::player::{Player, PlayerError};
use crate::rng::{RandomSource, RngManager};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

/// Turns an ejected player must sit out before it may re-enter
pub const REENTRY_COOLDOWN_TURNS: usize = 10;

// ============================================================================
// Configuration Types
// ============================================================================

/// Complete match configuration
///
/// Every field has a default, so a JSON document may set any subset of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Board width in cells (x ranges over `[0, width-1]`)
    pub board_width: u32,

    /// Board height in cells (y ranges over `[0, height-1]`)
    pub board_height: u32,

    /// Number of players in the roster
    pub num_players: usize,

    /// Players closer than this (inclusive) are in violation
    pub safety_distance: f64,

    /// Distance every player walks per turn
    pub step: f64,

    /// Cap on rejection-sampling draws for a single placement or move
    pub max_search_attempts: usize,

    /// Seed for the default random source
    pub rng_seed: u64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            board_width: 100,
            board_height: 100,
            num_players: 10,
            safety_distance: 2.0,
            step: 1.0,
            max_search_attempts: 10_000,
            rng_seed: 12345,
        }
    }
}

// ============================================================================
// Roster, Status and Results
// ============================================================================

/// A player paired with its penalty record
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerRecord {
    player: Player,
    penalty: PenaltyRecord,
}

impl PlayerRecord {
    pub fn new(player: Player) -> Self {
        Self {
            player,
            penalty: PenaltyRecord::new(),
        }
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn penalty(&self) -> &PenaltyRecord {
        &self.penalty
    }

    /// Mutable player access; bypasses match rules
    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    /// Mutable penalty access; bypasses match rules
    pub fn penalty_mut(&mut self) -> &mut PenaltyRecord {
        &mut self.penalty
    }

    pub fn is_contender(&self) -> bool {
        self.penalty.is_contender()
    }
}

/// Where the match stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum MatchStatus {
    /// Two or more contenders remain
    InProgress { contenders: usize },
    /// Exactly one contender remains, at this roster index
    Won { index: usize },
    /// Every player has been eliminated; nobody can win
    NoContenders,
}

impl MatchStatus {
    /// Whether the match has reached a terminal state
    pub fn is_decided(&self) -> bool {
        !matches!(self, MatchStatus::InProgress { .. })
    }
}

/// Result of a single turn
#[derive(Debug, Clone, PartialEq)]
pub struct TurnResult {
    /// Turn number that was played
    pub turn: usize,

    /// On-board players that walked a step
    pub moves: usize,

    /// Proximity violations committed (including escalated ones)
    pub violations: usize,

    /// Players forced off the board
    pub ejections: usize,

    /// Players let back on the board
    pub re_entries: usize,

    /// Status after the turn
    pub status: MatchStatus,
}

/// Match error types
#[derive(Debug, Error, PartialEq)]
pub enum MatchError {
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Player not found at roster index {0}")]
    PlayerNotFound(usize),

    #[error("Player {player} is already on the board")]
    AlreadyPlaced { player: String },

    #[error("No valid position for player {player} after {attempts} attempts")]
    PlacementExhausted { player: String, attempts: usize },
}

/// What one roster entry did this turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Transition {
    Moved,
    Warned,
    Ejected,
    ReEntered,
    Idle,
}

// ============================================================================
// Match
// ============================================================================

/// A running match
///
/// The roster order is fixed at construction. Players are never added or
/// removed; ejection only clears a player's position.
pub struct Match {
    board: BoardSize,
    safety_distance: f64,
    max_search_attempts: usize,
    clock: TurnClock,
    roster: Vec<PlayerRecord>,
    rng: Box<dyn RandomSource>,
    event_log: EventLog,
}

impl Match {
    /// Create a match using an [`RngManager`] seeded from the config
    pub fn new(config: MatchConfig) -> Result<Self, MatchError> {
        let rng = RngManager::new(config.rng_seed);
        Self::with_rng(config, Box::new(rng))
    }

    /// Create a match drawing all randomness from `rng`
    ///
    /// Players get ids `"0"` to `"n-1"` in roster order, each with an
    /// engagement probability drawn from `rng` at creation. Nobody is placed.
    pub fn with_rng(
        config: MatchConfig,
        mut rng: Box<dyn RandomSource>,
    ) -> Result<Self, MatchError> {
        Self::validate_config(&config)?;

        let roster = (0..config.num_players)
            .map(|index| {
                let player =
                    Player::with_random_engagement(index.to_string(), config.step, rng.as_mut());
                PlayerRecord::new(player)
            })
            .collect();

        Ok(Self {
            board: BoardSize::new(config.board_width, config.board_height),
            safety_distance: config.safety_distance,
            max_search_attempts: config.max_search_attempts,
            clock: TurnClock::new(),
            roster,
            rng,
            event_log: EventLog::new(),
        })
    }

    fn validate_config(config: &MatchConfig) -> Result<(), MatchError> {
        if config.board_width == 0 || config.board_height == 0 {
            return Err(MatchError::InvalidConfig(
                "board dimensions must be > 0".to_string(),
            ));
        }

        if config.num_players == 0 {
            return Err(MatchError::InvalidConfig(
                "Must have at least one player".to_string(),
            ));
        }

        if !config.safety_distance.is_finite() || config.safety_distance < 0.0 {
            return Err(MatchError::InvalidConfig(format!(
                "safety_distance must be finite and >= 0, got {}",
                config.safety_distance
            )));
        }

        if !config.step.is_finite() || config.step <= 0.0 {
            return Err(MatchError::InvalidConfig(format!(
                "step must be finite and > 0, got {}",
                config.step
            )));
        }

        if config.max_search_attempts == 0 {
            return Err(MatchError::InvalidConfig(
                "max_search_attempts must be > 0".to_string(),
            ));
        }

        Ok(())
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn board(&self) -> BoardSize {
        self.board
    }

    pub fn safety_distance(&self) -> f64 {
        self.safety_distance
    }

    /// Number of completed turns
    pub fn turn_number(&self) -> usize {
        self.clock.current_turn()
    }

    pub fn num_players(&self) -> usize {
        self.roster.len()
    }

    pub fn roster(&self) -> &[PlayerRecord] {
        &self.roster
    }

    /// Mutable roster access
    ///
    /// This is primarily for testing. Direct mutation bypasses the match
    /// rules, so scenario setup is the only sensible use.
    pub fn roster_mut(&mut self) -> &mut [PlayerRecord] {
        &mut self.roster
    }

    pub fn record(&self, index: usize) -> Option<&PlayerRecord> {
        self.roster.get(index)
    }

    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.roster.iter().map(PlayerRecord::player)
    }

    /// Number of players still eligible to win
    pub fn contenders(&self) -> usize {
        self.roster.iter().filter(|r| r.is_contender()).count()
    }

    pub fn event_log(&self) -> &EventLog {
        &self.event_log
    }

    fn log_event(&mut self, event: Event) {
        debug!(
            turn = event.turn(),
            player = event.player_id(),
            kind = event.event_type(),
            "match event"
        );
        self.event_log.log(event);
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Count placed players within the safety distance of `position`
    ///
    /// The boundary is inclusive. A player standing at `position` counts
    /// itself.
    pub fn count_near(&self, position: Position) -> usize {
        self.roster
            .iter()
            .filter_map(|r| r.player.position())
            .filter(|p| p.distance_to(&position) <= self.safety_distance)
            .count()
    }

    /// Current match status
    pub fn status(&self) -> MatchStatus {
        let contenders: Vec<usize> = self
            .roster
            .iter()
            .enumerate()
            .filter(|(_, r)| r.is_contender())
            .map(|(index, _)| index)
            .collect();

        match contenders.as_slice() {
            [] => MatchStatus::NoContenders,
            [index] => MatchStatus::Won { index: *index },
            others => MatchStatus::InProgress {
                contenders: others.len(),
            },
        }
    }

    /// The winner, if exactly one contender remains
    ///
    /// Ejected players that are not yet eliminated still count as
    /// contenders, so an off-board player can win.
    pub fn winner(&self) -> Option<&Player> {
        match self.status() {
            MatchStatus::Won { index } => Some(&self.roster[index].player),
            _ => None,
        }
    }

    // ========================================================================
    // Setup
    // ========================================================================

    /// Put the player at `index` on a random spot
    ///
    /// With `enforce_spacing`, spots within the safety distance of any placed
    /// player are rejected and redrawn. Re-entry during the match never
    /// checks spacing; this is the only path that does.
    ///
    /// # Errors
    ///
    /// * `PlayerNotFound` - `index` is outside the roster
    /// * `AlreadyPlaced` - the player already has a position
    /// * `PlacementExhausted` - no acceptable spot within `max_search_attempts` draws
    pub fn place_randomly(
        &mut self,
        index: usize,
        enforce_spacing: bool,
    ) -> Result<Position, MatchError> {
        let record = self
            .roster
            .get(index)
            .ok_or(MatchError::PlayerNotFound(index))?;
        let player_id = record.player.id().to_string();

        if record.player.is_placed() {
            return Err(MatchError::AlreadyPlaced { player: player_id });
        }

        for _ in 0..self.max_search_attempts {
            let candidate = self.board.random_position(self.rng.as_mut());
            if enforce_spacing && self.count_near(candidate) > 0 {
                continue;
            }

            self.roster[index].player.commit(Some(candidate));
            self.log_event(Event::Placed {
                turn: self.clock.current_turn(),
                player_id,
                position: candidate,
            });
            return Ok(candidate);
        }

        Err(MatchError::PlacementExhausted {
            player: player_id,
            attempts: self.max_search_attempts,
        })
    }

    /// Place every off-board player in roster order, keeping the spacing
    pub fn place_all_randomly(&mut self) -> Result<(), MatchError> {
        for index in 0..self.roster.len() {
            if !self.roster[index].player.is_placed() {
                self.place_randomly(index, true)?;
            }
        }
        Ok(())
    }

    // ========================================================================
    // Turn Loop
    // ========================================================================

    /// Play one turn for every player, then advance the turn counter
    ///
    /// A decided match can keep advancing; the turn sequence is the same
    /// either way and drivers stop on [`MatchStatus::is_decided`].
    ///
    /// # Errors
    ///
    /// `PlacementExhausted` if an on-board player finds no in-bounds
    /// direction. The turn is rolled back: positions, penalties and the
    /// event log are restored to their state at the start of the turn and
    /// the counter is not advanced. Random draws already made stay consumed.
    pub fn advance_turn(&mut self) -> Result<TurnResult, MatchError> {
        let roster_at_start = self.roster.clone();
        let events_at_start = self.event_log.len();

        match self.play_turn() {
            Ok(result) => Ok(result),
            Err(err) => {
                self.roster = roster_at_start;
                self.event_log.truncate(events_at_start);
                debug!(turn = self.turn_number(), error = %err, "turn rolled back");
                Err(err)
            }
        }
    }

    fn play_turn(&mut self) -> Result<TurnResult, MatchError> {
        let turn = self.clock.current_turn();
        let mut result = TurnResult {
            turn,
            moves: 0,
            violations: 0,
            ejections: 0,
            re_entries: 0,
            status: MatchStatus::NoContenders,
        };

        for index in 0..self.roster.len() {
            let transition = if self.roster[index].player.is_placed() {
                self.play_on_board(index, turn)?
            } else {
                self.play_off_board(index, turn)?
            };

            match transition {
                Transition::Moved => result.moves += 1,
                Transition::Warned => {
                    result.moves += 1;
                    result.violations += 1;
                }
                Transition::Ejected => {
                    result.moves += 1;
                    result.violations += 1;
                    result.ejections += 1;
                }
                Transition::ReEntered => result.re_entries += 1,
                Transition::Idle => {}
            }
        }

        self.clock.advance_turn();
        result.status = self.status();

        match result.status {
            MatchStatus::Won { index } => {
                info!(
                    turns = self.turn_number(),
                    winner = self.roster[index].player.id(),
                    "match won"
                )
            }
            MatchStatus::NoContenders => {
                info!(turns = self.turn_number(), "no contenders remain")
            }
            MatchStatus::InProgress { .. } => {}
        }

        Ok(result)
    }

    fn play_on_board(&mut self, index: usize, turn: usize) -> Result<Transition, MatchError> {
        let Some(from) = self.roster[index].player.position() else {
            return Ok(Transition::Idle);
        };

        let proposal = self.roster[index].player.propose_move(
            self.board,
            self.rng.as_mut(),
            self.max_search_attempts,
        );
        let to = match proposal {
            Ok(Some(to)) => to,
            Ok(None) => return Ok(Transition::Idle),
            Err(err) => return Err(self.search_error(index, err)),
        };

        let player_id = self.roster[index].player.id().to_string();
        self.log_event(Event::Moved {
            turn,
            player_id: player_id.clone(),
            from,
            to,
        });

        let nearby = self.count_near(to);
        if nearby <= 1 {
            return Ok(Transition::Moved);
        }

        self.log_event(Event::MinorViolation {
            turn,
            player_id: player_id.clone(),
            nearby,
        });

        match self.roster[index].penalty.record_violation(turn) {
            ViolationOutcome::Warned { .. } => Ok(Transition::Warned),
            ViolationOutcome::Ejected { major_violations } => {
                self.roster[index].player.commit(None);
                info!(turn, player = %player_id, major_violations, "player ejected");
                self.log_event(Event::Ejected {
                    turn,
                    player_id,
                    major_violations,
                });
                Ok(Transition::Ejected)
            }
        }
    }

    fn play_off_board(&mut self, index: usize, turn: usize) -> Result<Transition, MatchError> {
        let proposal = self.roster[index].player.propose_move(
            self.board,
            self.rng.as_mut(),
            self.max_search_attempts,
        );
        let candidate = match proposal {
            Ok(Some(candidate)) => candidate,
            Ok(None) => return Ok(Transition::Idle),
            Err(err) => return Err(self.search_error(index, err)),
        };

        let player_id = self.roster[index].player.id().to_string();
        if let Some(reason) = self.reentry_refusal(index) {
            self.log_event(Event::ReEntryRefused {
                turn,
                player_id,
                reason,
            });
            return Ok(Transition::Idle);
        }

        self.roster[index].player.commit(Some(candidate));
        self.log_event(Event::ReEntered {
            turn,
            player_id,
            position: candidate,
        });
        Ok(Transition::ReEntered)
    }

    /// Why the player at `index` may not come back right now, if anything
    ///
    /// A player that was never ejected has no cooldown to serve.
    fn reentry_refusal(&self, index: usize) -> Option<RefusalReason> {
        let penalty = &self.roster[index].penalty;
        if !penalty.is_contender() {
            return Some(RefusalReason::Eliminated);
        }

        let ejected_at = penalty.ejected_at_turn()?;
        if self.clock.has_elapsed(ejected_at, REENTRY_COOLDOWN_TURNS) {
            None
        } else {
            Some(RefusalReason::CoolingDown {
                turns_remaining: self
                    .clock
                    .turns_remaining(ejected_at, REENTRY_COOLDOWN_TURNS),
            })
        }
    }

    fn search_error(&self, index: usize, err: PlayerError) -> MatchError {
        match err {
            PlayerError::SearchExhausted { attempts } => MatchError::PlacementExhausted {
                player: self.roster[index].player.id().to_string(),
                attempts,
            },
        }
    }
}

impl std::fmt::Debug for Match {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Match")
            .field("board", &self.board)
            .field("safety_distance", &self.safety_distance)
            .field("turn_number", &self.clock.current_turn())
            .field("num_players", &self.roster.len())
            .field("event_count", &self.event_log.len())
            .finish()
    }
}
