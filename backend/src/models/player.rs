//! Player model
//!
//! A player owns its own spatial state and nothing else: where it stands
//! (if anywhere), how far it moves per turn, and how eager it is to get back
//! on the board once ejected. It knows nothing about other players or about
//! penalties; the match decides what a proposed move means.
//!
//! # Position invariant
//!
//! `position` is an `Option<Position>`, so a player is either fully on the
//! board or fully off it. There is no half-placed state.

use crate::models::board::{BoardSize, Position};
use crate::rng::RandomSource;
use std::fmt;
use thiserror::Error;

/// Range the engagement probability and every re-entry draw are sampled from
pub const ENGAGEMENT_RANGE: (f64, f64) = (1.0, 10.0);

/// Full circle, in degrees, that move directions are drawn from
const FULL_TURN_DEGREES: f64 = 360.0;

/// Errors that can occur during player operations
#[derive(Debug, Error, PartialEq)]
pub enum PlayerError {
    #[error("No valid position found after {attempts} attempts")]
    SearchExhausted { attempts: usize },
}

/// A mobile agent on the board
///
/// # Example
/// ```
/// use last_player_core_rs::{BoardSize, Player, Position};
/// use last_player_core_rs::rng::SequenceRng;
///
/// let mut player = Player::new("7", 1.0, 5.0);
/// player.commit(Some(Position::new(5.0, 5.0)));
///
/// // Direction 0° moves one step along +y
/// let mut rng = SequenceRng::constant(0.0);
/// let moved = player.propose_move(BoardSize::new(10, 10), &mut rng, 100).unwrap();
/// assert_eq!(moved, Some(Position::new(5.0, 6.0)));
/// assert_eq!(player.position(), Some(Position::new(5.0, 6.0)));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    id: String,
    position: Option<Position>,
    step: f64,
    engagement_probability: f64,
}

impl Player {
    /// Create an off-board player with a fixed engagement probability
    pub fn new(id: impl Into<String>, step: f64, engagement_probability: f64) -> Self {
        Self {
            id: id.into(),
            position: None,
            step,
            engagement_probability,
        }
    }

    /// Create an off-board player, drawing its engagement probability once
    /// from [`ENGAGEMENT_RANGE`]
    pub fn with_random_engagement(
        id: impl Into<String>,
        step: f64,
        rng: &mut dyn RandomSource,
    ) -> Self {
        let (low, high) = ENGAGEMENT_RANGE;
        let engagement_probability = rng.uniform(low, high);
        Self::new(id, step, engagement_probability)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn position(&self) -> Option<Position> {
        self.position
    }

    pub fn is_placed(&self) -> bool {
        self.position.is_some()
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn engagement_probability(&self) -> f64 {
        self.engagement_probability
    }

    /// Set or clear the position directly
    ///
    /// Used for initial placement, re-entry and forced ejection.
    pub fn commit(&mut self, position: Option<Position>) {
        self.position = position;
    }

    /// Let the player make its move for this turn
    ///
    /// On the board, the player walks `step` in a uniformly random direction,
    /// retrying directions that would leave the board, and commits the result
    /// itself. Off the board, the player decides whether it wants back in;
    /// if so it returns a random candidate position but stays off the board.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(pos))` - new position (on board) or re-entry candidate (off board)
    /// * `Ok(None)` - off board and not interested this turn
    /// * `Err(PlayerError::SearchExhausted)` - no in-bounds direction found
    ///   within `max_attempts` draws
    pub fn propose_move(
        &mut self,
        board: BoardSize,
        rng: &mut dyn RandomSource,
        max_attempts: usize,
    ) -> Result<Option<Position>, PlayerError> {
        match self.position {
            Some(current) => self.walk(current, board, rng, max_attempts).map(Some),
            None => Ok(self.request_reentry(board, rng)),
        }
    }

    fn walk(
        &mut self,
        current: Position,
        board: BoardSize,
        rng: &mut dyn RandomSource,
        max_attempts: usize,
    ) -> Result<Position, PlayerError> {
        // An axis with zero extent pins its coordinate at 0
        let free_x = board.max_x() > 0.0;
        let free_y = board.max_y() > 0.0;

        for _ in 0..max_attempts {
            let direction = rng.uniform(0.0, FULL_TURN_DEGREES).to_radians();
            let dx = if free_x { direction.sin() * self.step } else { 0.0 };
            let dy = if free_y { direction.cos() * self.step } else { 0.0 };
            let candidate = Position::new(current.x + dx, current.y + dy);

            if board.contains(&candidate) {
                self.position = Some(candidate);
                return Ok(candidate);
            }
        }

        Err(PlayerError::SearchExhausted {
            attempts: max_attempts,
        })
    }

    fn request_reentry(&self, board: BoardSize, rng: &mut dyn RandomSource) -> Option<Position> {
        let (low, high) = ENGAGEMENT_RANGE;
        if rng.uniform(low, high) < self.engagement_probability {
            Some(board.random_position(rng))
        } else {
            None
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.position {
            Some(position) => write!(f, "Player {} {}", self.id, position),
            None => write!(f, "Player {} (None)", self.id),
        }
    }
}
