//! Board geometry
//!
//! The board is an axis-aligned grid of `width × height` cells. Players hold
//! real-valued coordinates inside `[0, width-1] × [0, height-1]`.

use crate::rng::RandomSource;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A point on the board
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    ///
    /// # Example
    /// ```
    /// use last_player_core_rs::Position;
    ///
    /// let a = Position::new(0.0, 0.0);
    /// let b = Position::new(3.0, 4.0);
    /// assert_eq!(a.distance_to(&b), 5.0);
    /// ```
    pub fn distance_to(&self, other: &Position) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2},{:.2})", self.x, self.y)
    }
}

/// Board dimensions in cells
///
/// # Example
/// ```
/// use last_player_core_rs::{BoardSize, Position};
///
/// let board = BoardSize::new(100, 50);
/// assert_eq!(board.max_x(), 99.0);
/// assert!(board.contains(&Position::new(99.0, 49.0)));
/// assert!(!board.contains(&Position::new(99.0, 49.5)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSize {
    pub width: u32,
    pub height: u32,
}

impl BoardSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Largest valid x coordinate (`width - 1`)
    pub fn max_x(&self) -> f64 {
        f64::from(self.width.saturating_sub(1))
    }

    /// Largest valid y coordinate (`height - 1`)
    pub fn max_y(&self) -> f64 {
        f64::from(self.height.saturating_sub(1))
    }

    /// Whether `position` lies inside `[0, width-1] × [0, height-1]`
    pub fn contains(&self, position: &Position) -> bool {
        (0.0..=self.max_x()).contains(&position.x) && (0.0..=self.max_y()).contains(&position.y)
    }

    /// Uniformly random point on the board
    pub fn random_position(&self, rng: &mut dyn RandomSource) -> Position {
        let x = rng.uniform(0.0, self.max_x());
        let y = rng.uniform(0.0, self.max_y());
        Position::new(x, y)
    }
}
