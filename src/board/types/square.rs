//! Square type and utilities.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::BoardError;

/// Board dimension along both axes.
pub const BOARD_SIZE: i8 = 8;

/// A square on the board, represented as (row, col).
///
/// Row 0 is black's back rank and row 7 is white's. The fields are public
/// and signed so that offset arithmetic can step past the edge; use
/// [`Square::is_on_board`] before treating a computed square as real.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(pub i8, pub i8); // (row, col)

impl Square {
    /// Create a new square with bounds checking
    #[must_use]
    pub fn new(row: i8, col: i8) -> Option<Self> {
        let sq = Square(row, col);
        sq.is_on_board().then_some(sq)
    }

    #[inline]
    #[must_use]
    pub const fn row(self) -> i8 {
        self.0
    }

    #[inline]
    #[must_use]
    pub const fn col(self) -> i8 {
        self.1
    }

    /// True when both components lie in 0..=7
    #[inline]
    #[must_use]
    pub const fn is_on_board(self) -> bool {
        self.0 >= 0 && self.0 < BOARD_SIZE && self.1 >= 0 && self.1 < BOARD_SIZE
    }

    /// Shift by a (row, col) delta. The result may be off the board;
    /// components saturate at the `i8` limits, which are never on it.
    #[inline]
    #[must_use]
    pub const fn offset(self, dr: i8, dc: i8) -> Self {
        Square(self.0.saturating_add(dr), self.1.saturating_add(dc))
    }

    /// Row-major index (0-63). Only meaningful for on-board squares.
    #[inline]
    #[must_use]
    pub(crate) const fn as_index(self) -> usize {
        (self.0 as usize) * 8 + self.1 as usize
    }

    /// All 64 on-board squares in row-major order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Square(row, col)))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.0, self.1)
    }
}

impl TryFrom<(i8, i8)> for Square {
    type Error = BoardError;

    fn try_from((row, col): (i8, i8)) -> Result<Self, Self::Error> {
        Square::new(row, col).ok_or(BoardError::InvalidCoordinate { row, col })
    }
}

impl FromStr for Square {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || BoardError::InvalidNotation {
            notation: s.to_string(),
        };

        let (row, col) = s.trim().split_once(',').ok_or_else(invalid)?;
        let row: i8 = row.trim().parse().map_err(|_| invalid())?;
        let col: i8 = col.trim().parse().map_err(|_| invalid())?;

        Square::try_from((row, col))
    }
}
