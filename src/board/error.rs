//! Error types for board queries.

use std::fmt;

use super::Square;

/// Error type for board and move-rule failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Coordinate outside the 8x8 board
    InvalidCoordinate { row: i8, col: i8 },
    /// Candidate moves requested with nothing selected
    NoSelection,
    /// Candidate moves requested for a square holding no piece
    EmptySquare { square: Square },
    /// Unparseable `row,col` text
    InvalidNotation { notation: String },
}

impl BoardError {
    pub(crate) const fn off_board(square: Square) -> Self {
        BoardError::InvalidCoordinate {
            row: square.0,
            col: square.1,
        }
    }
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::InvalidCoordinate { row, col } => {
                write!(f, "Coordinate ({row}, {col}) is off the board (must be 0-7)")
            }
            BoardError::NoSelection => write!(f, "No square is selected"),
            BoardError::EmptySquare { square } => {
                write!(f, "Square {square} holds no piece")
            }
            BoardError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}', expected 'row,col'")
            }
        }
    }
}

impl std::error::Error for BoardError {}
