//! Fluent builder for constructing boards.
//!
//! Allows arranging arbitrary positions piece by piece, e.g. to examine a
//! single piece's rule on an otherwise empty board.
//!
//! # Example
//! ```
//! use chessflix::board::{BoardBuilder, PieceKind, Side, Square};
//!
//! let board = BoardBuilder::new()
//!     .piece(Square(3, 3), Side::White, PieceKind::Queen)
//!     .select(Square(3, 3))
//!     .build()
//!     .unwrap();
//! assert_eq!(board.candidate_moves().unwrap().len(), 27);
//! ```

use super::state::{BACK_RANK, DEFAULT_SELECTION};
use super::{Board, BoardError, Piece, PieceKind, Side, Square};

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    pieces: Vec<(Square, Piece)>,
    selected: Option<Square>,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardBuilder {
    /// Create a new empty board builder with nothing selected.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder {
            pieces: Vec::new(),
            selected: None,
        }
    }

    /// Create a builder starting from the standard initial position,
    /// including its default selection.
    #[must_use]
    pub fn starting_position() -> Self {
        let mut builder = Self::new();
        for side in Side::BOTH {
            for (col, &kind) in (0i8..).zip(BACK_RANK.iter()) {
                builder
                    .pieces
                    .push((Square(side.back_row(), col), Piece::new(side, kind)));
                builder.pieces.push((
                    Square(side.pawn_home_row(), col),
                    Piece::new(side, PieceKind::Pawn),
                ));
            }
        }
        builder.selected = Some(DEFAULT_SELECTION);
        builder
    }

    /// Place a piece, replacing whatever was on the square.
    #[must_use]
    pub fn piece(mut self, square: Square, side: Side, kind: PieceKind) -> Self {
        self.pieces.retain(|(sq, _)| *sq != square);
        self.pieces.push((square, Piece::new(side, kind)));
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.pieces.retain(|(sq, _)| *sq != square);
        self
    }

    /// Set the selected square.
    #[must_use]
    pub const fn select(mut self, square: Square) -> Self {
        self.selected = Some(square);
        self
    }

    #[must_use]
    pub const fn no_selection(mut self) -> Self {
        self.selected = None;
        self
    }

    /// Build the board.
    ///
    /// Fails with `InvalidCoordinate` if any piece or the selection lies
    /// off the board.
    pub fn build(self) -> Result<Board, BoardError> {
        let mut board = Board::empty();

        for (square, piece) in self.pieces {
            if !square.is_on_board() {
                return Err(BoardError::off_board(square));
            }
            board.squares[square.0 as usize][square.1 as usize] = Some(piece);
        }

        if let Some(square) = self.selected {
            if !square.is_on_board() {
                return Err(BoardError::off_board(square));
            }
        }
        board.selected = self.selected;

        Ok(board)
    }
}
