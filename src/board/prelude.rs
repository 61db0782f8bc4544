//! Prelude module for convenient imports.
//!
//! # Example
//! ```
//! use chessflix::board::prelude::*;
//!
//! let board = Board::new();
//! assert_eq!(board.selected(), Some(Square(1, 1)));
//! ```

pub use super::{
    movement, Board, BoardBuilder, BoardError, OccupancyOracle, Piece, PieceKind, Side, Square,
    SquareList,
};
