//! Board model and piece movement rules.
//!
//! The board holds occupancy and a selection; the rules compute candidate
//! destinations for a piece from its square and a read-only occupancy view.
//! Legality (check), turn order and special moves are not modelled.
//!
//! # Example
//! ```
//! use chessflix::board::{Board, Square};
//!
//! let board = Board::new();
//! let moves = board.candidate_moves().unwrap();
//! assert_eq!(moves, [Square(2, 1), Square(3, 1)]);
//! ```

mod attack_tables;
mod builder;
mod error;
pub mod movegen;
pub mod prelude;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use builder::BoardBuilder;
pub use error::BoardError;
pub use movegen::{movement, OccupancyOracle};
pub use state::{Board, DEFAULT_SELECTION};
pub use types::{
    Piece, PieceKind, Side, Square, SquareList, SquareListIntoIter, BOARD_SIZE, MAX_DESTINATIONS,
};
