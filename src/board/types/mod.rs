//! Core board types.
//!
//! - `Piece`, `PieceKind` and `Side` - what stands on a square
//! - `Square` - (row, col) coordinate, signed so offsets can leave the board
//! - `SquareList` - fixed-capacity destination list

mod moves;
mod piece;
mod square;

pub use moves::{SquareList, SquareListIntoIter, MAX_DESTINATIONS};
pub use piece::{Piece, PieceKind, Side};
pub use square::{Square, BOARD_SIZE};
