pub mod board;

pub use board::{Board, Piece, PieceKind, Side, Square};
