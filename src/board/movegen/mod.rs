//! Per-kind movement rules.
//!
//! Every rule is a pure function of the piece's square and a read-only view
//! of occupancy. Rules produce *candidate* destinations only: no check
//! detection, no turn order, no castling, en passant or promotion.

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::{BoardError, Piece, PieceKind, Side, Square, SquareList};
use sliders::SliderType;

/// Read access to board occupancy, as seen by the movement rules.
///
/// Implementors may assume `square` is on the board; the rules never ask
/// about an off-board square.
pub trait OccupancyOracle {
    fn occupant_at(&self, square: Square) -> Option<Piece>;

    #[inline]
    fn is_occupied(&self, square: Square) -> bool {
        self.occupant_at(square).is_some()
    }
}

/// Candidate destinations for `piece` standing on `from`.
///
/// Fails with `InvalidCoordinate` when `from` is off the board, or when a
/// pawn stands on its side's last row (its forward read leaves the board).
pub fn movement<O: OccupancyOracle + ?Sized>(
    piece: Piece,
    from: Square,
    board: &O,
) -> Result<SquareList, BoardError> {
    if !from.is_on_board() {
        return Err(BoardError::off_board(from));
    }
    let moves = match piece.kind {
        PieceKind::Rook => rook_moves(from, board),
        PieceKind::Bishop => bishop_moves(from, board),
        PieceKind::Queen => queen_moves(from, board),
        PieceKind::Knight => knight_moves(from),
        PieceKind::King => king_moves(from),
        PieceKind::Pawn => pawn_moves(piece.side, from, board)?,
    };
    Ok(moves)
}

/// Orthogonal scans: +row, -row, +col, -col.
///
/// # Panics
///
/// Panics if `from` is off the board.
pub fn rook_moves<O: OccupancyOracle + ?Sized>(from: Square, board: &O) -> SquareList {
    sliders::generate_slider_moves(from, board, SliderType::Rook)
}

/// Diagonal scans: (+row,+col), (-row,+col), (+row,-col), (-row,-col).
///
/// # Panics
///
/// Panics if `from` is off the board.
pub fn bishop_moves<O: OccupancyOracle + ?Sized>(from: Square, board: &O) -> SquareList {
    sliders::generate_slider_moves(from, board, SliderType::Bishop)
}

/// Rook scans followed by bishop scans.
///
/// # Panics
///
/// Panics if `from` is off the board.
pub fn queen_moves<O: OccupancyOracle + ?Sized>(from: Square, board: &O) -> SquareList {
    sliders::generate_slider_moves(from, board, SliderType::Queen)
}

/// # Panics
///
/// Panics if `from` is off the board.
#[must_use]
pub fn knight_moves(from: Square) -> SquareList {
    knights::generate_knight_moves(from)
}

/// # Panics
///
/// Panics if `from` is off the board.
#[must_use]
pub fn king_moves(from: Square) -> SquareList {
    kings::generate_king_moves(from)
}

/// Fails with `InvalidCoordinate` for an off-board `from`; see
/// [`movement`] for the last-row failure.
pub fn pawn_moves<O: OccupancyOracle + ?Sized>(
    side: Side,
    from: Square,
    board: &O,
) -> Result<SquareList, BoardError> {
    pawns::generate_pawn_moves(side, from, board)
}
