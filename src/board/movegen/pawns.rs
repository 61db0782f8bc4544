use super::super::{BoardError, Side, Square, SquareList};
use super::OccupancyOracle;

/// Pawn candidates for `side` standing on `from`.
///
/// Order: one step forward (if empty), two steps forward (home row only,
/// if that square is empty; the square in between is not checked), then
/// the capture diagonals toward +col and -col (only when occupied).
///
/// An off-board `from` is rejected with `BoardError::InvalidCoordinate`.
/// The forward row is not bounds-checked against the far edge: a pawn on
/// its last row yields `BoardError::InvalidCoordinate` for the square it
/// tried to read.
pub(crate) fn generate_pawn_moves<O: OccupancyOracle + ?Sized>(
    side: Side,
    from: Square,
    board: &O,
) -> Result<SquareList, BoardError> {
    if !from.is_on_board() {
        return Err(BoardError::off_board(from));
    }

    let mut moves = SquareList::new();
    let dir = side.pawn_direction();

    let forward = from.offset(dir, 0);
    if !forward.is_on_board() {
        return Err(BoardError::off_board(forward));
    }
    if !board.is_occupied(forward) {
        moves.push(forward);
    }

    if from.row() == side.pawn_home_row() {
        let double_forward = from.offset(2 * dir, 0);
        if !board.is_occupied(double_forward) {
            moves.push(double_forward);
        }
    }

    if from.col() < 7 {
        let capture = from.offset(dir, 1);
        if board.is_occupied(capture) {
            moves.push(capture);
        }
    }
    if from.col() > 0 {
        let capture = from.offset(dir, -1);
        if board.is_occupied(capture) {
            moves.push(capture);
        }
    }

    Ok(moves)
}
