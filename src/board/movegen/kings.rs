use super::super::attack_tables::KING_TARGETS;
use super::super::{Square, SquareList};

/// One step in each of the eight directions, on-board only. No occupancy
/// filtering and no castling.
pub(crate) fn generate_king_moves(from: Square) -> SquareList {
    assert!(from.is_on_board(), "king on off-board square {from}");
    KING_TARGETS[from.as_index()]
}
