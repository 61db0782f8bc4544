use super::super::attack_tables::KNIGHT_TARGETS;
use super::super::{Square, SquareList};

/// The eight L-shaped jumps that stay on the board. Occupancy is not
/// consulted, so squares held by either side are included.
pub(crate) fn generate_knight_moves(from: Square) -> SquareList {
    assert!(from.is_on_board(), "knight on off-board square {from}");
    KNIGHT_TARGETS[from.as_index()]
}
