use super::super::{Square, SquareList};
use super::OccupancyOracle;

/// Rook directions in scan order: +row, -row, +col, -col
pub(crate) const ORTHOGONAL: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Bishop directions in scan order
pub(crate) const DIAGONAL: [(i8, i8); 4] = [(1, 1), (-1, 1), (1, -1), (-1, -1)];

/// Type of sliding piece for move generation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum SliderType {
    Bishop,
    Rook,
    Queen,
}

impl SliderType {
    fn directions(self) -> &'static [(i8, i8)] {
        const QUEEN: [(i8, i8); 8] = [
            ORTHOGONAL[0],
            ORTHOGONAL[1],
            ORTHOGONAL[2],
            ORTHOGONAL[3],
            DIAGONAL[0],
            DIAGONAL[1],
            DIAGONAL[2],
            DIAGONAL[3],
        ];
        match self {
            SliderType::Rook => &ORTHOGONAL,
            SliderType::Bishop => &DIAGONAL,
            SliderType::Queen => &QUEEN,
        }
    }
}

/// Walk each direction one square at a time. Every empty square is kept;
/// the first occupied square is kept too (friend or foe) and ends the ray.
pub(crate) fn generate_slider_moves<O: OccupancyOracle + ?Sized>(
    from: Square,
    board: &O,
    slider: SliderType,
) -> SquareList {
    assert!(from.is_on_board(), "slider on off-board square {from}");
    let mut moves = SquareList::new();
    for &(dr, dc) in slider.directions() {
        let mut to = from.offset(dr, dc);
        while to.is_on_board() {
            moves.push(to);
            if board.is_occupied(to) {
                break;
            }
            to = to.offset(dr, dc);
        }
    }
    moves
}
