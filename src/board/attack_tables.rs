use once_cell::sync::Lazy;

use super::{Square, SquareList};

/// Knight offsets in generation order.
pub(crate) const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, -1),
    (2, 1),
    (-2, -1),
    (-2, 1),
    (1, 2),
    (-1, 2),
    (1, -2),
    (-1, -2),
];

/// King offsets in generation order.
pub(crate) const KING_OFFSETS: [(i8, i8); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

fn build_step_table(offsets: &[(i8, i8); 8]) -> [SquareList; 64] {
    let mut table = [SquareList::new(); 64];
    for from in Square::all() {
        let targets = &mut table[from.as_index()];
        for &(dr, dc) in offsets {
            let to = from.offset(dr, dc);
            if to.is_on_board() {
                targets.push(to);
            }
        }
    }
    table
}

/// In-range knight destinations for every square, occupancy ignored.
pub(crate) static KNIGHT_TARGETS: Lazy<[SquareList; 64]> =
    Lazy::new(|| build_step_table(&KNIGHT_OFFSETS));

/// In-range king destinations for every square, occupancy ignored.
pub(crate) static KING_TARGETS: Lazy<[SquareList; 64]> =
    Lazy::new(|| build_step_table(&KING_OFFSETS));
