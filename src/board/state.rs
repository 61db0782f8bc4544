use std::fmt;

use super::movegen::{movement, OccupancyOracle};
use super::{BoardError, Piece, PieceKind, Side, Square, SquareList, BOARD_SIZE};

/// Back rank from col 0 to col 7, identical for both sides.
pub(crate) const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Square selected on a freshly set-up board (a black pawn).
pub const DEFAULT_SELECTION: Square = Square(1, 1);

/// An 8x8 grid of optional occupants plus at most one selected square.
///
/// Occupancy never changes after construction; only the selection moves,
/// and only through [`Board::select`] and [`Board::deselect`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pub(crate) squares: [[Option<Piece>; 8]; 8],
    pub(crate) selected: Option<Square>,
}

impl Board {
    /// Standard initial layout with `DEFAULT_SELECTION` selected.
    ///
    /// Black occupies rows 0-1, White rows 6-7.
    pub fn new() -> Self {
        let mut board = Board::empty();
        for side in Side::BOTH {
            let back = side.back_row() as usize;
            let pawns = side.pawn_home_row() as usize;
            for (col, &kind) in BACK_RANK.iter().enumerate() {
                board.squares[back][col] = Some(Piece::new(side, kind));
                board.squares[pawns][col] = Some(Piece::new(side, PieceKind::Pawn));
            }
        }
        board.selected = Some(DEFAULT_SELECTION);
        board
    }

    /// A board with no pieces and nothing selected.
    #[must_use]
    pub const fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
            selected: None,
        }
    }

    /// Occupant of an on-board square.
    ///
    /// # Panics
    ///
    /// Panics if `square` is off the board. Use [`Board::try_occupant_at`]
    /// for coordinates that come from outside the crate.
    #[inline]
    #[must_use]
    pub fn occupant_at(&self, square: Square) -> Option<Piece> {
        assert!(square.is_on_board(), "square {square} is off the board");
        self.squares[square.0 as usize][square.1 as usize]
    }

    /// Checked variant of [`Board::occupant_at`].
    pub fn try_occupant_at(&self, square: Square) -> Result<Option<Piece>, BoardError> {
        if square.is_on_board() {
            Ok(self.occupant_at(square))
        } else {
            Err(BoardError::off_board(square))
        }
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, square: Square) -> bool {
        self.occupant_at(square).is_none()
    }

    #[inline]
    #[must_use]
    pub const fn selected(&self) -> Option<Square> {
        self.selected
    }

    /// Occupant of the selected square, if anything is selected.
    #[must_use]
    pub fn selected_piece(&self) -> Option<Piece> {
        self.selected.and_then(|sq| self.occupant_at(sq))
    }

    /// Select `square`, or clear the selection if it is already selected.
    ///
    /// Returns the new selection.
    ///
    /// # Panics
    ///
    /// Panics if `square` is off the board.
    pub fn select(&mut self, square: Square) -> Option<Square> {
        assert!(square.is_on_board(), "cannot select off-board square {square}");
        self.selected = if self.selected == Some(square) {
            None
        } else {
            Some(square)
        };
        #[cfg(feature = "logging")]
        log::debug!("selection {:?} after click on {}", self.selected, square);
        self.selected
    }

    pub fn deselect(&mut self) {
        #[cfg(feature = "logging")]
        log::debug!("selection cleared (was {:?})", self.selected);
        self.selected = None;
    }

    /// Candidate destinations for the selected piece.
    ///
    /// Fails with `NoSelection` if nothing is selected and `EmptySquare` if
    /// the selected square holds no piece.
    pub fn candidate_moves(&self) -> Result<SquareList, BoardError> {
        let Some(square) = self.selected else {
            #[cfg(feature = "logging")]
            log::warn!("candidate moves requested with no selection");
            return Err(BoardError::NoSelection);
        };
        self.moves_from(square)
    }

    /// Candidate destinations for whatever stands on `square`, leaving the
    /// selection untouched.
    pub fn moves_from(&self, square: Square) -> Result<SquareList, BoardError> {
        let Some(piece) = self.try_occupant_at(square)? else {
            #[cfg(feature = "logging")]
            log::warn!("candidate moves requested for empty square {square}");
            return Err(BoardError::EmptySquare { square });
        };
        let moves = movement(piece, square, self)?;
        #[cfg(feature = "logging")]
        log::trace!("{piece} on {square}: {} candidates", moves.len());
        Ok(moves)
    }

    /// Occupied squares in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.occupant_at(sq).map(|piece| (sq, piece)))
    }

    #[must_use]
    pub fn piece_count(&self) -> usize {
        self.pieces().count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl OccupancyOracle for Board {
    #[inline]
    fn occupant_at(&self, square: Square) -> Option<Piece> {
        Board::occupant_at(self, square)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let sq = Square(row, col);
                let c = self.occupant_at(sq).map_or('.', Piece::to_char);
                if self.selected == Some(sq) {
                    write!(f, "[{c}]")?;
                } else {
                    write!(f, " {c} ")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
