//! Piece kind and side types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Movement kinds.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PieceKind {
    Rook,
    Bishop,
    Knight,
    Queen,
    King,
    Pawn,
}

impl PieceKind {
    /// All piece kinds in back-rank order, pawn last
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
        PieceKind::Queen,
        PieceKind::King,
        PieceKind::Pawn,
    ];

    /// Parse a kind from a letter (r, b, n, q, k, p), either case
    #[must_use]
    pub fn from_char(c: char) -> Option<PieceKind> {
        match c.to_ascii_lowercase() {
            'r' => Some(PieceKind::Rook),
            'b' => Some(PieceKind::Bishop),
            'n' => Some(PieceKind::Knight),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            'p' => Some(PieceKind::Pawn),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            PieceKind::Rook => 'r',
            PieceKind::Bishop => 'b',
            PieceKind::Knight => 'n',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
            PieceKind::Pawn => 'p',
        }
    }
}

/// The two sides.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Side {
    White,
    Black,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::White, Side::Black];

    /// Row delta of a pawn step (+1 for Black, -1 for White)
    #[inline]
    #[must_use]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Side::White => -1,
            Side::Black => 1,
        }
    }

    /// Row the side's pawns start on (6 for White, 1 for Black)
    #[inline]
    #[must_use]
    pub const fn pawn_home_row(self) -> i8 {
        match self {
            Side::White => 6,
            Side::Black => 1,
        }
    }

    /// Row holding the side's back rank (7 for White, 0 for Black)
    #[inline]
    #[must_use]
    pub const fn back_row(self) -> i8 {
        match self {
            Side::White => 7,
            Side::Black => 0,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::White => write!(f, "white"),
            Side::Black => write!(f, "black"),
        }
    }
}

/// A piece: a side and a kind. Never mutated once placed.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Piece {
    pub side: Side,
    pub kind: PieceKind,
}

impl Piece {
    #[inline]
    #[must_use]
    pub const fn new(side: Side, kind: PieceKind) -> Self {
        Piece { side, kind }
    }

    /// Letter for the piece, uppercase for White
    #[inline]
    #[must_use]
    pub fn to_char(self) -> char {
        let c = self.kind.to_char();
        if self.side == Side::White {
            c.to_ascii_uppercase()
        } else {
            c
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?}", self.side, self.kind)
    }
}
