//! Board layout, selection state machine and candidate queries.

use crate::board::{
    Board, BoardBuilder, BoardError, Piece, PieceKind, Side, Square, DEFAULT_SELECTION,
};

#[test]
fn test_initial_layout() {
    let board = Board::new();
    assert_eq!(board.piece_count(), 32);

    let back = [
        PieceKind::Rook,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Queen,
        PieceKind::King,
        PieceKind::Bishop,
        PieceKind::Knight,
        PieceKind::Rook,
    ];
    for (col, kind) in (0i8..).zip(back) {
        assert_eq!(
            board.occupant_at(Square(0, col)),
            Some(Piece::new(Side::Black, kind))
        );
        assert_eq!(
            board.occupant_at(Square(7, col)),
            Some(Piece::new(Side::White, kind))
        );
        assert_eq!(
            board.occupant_at(Square(1, col)),
            Some(Piece::new(Side::Black, PieceKind::Pawn))
        );
        assert_eq!(
            board.occupant_at(Square(6, col)),
            Some(Piece::new(Side::White, PieceKind::Pawn))
        );
    }
    for row in 2..6 {
        for col in 0..8 {
            assert!(board.is_empty(Square(row, col)));
        }
    }
}

#[test]
fn test_initial_selection_is_black_pawn() {
    let board = Board::new();
    assert_eq!(board.selected(), Some(DEFAULT_SELECTION));
    assert_eq!(
        board.selected_piece(),
        Some(Piece::new(Side::Black, PieceKind::Pawn))
    );
    assert_eq!(
        board.candidate_moves().unwrap(),
        [Square(2, 1), Square(3, 1)]
    );
}

#[test]
fn test_select_toggles_off() {
    let mut board = Board::new();
    assert_eq!(board.select(Square(1, 1)), None);
    assert_eq!(board.selected(), None);
    assert_eq!(board.selected_piece(), None);
    assert_eq!(board.candidate_moves(), Err(BoardError::NoSelection));
}

#[test]
fn test_select_moves_selection() {
    let mut board = Board::new();
    assert_eq!(board.select(Square(7, 1)), Some(Square(7, 1)));
    assert_eq!(
        board.selected_piece(),
        Some(Piece::new(Side::White, PieceKind::Knight))
    );
    assert_eq!(
        board.candidate_moves().unwrap(),
        [Square(5, 0), Square(5, 2), Square(6, 3)]
    );

    assert_eq!(board.select(Square(0, 0)), Some(Square(0, 0)));
    assert_eq!(board.select(Square(0, 0)), None);
    assert_eq!(board.select(Square(0, 0)), Some(Square(0, 0)));
}

#[test]
fn test_deselect() {
    let mut board = Board::new();
    board.deselect();
    assert_eq!(board.selected(), None);
    board.deselect();
    assert_eq!(board.selected(), None);
}

#[test]
fn test_empty_selection_is_an_error() {
    let mut board = Board::new();
    board.select(Square(4, 4));
    assert_eq!(board.selected_piece(), None);
    assert_eq!(
        board.candidate_moves(),
        Err(BoardError::EmptySquare {
            square: Square(4, 4)
        })
    );
}

#[test]
fn test_moves_from_leaves_selection() {
    let board = Board::new();
    let before = board.clone();
    let _ = board.moves_from(Square(7, 6)).unwrap();
    assert_eq!(board, before);
    assert_eq!(
        board.moves_from(Square(-1, 0)),
        Err(BoardError::InvalidCoordinate { row: -1, col: 0 })
    );
}

#[test]
fn test_try_occupant_at() {
    let board = Board::new();
    assert_eq!(
        board.try_occupant_at(Square(0, 4)),
        Ok(Some(Piece::new(Side::Black, PieceKind::King)))
    );
    assert_eq!(board.try_occupant_at(Square(4, 4)), Ok(None));
    assert_eq!(
        board.try_occupant_at(Square(0, 8)),
        Err(BoardError::InvalidCoordinate { row: 0, col: 8 })
    );
}

#[test]
#[should_panic(expected = "off the board")]
fn test_occupant_at_off_board_panics() {
    let board = Board::new();
    let _ = board.occupant_at(Square(8, 0));
}

#[test]
fn test_display_marks_selection() {
    let board = Board::new();
    let text = board.to_string();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 8);
    assert_eq!(lines[0], " r  n  b  q  k  b  n  r ");
    assert_eq!(lines[1], " p [p] p  p  p  p  p  p ");
    assert_eq!(lines[4], " .  .  .  .  .  .  .  . ");
    assert_eq!(lines[7], " R  N  B  Q  K  B  N  R ");
}

#[test]
fn test_builder_selection_drives_candidates() {
    let board = BoardBuilder::new()
        .piece(Square(5, 5), Side::Black, PieceKind::King)
        .select(Square(5, 5))
        .build()
        .unwrap();
    assert_eq!(board.candidate_moves().unwrap().len(), 8);

    let board = BoardBuilder::starting_position()
        .no_selection()
        .build()
        .unwrap();
    assert_eq!(board.candidate_moves(), Err(BoardError::NoSelection));
}
