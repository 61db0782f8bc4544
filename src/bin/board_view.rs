use std::env;
use std::process::ExitCode;

use chessflix::board::{Board, Piece, PieceKind, Side, Square, SquareList, BOARD_SIZE};

const MOVE_INDICATOR: char = '•';

fn glyph(piece: Piece) -> char {
    match (piece.side, piece.kind) {
        (Side::White, PieceKind::King) => '♔',
        (Side::White, PieceKind::Queen) => '♕',
        (Side::White, PieceKind::Rook) => '♖',
        (Side::White, PieceKind::Bishop) => '♗',
        (Side::White, PieceKind::Knight) => '♘',
        (Side::White, PieceKind::Pawn) => '♙',
        (Side::Black, PieceKind::King) => '♚',
        (Side::Black, PieceKind::Queen) => '♛',
        (Side::Black, PieceKind::Rook) => '♜',
        (Side::Black, PieceKind::Bishop) => '♝',
        (Side::Black, PieceKind::Knight) => '♞',
        (Side::Black, PieceKind::Pawn) => '♟',
    }
}

fn render(board: &Board, moves: &SquareList) {
    println!("   {}", (0..BOARD_SIZE).map(|c| format!(" {c} ")).collect::<String>());
    for row in 0..BOARD_SIZE {
        let mut line = format!("{row}  ");
        for col in 0..BOARD_SIZE {
            let sq = Square(row, col);
            let c = match board.occupant_at(sq) {
                Some(piece) => glyph(piece),
                None if (row + col) % 2 == 0 => ' ',
                None => '·',
            };
            let marker = if moves.contains(sq) { MOVE_INDICATOR } else { ' ' };
            if board.selected() == Some(sq) {
                line.push_str(&format!("[{c}]"));
            } else {
                line.push_str(&format!(" {c}{marker}"));
            }
        }
        println!("{line}");
    }
}

fn main() -> ExitCode {
    let mut board = Board::new();

    for arg in env::args().skip(1) {
        match arg.parse::<Square>() {
            Ok(sq) => {
                board.select(sq);
            }
            Err(e) => {
                eprintln!("usage: board_view [row,col]...\n{e}");
                return ExitCode::FAILURE;
            }
        }
    }

    match board.candidate_moves() {
        Ok(moves) => {
            render(&board, &moves);
            if let Some(piece) = board.selected_piece() {
                println!("{piece}: {} candidate squares", moves.len());
            }
        }
        Err(e) => {
            render(&board, &SquareList::default());
            println!("{e}");
        }
    }
    ExitCode::SUCCESS
}
