//! Log output of selection and candidate queries (feature `logging`).

use log::{Level, LevelFilter, Log, Metadata, Record};
use once_cell::sync::Lazy;
use parking_lot::Mutex;

use crate::board::{BoardBuilder, PieceKind, Side, Square};

struct CaptureLogger {
    records: Mutex<Vec<(Level, String)>>,
}

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        self.records
            .lock()
            .push((record.level(), record.args().to_string()));
    }

    fn flush(&self) {}
}

static LOGGER: Lazy<CaptureLogger> = Lazy::new(|| CaptureLogger {
    records: Mutex::new(Vec::new()),
});

fn logged(level: Level, needle: &str) -> bool {
    LOGGER
        .records
        .lock()
        .iter()
        .any(|(l, msg)| *l == level && msg.contains(needle))
}

#[test]
fn test_selection_and_queries_are_logged() {
    // Only this test installs a logger.
    let _ = log::set_logger(&*LOGGER);
    log::set_max_level(LevelFilter::Trace);

    let mut board = BoardBuilder::new()
        .piece(Square(3, 6), Side::White, PieceKind::Knight)
        .build()
        .unwrap();

    board.select(Square(5, 6));
    assert!(logged(Level::Debug, "after click on 5,6"));

    assert!(board.candidate_moves().is_err());
    assert!(logged(Level::Warn, "empty square 5,6"));

    board.deselect();
    assert!(logged(Level::Debug, "selection cleared"));
    assert!(board.candidate_moves().is_err());
    assert!(logged(Level::Warn, "no selection"));

    let moves = board.moves_from(Square(3, 6)).unwrap();
    assert_eq!(moves.len(), 6);
    assert!(logged(Level::Trace, "Knight on 3,6: 6 candidates"));
}
