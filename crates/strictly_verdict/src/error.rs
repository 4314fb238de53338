//! Error types for board evaluation.

use derive_more::{Display, Error};
use tracing::{instrument, warn};

/// Reason a board snapshot was rejected.
///
/// Every kind surfaces to callers as the same [`InvalidBoard`] error with the
/// fixed message `"Wrong input"`; the kind exists for diagnostics and logs.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum InvalidBoardKind {
    /// No grid was supplied at all.
    #[display("grid is missing")]
    MissingGrid,

    /// The grid has the wrong number of rows.
    #[display("expected {expected} rows, found {found}")]
    RowCount {
        /// Rows required by the settings.
        expected: usize,
        /// Rows actually present.
        found: usize,
    },

    /// A row was absent.
    #[display("row {row} is missing")]
    MissingRow {
        /// Index of the absent row.
        row: usize,
    },

    /// A row has the wrong number of cells.
    #[display("row {row}: expected {expected} cells, found {found}")]
    ColumnCount {
        /// Index of the offending row.
        row: usize,
        /// Cells required by the settings.
        expected: usize,
        /// Cells actually present.
        found: usize,
    },

    /// A cell held something other than `'X'`, `'O'` or `' '`.
    #[display("illegal symbol {:?}", _0)]
    IllegalSymbol(String),

    /// Mark counts cannot come from alternating play with X first.
    #[display("turn order violated: {first} X marks, {second} O marks")]
    TurnOrder {
        /// Marks placed by the first player.
        first: usize,
        /// Marks placed by the second player.
        second: usize,
    },

    /// The textual form could not be parsed.
    #[display("unparseable board: {}", _0)]
    Unparseable(String),
}

/// The single evaluation error: the board snapshot is not a legal input.
#[derive(Debug, Clone, Display, Error)]
#[display("Wrong input")]
pub struct InvalidBoard {
    /// Why the board was rejected.
    pub kind: InvalidBoardKind,
    /// Line number where the rejection was raised.
    pub line: u32,
    /// Source file where the rejection was raised.
    pub file: &'static str,
}

impl InvalidBoard {
    /// Fixed message shared by every rejection.
    pub const MESSAGE: &'static str = "Wrong input";

    /// Creates a new rejection with caller location tracking.
    #[track_caller]
    #[instrument(skip(kind))]
    pub fn new(kind: InvalidBoardKind) -> Self {
        let loc = std::panic::Location::caller();
        warn!(kind = %kind, file = loc.file(), line = loc.line(), "Rejected board");
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Returns why the board was rejected.
    pub fn kind(&self) -> &InvalidBoardKind {
        &self.kind
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_is_fixed_for_every_kind() {
        let kinds = [
            InvalidBoardKind::MissingGrid,
            InvalidBoardKind::RowCount { expected: 3, found: 2 },
            InvalidBoardKind::MissingRow { row: 1 },
            InvalidBoardKind::ColumnCount { row: 2, expected: 3, found: 4 },
            InvalidBoardKind::IllegalSymbol("-".to_string()),
            InvalidBoardKind::TurnOrder { first: 3, second: 4 },
            InvalidBoardKind::Unparseable("eof".to_string()),
        ];
        for kind in kinds {
            let err = InvalidBoard::new(kind);
            assert_eq!(err.to_string(), InvalidBoard::MESSAGE);
        }
    }

    #[test]
    fn test_kind_describes_failure() {
        let err = InvalidBoard::new(InvalidBoardKind::ColumnCount {
            row: 2,
            expected: 3,
            found: 4,
        });
        assert_eq!(err.kind().to_string(), "row 2: expected 3 cells, found 4");
    }
}
