//! Textual adapters that build a [`Board`] from display characters.

use super::types::{Board, Symbol};
use crate::error::{InvalidBoard, InvalidBoardKind};
use tracing::{debug, instrument};

/// JSON grid where the grid itself and each row may be `null`.
type JsonGrid = Option<Vec<Option<Vec<String>>>>;

impl Board {
    /// Builds a board from rows of display characters (`'X'`, `'O'`, `' '`).
    ///
    /// # Errors
    ///
    /// Returns [`InvalidBoard`] if any character is not a legal symbol.
    #[instrument(skip(rows), fields(rows = rows.len()))]
    pub fn from_chars<R: AsRef<[char]>>(rows: &[R]) -> Result<Self, InvalidBoard> {
        rows.iter()
            .map(|row| {
                row.as_ref()
                    .iter()
                    .map(|&c| Symbol::try_from(c))
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self::from_rows)
    }

    /// Builds a board from one string per row, one character per cell.
    ///
    /// ```
    /// use strictly_verdict::Board;
    ///
    /// let board = Board::parse(&["XXX", "O O", " O "]).unwrap();
    /// assert_eq!(board.dimension(), 3);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`InvalidBoard`] if any character is not a legal symbol.
    #[instrument(skip(rows), fields(rows = rows.len()))]
    pub fn parse<S: AsRef<str>>(rows: &[S]) -> Result<Self, InvalidBoard> {
        rows.iter()
            .map(|row| {
                row.as_ref()
                    .chars()
                    .map(Symbol::try_from)
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self::from_rows)
    }

    /// Builds a board from a JSON grid of single-character strings.
    ///
    /// `null` is accepted syntactically for the grid and for any row, and
    /// rejected as a missing grid or missing row.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidBoard`] for malformed JSON, a `null` grid or row, or
    /// a cell that is not exactly one legal character.
    #[instrument(skip(json), fields(len = json.len()))]
    pub fn from_json(json: &str) -> Result<Self, InvalidBoard> {
        let grid: JsonGrid = serde_json::from_str(json)
            .map_err(|e| InvalidBoard::new(InvalidBoardKind::Unparseable(e.to_string())))?;
        let grid = grid.ok_or_else(|| InvalidBoard::new(InvalidBoardKind::MissingGrid))?;
        debug!(rows = grid.len(), "Parsed JSON grid");

        grid.into_iter()
            .enumerate()
            .map(|(row, cells)| {
                let cells =
                    cells.ok_or_else(|| InvalidBoard::new(InvalidBoardKind::MissingRow { row }))?;
                cells
                    .iter()
                    .map(|cell| cell_symbol(cell))
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self::from_rows)
    }
}

/// A JSON cell must hold exactly one legal character.
fn cell_symbol(cell: &str) -> Result<Symbol, InvalidBoard> {
    let mut chars = cell.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Symbol::try_from(c),
        _ => Err(InvalidBoard::new(InvalidBoardKind::IllegalSymbol(
            cell.to_string(),
        ))),
    }
}
