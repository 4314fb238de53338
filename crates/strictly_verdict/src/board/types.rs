//! Core domain types for a board snapshot.

use crate::error::{InvalidBoard, InvalidBoardKind};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Player owning a mark.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Returns the mark this player places.
    pub fn symbol(self) -> Symbol {
        match self {
            Player::X => Symbol::X,
            Player::O => Symbol::O,
        }
    }

    /// Contribution of one of this player's marks to a line accumulator.
    pub fn weight(self) -> i64 {
        match self {
            Player::X => 1,
            Player::O => -1,
        }
    }
}

/// Contents of a single cell.
///
/// Serialized as its display character so JSON boards read naturally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
#[serde(into = "char", try_from = "char")]
pub enum Symbol {
    /// First player's mark, `'X'`.
    X,
    /// Second player's mark, `'O'`.
    O,
    /// Unfilled cell, `' '`.
    Empty,
}

impl Symbol {
    /// Every symbol a cell may legally hold.
    pub const LEGAL: [Symbol; 3] = [Symbol::X, Symbol::O, Symbol::Empty];

    /// Returns the player owning this mark, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Symbol::X => Some(Player::X),
            Symbol::O => Some(Player::O),
            Symbol::Empty => None,
        }
    }

    /// Returns the display character.
    pub fn to_char(self) -> char {
        match self {
            Symbol::X => 'X',
            Symbol::O => 'O',
            Symbol::Empty => ' ',
        }
    }

    /// Checks if the cell is unfilled.
    pub fn is_empty(self) -> bool {
        self == Symbol::Empty
    }
}

impl From<Player> for Symbol {
    fn from(player: Player) -> Self {
        player.symbol()
    }
}

impl From<Symbol> for char {
    fn from(symbol: Symbol) -> Self {
        symbol.to_char()
    }
}

impl TryFrom<char> for Symbol {
    type Error = InvalidBoard;

    #[track_caller]
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'X' => Ok(Symbol::X),
            'O' => Ok(Symbol::O),
            ' ' => Ok(Symbol::Empty),
            other => Err(InvalidBoard::new(InvalidBoardKind::IllegalSymbol(
                other.to_string(),
            ))),
        }
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Immutable board snapshot, rows of cells in row-major order.
///
/// The snapshot does not enforce its own shape; a ragged or wrongly sized
/// grid is representable so that evaluation can reject it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    rows: Vec<Vec<Symbol>>,
}

impl Board {
    /// Wraps the given rows without checking their shape.
    #[instrument(skip(rows), fields(rows = rows.len()))]
    pub fn from_rows(rows: Vec<Vec<Symbol>>) -> Self {
        Self { rows }
    }

    /// Creates an empty square board.
    #[instrument]
    pub fn empty(dimension: usize) -> Self {
        Self {
            rows: vec![vec![Symbol::Empty; dimension]; dimension],
        }
    }

    /// Returns all rows.
    pub fn rows(&self) -> &[Vec<Symbol>] {
        &self.rows
    }

    /// Number of rows in the snapshot.
    pub fn dimension(&self) -> usize {
        self.rows.len()
    }

    /// Gets the symbol at the given cell, if it exists.
    pub fn get(&self, row: usize, col: usize) -> Option<Symbol> {
        self.rows.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Iterates over `(row, col, symbol)` for every present cell.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, Symbol)> + '_ {
        self.rows.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(move |(col, symbol)| (row, col, *symbol))
        })
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (idx, row) in self.rows.iter().enumerate() {
            if idx > 0 {
                let rule = vec!["-"; row.len().max(1)].join("+");
                write!(f, "\n{}\n", rule)?;
            }
            let cells = row
                .iter()
                .map(|s| s.to_char().to_string())
                .collect::<Vec<_>>()
                .join("|");
            write!(f, "{}", cells)?;
        }
        Ok(())
    }
}
