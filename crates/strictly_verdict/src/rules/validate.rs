//! Board validation and move tally.

use crate::board::{Board, Player, Symbol};
use crate::error::{InvalidBoard, InvalidBoardKind};
use crate::settings::EvaluatorSettings;
use tracing::{debug, instrument};

/// Marks placed by each player, counted once during validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MoveTally {
    first: usize,
    second: usize,
}

impl MoveTally {
    /// Creates a tally from explicit counts.
    pub fn new(first: usize, second: usize) -> Self {
        Self { first, second }
    }

    /// Counts one mark for the given player.
    pub fn record(&mut self, player: Player) {
        match player {
            Player::X => self.first += 1,
            Player::O => self.second += 1,
        }
    }

    /// Marks placed by the first player (X).
    pub fn first(&self) -> usize {
        self.first
    }

    /// Marks placed by the second player (O).
    pub fn second(&self) -> usize {
        self.second
    }

    /// Marks placed by the given player.
    pub fn of(&self, player: Player) -> usize {
        match player {
            Player::X => self.first,
            Player::O => self.second,
        }
    }

    /// Marks placed by both players.
    pub fn total(&self) -> usize {
        self.first + self.second
    }
}

/// Check: the grid is N rows of N cells, tallying marks on the way.
///
/// Illegal symbols cannot reach this point; [`Symbol`] only holds legal
/// values and the textual adapters reject everything else.
pub(crate) struct WellFormed;

impl WellFormed {
    /// Verifies the shape and returns the move tally.
    #[instrument(skip(board))]
    pub fn check(board: &Board, settings: &EvaluatorSettings) -> Result<MoveTally, InvalidBoard> {
        let expected = *settings.dimension();
        if board.dimension() != expected {
            return Err(InvalidBoard::new(InvalidBoardKind::RowCount {
                expected,
                found: board.dimension(),
            }));
        }

        let mut tally = MoveTally::default();
        for (row, cells) in board.rows().iter().enumerate() {
            if cells.len() != expected {
                return Err(InvalidBoard::new(InvalidBoardKind::ColumnCount {
                    row,
                    expected,
                    found: cells.len(),
                }));
            }
            cells
                .iter()
                .filter_map(|s| Symbol::player(*s))
                .for_each(|p| tally.record(p));
        }
        Ok(tally)
    }
}

/// Check: X moves first and players alternate, so X leads by 0 or 1.
pub(crate) struct TurnOrder;

impl TurnOrder {
    /// Returns whether the counts could come from alternating play.
    pub fn holds(tally: &MoveTally) -> bool {
        tally.first() == tally.second() || tally.first() == tally.second() + 1
    }

    /// Verifies the turn order.
    #[instrument]
    pub fn check(tally: &MoveTally) -> Result<(), InvalidBoard> {
        if Self::holds(tally) {
            Ok(())
        } else {
            Err(InvalidBoard::new(InvalidBoardKind::TurnOrder {
                first: tally.first(),
                second: tally.second(),
            }))
        }
    }
}

/// Composite check: a board is valid if it is well formed and in turn order.
pub(crate) struct ValidBoard;

impl ValidBoard {
    /// Validates all preconditions for evaluation, failing on the first.
    #[instrument(skip(board))]
    pub fn check(board: &Board, settings: &EvaluatorSettings) -> Result<MoveTally, InvalidBoard> {
        let tally = WellFormed::check(board, settings)?;
        TurnOrder::check(&tally)?;
        debug!(first = tally.first(), second = tally.second(), "Board valid");
        Ok(tally)
    }
}
