//! Completed-line detection with signed per-line accumulators.
//!
//! Each row, column and diagonal holds a running total: +1 for every X,
//! -1 for every O. A line is complete when its total reaches +N or -N.
//! The encoding only works for exactly two players.

use crate::board::{Board, Player, Symbol};
use crate::settings::EvaluatorSettings;
use tracing::{instrument, trace};

/// Running totals for every line on the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct LineAccumulators {
    rows: Vec<i64>,
    columns: Vec<i64>,
    main_diagonal: i64,
    anti_diagonal: i64,
    dimension: usize,
    target: i64,
    completed: [bool; 2],
}

impl LineAccumulators {
    /// Creates zeroed accumulators for the given settings.
    #[instrument]
    pub fn new(settings: &EvaluatorSettings) -> Self {
        let dimension = *settings.dimension();
        Self {
            rows: vec![0; dimension],
            columns: vec![0; dimension],
            main_diagonal: 0,
            anti_diagonal: 0,
            dimension,
            // Settings validation guarantees this fits.
            target: i64::try_from(*settings.line_length()).unwrap_or(i64::MAX),
            completed: [false; 2],
        }
    }

    /// Scans every cell of an already validated board.
    #[instrument(skip(board))]
    pub fn scan(board: &Board, settings: &EvaluatorSettings) -> Self {
        let mut lines = Self::new(settings);
        for (row, col, symbol) in board.cells() {
            lines.record(row, col, symbol);
        }
        lines
    }

    /// Adds one cell to its row, column and any diagonal it lies on.
    ///
    /// Empty cells contribute nothing.
    pub fn record(&mut self, row: usize, col: usize, symbol: Symbol) {
        let Some(player) = symbol.player() else {
            return;
        };
        let weight = player.weight();
        let goal = self.target * weight;

        let mut completed = Self::bump(&mut self.rows[row], weight) == goal;
        completed |= Self::bump(&mut self.columns[col], weight) == goal;
        if row == col {
            completed |= Self::bump(&mut self.main_diagonal, weight) == goal;
        }
        if row + col + 1 == self.dimension {
            completed |= Self::bump(&mut self.anti_diagonal, weight) == goal;
        }

        if completed {
            trace!(row, col, %player, "Line completed");
            self.completed[Self::slot(player)] = true;
        }
    }

    /// Checks if the player has at least one completed line.
    pub fn has_completed_line(&self, player: Player) -> bool {
        self.completed[Self::slot(player)]
    }

    fn bump(total: &mut i64, weight: i64) -> i64 {
        *total += weight;
        *total
    }

    fn slot(player: Player) -> usize {
        match player {
            Player::X => 0,
            Player::O => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(rows: &[&str]) -> LineAccumulators {
        let board = Board::parse(rows).unwrap();
        LineAccumulators::scan(&board, &EvaluatorSettings::default())
    }

    #[test]
    fn test_empty_board_has_no_lines() {
        let lines = scan(&["   ", "   ", "   "]);
        assert!(!lines.has_completed_line(Player::X));
        assert!(!lines.has_completed_line(Player::O));
    }

    #[test]
    fn test_row_completed() {
        let lines = scan(&["XXX", "O O", " O "]);
        assert!(lines.has_completed_line(Player::X));
        assert!(!lines.has_completed_line(Player::O));
    }

    #[test]
    fn test_column_completed() {
        let lines = scan(&["XOX", " O ", "XO "]);
        assert!(lines.has_completed_line(Player::O));
        assert!(!lines.has_completed_line(Player::X));
    }

    #[test]
    fn test_main_diagonal_completed() {
        let lines = scan(&["O X", "XO ", "X O"]);
        assert!(lines.has_completed_line(Player::O));
    }

    #[test]
    fn test_anti_diagonal_completed() {
        let lines = scan(&[" OX", " XO", "XO "]);
        assert!(lines.has_completed_line(Player::X));
    }

    #[test]
    fn test_mixed_line_cancels() {
        // Top row X X O sums to +1, never +3.
        let lines = scan(&["XXO", "O  ", "   "]);
        assert!(!lines.has_completed_line(Player::X));
        assert_eq!(lines.rows[0], 1);
    }

    #[test]
    fn test_center_updates_both_diagonals() {
        let lines = scan(&["   ", " X ", "   "]);
        assert_eq!(lines.main_diagonal, 1);
        assert_eq!(lines.anti_diagonal, 1);
        assert_eq!(lines.rows[1], 1);
        assert_eq!(lines.columns[1], 1);
    }

    #[test]
    fn test_both_players_complete() {
        let lines = scan(&["XOX", "XOO", "XOX"]);
        assert!(lines.has_completed_line(Player::X));
        assert!(lines.has_completed_line(Player::O));
    }

    #[test]
    fn test_four_by_four_diagonal() {
        let settings = EvaluatorSettings::new(4).unwrap();
        let board = Board::parse(&["X  O", " XO ", " OX ", "O  X"]).unwrap();
        let lines = LineAccumulators::scan(&board, &settings);
        assert!(lines.has_completed_line(Player::X));
        assert!(lines.has_completed_line(Player::O));
    }
}
