//! Board evaluation: validate, scan every line, classify.

use crate::board::Board;
use crate::error::InvalidBoard;
use crate::rules::{LineAccumulators, Outcome, ValidBoard};
use crate::settings::EvaluatorSettings;
use tracing::instrument;

/// Classifies board snapshots.
///
/// Holds only its immutable settings; nothing is retained between calls, so
/// one evaluator may be shared freely across threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BoardEvaluator {
    settings: EvaluatorSettings,
}

impl BoardEvaluator {
    /// Creates an evaluator bound to the given settings.
    #[instrument]
    pub fn new(settings: EvaluatorSettings) -> Self {
        Self { settings }
    }

    /// Returns the settings in use.
    pub fn settings(&self) -> &EvaluatorSettings {
        &self.settings
    }

    /// Evaluates a board snapshot.
    ///
    /// ```
    /// use strictly_verdict::{Board, BoardEvaluator, Outcome};
    ///
    /// let board = Board::parse(&["XXX", "O O", " O "]).unwrap();
    /// let outcome = BoardEvaluator::default().evaluate(&board).unwrap();
    /// assert_eq!(outcome, Outcome::FirstPlayer);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`InvalidBoard`] if the board has the wrong shape or its mark
    /// counts are inconsistent with X moving first. Nothing fails once the
    /// board is valid.
    #[instrument(skip(self, board), fields(dimension = board.dimension()))]
    pub fn evaluate(&self, board: &Board) -> Result<Outcome, InvalidBoard> {
        let tally = ValidBoard::check(board, &self.settings)?;
        let lines = LineAccumulators::scan(board, &self.settings);
        Ok(Outcome::classify(&lines, &tally, &self.settings))
    }

    /// Parses a JSON grid and evaluates it.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidBoard`] if the JSON is not a legal board or the board
    /// fails validation.
    #[instrument(skip(self, json))]
    pub fn evaluate_json(&self, json: &str) -> Result<Outcome, InvalidBoard> {
        let board = Board::from_json(json)?;
        self.evaluate(&board)
    }
}

/// Evaluates a board with the classic 3×3 settings.
///
/// # Errors
///
/// Returns [`InvalidBoard`] as [`BoardEvaluator::evaluate`] does.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> Result<Outcome, InvalidBoard> {
    BoardEvaluator::default().evaluate(board)
}

/// Parses a JSON grid and evaluates it with the classic 3×3 settings.
///
/// # Errors
///
/// Returns [`InvalidBoard`] as [`BoardEvaluator::evaluate_json`] does.
#[instrument(skip(json))]
pub fn evaluate_json(json: &str) -> Result<Outcome, InvalidBoard> {
    BoardEvaluator::default().evaluate_json(json)
}
