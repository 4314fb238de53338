//! Final classification of a validated board.

use super::lines::LineAccumulators;
use super::validate::MoveTally;
use crate::board::Player;
use crate::settings::EvaluatorSettings;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Result of evaluating a board.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Outcome {
    /// X completed a line.
    FirstPlayer,
    /// O completed a line.
    SecondPlayer,
    /// Board is full and nobody completed a line.
    Draw,
    /// Nobody has completed a line and cells remain.
    NotEnoughMoves,
    /// Both players completed a line, which alternating play cannot produce.
    ImpossiblePosition,
}

impl Outcome {
    /// Returns the winning player, if there is exactly one.
    pub fn winner(self) -> Option<Player> {
        match self {
            Outcome::FirstPlayer => Some(Player::X),
            Outcome::SecondPlayer => Some(Player::O),
            _ => None,
        }
    }

    /// Checks if the game described by the board is over.
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            Outcome::FirstPlayer | Outcome::SecondPlayer | Outcome::Draw
        )
    }

    /// Classifies a scanned board, in fixed priority order.
    #[instrument(skip(lines))]
    pub(crate) fn classify(
        lines: &LineAccumulators,
        tally: &MoveTally,
        settings: &EvaluatorSettings,
    ) -> Self {
        let first = lines.has_completed_line(Player::X);
        let second = lines.has_completed_line(Player::O);

        let outcome = match (first, second) {
            (true, true) => Outcome::ImpossiblePosition,
            (true, false) => Outcome::FirstPlayer,
            (false, true) => Outcome::SecondPlayer,
            (false, false) if tally.total() == settings.cell_count() => Outcome::Draw,
            (false, false) => Outcome::NotEnoughMoves,
        };
        debug!(%outcome, "Board classified");
        outcome
    }
}

impl From<Player> for Outcome {
    fn from(player: Player) -> Self {
        match player {
            Player::X => Outcome::FirstPlayer,
            Player::O => Outcome::SecondPlayer,
        }
    }
}
