//! Strictly Verdict - tic-tac-toe position classification
//!
//! Takes a static board snapshot and decides whether X won, O won, the game
//! is drawn, more moves are needed, or the position cannot arise from legal
//! alternating play.
//!
//! # Architecture
//!
//! - **Board**: immutable snapshot of `X`, `O` and empty cells, with textual adapters
//! - **Rules**: validation and move tally, signed line accumulators, classification
//! - **Evaluator**: one pure pass from board to [`Outcome`]
//! - **Settings**: board dimension and line length, loadable from TOML
//!
//! # Example
//!
//! ```
//! use strictly_verdict::{evaluate_json, Outcome};
//!
//! let outcome = evaluate_json(r#"[["X","O","X"],["X","O","O"],["O","X","X"]]"#).unwrap();
//! assert_eq!(outcome, Outcome::Draw);
//!
//! let err = evaluate_json("null").unwrap_err();
//! assert_eq!(err.to_string(), "Wrong input");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod board;
mod error;
mod evaluator;
mod rules;
mod settings;

// Crate-level exports - Board types
pub use board::{Board, Player, Symbol};

// Crate-level exports - Errors
pub use error::{InvalidBoard, InvalidBoardKind};

// Crate-level exports - Evaluation
pub use evaluator::{BoardEvaluator, evaluate, evaluate_json};
pub use rules::{MoveTally, Outcome};

// Crate-level exports - Settings
pub use settings::{ConfigError, EvaluatorSettings};
