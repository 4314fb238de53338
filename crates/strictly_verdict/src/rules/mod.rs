//! Evaluation rules.
//!
//! Pure functions over a board snapshot, split the way a single evaluation
//! pass runs: validate and tally, scan lines, classify.

pub mod lines;
pub mod outcome;
pub mod validate;

pub(crate) use lines::LineAccumulators;
pub use outcome::Outcome;
pub(crate) use validate::ValidBoard;
pub use validate::MoveTally;
