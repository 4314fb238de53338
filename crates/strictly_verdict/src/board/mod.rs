//! Board snapshot types and their textual adapters.

mod parse;
mod types;

pub use types::{Board, Player, Symbol};
