//! Puzzle state engine
//!
//! Owns the session state and applies the player's actions to it.

mod puzzle_engine;

pub use puzzle_engine::{GuessUpdate, PuzzleEngine};
