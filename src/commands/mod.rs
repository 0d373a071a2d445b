//! Command implementations

pub mod clues;
pub mod simple;

pub use clues::{INSTRUCTIONS, run_clues};
pub use simple::{Command, CommandError, run_simple};
