//! Terminal output formatting
//!
//! Display utilities for line-mode output and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{print_board, print_clues};
