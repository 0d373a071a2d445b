//! Print the clue sheet
//!
//! One-shot command for working the puzzle on paper.

use crate::engine::PuzzleEngine;
use crate::output::print_clues;
use colored::Colorize;

/// How to read and work the puzzle
pub const INSTRUCTIONS: [&str; 4] = [
    "Switch between exclude (×) and mark-correct (○) mode before marking",
    "Marking a digit again removes the mark; marking it in the other mode replaces it",
    "× means ruled out, ○ means possibly part of the passcode",
    "Each digit of your answer is checked as soon as you enter it",
];

/// Print the clues and instructions for a session
pub fn run_clues(engine: &PuzzleEngine) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "PASSCODE TRAINER".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    print_clues(engine);

    println!("\n{}", "How to play:".bright_cyan().bold());
    for line in INSTRUCTIONS {
        println!("  • {line}");
    }
    println!();
}
