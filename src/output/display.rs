//! Colored printing of the puzzle for line-mode output

use super::formatters::{mode_label, slot_cell, status_symbol};
use crate::core::{Clue, Digit, DigitStatus, Verdict};
use crate::engine::PuzzleEngine;
use colored::{ColoredString, Colorize};

fn colored_digit(digit: Digit, status: Option<DigitStatus>) -> ColoredString {
    let text = format!("{digit}{}", status_symbol(status));
    match status {
        None => text.normal(),
        Some(DigitStatus::Excluded) => text.red().strikethrough(),
        Some(DigitStatus::PossiblyCorrect) => text.green().bold(),
    }
}

fn clue_line(clue: &Clue, engine: &PuzzleEngine) -> String {
    let cells: Vec<String> = clue
        .numbers()
        .iter()
        .map(|&d| colored_digit(d, engine.status(d)).to_string())
        .collect();
    format!("  {}   {}", cells.join(" "), clue.hint().bright_white())
}

/// Print the clue sheet with the current marks applied
pub fn print_clues(engine: &PuzzleEngine) {
    println!("\n{}", "Known clues:".bright_cyan().bold());
    for clue in engine.clues() {
        println!("{}", clue_line(clue, engine));
    }
}

/// Print the full board: mode, marks, clues, guess and result
pub fn print_board(engine: &PuzzleEngine) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Mode: {}",
        mode_label(engine.annotation_mode()).bright_yellow().bold()
    );

    let pad: Vec<String> = engine
        .annotations()
        .iter()
        .map(|(d, status)| colored_digit(d, status).to_string())
        .collect();
    println!("Marks: {}", pad.join(" "));

    print_clues(engine);

    let cells: Vec<String> = engine
        .guess()
        .slots()
        .iter()
        .zip(engine.verdicts())
        .map(|(&slot, verdict)| {
            let cell = slot_cell(slot, verdict);
            let cell = match verdict {
                Verdict::Unset => cell.normal(),
                Verdict::Correct => cell.green().bold(),
                Verdict::Wrong => cell.red(),
            };
            cell.to_string()
        })
        .collect();
    println!("\n{} {}", "Your answer:".bright_cyan().bold(), cells.join(" "));

    if engine.is_solved() {
        println!(
            "\n{}",
            "🎉 Congratulations! You cracked the passcode! 🎉"
                .bright_green()
                .bold()
        );
    }
    println!("{}", "─".repeat(60).cyan());
}
