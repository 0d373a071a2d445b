//! Simple interactive CLI mode
//!
//! Text-based trainer without TUI

use crate::core::{AnnotationMode, CODE_LENGTH, Digit, DigitError, DigitStatus, Verdict};
use crate::engine::{GuessUpdate, PuzzleEngine};
use crate::output::print_board;
use anyhow::Result;
use colored::Colorize;
use std::fmt;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

/// One line of user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Mode(AnnotationMode),
    Toggle(Digit),
    /// Set (or clear, when `raw` is empty) the slot at a 0-based position
    Set { position: usize, raw: String },
    /// Fill all three slots at once
    Guess(String),
    Show,
    Help,
    Quit,
}

/// Error type for unparseable commands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    Empty,
    Unknown(String),
    MissingArgument(&'static str),
    InvalidNumber(String),
    InvalidDigit(DigitError),
    InvalidPosition(usize),
    GuessLength(usize),
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Enter a command, or 'help' for a list"),
            Self::Unknown(cmd) => write!(f, "Unknown command '{cmd}'"),
            Self::MissingArgument(what) => write!(f, "Missing {what}"),
            Self::InvalidNumber(text) => write!(f, "'{text}' is not a number"),
            Self::InvalidDigit(err) => write!(f, "{err}"),
            Self::InvalidPosition(pos) => {
                write!(f, "Position must be between 1 and {CODE_LENGTH}, got {pos}")
            }
            Self::GuessLength(len) => {
                write!(f, "A full guess needs exactly {CODE_LENGTH} characters, got {len}")
            }
        }
    }
}

impl std::error::Error for CommandError {}

impl From<DigitError> for CommandError {
    fn from(err: DigitError) -> Self {
        Self::InvalidDigit(err)
    }
}

fn parse_number(text: &str) -> Result<usize, CommandError> {
    text.parse()
        .map_err(|_| CommandError::InvalidNumber(text.to_string()))
}

impl FromStr for Command {
    type Err = CommandError;

    /// Parse commands such as `t 5`, `g 1 9`, `guess 986` or `exclude`
    ///
    /// Positions are 1-based here and converted to the engine's 0-based slots.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_whitespace();
        let Some(head) = words.next() else {
            return Err(CommandError::Empty);
        };

        match head.to_lowercase().as_str() {
            "exclude" | "x" => Ok(Self::Mode(AnnotationMode::Exclude)),
            "correct" | "mark" | "o" => Ok(Self::Mode(AnnotationMode::MarkCorrect)),
            "t" | "toggle" => {
                let arg = words.next().ok_or(CommandError::MissingArgument("digit"))?;
                let value = parse_number(arg)?;
                let value = u8::try_from(value)
                    .map_err(|_| CommandError::InvalidNumber(arg.to_string()))?;
                Ok(Self::Toggle(Digit::try_from(value)?))
            }
            "g" | "set" => {
                let arg = words
                    .next()
                    .ok_or(CommandError::MissingArgument("position"))?;
                let position = parse_number(arg)?;
                if !(1..=CODE_LENGTH).contains(&position) {
                    return Err(CommandError::InvalidPosition(position));
                }
                let raw = words.next().unwrap_or_default().to_string();
                Ok(Self::Set {
                    position: position - 1,
                    raw,
                })
            }
            "guess" => {
                let arg = words.next().ok_or(CommandError::MissingArgument("guess"))?;
                let len = arg.chars().count();
                if len == CODE_LENGTH {
                    Ok(Self::Guess(arg.to_string()))
                } else {
                    Err(CommandError::GuessLength(len))
                }
            }
            "show" | "s" => Ok(Self::Show),
            "help" | "h" | "?" => Ok(Self::Help),
            "quit" | "q" | "exit" => Ok(Self::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

/// Apply a command to the engine and describe what happened
///
/// Returns `None` for commands that do not touch the engine.
pub fn apply(engine: &mut PuzzleEngine, command: &Command) -> Option<String> {
    match command {
        Command::Mode(mode) => {
            engine.set_annotation_mode(*mode);
            Some(format!("Mode: {mode}"))
        }
        Command::Toggle(digit) => {
            let text = match engine.toggle_annotation(*digit) {
                None => format!("{digit} unmarked"),
                Some(DigitStatus::Excluded) => format!("{digit} excluded"),
                Some(DigitStatus::PossiblyCorrect) => format!("{digit} may be correct"),
            };
            Some(text)
        }
        Command::Set { position, raw } => Some(describe_update(
            *position,
            engine.set_guess_digit(*position, raw),
        )),
        Command::Guess(text) => {
            let lines: Vec<String> = text
                .chars()
                .enumerate()
                .map(|(position, ch)| {
                    describe_update(position, engine.set_guess_digit(position, &ch.to_string()))
                })
                .collect();
            Some(lines.join(", "))
        }
        Command::Show | Command::Help | Command::Quit => None,
    }
}

fn describe_update(position: usize, update: GuessUpdate) -> String {
    let slot = position + 1;
    match update {
        GuessUpdate::Rejected => format!("Slot {slot}: enter a single character"),
        GuessUpdate::Cleared => format!("Slot {slot} cleared"),
        GuessUpdate::Evaluated(Verdict::Correct) => format!("Slot {slot} correct"),
        GuessUpdate::Evaluated(Verdict::Wrong) => format!("Slot {slot} wrong"),
        GuessUpdate::Evaluated(Verdict::Unset) => format!("Slot {slot} empty"),
    }
}

fn print_help() {
    println!("Commands:");
    println!("  exclude | x          switch to exclude mode (×)");
    println!("  correct | mark | o   switch to mark-correct mode (○)");
    println!("  t <digit>            toggle the current mark on a digit 1-9");
    println!("  g <pos> [char]       set guess slot 1-3, or clear it when no char is given");
    println!("  guess <abc>          set all three slots at once");
    println!("  show                 print the board");
    println!("  quit                 leave the trainer\n");
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple(engine: &mut PuzzleEngine) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║               Passcode Trainer - Interactive Mode            ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Work out the three-digit passcode from the clues below.");
    println!("Mark digits as you reason, then enter your answer.\n");
    print_help();
    print_board(engine);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("\n> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            println!();
            return Ok(());
        };

        let command = match line?.parse::<Command>() {
            Ok(command) => command,
            Err(err) => {
                println!("{}", format!("❌ {err}").red());
                continue;
            }
        };

        match command {
            Command::Quit => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            Command::Help => print_help(),
            Command::Show => print_board(engine),
            _ => {
                if let Some(text) = apply(engine, &command) {
                    println!("{}", text.bright_white());
                }
                if matches!(command, Command::Set { .. } | Command::Guess(_)) {
                    print_board(engine);
                }
            }
        }
    }
}
