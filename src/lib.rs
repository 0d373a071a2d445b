//! Passcode Trainer
//!
//! An interactive trainer for the three-digit passcode deduction puzzle: mark
//! digits while reasoning over the clues, then enter an answer and get
//! per-digit feedback.
//!
//! # Quick Start
//!
//! ```rust
//! use passcode_trainer::core::{AnnotationMode, Digit, DigitStatus};
//! use passcode_trainer::engine::PuzzleEngine;
//! use passcode_trainer::puzzles::classic;
//!
//! let mut engine = PuzzleEngine::from_puzzle(classic());
//!
//! // Rule out a digit, then change our mind
//! let seven = Digit::new(7).unwrap();
//! engine.toggle_annotation(seven);
//! engine.set_annotation_mode(AnnotationMode::MarkCorrect);
//! assert_eq!(engine.toggle_annotation(seven), Some(DigitStatus::PossiblyCorrect));
//!
//! for (position, raw) in ["9", "8", "6"].into_iter().enumerate() {
//!     engine.set_guess_digit(position, raw);
//! }
//! assert!(engine.is_solved());
//! ```

// Core domain types
pub mod core;

// Session state engine
pub mod engine;

// Built-in puzzles
pub mod puzzles;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
