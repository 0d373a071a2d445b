//! Core domain types for the passcode puzzle
//!
//! This module contains the plain data types the engine is built from.
//! Nothing here performs I/O.

mod annotation;
mod clue;
mod digit;
mod guess;
mod secret;

pub use annotation::{AnnotationMode, Annotations, DigitStatus};
pub use clue::Clue;
pub use digit::{Digit, DigitError};
pub use guess::{GuessSlot, GuessState, Verdict};
pub use secret::{CODE_LENGTH, SecretCode, SecretError};
