//! The classic passcode puzzle
//!
//! Five clues, one answer: 986.

use super::Puzzle;
use crate::core::{Clue, Digit, SecretCode};

const SECRET: [u8; 3] = [9, 8, 6];

const CLUES: [([u8; 3], &str); 5] = [
    ([2, 4, 6], "One digit is right and in the right place"),
    ([2, 5, 8], "One digit is right but in the wrong place"),
    ([6, 9, 2], "Two digits are right but both in the wrong place"),
    ([1, 7, 4], "Nothing is right"),
    ([4, 1, 9], "One digit is right but in the wrong place"),
];

/// Build the classic puzzle
#[must_use]
pub fn classic() -> Puzzle {
    Puzzle {
        secret: SecretCode::from_digits(digits(SECRET)),
        clues: CLUES
            .iter()
            .map(|&(numbers, hint)| Clue::new(digits(numbers), hint))
            .collect(),
    }
}

// Values above are all in 1..=9.
fn digits(values: [u8; 3]) -> [Digit; 3] {
    values.map(|v| Digit::ALL[usize::from(v) - 1])
}
