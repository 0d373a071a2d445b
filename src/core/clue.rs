//! Clue records shown alongside the puzzle
//!
//! Clues are display data only. Nothing checks them against the secret.

use super::{CODE_LENGTH, Digit};
use std::fmt;

/// A candidate triple paired with a hint describing how it scores
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clue {
    numbers: [Digit; CODE_LENGTH],
    hint: String,
}

impl Clue {
    #[must_use]
    pub fn new(numbers: [Digit; CODE_LENGTH], hint: impl Into<String>) -> Self {
        Self {
            numbers,
            hint: hint.into(),
        }
    }

    /// The three digits of the clue, in order
    #[inline]
    #[must_use]
    pub const fn numbers(&self) -> &[Digit; CODE_LENGTH] {
        &self.numbers
    }

    #[inline]
    #[must_use]
    pub fn hint(&self) -> &str {
        &self.hint
    }
}

impl fmt::Display for Clue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.numbers;
        write!(f, "{a} {b} {c}  {}", self.hint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digits(values: [u8; 3]) -> [Digit; 3] {
        values.map(|v| Digit::new(v).unwrap())
    }

    #[test]
    fn clue_keeps_numbers_and_hint() {
        let clue = Clue::new(digits([2, 4, 6]), "One digit is right and well placed");
        assert_eq!(clue.numbers(), &digits([2, 4, 6]));
        assert_eq!(clue.hint(), "One digit is right and well placed");
    }

    #[test]
    fn clue_display() {
        let clue = Clue::new(digits([1, 7, 4]), "Nothing is right");
        assert_eq!(clue.to_string(), "1 7 4  Nothing is right");
    }
}
