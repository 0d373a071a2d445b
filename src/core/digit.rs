//! Puzzle digit representation
//!
//! Every digit that can appear in a secret or a clue lies in 1..=9.

use std::fmt;

/// A single puzzle digit in the range 1-9
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Digit(u8);

/// Error type for invalid digits
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DigitError {
    OutOfRange(u8),
    NotADigit(char),
}

impl fmt::Display for DigitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange(value) => write!(f, "Digit must be between 1 and 9, got {value}"),
            Self::NotADigit(ch) => write!(f, "'{ch}' is not a digit"),
        }
    }
}

impl std::error::Error for DigitError {}

impl Digit {
    /// All digits in ascending order
    pub const ALL: [Self; 9] = [
        Self(1),
        Self(2),
        Self(3),
        Self(4),
        Self(5),
        Self(6),
        Self(7),
        Self(8),
        Self(9),
    ];

    /// Create a digit from a raw value
    ///
    /// # Errors
    /// Returns `DigitError::OutOfRange` if `value` is not in 1..=9.
    ///
    /// # Examples
    /// ```
    /// use passcode_trainer::core::Digit;
    ///
    /// assert_eq!(Digit::new(7).unwrap().value(), 7);
    /// assert!(Digit::new(0).is_err());
    /// assert!(Digit::new(10).is_err());
    /// ```
    pub const fn new(value: u8) -> Result<Self, DigitError> {
        if value >= 1 && value <= 9 {
            Ok(Self(value))
        } else {
            Err(DigitError::OutOfRange(value))
        }
    }

    /// Create a digit from a character such as `'5'`
    ///
    /// # Errors
    /// Returns `DigitError::NotADigit` for non-decimal characters and
    /// `DigitError::OutOfRange` for `'0'`.
    pub fn from_char(ch: char) -> Result<Self, DigitError> {
        let value = ch.to_digit(10).ok_or(DigitError::NotADigit(ch))?;
        Self::new(value as u8)
    }

    /// Get the raw value (1-9)
    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u8> for Digit {
    type Error = DigitError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_accepts_one_through_nine() {
        for value in 1..=9 {
            assert_eq!(Digit::new(value).unwrap().value(), value);
        }
    }

    #[test]
    fn digit_rejects_out_of_range() {
        assert_eq!(Digit::new(0), Err(DigitError::OutOfRange(0)));
        assert_eq!(Digit::new(10), Err(DigitError::OutOfRange(10)));
        assert_eq!(Digit::new(255), Err(DigitError::OutOfRange(255)));
    }

    #[test]
    fn digit_from_char() {
        assert_eq!(Digit::from_char('9').unwrap().value(), 9);
        assert_eq!(Digit::from_char('0'), Err(DigitError::OutOfRange(0)));
        assert_eq!(Digit::from_char('a'), Err(DigitError::NotADigit('a')));
    }

    #[test]
    fn digit_all_is_ordered() {
        let values: Vec<u8> = Digit::ALL.iter().map(|d| d.value()).collect();
        assert_eq!(values, vec![1, 2, 3, 4, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn digit_display() {
        let digit = Digit::new(4).unwrap();
        assert_eq!(format!("{digit}"), "4");
    }

    #[test]
    fn digit_try_from_u8() {
        assert_eq!(Digit::try_from(8).map(Digit::value), Ok(8));
        assert_eq!(Digit::try_from(12), Err(DigitError::OutOfRange(12)));
    }
}
