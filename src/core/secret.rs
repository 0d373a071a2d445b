//! The hidden three-digit code

use super::{Digit, DigitError};
use std::fmt;
use std::str::FromStr;

/// Number of digits in a secret code and in a guess
pub const CODE_LENGTH: usize = 3;

/// The fixed answer the player is trying to deduce
///
/// Immutable once built; the engine only ever reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SecretCode([Digit; CODE_LENGTH]);

/// Error type for invalid secret codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SecretError {
    InvalidLength(usize),
    InvalidDigit { position: usize, source: DigitError },
}

impl fmt::Display for SecretError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Secret must be exactly {CODE_LENGTH} digits, got {len}")
            }
            Self::InvalidDigit { position, source } => {
                write!(f, "Invalid digit at position {}: {source}", position + 1)
            }
        }
    }
}

impl std::error::Error for SecretError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidLength(_) => None,
            Self::InvalidDigit { source, .. } => Some(source),
        }
    }
}

impl SecretCode {
    /// Create a secret from three raw values
    ///
    /// # Errors
    /// Returns `SecretError::InvalidDigit` if any value is outside 1..=9.
    ///
    /// # Examples
    /// ```
    /// use passcode_trainer::core::SecretCode;
    ///
    /// let secret = SecretCode::new([9, 8, 6]).unwrap();
    /// assert_eq!(secret.to_string(), "986");
    ///
    /// assert!(SecretCode::new([0, 8, 6]).is_err());
    /// ```
    pub fn new(values: [u8; CODE_LENGTH]) -> Result<Self, SecretError> {
        let mut digits = [Digit::ALL[0]; CODE_LENGTH];
        for (position, (slot, value)) in digits.iter_mut().zip(values).enumerate() {
            *slot = Digit::new(value)
                .map_err(|source| SecretError::InvalidDigit { position, source })?;
        }
        Ok(Self(digits))
    }

    /// Create a secret from already-validated digits
    #[must_use]
    pub const fn from_digits(digits: [Digit; CODE_LENGTH]) -> Self {
        Self(digits)
    }

    /// Get all digits in order
    #[inline]
    #[must_use]
    pub const fn digits(&self) -> &[Digit; CODE_LENGTH] {
        &self.0
    }

    /// Get the digit at a specific position (0-2)
    ///
    /// # Panics
    /// Panics if position >= 3
    #[inline]
    #[must_use]
    pub const fn digit_at(&self, position: usize) -> Digit {
        self.0[position]
    }
}

impl FromStr for SecretCode {
    type Err = SecretError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.trim().chars().collect();
        if chars.len() != CODE_LENGTH {
            return Err(SecretError::InvalidLength(chars.len()));
        }

        let mut digits = [Digit::ALL[0]; CODE_LENGTH];
        for (position, (slot, ch)) in digits.iter_mut().zip(chars).enumerate() {
            *slot =
                Digit::from_char(ch).map_err(|source| SecretError::InvalidDigit { position, source })?;
        }
        Ok(Self(digits))
    }
}

impl fmt::Display for SecretCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for digit in &self.0 {
            write!(f, "{digit}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn secret_creation_valid() {
        let secret = SecretCode::new([9, 8, 6]).unwrap();
        assert_eq!(secret.digit_at(0).value(), 9);
        assert_eq!(secret.digit_at(1).value(), 8);
        assert_eq!(secret.digit_at(2).value(), 6);
    }

    #[test]
    fn secret_creation_reports_bad_position() {
        assert_eq!(
            SecretCode::new([1, 2, 10]),
            Err(SecretError::InvalidDigit {
                position: 2,
                source: DigitError::OutOfRange(10),
            })
        );
    }

    #[test]
    fn secret_parse_valid() {
        let secret: SecretCode = "986".parse().unwrap();
        assert_eq!(secret, SecretCode::new([9, 8, 6]).unwrap());

        let padded: SecretCode = " 123 ".parse().unwrap();
        assert_eq!(padded.to_string(), "123");
    }

    #[test]
    fn secret_parse_invalid_length() {
        assert_eq!("98".parse::<SecretCode>(), Err(SecretError::InvalidLength(2)));
        assert_eq!("9861".parse::<SecretCode>(), Err(SecretError::InvalidLength(4)));
        assert_eq!("".parse::<SecretCode>(), Err(SecretError::InvalidLength(0)));
    }

    #[test]
    fn secret_parse_invalid_digit() {
        assert!(matches!(
            "9x6".parse::<SecretCode>(),
            Err(SecretError::InvalidDigit { position: 1, .. })
        ));
        assert!(matches!(
            "906".parse::<SecretCode>(),
            Err(SecretError::InvalidDigit { position: 1, .. })
        ));
    }

    #[test]
    fn secret_error_display() {
        let err = "9x6".parse::<SecretCode>().unwrap_err();
        assert_eq!(err.to_string(), "Invalid digit at position 2: 'x' is not a digit");
    }
}
