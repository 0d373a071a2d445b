//! The player's current guess and per-slot verdicts
//!
//! A slot holds whatever single character was typed. It is compared against
//! the secret by parsing it as a decimal digit, so non-numeric input is kept
//! but always judged wrong.

use super::{CODE_LENGTH, SecretCode};
use std::fmt;

/// Feedback for one guess slot
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// Slot is empty
    #[default]
    Unset,
    Correct,
    Wrong,
}

/// One position of the guess
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct GuessSlot(Option<char>);

impl GuessSlot {
    pub const EMPTY: Self = Self(None);

    #[must_use]
    pub const fn filled(ch: char) -> Self {
        Self(Some(ch))
    }

    /// The character as entered
    #[inline]
    #[must_use]
    pub const fn value(self) -> Option<char> {
        self.0
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0.is_none()
    }

    /// Judge this slot against the secret digit at `position`
    #[must_use]
    pub fn verdict(self, secret: &SecretCode, position: usize) -> Verdict {
        match self.0 {
            None => Verdict::Unset,
            Some(ch) if ch.to_digit(10) == Some(u32::from(secret.digit_at(position).value())) => {
                Verdict::Correct
            }
            Some(_) => Verdict::Wrong,
        }
    }
}

impl fmt::Display for GuessSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(ch) => write!(f, "{ch}"),
            None => write!(f, "_"),
        }
    }
}

/// All three guess slots
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GuessState {
    slots: [GuessSlot; CODE_LENGTH],
}

impl GuessState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    #[must_use]
    pub const fn slots(&self) -> &[GuessSlot; CODE_LENGTH] {
        &self.slots
    }

    /// # Panics
    /// Panics if position >= 3
    #[inline]
    #[must_use]
    pub const fn slot(&self, position: usize) -> GuessSlot {
        self.slots[position]
    }

    pub(crate) fn set(&mut self, position: usize, slot: GuessSlot) {
        self.slots[position] = slot;
    }

    /// Verdicts for every slot, in order
    #[must_use]
    pub fn verdicts(&self, secret: &SecretCode) -> [Verdict; CODE_LENGTH] {
        let mut verdicts = [Verdict::Unset; CODE_LENGTH];
        for (position, verdict) in verdicts.iter_mut().enumerate() {
            *verdict = self.slots[position].verdict(secret, position);
        }
        verdicts
    }

    /// True only when every slot is filled and correct
    #[must_use]
    pub fn matches(&self, secret: &SecretCode) -> bool {
        self.verdicts(secret).iter().all(|&v| v == Verdict::Correct)
    }
}

impl fmt::Display for GuessState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for slot in &self.slots {
            write!(f, "{slot}")?;
        }
        Ok(())
    }
}
