//! Per-digit scratch marks
//!
//! The player marks digits while reasoning over the clues. Each digit carries
//! at most one mark, and which mark a toggle applies depends on the active
//! [`AnnotationMode`]. A toggle under one mode overwrites a mark left by the
//! other mode rather than clearing it.

use super::Digit;
use rustc_hash::FxHashMap;
use std::fmt;

/// Which mark a toggle applies
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum AnnotationMode {
    /// Toggle between unmarked and [`DigitStatus::Excluded`]
    #[default]
    Exclude,
    /// Toggle between unmarked and [`DigitStatus::PossiblyCorrect`]
    MarkCorrect,
}

impl AnnotationMode {
    /// The status a toggle under this mode sets
    #[must_use]
    pub const fn target(self) -> DigitStatus {
        match self {
            Self::Exclude => DigitStatus::Excluded,
            Self::MarkCorrect => DigitStatus::PossiblyCorrect,
        }
    }
}

impl fmt::Display for AnnotationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exclude => write!(f, "Exclude"),
            Self::MarkCorrect => write!(f, "Mark correct"),
        }
    }
}

/// A mark on a single digit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DigitStatus {
    Excluded,
    PossiblyCorrect,
}

/// Marks for digits 1-9; unmarked digits have no entry
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Annotations {
    marks: FxHashMap<Digit, DigitStatus>,
}

impl Annotations {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current mark on `digit`, or `None` if unmarked
    #[inline]
    #[must_use]
    pub fn status(&self, digit: Digit) -> Option<DigitStatus> {
        self.marks.get(&digit).copied()
    }

    /// Apply one toggle under `mode` and return the digit's new mark
    ///
    /// The digit is cleared only when it already carries this mode's mark.
    /// Any other state, including the other mode's mark, is replaced by this
    /// mode's mark.
    ///
    /// # Examples
    /// ```
    /// use passcode_trainer::core::{AnnotationMode, Annotations, Digit, DigitStatus};
    ///
    /// let five = Digit::new(5).unwrap();
    /// let mut marks = Annotations::new();
    ///
    /// marks.toggle(five, AnnotationMode::MarkCorrect);
    /// let status = marks.toggle(five, AnnotationMode::Exclude);
    /// assert_eq!(status, Some(DigitStatus::Excluded));
    /// ```
    pub fn toggle(&mut self, digit: Digit, mode: AnnotationMode) -> Option<DigitStatus> {
        let target = mode.target();
        if self.status(digit) == Some(target) {
            self.marks.remove(&digit);
            None
        } else {
            self.marks.insert(digit, target);
            Some(target)
        }
    }

    /// Iterate over every digit 1-9 with its mark
    pub fn iter(&self) -> impl Iterator<Item = (Digit, Option<DigitStatus>)> + '_ {
        Digit::ALL
            .into_iter()
            .map(move |digit| (digit, self.status(digit)))
    }

    /// Number of digits carrying `status`
    #[must_use]
    pub fn count(&self, status: DigitStatus) -> usize {
        self.marks.values().filter(|&&s| s == status).count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }
}
