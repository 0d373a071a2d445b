//! Session state and the operations that mutate it

use crate::core::{
    AnnotationMode, Annotations, CODE_LENGTH, Clue, Digit, DigitStatus, GuessSlot, GuessState,
    SecretCode, Verdict,
};
use crate::puzzles::Puzzle;

/// Outcome of [`PuzzleEngine::set_guess_digit`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessUpdate {
    /// Input was longer than one character or the position was out of range;
    /// nothing changed
    Rejected,
    /// The slot was emptied
    Cleared,
    /// The slot was filled and judged
    Evaluated(Verdict),
}

/// One puzzle session
///
/// Holds the secret, the clue list, the digit marks, the active mark mode and
/// the current guess. Solved status is never stored; [`Self::is_solved`]
/// derives it from the guess every time it is asked.
///
/// # Example
///
/// ```
/// use passcode_trainer::core::{SecretCode, Verdict};
/// use passcode_trainer::engine::PuzzleEngine;
///
/// let secret = SecretCode::new([9, 8, 6]).unwrap();
/// let mut engine = PuzzleEngine::new(secret, Vec::new());
///
/// engine.set_guess_digit(0, "9");
/// engine.set_guess_digit(1, "8");
/// assert!(!engine.is_solved());
///
/// engine.set_guess_digit(2, "6");
/// assert_eq!(engine.verdict(2), Verdict::Correct);
/// assert!(engine.is_solved());
/// ```
#[derive(Debug, Clone)]
pub struct PuzzleEngine {
    secret: SecretCode,
    clues: Vec<Clue>,
    annotations: Annotations,
    mode: AnnotationMode,
    guess: GuessState,
}

impl PuzzleEngine {
    /// Start a session with empty marks, an empty guess and exclude mode active
    ///
    /// Clues are kept for display only and are not checked against `secret`.
    #[must_use]
    pub fn new(secret: SecretCode, clues: Vec<Clue>) -> Self {
        log::debug!("new session with {} clues", clues.len());
        Self {
            secret,
            clues,
            annotations: Annotations::new(),
            mode: AnnotationMode::default(),
            guess: GuessState::new(),
        }
    }

    #[must_use]
    pub fn from_puzzle(puzzle: Puzzle) -> Self {
        let Puzzle { secret, clues } = puzzle;
        Self::new(secret, clues)
    }

    /// Select which mark future toggles apply; existing marks are kept
    pub fn set_annotation_mode(&mut self, mode: AnnotationMode) {
        if self.mode != mode {
            log::debug!("annotation mode {} -> {mode}", self.mode);
        }
        self.mode = mode;
    }

    /// Toggle the active mode's mark on `digit` and return its new status
    ///
    /// A digit carrying the other mode's mark is overwritten, not cleared.
    pub fn toggle_annotation(&mut self, digit: Digit) -> Option<DigitStatus> {
        let status = self.annotations.toggle(digit, self.mode);
        log::debug!("digit {digit} marked {status:?} under {}", self.mode);
        status
    }

    /// Set the guess slot at `position` from raw user input
    ///
    /// - More than one character: rejected, nothing changes.
    /// - Empty: the slot is cleared.
    /// - One character: stored as typed and judged against the secret.
    ///
    /// Any single character is accepted; anything that is not the secret's
    /// digit at that position is judged [`Verdict::Wrong`].
    pub fn set_guess_digit(&mut self, position: usize, raw: &str) -> GuessUpdate {
        if position >= CODE_LENGTH {
            log::warn!("guess position {position} out of range");
            return GuessUpdate::Rejected;
        }

        let mut chars = raw.chars();
        let update = match (chars.next(), chars.next()) {
            (_, Some(_)) => return GuessUpdate::Rejected,
            (None, _) => {
                self.guess.set(position, GuessSlot::EMPTY);
                GuessUpdate::Cleared
            }
            (Some(ch), None) => {
                let slot = GuessSlot::filled(ch);
                self.guess.set(position, slot);
                GuessUpdate::Evaluated(slot.verdict(&self.secret, position))
            }
        };

        log::debug!("guess slot {position} -> {update:?}, guess now {}", self.guess);
        if self.is_solved() {
            log::info!("passcode cracked");
        }
        update
    }

    /// True exactly when all three slots are filled and correct
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.guess.matches(&self.secret)
    }

    #[must_use]
    pub const fn annotation_mode(&self) -> AnnotationMode {
        self.mode
    }

    #[must_use]
    pub fn status(&self, digit: Digit) -> Option<DigitStatus> {
        self.annotations.status(digit)
    }

    #[must_use]
    pub const fn annotations(&self) -> &Annotations {
        &self.annotations
    }

    #[must_use]
    pub const fn guess(&self) -> &GuessState {
        &self.guess
    }

    /// # Panics
    /// Panics if position >= 3
    #[must_use]
    pub const fn slot(&self, position: usize) -> GuessSlot {
        self.guess.slot(position)
    }

    /// # Panics
    /// Panics if position >= 3
    #[must_use]
    pub fn verdict(&self, position: usize) -> Verdict {
        self.guess.slot(position).verdict(&self.secret, position)
    }

    #[must_use]
    pub fn verdicts(&self) -> [Verdict; CODE_LENGTH] {
        self.guess.verdicts(&self.secret)
    }

    /// Number of slots currently judged correct
    #[must_use]
    pub fn correct_count(&self) -> usize {
        self.verdicts()
            .iter()
            .filter(|&&v| v == Verdict::Correct)
            .count()
    }

    #[must_use]
    pub const fn secret(&self) -> &SecretCode {
        &self.secret
    }

    #[must_use]
    pub fn clues(&self) -> &[Clue] {
        &self.clues
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> PuzzleEngine {
        PuzzleEngine::new(SecretCode::new([9, 8, 6]).unwrap(), Vec::new())
    }

    fn digit(value: u8) -> Digit {
        Digit::new(value).unwrap()
    }

    #[test]
    fn new_session_is_blank() {
        let engine = engine();
        assert_eq!(engine.annotation_mode(), AnnotationMode::Exclude);
        assert!(engine.annotations().is_empty());
        assert_eq!(engine.verdicts(), [Verdict::Unset; 3]);
        assert!(!engine.is_solved());
    }

    #[test]
    fn toggle_alternates_under_fixed_mode() {
        let mut engine = engine();
        for d in Digit::ALL {
            for n in 1..=4 {
                engine.toggle_annotation(d);
                let expected = (n % 2 == 1).then_some(DigitStatus::Excluded);
                assert_eq!(engine.status(d), expected);
            }
        }

        engine.set_annotation_mode(AnnotationMode::MarkCorrect);
        for n in 1..=3 {
            engine.toggle_annotation(digit(2));
            let expected = (n % 2 == 1).then_some(DigitStatus::PossiblyCorrect);
            assert_eq!(engine.status(digit(2)), expected);
        }
    }

    #[test]
    fn mode_switch_then_toggle_overwrites_other_mark() {
        let mut engine = engine();
        engine.set_annotation_mode(AnnotationMode::MarkCorrect);
        engine.toggle_annotation(digit(5));
        assert_eq!(engine.status(digit(5)), Some(DigitStatus::PossiblyCorrect));

        engine.set_annotation_mode(AnnotationMode::Exclude);
        assert_eq!(engine.status(digit(5)), Some(DigitStatus::PossiblyCorrect));

        let status = engine.toggle_annotation(digit(5));
        assert_eq!(status, Some(DigitStatus::Excluded));
        assert_eq!(engine.status(digit(5)), Some(DigitStatus::Excluded));
    }

    #[test]
    fn set_mode_is_idempotent() {
        let mut engine = engine();
        engine.toggle_annotation(digit(1));
        engine.set_annotation_mode(AnnotationMode::MarkCorrect);
        engine.set_annotation_mode(AnnotationMode::MarkCorrect);
        assert_eq!(engine.annotation_mode(), AnnotationMode::MarkCorrect);
        assert_eq!(engine.status(digit(1)), Some(DigitStatus::Excluded));
    }

    #[test]
    fn empty_input_clears_slot() {
        let mut engine = engine();
        for position in 0..3 {
            engine.set_guess_digit(position, "4");
            assert_eq!(engine.set_guess_digit(position, ""), GuessUpdate::Cleared);
            assert_eq!(engine.verdict(position), Verdict::Unset);
            assert!(engine.slot(position).is_empty());
            assert!(!engine.is_solved());
        }
    }

    #[test]
    fn long_input_is_a_no_op() {
        let mut engine = engine();
        engine.set_guess_digit(1, "8");

        assert_eq!(engine.set_guess_digit(1, "12"), GuessUpdate::Rejected);
        assert_eq!(engine.slot(1).value(), Some('8'));
        assert_eq!(engine.verdict(1), Verdict::Correct);

        assert_eq!(engine.set_guess_digit(0, "99"), GuessUpdate::Rejected);
        assert!(engine.slot(0).is_empty());
        assert_eq!(engine.verdict(0), Verdict::Unset);
    }

    #[test]
    fn multibyte_single_char_is_accepted() {
        let mut engine = engine();
        assert_eq!(
            engine.set_guess_digit(0, "é"),
            GuessUpdate::Evaluated(Verdict::Wrong)
        );
        assert_eq!(engine.slot(0).value(), Some('é'));
    }

    #[test]
    fn length_is_counted_in_chars() {
        let mut engine = engine();

        // One char, two UTF-16 units
        assert_eq!(
            engine.set_guess_digit(1, "😀"),
            GuessUpdate::Evaluated(Verdict::Wrong)
        );
        assert_eq!(engine.slot(1).value(), Some('😀'));

        // 'e' followed by a combining acute accent is two chars
        assert_eq!(engine.set_guess_digit(2, "e\u{301}"), GuessUpdate::Rejected);
        assert!(engine.slot(2).is_empty());
    }

    #[test]
    fn out_of_range_position_is_rejected() {
        let mut engine = engine();
        assert_eq!(engine.set_guess_digit(3, "6"), GuessUpdate::Rejected);
        assert_eq!(engine.verdicts(), [Verdict::Unset; 3]);
    }

    #[test]
    fn solved_only_after_third_correct_digit() {
        let mut engine = engine();

        assert_eq!(
            engine.set_guess_digit(0, "9"),
            GuessUpdate::Evaluated(Verdict::Correct)
        );
        assert!(!engine.is_solved());

        assert_eq!(
            engine.set_guess_digit(1, "8"),
            GuessUpdate::Evaluated(Verdict::Correct)
        );
        assert!(!engine.is_solved());

        assert_eq!(
            engine.set_guess_digit(2, "6"),
            GuessUpdate::Evaluated(Verdict::Correct)
        );
        assert!(engine.is_solved());
        assert_eq!(engine.correct_count(), 3);
    }

    #[test]
    fn wrong_digit_is_wrong() {
        let mut engine = engine();
        assert_eq!(
            engine.set_guess_digit(0, "1"),
            GuessUpdate::Evaluated(Verdict::Wrong)
        );
        assert_eq!(engine.verdict(0), Verdict::Wrong);
        assert!(!engine.is_solved());
    }

    #[test]
    fn non_numeric_and_zero_are_wrong() {
        let mut engine = engine();
        for raw in ["a", "0", "?", " "] {
            assert_eq!(
                engine.set_guess_digit(0, raw),
                GuessUpdate::Evaluated(Verdict::Wrong),
                "{raw:?}"
            );
        }
    }

    #[test]
    fn solved_is_never_sticky() {
        let mut engine = engine();
        engine.set_guess_digit(0, "9");
        engine.set_guess_digit(1, "8");
        engine.set_guess_digit(2, "6");
        assert!(engine.is_solved());

        engine.set_guess_digit(2, "");
        assert!(!engine.is_solved());

        engine.set_guess_digit(2, "6");
        assert!(engine.is_solved());

        engine.set_guess_digit(0, "1");
        assert!(!engine.is_solved());
        assert_eq!(engine.correct_count(), 2);
    }

    #[test]
    fn annotations_and_guess_are_independent() {
        let mut engine = engine();
        engine.set_guess_digit(0, "9");
        engine.set_guess_digit(1, "8");
        engine.set_guess_digit(2, "6");

        for d in Digit::ALL {
            engine.toggle_annotation(d);
        }
        engine.set_annotation_mode(AnnotationMode::MarkCorrect);
        engine.toggle_annotation(digit(9));
        assert!(engine.is_solved());
        assert_eq!(engine.verdicts(), [Verdict::Correct; 3]);

        let marks = engine.annotations().clone();
        engine.set_guess_digit(1, "");
        engine.set_guess_digit(2, "x");
        assert_eq!(engine.annotations(), &marks);
    }

    #[test]
    fn clues_pass_through_unchanged() {
        let clue = Clue::new([digit(1), digit(7), digit(4)], "Nothing is right");
        let engine = PuzzleEngine::new(SecretCode::new([9, 8, 6]).unwrap(), vec![clue.clone()]);
        assert_eq!(engine.clues(), &[clue]);
        assert_eq!(engine.secret().to_string(), "986");
    }
}
