//! Puzzles shipped with the trainer
//!
//! Provides the embedded classic puzzle compiled into the binary.

mod classic;

pub use classic::classic;

use crate::core::{Clue, SecretCode};

/// A secret together with the clues that hint at it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    pub secret: SecretCode,
    pub clues: Vec<Clue>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Digit;

    /// Count (right digit, right place) and (right digit, wrong place) for a clue
    fn score(clue: &Clue, secret: &SecretCode) -> (usize, usize) {
        let placed = clue
            .numbers()
            .iter()
            .zip(secret.digits())
            .filter(|(a, b)| a == b)
            .count();
        let present = clue
            .numbers()
            .iter()
            .filter(|&&d| secret.digits().contains(&d))
            .count();
        (placed, present - placed)
    }

    #[test]
    fn classic_secret() {
        assert_eq!(classic().secret.to_string(), "986");
    }

    #[test]
    fn classic_has_five_clues() {
        let puzzle = classic();
        assert_eq!(puzzle.clues.len(), 5);
        assert!(puzzle.clues.iter().all(|clue| !clue.hint().is_empty()));
    }

    #[test]
    fn classic_clues_describe_the_secret() {
        let puzzle = classic();
        let scores: Vec<_> = puzzle
            .clues
            .iter()
            .map(|clue| score(clue, &puzzle.secret))
            .collect();
        assert_eq!(scores, vec![(1, 0), (0, 1), (0, 2), (0, 0), (0, 1)]);
    }

    #[test]
    fn classic_first_clue_digits() {
        let puzzle = classic();
        let values: Vec<u8> = puzzle.clues[0]
            .numbers()
            .iter()
            .map(|d: &Digit| d.value())
            .collect();
        assert_eq!(values, vec![2, 4, 6]);
    }
}
