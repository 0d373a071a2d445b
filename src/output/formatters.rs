//! Formatting utilities for terminal output

use crate::core::{AnnotationMode, DigitStatus, GuessSlot, Verdict};

/// Symbol shown next to a judged guess slot
#[must_use]
pub const fn verdict_symbol(verdict: Verdict) -> &'static str {
    match verdict {
        Verdict::Unset => " ",
        Verdict::Correct => "✓",
        Verdict::Wrong => "✗",
    }
}

/// Symbol overlaid on a marked digit
#[must_use]
pub const fn status_symbol(status: Option<DigitStatus>) -> &'static str {
    match status {
        None => " ",
        Some(DigitStatus::Excluded) => "×",
        Some(DigitStatus::PossiblyCorrect) => "○",
    }
}

/// Mode label with its symbol, e.g. `× Exclude`
#[must_use]
pub fn mode_label(mode: AnnotationMode) -> String {
    format!("{} {mode}", status_symbol(Some(mode.target())))
}

/// A guess slot as a bracketed cell, e.g. `[9✓]`
#[must_use]
pub fn slot_cell(slot: GuessSlot, verdict: Verdict) -> String {
    format!("[{slot}{}]", verdict_symbol(verdict))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verdict_symbols_are_distinct() {
        assert_eq!(verdict_symbol(Verdict::Correct), "✓");
        assert_eq!(verdict_symbol(Verdict::Wrong), "✗");
        assert_eq!(verdict_symbol(Verdict::Unset), " ");
    }

    #[test]
    fn status_symbols() {
        assert_eq!(status_symbol(None), " ");
        assert_eq!(status_symbol(Some(DigitStatus::Excluded)), "×");
        assert_eq!(status_symbol(Some(DigitStatus::PossiblyCorrect)), "○");
    }

    #[test]
    fn mode_labels() {
        assert_eq!(mode_label(AnnotationMode::Exclude), "× Exclude");
        assert_eq!(mode_label(AnnotationMode::MarkCorrect), "○ Mark correct");
    }

    #[test]
    fn slot_cells() {
        assert_eq!(slot_cell(GuessSlot::EMPTY, Verdict::Unset), "[_ ]");
        assert_eq!(slot_cell(GuessSlot::filled('9'), Verdict::Correct), "[9✓]");
        assert_eq!(slot_cell(GuessSlot::filled('a'), Verdict::Wrong), "[a✗]");
    }
}
