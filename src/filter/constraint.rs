//! Per-row constraint compilation and the word predicate
//!
//! A row is compiled once per filter call into its non-empty cells plus the
//! minimum letter counts its green and yellow cells demand. The predicate then
//! checks a word against that compiled form without re-reading the row.

use crate::core::{FeedbackState, GuessRow, Letter, LetterCounts, Word};

/// A checked, non-empty cell of a row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CellCheck {
    position: usize,
    letter: Letter,
    state: FeedbackState,
}

/// Compiled constraints for one guess row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowConstraint {
    length: usize,
    checks: Vec<CellCheck>,
    required: LetterCounts,
}

impl RowConstraint {
    /// Compile a row, or `None` if it has no cell carrying feedback
    #[must_use]
    pub fn compile(row: &GuessRow) -> Option<Self> {
        let checks: Vec<CellCheck> = row
            .cells()
            .iter()
            .enumerate()
            .filter_map(|(position, cell)| {
                cell.constraint().map(|(letter, state)| CellCheck {
                    position,
                    letter,
                    state,
                })
            })
            .collect();

        if checks.is_empty() {
            return None;
        }

        // Green and yellow cells each prove one occurrence
        let mut required = LetterCounts::default();
        for check in checks.iter().filter(|check| check.state.confirms_letter()) {
            required.increment(check.letter);
        }

        Some(Self {
            length: row.len(),
            checks,
            required,
        })
    }

    /// Check whether `word` is consistent with this row's feedback
    ///
    /// A word whose length differs from the row's never matches.
    #[must_use]
    pub fn matches(&self, word: &Word) -> bool {
        word.len() == self.length
            && self.checks.iter().all(|check| self.cell_holds(check, word))
            && word.counts().covers(&self.required)
    }

    fn cell_holds(&self, check: &CellCheck, word: &Word) -> bool {
        let at_position = word.letter_at(check.position) == check.letter;

        match check.state {
            FeedbackState::CorrectPosition => at_position,
            FeedbackState::PresentElsewhere => !at_position && word.has_letter(check.letter),
            FeedbackState::Absent => {
                let cap = self.required.get(check.letter);
                // A grey beside a green/yellow of the same letter caps the count
                // instead of banning the letter
                let count_ok = if cap == 0 {
                    !word.has_letter(check.letter)
                } else {
                    word.count_of(check.letter) <= cap
                };
                count_ok && !at_position
            }
            FeedbackState::Empty => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(notation: &str) -> GuessRow {
        notation.parse().unwrap()
    }

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn letter(ch: char) -> Letter {
        Letter::new(ch).unwrap()
    }

    fn compiled(notation: &str) -> RowConstraint {
        RowConstraint::compile(&row(notation)).unwrap()
    }

    #[test]
    fn blank_rows_compile_to_nothing() {
        assert!(RowConstraint::compile(&GuessRow::blank(5)).is_none());
        assert!(RowConstraint::compile(&row("crane:.....")).is_none());
    }

    #[test]
    fn required_counts_green_and_yellow() {
        let constraint = compiled("allot:gy---");
        assert_eq!(constraint.required.get(letter('a')), 1);
        assert_eq!(constraint.required.get(letter('l')), 1);
        assert_eq!(constraint.required.get(letter('o')), 0);
        assert_eq!(constraint.required.get(letter('t')), 0);
    }

    #[test]
    fn green_pins_position() {
        let constraint = compiled("c....:g....");
        assert!(constraint.matches(&word("crane")));
        assert!(!constraint.matches(&word("trace")));
    }

    #[test]
    fn yellow_excludes_position_and_requires_letter() {
        let constraint = compiled("r....:y....");
        assert!(constraint.matches(&word("crane")));
        assert!(!constraint.matches(&word("raise"))); // r in the tried position
        assert!(!constraint.matches(&word("slate"))); // no r at all
    }

    #[test]
    fn grey_without_confirmation_bans_letter() {
        let constraint = compiled("n....:-....");
        assert!(constraint.matches(&word("crate")));
        assert!(!constraint.matches(&word("crane")));
        assert!(!constraint.matches(&word("nasty")));
    }

    #[test]
    fn grey_with_confirmation_caps_count() {
        // One L confirmed, the second L is grey: exactly one L allowed
        let constraint = compiled("allot:gy---");
        assert!(!constraint.matches(&word("atoll"))); // two L's
        assert!(!constraint.matches(&word("allot"))); // L in the yellow position
        assert!(!constraint.matches(&word("abyss"))); // no L
    }

    #[test]
    fn grey_excludes_its_own_position() {
        // Second L is grey at index 2; a word with its only L there must fail
        let constraint = compiled("allot:gy-..");
        assert!(!constraint.matches(&word("aglow")));
        assert!(constraint.matches(&word("angle")));
    }

    #[test]
    fn floor_counts_both_confirmed_copies() {
        // Two yellow E's demand two E's in the word
        let constraint = compiled("eerie:yy...");
        assert!(constraint.matches(&word("sheet")));
        assert!(!constraint.matches(&word("shelf")));
    }

    #[test]
    fn length_mismatch_never_matches() {
        let constraint = compiled("crane:....g");
        assert!(!constraint.matches(&word("ab")));
        assert!(!constraint.matches(&word("cranes")));
        assert!(constraint.matches(&word("slate")));
    }

    #[test]
    fn empty_cells_are_wildcards() {
        let constraint = compiled("crane:g...g");
        assert!(constraint.matches(&word("crane")));
        assert!(constraint.matches(&word("chase")));
        assert!(!constraint.matches(&word("slate")));
    }
}
