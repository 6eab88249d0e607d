//! Guess cells, rows and histories
//!
//! A `GuessHistory` is an immutable snapshot of the player's grid: each row is one
//! guess attempt, each cell a letter plus the feedback it received.

use super::feedback::{FeedbackError, FeedbackState};
use super::letter::{Letter, LetterError};
use super::Word;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error type for cells and rows that cannot be built
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error(transparent)]
    Letter(#[from] LetterError),
    #[error(transparent)]
    Feedback(#[from] FeedbackError),
    #[error("cell is marked {0} but has no letter")]
    MissingLetter(FeedbackState),
    #[error("guess \"{0}\" is not in WORD:FEEDBACK form")]
    BadNotation(String),
    #[error("guess has {letters} letters but {marks} feedback marks")]
    MarkCount { letters: usize, marks: usize },
}

/// One grid cell: an optional letter and its feedback state
///
/// Invariant: a cell without a letter is always `Empty`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct GuessCell {
    letter: Option<Letter>,
    state: FeedbackState,
}

impl GuessCell {
    /// Build a cell, enforcing the letter/state invariant
    ///
    /// # Errors
    /// Returns `GuessError::MissingLetter` if `letter` is `None` and `state` is not
    /// `Empty`.
    pub fn new(letter: Option<Letter>, state: FeedbackState) -> Result<Self, GuessError> {
        match (letter, state) {
            (None, FeedbackState::Empty) | (Some(_), _) => Ok(Self { letter, state }),
            (None, state) => Err(GuessError::MissingLetter(state)),
        }
    }

    /// A cell holding a letter, always valid
    #[must_use]
    pub const fn filled(letter: Letter, state: FeedbackState) -> Self {
        Self {
            letter: Some(letter),
            state,
        }
    }

    /// An unfilled cell
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            letter: None,
            state: FeedbackState::Empty,
        }
    }

    #[inline]
    #[must_use]
    pub const fn letter(&self) -> Option<Letter> {
        self.letter
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> FeedbackState {
        self.state
    }

    /// The letter, if this cell takes part in constraint evaluation
    #[inline]
    #[must_use]
    pub const fn constraint(&self) -> Option<(Letter, FeedbackState)> {
        match (self.letter, self.state) {
            (_, FeedbackState::Empty) | (None, _) => None,
            (Some(letter), state) => Some((letter, state)),
        }
    }
}

/// One guess attempt: an ordered sequence of cells
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct GuessRow {
    cells: Vec<GuessCell>,
}

impl GuessRow {
    #[must_use]
    pub const fn new(cells: Vec<GuessCell>) -> Self {
        Self { cells }
    }

    /// A row of `length` unfilled cells
    #[must_use]
    pub fn blank(length: usize) -> Self {
        Self::new(vec![GuessCell::empty(); length])
    }

    /// Every letter of `word` marked with the same state
    #[must_use]
    pub fn uniform(word: &Word, state: FeedbackState) -> Self {
        word.letters()
            .iter()
            .map(|&letter| GuessCell::filled(letter, state))
            .collect()
    }

    /// Build a row from a guess word and a string of feedback symbols
    ///
    /// See [`FeedbackState::from_symbol`] for the accepted symbols. A `.` in
    /// `word` leaves that cell without a letter; its feedback must be empty.
    ///
    /// # Errors
    /// Returns `GuessError` for a non-letter in `word`, an unknown symbol, a
    /// feedback mark on a cell without a letter, or a symbol count that differs
    /// from the letter count.
    ///
    /// # Examples
    /// ```
    /// use wordle_filter::core::{FeedbackState, GuessRow};
    ///
    /// let row = GuessRow::from_feedback("crane", "gg-.y").unwrap();
    /// assert_eq!(row.len(), 5);
    /// assert_eq!(row.cells()[2].state(), FeedbackState::Absent);
    /// assert_eq!(row.cells()[3].state(), FeedbackState::Empty);
    /// ```
    pub fn from_feedback(word: &str, feedback: &str) -> Result<Self, GuessError> {
        let letters = word
            .chars()
            .map(|ch| match ch {
                '.' => Ok(None),
                other => Letter::new(other).map(Some),
            })
            .collect::<Result<Vec<_>, _>>()?;
        let states = feedback
            .chars()
            .map(FeedbackState::from_symbol)
            .collect::<Result<Vec<_>, _>>()?;

        if letters.len() != states.len() {
            return Err(GuessError::MarkCount {
                letters: letters.len(),
                marks: states.len(),
            });
        }

        letters
            .into_iter()
            .zip(states)
            .map(|(letter, state)| GuessCell::new(letter, state))
            .collect()
    }

    #[inline]
    #[must_use]
    pub fn cells(&self) -> &[GuessCell] {
        &self.cells
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of cells with a letter typed in
    #[must_use]
    pub fn letter_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.letter().is_some()).count()
    }
}

impl FromIterator<GuessCell> for GuessRow {
    fn from_iter<I: IntoIterator<Item = GuessCell>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl FromStr for GuessRow {
    type Err = GuessError;

    /// Parse `WORD:FEEDBACK` (a space or `=` also separates the halves)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (word, feedback) = s
            .trim()
            .split_once([':', '=', ' '])
            .ok_or_else(|| GuessError::BadNotation(s.to_string()))?;
        Self::from_feedback(word.trim(), feedback.trim())
    }
}

impl fmt::Display for GuessRow {
    /// Renders as `WORD:FEEDBACK`, with `.` for cells without a letter
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            let ch = cell.letter().map_or('.', Letter::as_char);
            write!(f, "{ch}")?;
        }
        f.write_str(":")?;
        for cell in &self.cells {
            write!(f, "{}", cell.state().symbol())?;
        }
        Ok(())
    }
}

/// Ordered guess rows, evaluated independently and conjunctively
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GuessHistory {
    rows: Vec<GuessRow>,
}

impl GuessHistory {
    #[must_use]
    pub const fn new(rows: Vec<GuessRow>) -> Self {
        Self { rows }
    }

    #[inline]
    #[must_use]
    pub fn rows(&self) -> &[GuessRow] {
        &self.rows
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// A new history with `row` appended
    #[must_use]
    pub fn with_row(&self, row: GuessRow) -> Self {
        let mut rows = self.rows.clone();
        rows.push(row);
        Self { rows }
    }
}

impl From<Vec<GuessRow>> for GuessHistory {
    fn from(rows: Vec<GuessRow>) -> Self {
        Self::new(rows)
    }
}

impl FromIterator<GuessRow> for GuessHistory {
    fn from_iter<I: IntoIterator<Item = GuessRow>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter(ch: char) -> Letter {
        Letter::new(ch).unwrap()
    }

    #[test]
    fn cell_invariant_enforced() {
        assert!(GuessCell::new(None, FeedbackState::Empty).is_ok());
        assert!(GuessCell::new(Some(letter('a')), FeedbackState::Empty).is_ok());
        assert_eq!(
            GuessCell::new(None, FeedbackState::CorrectPosition),
            Err(GuessError::MissingLetter(FeedbackState::CorrectPosition))
        );
    }

    #[test]
    fn cell_constraint_skips_empty() {
        assert_eq!(GuessCell::empty().constraint(), None);
        assert_eq!(
            GuessCell::filled(letter('a'), FeedbackState::Empty).constraint(),
            None
        );
        assert_eq!(
            GuessCell::filled(letter('a'), FeedbackState::Absent).constraint(),
            Some((letter('a'), FeedbackState::Absent))
        );
    }

    #[test]
    fn row_from_feedback_valid() {
        let row = GuessRow::from_feedback("CRANE", "GY-.g").unwrap();
        let states: Vec<FeedbackState> = row.cells().iter().map(GuessCell::state).collect();

        assert_eq!(
            states,
            vec![
                FeedbackState::CorrectPosition,
                FeedbackState::PresentElsewhere,
                FeedbackState::Absent,
                FeedbackState::Empty,
                FeedbackState::CorrectPosition,
            ]
        );
        assert_eq!(row.cells()[0].letter(), Some(letter('c')));
    }

    #[test]
    fn row_from_feedback_emoji() {
        let ascii = GuessRow::from_feedback("crane", "gy-gy").unwrap();
        let emoji = GuessRow::from_feedback("crane", "🟩🟨⬜🟩🟨").unwrap();
        assert_eq!(ascii, emoji);
    }

    #[test]
    fn row_from_feedback_invalid() {
        assert_eq!(
            GuessRow::from_feedback("crane", "gyg"),
            Err(GuessError::MarkCount {
                letters: 5,
                marks: 3
            })
        );
        assert!(matches!(
            GuessRow::from_feedback("cr4ne", "ggggg"),
            Err(GuessError::Letter(LetterError::OutOfRange('4')))
        ));
        assert!(matches!(
            GuessRow::from_feedback("crane", "ggzgg"),
            Err(GuessError::Feedback(FeedbackError::UnknownSymbol('z')))
        ));
        assert_eq!(
            GuessRow::from_feedback("cr.ne", "ggg.."),
            Err(GuessError::MissingLetter(FeedbackState::CorrectPosition))
        );
    }

    #[test]
    fn row_from_feedback_blank_cells() {
        let row = GuessRow::from_feedback("c...e", "g...g").unwrap();
        assert_eq!(row.letter_count(), 2);
        assert_eq!(row.cells()[1], GuessCell::empty());
    }

    #[test]
    fn row_parse_notation() {
        let colon: GuessRow = "crane:gg---".parse().unwrap();
        let space: GuessRow = " crane  gg--- ".parse().unwrap();
        let equals: GuessRow = "crane=gg---".parse().unwrap();

        assert_eq!(colon, space);
        assert_eq!(colon, equals);
        assert!(matches!(
            "crane".parse::<GuessRow>(),
            Err(GuessError::BadNotation(_))
        ));
    }

    #[test]
    fn row_display_round_trips() {
        let row: GuessRow = "allot:gy---".parse().unwrap();
        assert_eq!(row.to_string(), "allot:gy---");
        assert_eq!(row.to_string().parse::<GuessRow>().unwrap(), row);

        assert_eq!(GuessRow::blank(3).to_string(), "...:...");
    }

    #[test]
    fn row_letter_count() {
        let blank = GuessRow::blank(5);
        assert_eq!(blank.letter_count(), 0);

        let typed = GuessRow::from_feedback("crane", ".....").unwrap();
        assert_eq!(typed.letter_count(), 5);

        let partial: GuessRow = vec![
            GuessCell::filled(letter('c'), FeedbackState::Absent),
            GuessCell::empty(),
        ]
        .into_iter()
        .collect();
        assert_eq!(partial.letter_count(), 1);
    }

    #[test]
    fn row_uniform() {
        let word = Word::new("crane").unwrap();
        let row = GuessRow::uniform(&word, FeedbackState::CorrectPosition);
        assert_eq!(row.to_string(), "crane:ggggg");
    }

    #[test]
    fn history_with_row_leaves_original() {
        let history = GuessHistory::default();
        let extended = history.with_row(GuessRow::blank(5));

        assert!(history.is_empty());
        assert_eq!(extended.len(), 1);
        assert_eq!(extended.rows()[0], GuessRow::blank(5));
    }
}
