//! Per-cell feedback states and feedback scoring
//!
//! Each cell of a guess row carries one of four states:
//! - Absent (grey): letter not in the word, or all its occurrences accounted for
//! - Present elsewhere (yellow): letter in the word, wrong position
//! - Correct position (green): letter in this exact position
//! - Empty: unfilled cell, constrains nothing
//!
//! Wire codes follow the reference grid UI: 0, 1, 2 and 3 respectively.

use super::guess::{GuessCell, GuessRow};
use super::{LetterCounts, Word};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Feedback shown for one cell of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum FeedbackState {
    Absent,
    PresentElsewhere,
    CorrectPosition,
    #[default]
    Empty,
}

/// Error type for unrecognized feedback encodings
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedbackError {
    #[error("unknown feedback state code {0} (expected 0-3)")]
    UnknownCode(u8),
    #[error("unknown feedback symbol '{0}'")]
    UnknownSymbol(char),
}

impl FeedbackState {
    /// Every state, in wire-code order
    pub const ALL: [Self; 4] = [
        Self::Absent,
        Self::PresentElsewhere,
        Self::CorrectPosition,
        Self::Empty,
    ];

    /// Numeric wire code (0 = absent, 1 = present, 2 = correct, 3 = empty)
    #[inline]
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Absent => 0,
            Self::PresentElsewhere => 1,
            Self::CorrectPosition => 2,
            Self::Empty => 3,
        }
    }

    /// Parse a numeric wire code
    ///
    /// # Errors
    /// Returns `FeedbackError::UnknownCode` for codes above 3.
    pub const fn from_code(code: u8) -> Result<Self, FeedbackError> {
        match code {
            0 => Ok(Self::Absent),
            1 => Ok(Self::PresentElsewhere),
            2 => Ok(Self::CorrectPosition),
            3 => Ok(Self::Empty),
            other => Err(FeedbackError::UnknownCode(other)),
        }
    }

    /// Parse a feedback symbol
    ///
    /// Accepts (case-insensitive):
    /// - 'G'/'2'/🟩 for green
    /// - 'Y'/'1'/🟨 for yellow
    /// - '-'/'_'/'B'/'X'/'0'/⬜/⬛ for grey
    /// - '.'/'?'/⬚ for an empty cell
    ///
    /// # Errors
    /// Returns `FeedbackError::UnknownSymbol` for anything else.
    ///
    /// # Examples
    /// ```
    /// use wordle_filter::core::FeedbackState;
    ///
    /// assert_eq!(FeedbackState::from_symbol('g').unwrap(), FeedbackState::CorrectPosition);
    /// assert_eq!(FeedbackState::from_symbol('🟨').unwrap(), FeedbackState::PresentElsewhere);
    /// assert!(FeedbackState::from_symbol('q').is_err());
    /// ```
    pub fn from_symbol(symbol: char) -> Result<Self, FeedbackError> {
        match symbol.to_ascii_lowercase() {
            'g' | '2' | '🟩' => Ok(Self::CorrectPosition),
            'y' | '1' | '🟨' => Ok(Self::PresentElsewhere),
            '-' | '_' | 'b' | 'x' | '0' | '⬜' | '⬛' => Ok(Self::Absent),
            '.' | '?' | '⬚' => Ok(Self::Empty),
            _ => Err(FeedbackError::UnknownSymbol(symbol)),
        }
    }

    /// Compact ASCII symbol, the inverse of [`FeedbackState::from_symbol`]
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Absent => '-',
            Self::PresentElsewhere => 'y',
            Self::CorrectPosition => 'g',
            Self::Empty => '.',
        }
    }

    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Absent => '⬜',
            Self::PresentElsewhere => '🟨',
            Self::CorrectPosition => '🟩',
            Self::Empty => '⬚',
        }
    }

    /// True for green and yellow, the states that prove a letter occurs
    #[inline]
    #[must_use]
    pub const fn confirms_letter(self) -> bool {
        matches!(self, Self::PresentElsewhere | Self::CorrectPosition)
    }
}

impl TryFrom<u8> for FeedbackState {
    type Error = FeedbackError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::from_code(code)
    }
}

impl From<FeedbackState> for u8 {
    fn from(state: FeedbackState) -> Self {
        state.code()
    }
}

impl fmt::Display for FeedbackState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Absent => "absent",
            Self::PresentElsewhere => "present elsewhere",
            Self::CorrectPosition => "correct position",
            Self::Empty => "empty",
        };
        f.write_str(name)
    }
}

/// Calculate the feedback row the game shows when `guess` is played against `secret`
///
/// Implements the exact duplicate-letter rules:
/// 1. First pass: mark exact matches green and remove them from the available pool
/// 2. Second pass: mark present-but-misplaced letters yellow while the pool lasts
/// 3. Everything else is grey
///
/// Both words must have the same length.
///
/// # Examples
/// ```
/// use wordle_filter::core::{score, Word};
///
/// let guess = Word::new("robot").unwrap();
/// let secret = Word::new("floor").unwrap();
/// assert_eq!(score(&guess, &secret).to_string(), "robot:yy-g-");
/// ```
#[must_use]
pub fn score(guess: &Word, secret: &Word) -> GuessRow {
    debug_assert_eq!(guess.len(), secret.len(), "score needs equal-length words");

    let mut states = vec![FeedbackState::Absent; guess.len()];
    let mut available = LetterCounts::default();

    // First pass: greens, pooling the secret's unmatched letters
    for ((state, &g), &s) in states.iter_mut().zip(guess.letters()).zip(secret.letters()) {
        if g == s {
            *state = FeedbackState::CorrectPosition;
        } else {
            available.increment(s);
        }
    }

    // Second pass: yellows from whatever is left in the pool
    for (state, &g) in states.iter_mut().zip(guess.letters()) {
        if *state == FeedbackState::Absent && available.take(g) {
            *state = FeedbackState::PresentElsewhere;
        }
    }

    guess
        .letters()
        .iter()
        .zip(states)
        .map(|(&letter, state)| GuessCell::filled(letter, state))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn states_of(guess: &str, secret: &str) -> String {
        let guess = Word::new(guess).unwrap();
        let secret = Word::new(secret).unwrap();
        score(&guess, &secret)
            .cells()
            .iter()
            .map(|cell| cell.state().symbol())
            .collect()
    }

    #[test]
    fn codes_round_trip() {
        for state in FeedbackState::ALL {
            assert_eq!(FeedbackState::from_code(state.code()), Ok(state));
            assert_eq!(FeedbackState::from_symbol(state.symbol()), Ok(state));
            assert_eq!(FeedbackState::from_symbol(state.emoji()), Ok(state));
        }
        assert_eq!(
            FeedbackState::from_code(4),
            Err(FeedbackError::UnknownCode(4))
        );
    }

    #[test]
    fn symbols_accept_aliases() {
        for symbol in ['G', 'g', '2', '🟩'] {
            assert_eq!(
                FeedbackState::from_symbol(symbol),
                Ok(FeedbackState::CorrectPosition)
            );
        }
        for symbol in ['-', '_', 'B', 'x', '0', '⬜', '⬛'] {
            assert_eq!(FeedbackState::from_symbol(symbol), Ok(FeedbackState::Absent));
        }
        assert_eq!(FeedbackState::from_symbol('?'), Ok(FeedbackState::Empty));
        assert_eq!(
            FeedbackState::from_symbol('k'),
            Err(FeedbackError::UnknownSymbol('k'))
        );
    }

    #[test]
    fn serde_uses_wire_codes() {
        let json = serde_json::to_string(&FeedbackState::PresentElsewhere).unwrap();
        assert_eq!(json, "1");

        let state: FeedbackState = serde_json::from_str("2").unwrap();
        assert_eq!(state, FeedbackState::CorrectPosition);

        assert!(serde_json::from_str::<FeedbackState>("7").is_err());
    }

    #[test]
    fn confirms_letter_only_for_green_and_yellow() {
        assert!(FeedbackState::CorrectPosition.confirms_letter());
        assert!(FeedbackState::PresentElsewhere.confirms_letter());
        assert!(!FeedbackState::Absent.confirms_letter());
        assert!(!FeedbackState::Empty.confirms_letter());
    }

    #[test]
    fn score_all_gray() {
        assert_eq!(states_of("abcde", "fghij"), "-----");
    }

    #[test]
    fn score_all_green() {
        assert_eq!(states_of("crane", "crane"), "ggggg");
    }

    #[test]
    fn score_real_wordle_example() {
        // R is gray because SLATE has no R
        assert_eq!(states_of("crane", "slate"), "--g-g");
    }

    #[test]
    fn score_duplicate_letters_both_yellow() {
        // ERASE has two E's, neither where SPEED has them
        assert_eq!(states_of("speed", "erase"), "y-yy-");
    }

    #[test]
    fn score_duplicate_letters_green_takes_priority() {
        // Second O is green, first O takes the remaining O as yellow
        assert_eq!(states_of("robot", "floor"), "yy-g-");
    }

    #[test]
    fn score_surplus_duplicate_is_gray() {
        // ALLOT has two L's, ADULT only one
        assert_eq!(states_of("allot", "adult"), "gy--g");
    }

    #[test]
    fn score_keeps_guess_letters() {
        let guess = Word::new("crane").unwrap();
        let secret = Word::new("slate").unwrap();
        let row = score(&guess, &secret);

        let letters: String = row
            .cells()
            .iter()
            .filter_map(|cell| cell.letter().map(|l| l.as_char()))
            .collect();
        assert_eq!(letters, "crane");
    }
}
