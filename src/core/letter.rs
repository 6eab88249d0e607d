//! Letters of the fixed a–z alphabet and per-letter occurrence tables

use std::fmt;
use thiserror::Error;

/// Number of letters in the alphabet
pub const ALPHABET_SIZE: usize = 26;

/// Error type for characters that are not letters a–z
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LetterError {
    #[error("'{0}' is not a letter a-z")]
    OutOfRange(char),
    #[error("expected a single letter, got \"{0}\"")]
    NotSingle(String),
}

/// A single lowercase letter a–z
///
/// Stored as its ASCII byte. Upper-case ASCII input is normalized on construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Letter(u8);

impl Letter {
    /// Create a letter from a character
    ///
    /// # Errors
    /// Returns `LetterError::OutOfRange` for anything outside a–z / A–Z.
    ///
    /// # Examples
    /// ```
    /// use wordle_filter::core::Letter;
    ///
    /// assert_eq!(Letter::new('Q').unwrap().as_char(), 'q');
    /// assert!(Letter::new('é').is_err());
    /// ```
    pub fn new(ch: char) -> Result<Self, LetterError> {
        let lower = ch.to_ascii_lowercase();
        if lower.is_ascii_lowercase() {
            // ASCII-only after the check above
            Ok(Self(lower as u8))
        } else {
            Err(LetterError::OutOfRange(ch))
        }
    }

    /// Parse a string holding exactly one letter
    ///
    /// # Errors
    /// Returns `LetterError::NotSingle` if the string is empty or longer than one
    /// character, or `LetterError::OutOfRange` for a non-letter.
    pub fn parse(text: &str) -> Result<Self, LetterError> {
        let mut chars = text.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => Self::new(ch),
            _ => Err(LetterError::NotSingle(text.to_string())),
        }
    }

    /// Zero-based alphabet index (a = 0, z = 25)
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        (self.0 - b'a') as usize
    }

    #[inline]
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0 as char
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Occurrence count for every letter of the alphabet
///
/// Used both for a word's letter multiset and for the minimum counts a guess row
/// demands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LetterCounts([u8; ALPHABET_SIZE]);

impl LetterCounts {
    /// Count the letters of a sequence
    #[must_use]
    pub fn from_letters(letters: &[Letter]) -> Self {
        let mut counts = Self::default();
        for &letter in letters {
            counts.increment(letter);
        }
        counts
    }

    #[inline]
    #[must_use]
    pub const fn get(&self, letter: Letter) -> u8 {
        self.0[letter.index()]
    }

    #[inline]
    pub fn increment(&mut self, letter: Letter) {
        let slot = &mut self.0[letter.index()];
        *slot = slot.saturating_add(1);
    }

    /// Decrement a count, returning false if it was already zero
    #[inline]
    pub fn take(&mut self, letter: Letter) -> bool {
        let slot = &mut self.0[letter.index()];
        if *slot == 0 {
            false
        } else {
            *slot -= 1;
            true
        }
    }

    /// True if every count in `self` is at least the matching count in `floor`
    #[must_use]
    pub fn covers(&self, floor: &Self) -> bool {
        self.0.iter().zip(floor.0.iter()).all(|(have, need)| have >= need)
    }
}
