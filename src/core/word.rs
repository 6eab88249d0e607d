//! Dictionary word representation
//!
//! A Word stores a lowercase a–z word along with its letter counts for constraint checks.

use super::letter::{Letter, LetterCounts, LetterError};
use std::fmt;
use thiserror::Error;

/// A candidate word with cached letter occurrence counts
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    letters: Box<[Letter]>,
    counts: LetterCounts,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word must not be empty")]
    Empty,
    #[error("word \"{word}\" must be exactly {expected} letters, got {actual}")]
    InvalidLength {
        word: String,
        expected: usize,
        actual: usize,
    },
    #[error("word \"{word}\" contains an invalid character: {source}")]
    InvalidCharacters {
        word: String,
        #[source]
        source: LetterError,
    },
}

impl Word {
    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The text is empty
    /// - Contains anything other than the letters a–z (upper case is normalized)
    ///
    /// # Examples
    /// ```
    /// use wordle_filter::core::Word;
    ///
    /// let word = Word::new("CRANE").unwrap();
    /// assert_eq!(word.text(), "crane");
    ///
    /// assert!(Word::new("sh0rt").is_err());
    /// assert!(Word::new("").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        let letters = text
            .chars()
            .map(Letter::new)
            .collect::<Result<Box<[Letter]>, _>>()
            .map_err(|source| WordError::InvalidCharacters {
                word: text.clone(),
                source,
            })?;
        let counts = LetterCounts::from_letters(&letters);

        Ok(Self {
            text,
            letters,
            counts,
        })
    }

    /// Create a Word that must have exactly `length` letters
    ///
    /// # Errors
    /// Returns `WordError::InvalidLength` on a length mismatch, plus anything
    /// [`Word::new`] rejects.
    pub fn with_length(text: impl Into<String>, length: usize) -> Result<Self, WordError> {
        let word = Self::new(text)?;
        if word.len() == length {
            Ok(word)
        } else {
            Err(WordError::InvalidLength {
                actual: word.len(),
                word: word.text,
                expected: length,
            })
        }
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[Letter] {
        &self.letters
    }

    /// Number of letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// True only for a word with no letters, which `new` never builds
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Get the letter at a specific position
    ///
    /// # Panics
    /// Panics if `position >= len()`
    #[inline]
    #[must_use]
    pub fn letter_at(&self, position: usize) -> Letter {
        self.letters[position]
    }

    /// How many times `letter` appears
    #[inline]
    #[must_use]
    pub const fn count_of(&self, letter: Letter) -> u8 {
        self.counts.get(letter)
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub const fn has_letter(&self, letter: Letter) -> bool {
        self.counts.get(letter) > 0
    }

    #[inline]
    #[must_use]
    pub const fn counts(&self) -> &LetterCounts {
        &self.counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
