//! Candidate dictionary
//!
//! An ordered list of same-length words, loaded once and shared read-only.

use crate::core::Word;
use crate::filter::{FilterError, MalformedInput};

/// Ordered candidate words, all of one length
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dictionary {
    words: Vec<Word>,
    word_length: usize,
}

impl Dictionary {
    /// Build a dictionary of `word_length`-letter words
    ///
    /// An empty word list is accepted here; filtering it reports
    /// `FilterError::EmptyDictionary`.
    ///
    /// # Errors
    /// Returns `MalformedInput::MixedWordLengths` for the first word of another
    /// length.
    pub fn new(word_length: usize, words: Vec<Word>) -> Result<Self, MalformedInput> {
        if let Some(odd) = words.iter().find(|word| word.len() != word_length) {
            return Err(MalformedInput::MixedWordLengths {
                word: odd.text().to_string(),
                expected: word_length,
                actual: odd.len(),
            });
        }
        Ok(Self { words, word_length })
    }

    /// Build from strings, taking the word length from the first entry
    ///
    /// # Errors
    /// - `FilterError::EmptyDictionary` for an empty list
    /// - `FilterError::MalformedInput` for an invalid word or mixed lengths
    ///
    /// # Examples
    /// ```
    /// use wordle_filter::wordlists::Dictionary;
    ///
    /// let dictionary = Dictionary::from_list(&["crate", "crane"]).unwrap();
    /// assert_eq!(dictionary.word_length(), 5);
    /// assert!(Dictionary::from_list(&["crate", "cranes"]).is_err());
    /// ```
    pub fn from_list(texts: &[&str]) -> Result<Self, FilterError> {
        let words = texts
            .iter()
            .map(|&text| Word::new(text))
            .collect::<Result<Vec<_>, _>>()
            .map_err(MalformedInput::from)?;
        let word_length = words
            .first()
            .map(Word::len)
            .ok_or(FilterError::EmptyDictionary)?;
        Ok(Self::new(word_length, words)?)
    }

    /// Build from strings, silently dropping invalid or wrong-length entries
    #[must_use]
    pub fn from_strs(texts: &[&str], word_length: usize) -> Self {
        let words = texts
            .iter()
            .filter_map(|&text| Word::with_length(text, word_length).ok())
            .collect();
        Self { words, word_length }
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
