//! Main word filter interface

use super::constraint::RowConstraint;
use super::error::{FilterError, MalformedInput};
use crate::core::{GuessHistory, Word};
use crate::wordlists::Dictionary;
use rayon::prelude::*;
use std::time::Instant;
use tracing::{debug, trace};

/// Dictionary size from which filtering is split across the rayon pool
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 2048;

/// Tuning knobs for [`WordFilter`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterConfig {
    /// Dictionaries with at least this many words are filtered in parallel
    pub parallel_threshold: usize,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

/// Stateless filter from a guess history to the consistent dictionary words
///
/// Safe to share between threads; every call owns its own working state.
#[derive(Debug, Clone, Copy, Default)]
pub struct WordFilter {
    config: FilterConfig,
}

impl WordFilter {
    #[must_use]
    pub const fn new(config: FilterConfig) -> Self {
        Self { config }
    }

    /// Return the dictionary words consistent with every row of `history`
    ///
    /// Matches keep dictionary order. Rows whose cells are all empty are
    /// ignored.
    ///
    /// # Errors
    /// - `FilterError::EmptyDictionary` if the dictionary has no words
    /// - `FilterError::MalformedInput` if a row's length differs from the
    ///   dictionary's word length
    ///
    /// # Examples
    /// ```
    /// use wordle_filter::core::{GuessHistory, GuessRow};
    /// use wordle_filter::filter::WordFilter;
    /// use wordle_filter::wordlists::Dictionary;
    ///
    /// let dictionary = Dictionary::from_list(&["crate", "crane", "grape"]).unwrap();
    /// let row: GuessRow = "crane:ggg-g".parse().unwrap();
    /// let history = GuessHistory::from(vec![row]);
    ///
    /// let matches = WordFilter::default().filter(&dictionary, &history).unwrap();
    /// assert_eq!(matches.texts(), vec!["crate"]);
    /// assert_eq!(matches.probability(), Some(1.0));
    /// ```
    pub fn filter<'d>(
        &self,
        dictionary: &'d Dictionary,
        history: &GuessHistory,
    ) -> Result<Matches<'d>, FilterError> {
        if dictionary.is_empty() {
            return Err(FilterError::EmptyDictionary);
        }

        let started = Instant::now();
        let constraints = compile_history(history, dictionary.word_length())?;
        let parallel = dictionary.len() >= self.config.parallel_threshold;

        let words: Vec<&'d Word> = if parallel {
            dictionary
                .words()
                .par_iter()
                .filter(|word| retained(&constraints, word))
                .collect()
        } else {
            dictionary
                .words()
                .iter()
                .filter(|word| retained(&constraints, word))
                .collect()
        };

        debug!(
            dictionary = dictionary.len(),
            rows = history.len(),
            constraints = constraints.len(),
            matches = words.len(),
            parallel,
            elapsed_us = started.elapsed().as_micros() as u64,
            "filtered dictionary"
        );

        Ok(Matches { words })
    }

    /// Check a single word against `history`
    ///
    /// # Errors
    /// Returns `FilterError::MalformedInput` if a row's length differs from the
    /// word's length.
    pub fn retains(&self, word: &Word, history: &GuessHistory) -> Result<bool, FilterError> {
        let constraints = compile_history(history, word.len())?;
        Ok(retained(&constraints, word))
    }
}

/// Validate row lengths and compile each constraining row, tagged with its index
///
/// # Errors
/// Returns `MalformedInput::RowLength` for the first row whose length differs
/// from `word_length`.
pub fn compile_history(
    history: &GuessHistory,
    word_length: usize,
) -> Result<Vec<(usize, RowConstraint)>, MalformedInput> {
    let mut constraints = Vec::with_capacity(history.len());

    for (index, row) in history.rows().iter().enumerate() {
        if row.len() != word_length {
            return Err(MalformedInput::RowLength {
                row: index,
                expected: word_length,
                actual: row.len(),
            });
        }
        if let Some(constraint) = RowConstraint::compile(row) {
            constraints.push((index, constraint));
        }
    }

    Ok(constraints)
}

fn retained(constraints: &[(usize, RowConstraint)], word: &Word) -> bool {
    match constraints.iter().find(|(_, constraint)| !constraint.matches(word)) {
        None => true,
        Some((row, _)) => {
            trace!(word = word.text(), row, "rejected");
            false
        }
    }
}

/// Dictionary words that survived filtering, in dictionary order
///
/// An empty `Matches` is the legitimate "no valid words" outcome.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Matches<'d> {
    words: Vec<&'d Word>,
}

impl<'d> Matches<'d> {
    #[must_use]
    pub fn words(&self) -> &[&'d Word] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Uniform chance that any one match is the secret, `None` when nothing matched
    #[must_use]
    pub fn probability(&self) -> Option<f64> {
        if self.words.is_empty() {
            None
        } else {
            Some(1.0 / self.words.len() as f64)
        }
    }

    /// Matched words as owned strings
    #[must_use]
    pub fn texts(&self) -> Vec<String> {
        self.words.iter().map(|word| word.text().to_string()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'d Word> + '_ {
        self.words.iter().copied()
    }
}
