//! One-shot filter command
//!
//! Filters the dictionary against guess rows given as `WORD:FEEDBACK` text.

use crate::core::{GuessHistory, GuessRow};
use crate::filter::{FilterError, MalformedInput, WordFilter};
use crate::wordlists::Dictionary;

/// Result of filtering the dictionary
#[derive(Debug, Clone, PartialEq)]
pub struct FilterReport {
    pub history: GuessHistory,
    pub matches: Vec<String>,
    pub probability: Option<f64>,
    pub dictionary_size: usize,
}

/// Parse `WORD:FEEDBACK` rows into a history
///
/// # Errors
///
/// Returns `MalformedInput::Row` naming the first row that does not parse.
///
/// # Examples
/// ```
/// use wordle_filter::commands::parse_rows;
///
/// let history = parse_rows(&["crane:gg-.y", "slate:-----"]).unwrap();
/// assert_eq!(history.len(), 2);
/// assert!(parse_rows(&["crane"]).is_err());
/// ```
pub fn parse_rows<S: AsRef<str>>(rows: &[S]) -> Result<GuessHistory, MalformedInput> {
    rows.iter()
        .enumerate()
        .map(|(row, text)| {
            text.as_ref()
                .parse::<GuessRow>()
                .map_err(|source| MalformedInput::Row { row, source })
        })
        .collect()
}

/// Filter the dictionary against textual guess rows
///
/// # Errors
///
/// Returns `FilterError::MalformedInput` if a row does not parse or has the
/// wrong length, and `FilterError::EmptyDictionary` for an empty dictionary.
pub fn filter_rows<S: AsRef<str>>(
    filter: &WordFilter,
    dictionary: &Dictionary,
    rows: &[S],
) -> Result<FilterReport, FilterError> {
    let history = parse_rows(rows)?;
    let matches = filter.filter(dictionary, &history)?;

    Ok(FilterReport {
        matches: matches.texts(),
        probability: matches.probability(),
        dictionary_size: dictionary.len(),
        history,
    })
}
