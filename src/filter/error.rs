//! Filter error taxonomy
//!
//! Zero surviving words is not an error; it is an empty [`Matches`](super::Matches).

use crate::core::{GuessError, WordError};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Error class, serialized by name on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    MalformedInput,
    EmptyDictionary,
}

impl ErrorKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MalformedInput => "MalformedInput",
            Self::EmptyDictionary => "EmptyDictionary",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors reported to the caller instead of a match list
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    #[error("malformed input: {0}")]
    MalformedInput(#[from] MalformedInput),
    #[error("the dictionary has no words to filter")]
    EmptyDictionary,
}

impl FilterError {
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::MalformedInput(_) => ErrorKind::MalformedInput,
            Self::EmptyDictionary => ErrorKind::EmptyDictionary,
        }
    }
}

/// What exactly was wrong with the input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedInput {
    #[error("row {row} has {actual} cells, expected {expected}")]
    RowLength {
        row: usize,
        expected: usize,
        actual: usize,
    },
    #[error("row {row}, cell {column}: {source}")]
    Cell {
        row: usize,
        column: usize,
        #[source]
        source: GuessError,
    },
    #[error("row {row}: {source}")]
    Row {
        row: usize,
        #[source]
        source: GuessError,
    },
    #[error("row {row} has {letters} of {expected} letters; all entered words must have exactly {expected} letters")]
    IncompleteRow {
        row: usize,
        letters: usize,
        expected: usize,
    },
    #[error("dictionary word \"{word}\" has {actual} letters, expected {expected}")]
    MixedWordLengths {
        word: String,
        expected: usize,
        actual: usize,
    },
    #[error("request could not be parsed: {0}")]
    Request(String),
    #[error(transparent)]
    Word(#[from] WordError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_names_are_stable() {
        let malformed = FilterError::from(MalformedInput::RowLength {
            row: 0,
            expected: 5,
            actual: 4,
        });
        assert_eq!(malformed.kind(), ErrorKind::MalformedInput);
        assert_eq!(FilterError::EmptyDictionary.kind(), ErrorKind::EmptyDictionary);
        assert_eq!(ErrorKind::EmptyDictionary.to_string(), "EmptyDictionary");
        assert_eq!(
            serde_json::to_string(&ErrorKind::MalformedInput).unwrap(),
            "\"MalformedInput\""
        );
    }

    #[test]
    fn messages_name_the_row() {
        let err = FilterError::from(MalformedInput::RowLength {
            row: 2,
            expected: 5,
            actual: 6,
        });
        assert_eq!(
            err.to_string(),
            "malformed input: row 2 has 6 cells, expected 5"
        );

        let incomplete = MalformedInput::IncompleteRow {
            row: 1,
            letters: 3,
            expected: 5,
        };
        assert!(incomplete.to_string().contains("exactly 5 letters"));
    }
}
