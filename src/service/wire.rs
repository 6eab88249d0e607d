//! Request and response documents
//!
//! The request mirrors what a grid UI posts: rows of `{letter, state}` cells with
//! the numeric state codes 0-3. The response is one JSON object holding either
//! the matches (plus probability when there are any) or an error.

use crate::core::{FeedbackState, GuessCell, GuessError, GuessHistory, GuessRow, Letter};
use crate::filter::{ErrorKind, FilterError, Matches, MalformedInput};
use serde::{Deserialize, Serialize};

/// One grid cell as sent by the UI
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CellInput {
    /// Zero or one letter; case-insensitive
    #[serde(default)]
    pub letter: String,
    /// Wire state code; defaults to empty for a blank cell and absent otherwise
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<u8>,
}

impl CellInput {
    #[must_use]
    pub fn new(letter: impl Into<String>, state: FeedbackState) -> Self {
        Self {
            letter: letter.into(),
            state: Some(state.code()),
        }
    }

    fn to_cell(&self, row: usize, column: usize) -> Result<GuessCell, MalformedInput> {
        let wrap = |source: GuessError| MalformedInput::Cell {
            row,
            column,
            source,
        };

        let text = self.letter.trim();
        let letter = if text.is_empty() {
            None
        } else {
            Some(Letter::parse(text).map_err(|e| wrap(e.into()))?)
        };

        let state = match (letter, self.state) {
            (_, Some(code)) => FeedbackState::from_code(code).map_err(|e| wrap(e.into()))?,
            (Some(_), None) => FeedbackState::Absent,
            (None, None) => FeedbackState::Empty,
        };

        GuessCell::new(letter, state).map_err(wrap)
    }
}

/// Serialized guess history
///
/// Accepts `{"rows": [[cell, ...], ...]}` or a bare array of rows.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "RequestShape")]
pub struct AnalyzeRequest {
    pub rows: Vec<Vec<CellInput>>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RequestShape {
    Bare(Vec<Vec<CellInput>>),
    Wrapped { rows: Vec<Vec<CellInput>> },
}

impl From<RequestShape> for AnalyzeRequest {
    fn from(shape: RequestShape) -> Self {
        match shape {
            RequestShape::Bare(rows) | RequestShape::Wrapped { rows } => Self { rows },
        }
    }
}

impl AnalyzeRequest {
    /// Validate the cells and build an immutable history snapshot
    ///
    /// With `require_complete_rows`, a row holding some but not all of its
    /// letters is rejected; fully blank rows always pass.
    ///
    /// # Errors
    /// Returns `MalformedInput` for a wrong row length, an invalid letter or state
    /// code, a state without a letter, or an incomplete row.
    pub fn to_history(
        &self,
        word_length: usize,
        require_complete_rows: bool,
    ) -> Result<GuessHistory, MalformedInput> {
        self.rows
            .iter()
            .enumerate()
            .map(|(index, cells)| {
                if cells.len() != word_length {
                    return Err(MalformedInput::RowLength {
                        row: index,
                        expected: word_length,
                        actual: cells.len(),
                    });
                }

                let row = cells
                    .iter()
                    .enumerate()
                    .map(|(column, cell)| cell.to_cell(index, column))
                    .collect::<Result<GuessRow, _>>()?;

                let letters = row.letter_count();
                if require_complete_rows && letters > 0 && letters < word_length {
                    return Err(MalformedInput::IncompleteRow {
                        row: index,
                        letters,
                        expected: word_length,
                    });
                }
                Ok(row)
            })
            .collect()
    }
}

impl From<&GuessHistory> for AnalyzeRequest {
    fn from(history: &GuessHistory) -> Self {
        let rows = history
            .rows()
            .iter()
            .map(|row| {
                row.cells()
                    .iter()
                    .map(|cell| CellInput {
                        letter: cell.letter().map(|l| l.to_string()).unwrap_or_default(),
                        state: Some(cell.state().code()),
                    })
                    .collect()
            })
            .collect();
        Self { rows }
    }
}

/// Error payload of a failed request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub kind: ErrorKind,
    pub message: String,
}

/// Response document: matches or a structured error
///
/// Zero matches is a success with an empty list and no `probability` key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnalyzeResponse {
    Failure {
        error: ErrorBody,
    },
    Success {
        matches: Vec<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        probability: Option<f64>,
    },
}

impl AnalyzeResponse {
    #[must_use]
    pub fn from_matches(matches: &Matches<'_>) -> Self {
        Self::Success {
            matches: matches.texts(),
            probability: matches.probability(),
        }
    }

    #[must_use]
    pub fn from_error(error: &FilterError) -> Self {
        Self::Failure {
            error: ErrorBody {
                kind: error.kind(),
                message: error.to_string(),
            },
        }
    }

    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Failure { .. })
    }

    /// Matched words; empty for failures
    #[must_use]
    pub fn matches(&self) -> &[String] {
        match self {
            Self::Success { matches, .. } => matches,
            Self::Failure { .. } => &[],
        }
    }

    #[must_use]
    pub const fn probability(&self) -> Option<f64> {
        match self {
            Self::Success { probability, .. } => *probability,
            Self::Failure { .. } => None,
        }
    }
}
