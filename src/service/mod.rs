//! Request/response front end for the filter
//!
//! Turns a serialized guess grid into a [`GuessHistory`](crate::core::GuessHistory),
//! runs [`WordFilter`] and packs the outcome into one response document. Errors
//! become part of the response, never a failure of the caller.

mod wire;

pub use wire::{AnalyzeRequest, AnalyzeResponse, CellInput, ErrorBody};

use crate::filter::{FilterError, Matches, MalformedInput, WordFilter};
use crate::wordlists::Dictionary;
use tracing::{debug, info};

/// Request handling options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Reject rows with some but not all letters filled in
    pub require_complete_rows: bool,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            require_complete_rows: true,
        }
    }
}

/// Analyze one request against the dictionary
///
/// # Examples
/// ```
/// use wordle_filter::core::FeedbackState::{Absent, CorrectPosition};
/// use wordle_filter::filter::WordFilter;
/// use wordle_filter::service::{analyze, AnalyzeRequest, CellInput, ServiceConfig};
/// use wordle_filter::wordlists::Dictionary;
///
/// let dictionary = Dictionary::from_list(&["crate", "crane", "grape"]).unwrap();
/// let row = vec![
///     CellInput::new("c", CorrectPosition),
///     CellInput::new("r", CorrectPosition),
///     CellInput::new("a", CorrectPosition),
///     CellInput::new("n", Absent),
///     CellInput::new("e", CorrectPosition),
/// ];
/// let request = AnalyzeRequest { rows: vec![row] };
///
/// let response = analyze(&WordFilter::default(), &dictionary, &request, ServiceConfig::default());
/// assert_eq!(response.matches(), ["crate"]);
/// assert_eq!(response.probability(), Some(1.0));
/// ```
#[must_use]
pub fn analyze(
    filter: &WordFilter,
    dictionary: &Dictionary,
    request: &AnalyzeRequest,
    config: ServiceConfig,
) -> AnalyzeResponse {
    match run(filter, dictionary, request, config) {
        Ok(matches) => {
            debug!(
                rows = request.rows.len(),
                matches = matches.len(),
                "analysis request served"
            );
            AnalyzeResponse::from_matches(&matches)
        }
        Err(error) => {
            info!(kind = %error.kind(), %error, "analysis request rejected");
            AnalyzeResponse::from_error(&error)
        }
    }
}

/// Parse a JSON request body and analyze it
///
/// A body that is not valid request JSON yields a `MalformedInput` response,
/// unless the dictionary is empty.
#[must_use]
pub fn analyze_json(
    filter: &WordFilter,
    dictionary: &Dictionary,
    body: &str,
    config: ServiceConfig,
) -> AnalyzeResponse {
    let parsed = if dictionary.is_empty() {
        Err(FilterError::EmptyDictionary)
    } else {
        serde_json::from_str::<AnalyzeRequest>(body)
            .map_err(|e| FilterError::from(MalformedInput::Request(e.to_string())))
    };

    match parsed {
        Ok(request) => analyze(filter, dictionary, &request, config),
        Err(error) => {
            info!(kind = %error.kind(), %error, "analysis request rejected");
            AnalyzeResponse::from_error(&error)
        }
    }
}

fn run<'d>(
    filter: &WordFilter,
    dictionary: &'d Dictionary,
    request: &AnalyzeRequest,
    config: ServiceConfig,
) -> Result<Matches<'d>, FilterError> {
    if dictionary.is_empty() {
        return Err(FilterError::EmptyDictionary);
    }
    let history = request.to_history(dictionary.word_length(), config.require_complete_rows)?;
    filter.filter(dictionary, &history)
}
