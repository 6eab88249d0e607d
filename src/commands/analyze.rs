//! JSON analysis command
//!
//! Reads an analysis request document and renders the response document.

use crate::filter::WordFilter;
use crate::service::{AnalyzeResponse, ServiceConfig, analyze_json};
use crate::wordlists::Dictionary;

/// Analyze a JSON request body and serialize the response
///
/// Malformed requests still produce a response document with an `error` object;
/// only serializing the response itself can fail.
///
/// # Errors
///
/// Returns a `serde_json::Error` if the response cannot be serialized.
///
/// # Examples
/// ```
/// use wordle_filter::commands::analyze_document;
/// use wordle_filter::filter::WordFilter;
/// use wordle_filter::service::ServiceConfig;
/// use wordle_filter::wordlists::Dictionary;
///
/// let dictionary = Dictionary::from_list(&["crate", "slate"]).unwrap();
/// let (json, response) =
///     analyze_document(&WordFilter::default(), &dictionary, "[]", ServiceConfig::default(), false)
///         .unwrap();
/// assert_eq!(json, r#"{"matches":["crate","slate"],"probability":0.5}"#);
/// assert!(!response.is_error());
/// ```
pub fn analyze_document(
    filter: &WordFilter,
    dictionary: &Dictionary,
    body: &str,
    config: ServiceConfig,
    pretty: bool,
) -> serde_json::Result<(String, AnalyzeResponse)> {
    let response = analyze_json(filter, dictionary, body, config);
    let json = if pretty {
        serde_json::to_string_pretty(&response)?
    } else {
        serde_json::to_string(&response)?
    };
    Ok((json, response))
}
