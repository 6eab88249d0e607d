//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{print_filter_report, print_matches, print_verify_result};
pub use formatters::row_to_emoji;
