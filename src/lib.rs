//! Wordle Filter
//!
//! Narrows a dictionary down to the words consistent with the feedback of every
//! guess made so far, and estimates the chance that any one survivor is the secret.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_filter::core::{GuessHistory, GuessRow};
//! use wordle_filter::filter::WordFilter;
//! use wordle_filter::wordlists::Dictionary;
//!
//! let dictionary = Dictionary::from_list(&["crate", "crane", "grape"]).unwrap();
//!
//! // C, R, A and E green; N grey
//! let row: GuessRow = "crane:ggg-g".parse().unwrap();
//! let history = GuessHistory::from(vec![row]);
//!
//! let matches = WordFilter::default().filter(&dictionary, &history).unwrap();
//! assert_eq!(matches.texts(), ["crate"]);
//! assert_eq!(matches.probability(), Some(1.0));
//! ```

/// Letters per word in the standard game
pub const WORD_LENGTH: usize = 5;

/// Rows in the standard game grid
pub const MAX_ATTEMPTS: usize = 6;

// Core domain types
pub mod core;

// Constraint filtering
pub mod filter;

// Word lists
pub mod wordlists;

// JSON request/response handling
pub mod service;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
