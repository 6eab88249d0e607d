//! Core domain types for Wordle feedback
//!
//! Letters, words, feedback states and the guess grid. Everything here is an
//! immutable value type; nothing holds game state between requests.

mod feedback;
mod guess;
mod letter;
mod word;

pub use feedback::{FeedbackError, FeedbackState, score};
pub use guess::{GuessCell, GuessError, GuessHistory, GuessRow};
pub use letter::{ALPHABET_SIZE, Letter, LetterCounts, LetterError};
pub use word::{Word, WordError};
