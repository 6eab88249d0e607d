//! Word lists for Wordle filtering
//!
//! Provides the embedded default dictionary plus loading from word list files.

mod dictionary;
mod embedded;
pub mod loader;

pub use dictionary::Dictionary;
pub use embedded::{DICTIONARY, DICTIONARY_COUNT};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dictionary_count_matches_const() {
        assert_eq!(DICTIONARY.len(), DICTIONARY_COUNT);
    }

    #[test]
    fn dictionary_words_are_valid() {
        // All embedded words should be 5 letters, lowercase
        for &word in DICTIONARY {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn dictionary_has_no_duplicates() {
        let unique: std::collections::HashSet<_> = DICTIONARY.iter().collect();
        assert_eq!(unique.len(), DICTIONARY.len());
    }

    #[test]
    fn embedded_dictionary_loads_in_full() {
        let dictionary = Dictionary::from_strs(DICTIONARY, 5);
        assert_eq!(dictionary.len(), DICTIONARY_COUNT);
        assert!(dictionary.words().iter().any(|word| word.text() == "crane"));
    }
}
