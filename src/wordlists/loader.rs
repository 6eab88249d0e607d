//! Word list loading utilities
//!
//! Provides functions to load dictionaries from files or from embedded constants.

use super::{DICTIONARY, Dictionary};
use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, warn};

/// Parse word list text into words of `length` letters
///
/// One word per line. Blank lines and `#` comments are skipped, case is
/// normalized, and entries that are not a–z words of the requested length are
/// dropped.
#[must_use]
pub fn parse_word_list(content: &str, length: usize) -> Vec<Word> {
    content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                None
            } else {
                Word::with_length(trimmed, length).ok()
            }
        })
        .collect()
}

/// Load words of `length` letters from a file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_filter::wordlists::loader::load_from_file;
///
/// let dictionary = load_from_file("data/dictionary.txt", 5).unwrap();
/// println!("Loaded {} words", dictionary.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P, length: usize) -> io::Result<Dictionary> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let words = parse_word_list(&content, length);

    if words.is_empty() {
        warn!(path = %path.display(), length, "word list has no usable words");
    } else {
        debug!(path = %path.display(), length, words = words.len(), "loaded word list");
    }

    Dictionary::new(length, words).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

/// The embedded default dictionary
///
/// # Examples
/// ```
/// use wordle_filter::wordlists::{loader::embedded, DICTIONARY_COUNT};
///
/// assert_eq!(embedded().len(), DICTIONARY_COUNT);
/// ```
#[must_use]
pub fn embedded() -> Dictionary {
    Dictionary::from_strs(DICTIONARY, crate::WORD_LENGTH)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parse_skips_comments_blanks_and_invalid() {
        let content = "# header\ncrane\n\n  SLATE  \ntoolong\nab3de\nirate\n";
        let words = parse_word_list(content, 5);
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, vec!["crane", "slate", "irate"]);
    }

    #[test]
    fn parse_other_lengths() {
        let content = "cat\ncrane\ndog\n";
        let words = parse_word_list(content, 3);
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, vec!["cat", "dog"]);
    }

    #[test]
    fn parse_empty() {
        assert!(parse_word_list("", 5).is_empty());
    }

    #[test]
    fn load_from_file_round_trip() {
        let path = std::env::temp_dir().join(format!(
            "wordle_filter_loader_{}.txt",
            std::process::id()
        ));
        {
            let mut file = fs::File::create(&path).unwrap();
            writeln!(file, "crane\nslate\nplanet").unwrap();
        }

        let dictionary = load_from_file(&path, 5).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(dictionary.len(), 2);
        assert_eq!(dictionary.word_length(), 5);
    }

    #[test]
    fn load_from_missing_file_errors() {
        assert!(load_from_file("/definitely/not/here.txt", 5).is_err());
    }

    #[test]
    fn embedded_is_five_letters() {
        let dictionary = embedded();
        assert_eq!(dictionary.word_length(), 5);
        assert!(!dictionary.is_empty());
    }
}
