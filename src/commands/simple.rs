//! Simple interactive CLI mode
//!
//! Enter guesses with their feedback one at a time and watch the candidate list
//! shrink. Each entry is filtered against a fresh snapshot of the history.

use crate::MAX_ATTEMPTS;
use crate::core::{GuessError, GuessHistory, GuessRow};
use crate::filter::{FilterError, Matches, WordFilter};
use crate::output::{print_matches, row_to_emoji};
use crate::wordlists::Dictionary;
use colored::Colorize;
use std::io::{self, Write};

/// A line of user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Guess(GuessRow),
    Undo,
    New,
    List,
    Quit,
}

impl Command {
    /// Parse a command word or a `WORD FEEDBACK` guess
    ///
    /// # Errors
    ///
    /// Returns `GuessError` if the line is neither a command nor a valid guess.
    pub fn parse(input: &str) -> Result<Self, GuessError> {
        match input.trim().to_lowercase().as_str() {
            "quit" | "q" | "exit" => Ok(Self::Quit),
            "new" | "n" => Ok(Self::New),
            "undo" | "u" => Ok(Self::Undo),
            "list" | "l" => Ok(Self::List),
            other => other.parse().map(Self::Guess),
        }
    }
}

/// Guess history for one interactive game
#[derive(Debug)]
pub struct Session<'d> {
    filter: WordFilter,
    dictionary: &'d Dictionary,
    history: GuessHistory,
}

impl<'d> Session<'d> {
    #[must_use]
    pub fn new(filter: WordFilter, dictionary: &'d Dictionary) -> Self {
        Self {
            filter,
            dictionary,
            history: GuessHistory::default(),
        }
    }

    #[must_use]
    pub const fn history(&self) -> &GuessHistory {
        &self.history
    }

    /// Matches for the current history
    ///
    /// # Errors
    ///
    /// Returns `FilterError` if the dictionary is empty.
    pub fn matches(&self) -> Result<Matches<'d>, FilterError> {
        self.filter.filter(self.dictionary, &self.history)
    }

    /// Add a row, keeping it only if the extended history filters cleanly
    ///
    /// # Errors
    ///
    /// Returns `FilterError` if the row does not fit the dictionary; the
    /// history is left unchanged.
    pub fn push(&mut self, row: GuessRow) -> Result<Matches<'d>, FilterError> {
        let next = self.history.with_row(row);
        let matches = self.filter.filter(self.dictionary, &next)?;
        self.history = next;
        Ok(matches)
    }

    /// Drop the last row; false when there is nothing to undo
    pub fn undo(&mut self) -> bool {
        let Some((_, kept)) = self.history.rows().split_last() else {
            return false;
        };
        let kept = kept.to_vec();
        self.history = GuessHistory::from(kept);
        true
    }

    pub fn reset(&mut self) {
        self.history = GuessHistory::default();
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.history.len() >= MAX_ATTEMPTS
    }
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or if the
/// dictionary cannot be filtered.
pub fn run_simple(filter: WordFilter, dictionary: &Dictionary, limit: usize) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║              Wordle Filter - Interactive Mode                ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Enter each guess followed by its feedback, e.g. 'crane gy-.g':\n");
    println!("  - Use G/g/🟩 for green (correct position)");
    println!("  - Use Y/y/🟨 for yellow (wrong position)");
    println!("  - Use -/_/⬜ for gray (not in word)");
    println!("  - Use . for a cell without feedback\n");
    println!("Commands: 'list' to show candidates, 'undo', 'new', 'quit'\n");

    let mut session = Session::new(filter, dictionary);
    let initial = session.matches().map_err(|e| e.to_string())?;
    println!("{} words in the dictionary\n", initial.len());

    loop {
        let turn = session.history().len() + 1;
        let input = get_user_input(&format!("Guess {turn}"))?;
        if input.is_empty() {
            continue;
        }

        let command = match Command::parse(&input) {
            Ok(command) => command,
            Err(e) => {
                println!("{} {e}\n", "❌".red());
                continue;
            }
        };

        match command {
            Command::Quit => {
                println!("\n👋 Bye!\n");
                return Ok(());
            }
            Command::New => {
                session.reset();
                println!("\n🔄 New game started!\n");
            }
            Command::Undo => {
                if session.undo() {
                    println!("✓ Undone! Back to guess {}\n", session.history().len() + 1);
                } else {
                    println!("Nothing to undo!\n");
                }
            }
            Command::List => {
                let matches = session.matches().map_err(|e| e.to_string())?;
                print_matches(&matches, usize::MAX);
            }
            Command::Guess(row) => {
                if session.is_full() {
                    println!("All {MAX_ATTEMPTS} rows are used. Type 'undo' or 'new'.\n");
                    continue;
                }
                let emoji = row_to_emoji(&row);
                match session.push(row) {
                    Ok(matches) => {
                        println!("  {emoji}");
                        print_matches(&matches, limit);
                        if matches.is_empty() {
                            println!("Your feedback may be incorrect. Type 'undo' to go back.\n");
                        }
                    }
                    Err(e) => println!("{} {e}\n", "❌".red()),
                }
            }
        }
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;
    if read == 0 {
        // EOF behaves like quit
        return Ok("quit".to_string());
    }

    Ok(input.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dictionary() -> Dictionary {
        Dictionary::from_list(&["crate", "crane", "grape", "slate", "irate"]).unwrap()
    }

    #[test]
    fn parse_commands() {
        assert_eq!(Command::parse("QUIT"), Ok(Command::Quit));
        assert_eq!(Command::parse(" u "), Ok(Command::Undo));
        assert_eq!(Command::parse("new"), Ok(Command::New));
        assert_eq!(Command::parse("list"), Ok(Command::List));
        assert!(matches!(Command::parse("crane gy-.g"), Ok(Command::Guess(_))));
        assert!(Command::parse("banana").is_err());
    }

    #[test]
    fn guesses_narrow_the_candidates() {
        let dictionary = dictionary();
        let mut session = Session::new(WordFilter::default(), &dictionary);

        let after_first = session.push("slate:--ggg".parse().unwrap()).unwrap();
        assert_eq!(after_first.texts(), vec!["crate", "irate"]);

        let after_second = session.push("irate:-gggg".parse().unwrap()).unwrap();
        assert_eq!(after_second.texts(), vec!["crate"]);
        assert_eq!(session.history().len(), 2);
    }

    #[test]
    fn undo_and_reset() {
        let dictionary = dictionary();
        let mut session = Session::new(WordFilter::default(), &dictionary);

        assert!(!session.undo());
        session.push("slate:--ggg".parse().unwrap()).unwrap();
        session.push("irate:-gggg".parse().unwrap()).unwrap();

        assert!(session.undo());
        assert_eq!(session.matches().unwrap().len(), 2);

        session.reset();
        assert!(session.history().is_empty());
        assert_eq!(session.matches().unwrap().len(), 5);
    }

    #[test]
    fn rejected_row_leaves_history_unchanged() {
        let dictionary = dictionary();
        let mut session = Session::new(WordFilter::default(), &dictionary);

        assert!(session.push("cranes:gggggg".parse().unwrap()).is_err());
        assert!(session.history().is_empty());
    }

    #[test]
    fn session_fills_after_max_attempts() {
        let dictionary = dictionary();
        let mut session = Session::new(WordFilter::default(), &dictionary);

        for _ in 0..MAX_ATTEMPTS {
            assert!(!session.is_full());
            session.push("crate:.....".parse().unwrap()).unwrap();
        }
        assert!(session.is_full());
    }
}
