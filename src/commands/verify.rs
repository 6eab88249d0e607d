//! Self-check command
//!
//! Plays random games against secrets drawn from the dictionary and checks the
//! filter against the feedback it would have received:
//! - the secret survives every prefix of its history
//! - adding a row never lets a word back in

use crate::MAX_ATTEMPTS;
use crate::core::{GuessHistory, Word, score};
use crate::filter::{FilterError, WordFilter};
use crate::wordlists::Dictionary;
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::seq::index::sample;
use rayon::prelude::*;
use rustc_hash::FxHashSet;
use std::fmt;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Verification run parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerifyConfig {
    /// Number of secrets to sample (capped at the dictionary size)
    pub secrets: usize,
    /// Random guesses played against each secret
    pub guesses: usize,
    pub seed: u64,
    pub show_progress: bool,
}

impl Default for VerifyConfig {
    fn default() -> Self {
        Self {
            secrets: 200,
            guesses: MAX_ATTEMPTS,
            seed: 2022,
            show_progress: true,
        }
    }
}

/// What went wrong for one secret
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationKind {
    /// The secret was filtered out by its own feedback
    SecretDropped,
    /// A word rejected earlier matched again after more rows
    MatchesGrew,
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SecretDropped => f.write_str("secret dropped"),
            Self::MatchesGrew => f.write_str("match set grew"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub secret: String,
    /// 1-based turn at which the check failed
    pub turn: usize,
    pub kind: ViolationKind,
    /// Rows in `WORD:FEEDBACK` notation up to the failing turn
    pub rows: Vec<String>,
}

/// Result of a verification run
#[derive(Debug, Clone)]
pub struct VerifyResult {
    pub secrets_checked: usize,
    pub guesses_per_secret: usize,
    pub violations: Vec<Violation>,
    /// Average number of matches after each turn
    pub remaining_by_turn: Vec<f64>,
    pub duration: Duration,
    pub secrets_per_second: f64,
}

impl VerifyResult {
    #[must_use]
    pub fn passed(&self) -> bool {
        self.violations.is_empty()
    }
}

struct SecretCheck {
    remaining: Vec<usize>,
    violations: Vec<Violation>,
}

/// Run the self-check
///
/// Sampling is driven by a seeded RNG, so a given seed always plays the same
/// games.
///
/// # Errors
///
/// Returns `FilterError::EmptyDictionary` for an empty dictionary.
pub fn run_verify(
    filter: &WordFilter,
    dictionary: &Dictionary,
    config: &VerifyConfig,
) -> Result<VerifyResult, FilterError> {
    if dictionary.is_empty() {
        return Err(FilterError::EmptyDictionary);
    }

    let words = dictionary.words();
    let mut rng = StdRng::seed_from_u64(config.seed);
    let count = config.secrets.min(words.len());

    let games: Vec<(&Word, Vec<&Word>)> = sample(&mut rng, words.len(), count)
        .into_iter()
        .map(|index| {
            let guesses = (0..config.guesses)
                .filter_map(|_| words.choose(&mut rng))
                .collect();
            (&words[index], guesses)
        })
        .collect();

    debug!(
        secrets = games.len(),
        guesses = config.guesses,
        seed = config.seed,
        "starting verification"
    );

    let pb = if config.show_progress {
        ProgressBar::new(games.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let start = Instant::now();
    let checks = games
        .par_iter()
        .map(|(secret, guesses)| {
            let check = check_secret(filter, dictionary, secret, guesses);
            pb.inc(1);
            check
        })
        .collect::<Result<Vec<_>, _>>()?;
    let duration = start.elapsed();
    pb.finish_with_message("Complete!");

    let secrets_checked = checks.len();
    let mut remaining_by_turn = vec![0.0; config.guesses];
    let mut violations = Vec::new();
    for check in checks {
        for (total, remaining) in remaining_by_turn.iter_mut().zip(&check.remaining) {
            *total += *remaining as f64;
        }
        violations.extend(check.violations);
    }
    if secrets_checked > 0 {
        for total in &mut remaining_by_turn {
            *total /= secrets_checked as f64;
        }
    }

    for violation in &violations {
        warn!(
            secret = %violation.secret,
            turn = violation.turn,
            kind = %violation.kind,
            "filter violation"
        );
    }

    let seconds = duration.as_secs_f64();
    Ok(VerifyResult {
        secrets_checked,
        guesses_per_secret: config.guesses,
        violations,
        remaining_by_turn,
        duration,
        secrets_per_second: if seconds > 0.0 {
            secrets_checked as f64 / seconds
        } else {
            0.0
        },
    })
}

fn check_secret(
    filter: &WordFilter,
    dictionary: &Dictionary,
    secret: &Word,
    guesses: &[&Word],
) -> Result<SecretCheck, FilterError> {
    let mut history = GuessHistory::default();
    let mut previous: Option<FxHashSet<&str>> = None;
    let mut remaining = Vec::with_capacity(guesses.len());
    let mut violations = Vec::new();

    for (turn, guess) in guesses.iter().enumerate() {
        history = history.with_row(score(guess, secret));
        let matches = filter.filter(dictionary, &history)?;
        let current: FxHashSet<&str> = matches.iter().map(Word::text).collect();
        remaining.push(current.len());

        let flag = |kind| Violation {
            secret: secret.text().to_string(),
            turn: turn + 1,
            kind,
            rows: history.rows().iter().map(ToString::to_string).collect(),
        };

        if !current.contains(secret.text()) {
            violations.push(flag(ViolationKind::SecretDropped));
        }
        if let Some(prev) = &previous
            && !current.is_subset(prev)
        {
            violations.push(flag(ViolationKind::MatchesGrew));
        }
        previous = Some(current);
    }

    Ok(SecretCheck {
        remaining,
        violations,
    })
}
