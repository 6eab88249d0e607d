//! Wordle Filter - CLI
//!
//! Filter a dictionary by guess feedback from the command line, as JSON, or
//! interactively.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use std::io::{self, Read};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use wordle_filter::{
    WORD_LENGTH,
    commands::{VerifyConfig, analyze_document, filter_rows, run_simple, run_verify},
    filter::{DEFAULT_PARALLEL_THRESHOLD, FilterConfig, WordFilter},
    output::{print_filter_report, print_verify_result},
    service::ServiceConfig,
    wordlists::{Dictionary, loader},
};

#[derive(Parser)]
#[command(
    name = "wordle_filter",
    about = "Narrow a Wordle dictionary down to the words consistent with guess feedback",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dictionary: 'embedded' (default) or path to a word list file
    #[arg(short, long, global = true, default_value = "embedded")]
    dictionary: String,

    /// Word length kept from a dictionary file
    #[arg(short, long, global = true, default_value_t = WORD_LENGTH)]
    length: usize,

    /// Dictionary size at which filtering switches to all cores
    #[arg(long, global = true, default_value_t = DEFAULT_PARALLEL_THRESHOLD)]
    parallel_threshold: usize,

    /// More log output (repeatable)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Simple interactive mode (default)
    Simple {
        /// Maximum number of candidates printed per guess
        #[arg(long, default_value = "10")]
        limit: usize,
    },

    /// Filter by guess rows given as WORD:FEEDBACK (e.g. crane:gy-.g)
    Filter {
        /// Guess rows, oldest first
        rows: Vec<String>,

        /// Maximum number of matches printed
        #[arg(long, default_value = "50")]
        limit: usize,
    },

    /// Answer a JSON analysis request from a file or stdin
    Analyze {
        /// Request file (stdin when omitted)
        file: Option<PathBuf>,

        /// Pretty-print the response
        #[arg(long)]
        pretty: bool,

        /// Accept rows with only some letters filled in
        #[arg(long)]
        allow_partial_rows: bool,
    },

    /// Check the filter against random games with known secrets
    Verify {
        /// Number of secrets to sample
        #[arg(short = 'n', long, default_value = "200")]
        count: usize,

        /// Random guesses per secret
        #[arg(short, long, default_value = "6")]
        guesses: usize,

        /// RNG seed
        #[arg(long, default_value = "2022")]
        seed: u64,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    let dictionary = load_dictionary(&cli.dictionary, cli.length)?;
    let filter = WordFilter::new(FilterConfig {
        parallel_threshold: cli.parallel_threshold,
    });

    // Default to Simple mode if no command given
    let command = cli.command.unwrap_or(Commands::Simple { limit: 10 });

    match command {
        Commands::Simple { limit } => {
            run_simple(filter, &dictionary, limit).map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Filter { rows, limit } => run_filter_command(&filter, &dictionary, &rows, limit),
        Commands::Analyze {
            file,
            pretty,
            allow_partial_rows,
        } => {
            let config = ServiceConfig {
                require_complete_rows: !allow_partial_rows,
            };
            run_analyze_command(&filter, &dictionary, file.as_deref(), pretty, config)
        }
        Commands::Verify {
            count,
            guesses,
            seed,
        } => {
            let config = VerifyConfig {
                secrets: count,
                guesses,
                seed,
                show_progress: !cli.quiet,
            };
            run_verify_command(&filter, &dictionary, &config)
        }
    }
}

/// Install the stderr log subscriber; `RUST_LOG` wins over the flags
fn init_tracing(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, 2) => "debug",
        (false, _) => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("wordle_filter={level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Load the dictionary based on the -d flag
fn load_dictionary(source: &str, length: usize) -> Result<Dictionary> {
    let dictionary = match source {
        "embedded" => {
            if length != WORD_LENGTH {
                bail!("the embedded dictionary only has {WORD_LENGTH}-letter words");
            }
            loader::embedded()
        }
        path => loader::load_from_file(path, length)
            .with_context(|| format!("failed to load dictionary from {path}"))?,
    };

    debug!(
        source,
        words = dictionary.len(),
        length = dictionary.word_length(),
        "dictionary ready"
    );
    Ok(dictionary)
}

fn run_filter_command(
    filter: &WordFilter,
    dictionary: &Dictionary,
    rows: &[String],
    limit: usize,
) -> Result<()> {
    let report = filter_rows(filter, dictionary, rows).context("cannot filter the dictionary")?;
    print_filter_report(&report, limit);
    Ok(())
}

fn run_analyze_command(
    filter: &WordFilter,
    dictionary: &Dictionary,
    file: Option<&std::path::Path>,
    pretty: bool,
    config: ServiceConfig,
) -> Result<()> {
    let body = match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read request from {}", path.display()))?,
        None => {
            let mut body = String::new();
            io::stdin()
                .read_to_string(&mut body)
                .context("failed to read request from stdin")?;
            body
        }
    };

    let (json, response) = analyze_document(filter, dictionary, &body, config, pretty)
        .context("failed to serialize the response")?;
    println!("{json}");

    if response.is_error() {
        std::process::exit(2);
    }
    Ok(())
}

fn run_verify_command(
    filter: &WordFilter,
    dictionary: &Dictionary,
    config: &VerifyConfig,
) -> Result<()> {
    println!(
        "Verifying against {} secrets with {} random guesses each...",
        config.secrets.min(dictionary.len()),
        config.guesses
    );

    let result = run_verify(filter, dictionary, config).context("verification failed")?;
    print_verify_result(&result);

    if !result.passed() {
        bail!("{} filter violations found", result.violations.len());
    }
    Ok(())
}
