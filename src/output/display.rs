//! Display functions for command results

use super::formatters::{create_progress_bar, format_probability, row_to_emoji};
use crate::commands::{FilterReport, VerifyResult};
use crate::core::Word;
use crate::filter::Matches;
use colored::Colorize;

const NO_MATCHES: &str = "No valid words found.";

/// Print a match list with its probability, showing at most `limit` words
pub fn print_matches(matches: &Matches<'_>, limit: usize) {
    let Some(probability) = matches.probability() else {
        println!("\n{}\n", NO_MATCHES.red().bold());
        return;
    };

    println!(
        "\nProbability: {} ({} possible {})",
        format_probability(probability).bright_yellow().bold(),
        matches.len(),
        if matches.len() == 1 { "word" } else { "words" }
    );
    print_word_columns(matches.iter().map(Word::text), matches.len(), limit);
}

/// Print the result of the filter command
pub fn print_filter_report(report: &FilterReport, limit: usize) {
    println!("\n{}", "─".repeat(60).cyan());
    for row in report.history.rows() {
        println!("  {}  {}", row_to_emoji(row), row.to_string().bright_white());
    }
    println!("{}", "─".repeat(60).cyan());

    let Some(probability) = report.probability else {
        println!("\n{}\n", NO_MATCHES.red().bold());
        return;
    };

    println!(
        "\nProbability: {} ({} of {} words)",
        format_probability(probability).bright_yellow().bold(),
        report.matches.len(),
        report.dictionary_size
    );
    print_word_columns(
        report.matches.iter().map(String::as_str),
        report.matches.len(),
        limit,
    );
}

fn print_word_columns<'a>(words: impl Iterator<Item = &'a str>, total: usize, limit: usize) {
    let shown: Vec<String> = words.take(limit).map(str::to_uppercase).collect();

    for chunk in shown.chunks(8) {
        println!("  {}", chunk.join("  ").green());
    }
    if total > shown.len() {
        println!(
            "  {}",
            format!("... and {} more", total - shown.len()).bright_black()
        );
    }
    println!();
}

/// Print the result of a verification run
pub fn print_verify_result(result: &VerifyResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "VERIFICATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Run:".bright_cyan().bold());
    println!("   Secrets checked:  {}", result.secrets_checked);
    println!("   Guesses each:     {}", result.guesses_per_secret);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Secrets/second:   {:.1}", result.secrets_per_second);

    if !result.remaining_by_turn.is_empty() {
        println!("\n📉 {}", "Average candidates left:".bright_cyan().bold());
        let max = result
            .remaining_by_turn
            .first()
            .copied()
            .unwrap_or_default();
        for (turn, remaining) in result.remaining_by_turn.iter().enumerate() {
            let bar = create_progress_bar(*remaining, max, 40);
            println!("   {}: {} {remaining:8.1}", turn + 1, bar.green());
        }
    }

    println!();
    if result.passed() {
        println!("{}", "✅ Every secret survived its own feedback".green().bold());
    } else {
        println!(
            "{}",
            format!("❌ {} violations", result.violations.len())
                .red()
                .bold()
        );
        for violation in result.violations.iter().take(10) {
            println!(
                "   {} at turn {}: {} [{}]",
                violation.secret.to_uppercase().yellow(),
                violation.turn,
                violation.kind,
                violation.rows.join(", ")
            );
        }
    }
}
