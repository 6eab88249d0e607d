//! Formatting utilities for terminal output

use crate::core::GuessRow;

/// Format a guess row as an emoji string
#[must_use]
pub fn row_to_emoji(row: &GuessRow) -> String {
    row.cells().iter().map(|cell| cell.state().emoji()).collect()
}

/// Format a match probability as a percentage
///
/// # Examples
/// ```
/// use wordle_filter::output::formatters::format_probability;
///
/// assert_eq!(format_probability(0.25), "25.00%");
/// ```
#[must_use]
pub fn format_probability(probability: f64) -> String {
    format!("{:.2}%", probability * 100.0)
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_to_emoji_mixed() {
        let row: GuessRow = "crane:gy-.g".parse().unwrap();
        assert_eq!(row_to_emoji(&row), "🟩🟨⬜⬚🟩");
    }

    #[test]
    fn probability_formatting() {
        assert_eq!(format_probability(1.0), "100.00%");
        assert_eq!(format_probability(1.0 / 3.0), "33.33%");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(5.0, 0.0, 4), "░░░░");
    }
}
