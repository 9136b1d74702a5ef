//! Formatting utilities for terminal output

use crate::core::Score;

/// Peg for a correct position
pub const CORRECT_PEG: char = '●';
/// Peg for a close character
pub const CLOSE_PEG: char = '○';
/// Placeholder for a position that scored nothing
pub const EMPTY_PEG: char = '·';

/// Format a score as a row of pegs for a code of `length`
///
/// Correct pegs come first, then close pegs, then empty slots, as on a
/// physical board: the pegs never reveal which position they refer to.
#[must_use]
pub fn score_to_pegs(score: Score, length: usize) -> String {
    let empty = length.saturating_sub(score.correct() + score.close());

    std::iter::repeat_n(CORRECT_PEG, score.correct())
        .chain(std::iter::repeat_n(CLOSE_PEG, score.close()))
        .chain(std::iter::repeat_n(EMPTY_PEG, empty))
        .collect()
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

/// Format entropy as a bar scaled to the largest possible entropy
#[must_use]
pub fn entropy_bar(entropy: f64, max_entropy: f64, width: usize) -> String {
    create_progress_bar(entropy, max_entropy, width)
}
