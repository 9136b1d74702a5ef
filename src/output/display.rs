//! Display functions for command results

use super::formatters::{CLOSE_PEG, CORRECT_PEG, create_progress_bar, entropy_bar, score_to_pegs};
use crate::commands::AnalysisResult;
use crate::core::{Guess, Score};
use colored::Colorize;

/// Render one history row: turn number, guess text, pegs, and the raw tally
#[must_use]
pub fn guess_line(turn: usize, guess: &Guess, length: usize) -> String {
    format!(
        "{:>3}. {}  {}  {}",
        turn.to_string().bright_black(),
        guess.text().bright_white().bold(),
        colored_pegs(guess.score(), length),
        guess.to_string().bright_black()
    )
}

/// Pegs with correct in green and close in yellow
#[must_use]
pub fn colored_pegs(score: Score, length: usize) -> String {
    score_to_pegs(score, length)
        .chars()
        .map(|peg| match peg {
            CORRECT_PEG => peg.to_string().green().bold().to_string(),
            CLOSE_PEG => peg.to_string().yellow().to_string(),
            _ => peg.to_string().bright_black().to_string(),
        })
        .collect()
}

/// Print the result of scoring a single guess
pub fn print_score_result(guess: &Guess, length: usize) {
    println!("{}", guess_line(1, guess, length));

    if guess.score().is_solved(length) {
        println!("{}", "✅ Cracked it!".green().bold());
    }
}

/// Print the result of guess analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "GUESS ANALYSIS:".bright_cyan().bold(),
        result.guess.bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    let metrics = &result.metrics;
    let bar = entropy_bar(metrics.entropy, result.max_entropy(), 30);

    println!("\n📊 Against {} possible secrets:", result.total_secrets);
    println!(
        "   Entropy:     [{}] {}",
        bar.green(),
        format!("{:.3} bits", metrics.entropy).bright_yellow()
    );
    println!("   Info gain:   {:.1}x reduction", metrics.entropy.exp2());
    println!(
        "   Expected:    {:.1} secrets remain",
        metrics.expected_remaining
    );
    println!("   Worst case:  {} secrets remain", metrics.max_partition);
    println!("   Outcomes:    {} distinct scores", metrics.outcomes);
    println!(
        "   Solve now:   {:.3}%",
        metrics.solving_chance * 100.0
    );

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let largest = metrics.max_partition as f64;
    for &(score, count) in &result.distribution {
        let pct = count as f64 / result.total_secrets as f64 * 100.0;
        let bar = create_progress_bar(count as f64, largest, 30);
        println!(
            "   {}  {} {count:6} ({pct:5.1}%)",
            colored_pegs(score, result.guess.chars().count()),
            bar.green()
        );
    }
}
